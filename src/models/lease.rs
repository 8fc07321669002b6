//! Lease (comodato) model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Institutional lease contract. A plain record: no lifecycle beyond
/// creation, not linked to notebook inventory.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Lease {
    pub id: i32,
    pub contract_code: String,
    pub company_name: String,
    pub tax_id: String,
    pub destination: String,
    pub model: String,
    pub cpu: Option<String>,
    pub gpu: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub color: Option<String>,
    pub screen: Option<String>,
    pub os: Option<String>,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total_price: Decimal,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Create lease request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateLease {
    #[validate(length(min = 1, message = "Contract code must not be empty"))]
    pub contract_code: String,
    #[validate(length(min = 1, message = "Company name must not be empty"))]
    pub company_name: String,
    /// CNPJ (or CPF), with or without punctuation
    pub tax_id: String,
    #[validate(length(min = 1, message = "Destination must not be empty"))]
    pub destination: String,
    #[validate(length(min = 1, message = "Model must not be empty"))]
    pub model: String,
    pub cpu: Option<String>,
    pub gpu: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub color: Option<String>,
    pub screen: Option<String>,
    pub os: Option<String>,
    #[validate(range(min = 1, message = "Quantity must be at least 1"))]
    pub quantity: i32,
    pub unit_price: Decimal,
    /// Must equal quantity × unit_price; recomputed server-side.
    pub total_price: Decimal,
    pub notes: Option<String>,
}

/// The total a lease must carry: quantity × unit price.
pub fn expected_total(quantity: i32, unit_price: Decimal) -> Decimal {
    Decimal::from(quantity) * unit_price
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_quantity_times_unit_price() {
        assert_eq!(
            expected_total(10, Decimal::new(350050, 2)),
            Decimal::new(3500500, 2)
        );
        assert_eq!(expected_total(1, Decimal::ZERO), Decimal::ZERO);
    }

    #[test]
    fn total_comparison_ignores_scale() {
        // 3500.00 submitted as 3500 still matches
        assert_eq!(expected_total(2, Decimal::new(175000, 2)), Decimal::from(3500));
    }
}
