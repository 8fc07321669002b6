//! Lease (comodato) management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    format,
    models::lease::{expected_total, CreateLease, Lease},
    repository::Repository,
    taxid,
};

#[derive(Clone)]
pub struct LeasesService {
    repository: Repository,
}

impl LeasesService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Lease>> {
        self.repository.leases.list().await
    }

    pub async fn get(&self, id: i32) -> AppResult<Lease> {
        self.repository.leases.get_by_id(id).await
    }

    /// Register a lease contract. The tax id is validated and canonicalized,
    /// and the submitted total must equal quantity × unit price; the client
    /// value is never trusted.
    pub async fn create(&self, actor: i32, payload: CreateLease) -> AppResult<Lease> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if !taxid::validate(&payload.tax_id) {
            return Err(AppError::InvalidTaxId(payload.tax_id));
        }
        let canonical = taxid::format(&payload.tax_id);

        let total = expected_total(payload.quantity, payload.unit_price);
        if payload.total_price != total {
            return Err(AppError::Validation(format!(
                "Total price must equal quantity × unit price ({})",
                format::format_amount(total)
            )));
        }

        if self
            .repository
            .leases
            .contract_code_exists(&payload.contract_code)
            .await?
        {
            return Err(AppError::Conflict(format!(
                "A lease with contract code {} already exists",
                payload.contract_code
            )));
        }

        let lease = self
            .repository
            .leases
            .create(&payload, &canonical, total)
            .await?;
        self.repository
            .audit
            .record(actor, "create", "leases", Some(lease.id), Some(&lease.contract_code))
            .await?;
        Ok(lease)
    }
}
