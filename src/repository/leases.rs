//! Leases (comodatos) repository for database operations

use rust_decimal::Decimal;
use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::lease::{CreateLease, Lease},
};

#[derive(Clone)]
pub struct LeasesRepository {
    pool: Pool<Postgres>,
}

impl LeasesRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get lease by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Lease> {
        sqlx::query_as::<_, Lease>("SELECT * FROM leases WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Lease with id {} not found", id)))
    }

    /// List all leases, newest first
    pub async fn list(&self) -> AppResult<Vec<Lease>> {
        let leases = sqlx::query_as::<_, Lease>(
            "SELECT * FROM leases ORDER BY created_at DESC, id DESC",
        )
        .fetch_all(&self.pool)
        .await?;
        Ok(leases)
    }

    /// Check if a contract code is already registered
    pub async fn contract_code_exists(&self, contract_code: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM leases WHERE contract_code = $1)")
                .bind(contract_code)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Insert a new lease. `tax_id` must already be canonical and
    /// `total_price` already revalidated by the service layer.
    pub async fn create(
        &self,
        lease: &CreateLease,
        tax_id: &str,
        total_price: Decimal,
    ) -> AppResult<Lease> {
        sqlx::query_as::<_, Lease>(
            r#"
            INSERT INTO leases
                (contract_code, company_name, tax_id, destination,
                 model, cpu, gpu, ram, storage, color, screen, os,
                 quantity, unit_price, total_price, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
            RETURNING *
            "#,
        )
        .bind(&lease.contract_code)
        .bind(&lease.company_name)
        .bind(tax_id)
        .bind(&lease.destination)
        .bind(&lease.model)
        .bind(&lease.cpu)
        .bind(&lease.gpu)
        .bind(&lease.ram)
        .bind(&lease.storage)
        .bind(&lease.color)
        .bind(&lease.screen)
        .bind(&lease.os)
        .bind(lease.quantity)
        .bind(lease.unit_price)
        .bind(total_price)
        .bind(&lease.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => AppError::Conflict(
                format!("A lease with contract code {} already exists", lease.contract_code),
            ),
            _ => AppError::from(e),
        })
    }

    /// Count all leases
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM leases")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Sum of all lease total prices
    pub async fn total_value(&self) -> AppResult<Decimal> {
        let total: Decimal =
            sqlx::query_scalar("SELECT COALESCE(SUM(total_price), 0) FROM leases")
                .fetch_one(&self.pool)
                .await?;
        Ok(total)
    }
}
