//! Statistics service for the dashboard and reports screens

use crate::{
    api::stats::{DashboardResponse, ReportsResponse},
    error::AppResult,
    format,
    models::notebook::NotebookStatus,
    repository::Repository,
};

const UPCOMING_RETURNS: i64 = 5;

#[derive(Clone)]
pub struct StatsService {
    repository: Repository,
}

impl StatsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Landing-page counters plus the next due returns
    pub async fn dashboard(&self) -> AppResult<DashboardResponse> {
        let total_clients = self.repository.clients.count().await?;
        let total_notebooks = self.repository.notebooks.count().await?;
        let active_loans = self.repository.loans.count_active().await?;
        let overdue_loans = self.repository.loans.count_overdue().await?;
        let upcoming_returns = self
            .repository
            .loans
            .upcoming_returns(UPCOMING_RETURNS)
            .await?;
        let total_leases = self.repository.leases.count().await?;
        let leases_total_value = self.repository.leases.total_value().await?;

        Ok(DashboardResponse {
            total_clients,
            total_notebooks,
            active_loans,
            overdue_loans,
            upcoming_returns,
            total_leases,
            leases_total_display: format::format_amount(leases_total_value),
            leases_total_value,
        })
    }

    /// Monthly activity report
    pub async fn reports(&self) -> AppResult<ReportsResponse> {
        let pool = &self.repository.pool;

        let loans_this_month: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM loans WHERE loan_date >= DATE_TRUNC('month', NOW())",
        )
        .fetch_one(pool)
        .await?;

        let clients_with_active_loans: i64 = sqlx::query_scalar(
            "SELECT COUNT(DISTINCT client_id) FROM loans WHERE status = 'active'",
        )
        .fetch_one(pool)
        .await?;

        let notebooks_loaned = self
            .repository
            .notebooks
            .count_by_status(NotebookStatus::Loaned)
            .await?;
        let total_leases = self.repository.leases.count().await?;
        let leases_total_value = self.repository.leases.total_value().await?;

        Ok(ReportsResponse {
            loans_this_month,
            clients_with_active_loans,
            notebooks_loaned,
            total_leases,
            leases_total_display: format::format_amount(leases_total_value),
            leases_total_value,
        })
    }
}
