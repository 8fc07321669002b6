//! Statistics endpoints

use axum::{extract::State, Json};
use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

use crate::{error::AppResult, models::loan::LoanDetails};

use super::AuthenticatedUser;

/// Dashboard counters
#[derive(Serialize, ToSchema)]
pub struct DashboardResponse {
    pub total_clients: i64,
    pub total_notebooks: i64,
    pub active_loans: i64,
    pub overdue_loans: i64,
    /// Active loans with the nearest due dates
    pub upcoming_returns: Vec<LoanDetails>,
    pub total_leases: i64,
    pub leases_total_value: Decimal,
    /// `leases_total_value` rendered for display (pt-BR convention)
    pub leases_total_display: String,
}

/// Monthly activity report
#[derive(Serialize, ToSchema)]
pub struct ReportsResponse {
    pub loans_this_month: i64,
    pub clients_with_active_loans: i64,
    pub notebooks_loaned: i64,
    pub total_leases: i64,
    pub leases_total_value: Decimal,
    pub leases_total_display: String,
}

/// Dashboard statistics
#[utoipa::path(
    get,
    path = "/stats/dashboard",
    tag = "stats",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Dashboard counters", body = DashboardResponse)
    )
)]
pub async fn get_dashboard(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<DashboardResponse>> {
    let dashboard = state.services.stats.dashboard().await?;
    Ok(Json(dashboard))
}

/// Monthly activity report
#[utoipa::path(
    get,
    path = "/stats/reports",
    tag = "stats",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "Activity report", body = ReportsResponse)
    )
)]
pub async fn get_reports(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<ReportsResponse>> {
    let reports = state.services.stats.reports().await?;
    Ok(Json(reports))
}
