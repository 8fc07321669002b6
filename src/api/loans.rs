//! Loan ledger endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use utoipa::ToSchema;

use crate::{
    error::AppResult,
    models::loan::{CreateLoan, LoanDetails, LoanQuery, LoanStatus, LoanStatusFilter},
};

use super::AuthenticatedUser;

/// Loan mutation response
#[derive(Serialize, ToSchema)]
pub struct LoanResponse {
    pub id: i32,
    pub status: LoanStatus,
    pub due_date: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
}

/// List loans with an optional status filter
#[utoipa::path(
    get,
    path = "/loans",
    tag = "loans",
    security(("bearer_auth" = [])),
    params(LoanQuery),
    responses(
        (status = 200, description = "Loans, newest first", body = Vec<LoanDetails>)
    )
)]
pub async fn list_loans(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Query(query): Query<LoanQuery>,
) -> AppResult<Json<Vec<LoanDetails>>> {
    let filter = query.status.unwrap_or(LoanStatusFilter::All);
    let loans = state.services.loans.list(filter).await?;
    Ok(Json(loans))
}

/// Loan a notebook to a client
#[utoipa::path(
    post,
    path = "/loans",
    tag = "loans",
    security(("bearer_auth" = [])),
    request_body = CreateLoan,
    responses(
        (status = 201, description = "Loan created", body = LoanResponse),
        (status = 404, description = "Client not found"),
        (status = 422, description = "Notebook not available")
    )
)]
pub async fn create_loan(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CreateLoan>,
) -> AppResult<(StatusCode, Json<LoanResponse>)> {
    let loan = state.services.loans.create(claims.user_id, request).await?;

    Ok((
        StatusCode::CREATED,
        Json(LoanResponse {
            id: loan.id,
            status: loan.status,
            due_date: loan.due_date,
            returned_at: loan.returned_at,
        }),
    ))
}

/// Return a loaned notebook
#[utoipa::path(
    post,
    path = "/loans/{id}/return",
    tag = "loans",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Loan ID")
    ),
    responses(
        (status = 200, description = "Loan finalized", body = LoanResponse),
        (status = 404, description = "Referenced notebook missing"),
        (status = 422, description = "Loan is not active")
    )
)]
pub async fn return_loan(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<LoanResponse>> {
    let loan = state.services.loans.return_loan(claims.user_id, id).await?;

    Ok(Json(LoanResponse {
        id: loan.id,
        status: loan.status,
        due_date: loan.due_date,
        returned_at: loan.returned_at,
    }))
}
