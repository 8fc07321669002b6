//! Lease (comodato) endpoints

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::lease::{CreateLease, Lease},
};

use super::AuthenticatedUser;

/// List all leases
#[utoipa::path(
    get,
    path = "/leases",
    tag = "leases",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All leases, newest first", body = Vec<Lease>)
    )
)]
pub async fn list_leases(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
) -> AppResult<Json<Vec<Lease>>> {
    let leases = state.services.leases.list().await?;
    Ok(Json(leases))
}

/// Get a lease by id
#[utoipa::path(
    get,
    path = "/leases/{id}",
    tag = "leases",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "Lease ID")
    ),
    responses(
        (status = 200, description = "Lease", body = Lease),
        (status = 404, description = "Lease not found")
    )
)]
pub async fn get_lease(
    State(state): State<crate::AppState>,
    AuthenticatedUser(_claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<Lease>> {
    let lease = state.services.leases.get(id).await?;
    Ok(Json(lease))
}

/// Register a new lease contract
#[utoipa::path(
    post,
    path = "/leases",
    tag = "leases",
    security(("bearer_auth" = [])),
    request_body = CreateLease,
    responses(
        (status = 201, description = "Lease created", body = Lease),
        (status = 400, description = "Invalid tax id, payload or total price"),
        (status = 409, description = "Contract code already registered")
    )
)]
pub async fn create_lease(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CreateLease>,
) -> AppResult<(StatusCode, Json<Lease>)> {
    let lease = state.services.leases.create(claims.user_id, request).await?;
    Ok((StatusCode::CREATED, Json(lease)))
}
