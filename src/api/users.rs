//! User management endpoints (super-admin only)

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};

use crate::{
    error::AppResult,
    models::user::{CreateUser, UpdateUser, User, UserQuery},
};

use super::AuthenticatedUser;

/// List manageable staff accounts. The seeded super-admin is never included.
#[utoipa::path(
    get,
    path = "/users",
    tag = "users",
    security(("bearer_auth" = [])),
    params(UserQuery),
    responses(
        (status = 200, description = "Staff accounts", body = Vec<User>),
        (status = 403, description = "Super administrator privileges required")
    )
)]
pub async fn list_users(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<UserQuery>,
) -> AppResult<Json<Vec<User>>> {
    claims.require_superadmin()?;

    let include_inactive = query.include_inactive.unwrap_or(true);
    let users = state.services.users.list_users(include_inactive).await?;
    Ok(Json(users))
}

/// Create a staff account
#[utoipa::path(
    post,
    path = "/users",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = CreateUser,
    responses(
        (status = 201, description = "User created", body = User),
        (status = 403, description = "Super administrator privileges required"),
        (status = 409, description = "Login already taken")
    )
)]
pub async fn create_user(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Json(request): Json<CreateUser>,
) -> AppResult<(StatusCode, Json<User>)> {
    claims.require_superadmin()?;

    let user = state.services.users.create_user(claims.user_id, request).await?;
    Ok((StatusCode::CREATED, Json(user)))
}

/// Edit a staff account
#[utoipa::path(
    put,
    path = "/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    request_body = UpdateUser,
    responses(
        (status = 200, description = "User updated", body = User),
        (status = 403, description = "Not permitted for this account"),
        (status = 404, description = "User not found"),
        (status = 409, description = "Login already taken")
    )
)]
pub async fn update_user(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
    Json(request): Json<UpdateUser>,
) -> AppResult<Json<User>> {
    claims.require_superadmin()?;

    let user = state
        .services
        .users
        .update_user(claims.user_id, id, request)
        .await?;
    Ok(Json(user))
}

/// Deactivate a staff account
#[utoipa::path(
    post,
    path = "/users/{id}/deactivate",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User deactivated", body = User),
        (status = 403, description = "Not permitted for this account"),
        (status = 404, description = "User not found")
    )
)]
pub async fn deactivate_user(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<User>> {
    claims.require_superadmin()?;

    let user = state
        .services
        .users
        .set_active(claims.user_id, id, false)
        .await?;
    Ok(Json(user))
}

/// Reactivate a staff account
#[utoipa::path(
    post,
    path = "/users/{id}/activate",
    tag = "users",
    security(("bearer_auth" = [])),
    params(
        ("id" = i32, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "User reactivated", body = User),
        (status = 403, description = "Not permitted for this account"),
        (status = 404, description = "User not found")
    )
)]
pub async fn activate_user(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Path(id): Path<i32>,
) -> AppResult<Json<User>> {
    claims.require_superadmin()?;

    let user = state
        .services
        .users
        .set_active(claims.user_id, id, true)
        .await?;
    Ok(Json(user))
}
