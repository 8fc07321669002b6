//! Audit trail endpoints

use axum::{
    extract::{Query, State},
    Json,
};

use crate::{
    error::AppResult,
    models::audit::{AuditEntry, AuditQuery},
};

use super::AuthenticatedUser;

/// List recent audit entries (admins only)
#[utoipa::path(
    get,
    path = "/audit",
    tag = "audit",
    security(("bearer_auth" = [])),
    params(AuditQuery),
    responses(
        (status = 200, description = "Recent audit entries", body = Vec<AuditEntry>),
        (status = 403, description = "Administrator privileges required")
    )
)]
pub async fn list_audit(
    State(state): State<crate::AppState>,
    AuthenticatedUser(claims): AuthenticatedUser,
    Query(query): Query<AuditQuery>,
) -> AppResult<Json<Vec<AuditEntry>>> {
    claims.require_admin()?;

    let entries = state.services.audit.list(query.limit).await?;
    Ok(Json(entries))
}
