//! Audit trail model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::{IntoParams, ToSchema};

/// One recorded mutation. Written by the service layer after every
/// successful create/update; read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct AuditEntry {
    pub id: i32,
    pub user_id: i32,
    /// Denormalized on read for display
    pub user_name: Option<String>,
    pub action: String,
    pub entity: String,
    pub entity_id: Option<i32>,
    pub detail: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Audit listing query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct AuditQuery {
    /// Maximum entries to return (default 100)
    pub limit: Option<i64>,
}
