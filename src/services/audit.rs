//! Audit trail service

use crate::{error::AppResult, models::audit::AuditEntry, repository::Repository};

const DEFAULT_LIMIT: i64 = 100;
const MAX_LIMIT: i64 = 1000;

#[derive(Clone)]
pub struct AuditService {
    repository: Repository,
}

impl AuditService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    /// Most recent entries first
    pub async fn list(&self, limit: Option<i64>) -> AppResult<Vec<AuditEntry>> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);
        self.repository.audit.list(limit).await
    }
}
