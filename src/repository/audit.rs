//! Audit trail repository

use sqlx::{Pool, Postgres};

use crate::{error::AppResult, models::audit::AuditEntry};

#[derive(Clone)]
pub struct AuditRepository {
    pool: Pool<Postgres>,
}

impl AuditRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Append one entry to the trail
    pub async fn record(
        &self,
        user_id: i32,
        action: &str,
        entity: &str,
        entity_id: Option<i32>,
        detail: Option<&str>,
    ) -> AppResult<()> {
        sqlx::query(
            r#"
            INSERT INTO audit_log (user_id, action, entity, entity_id, detail)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(user_id)
        .bind(action)
        .bind(entity)
        .bind(entity_id)
        .bind(detail)
        .execute(&self.pool)
        .await?;
        Ok(())
    }

    /// Most recent entries first
    pub async fn list(&self, limit: i64) -> AppResult<Vec<AuditEntry>> {
        let entries = sqlx::query_as::<_, AuditEntry>(
            r#"
            SELECT a.id, a.user_id, u.name AS user_name, a.action, a.entity,
                   a.entity_id, a.detail, a.created_at
            FROM audit_log a
            LEFT JOIN users u ON a.user_id = u.id
            ORDER BY a.created_at DESC, a.id DESC
            LIMIT $1
            "#,
        )
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;
        Ok(entries)
    }
}
