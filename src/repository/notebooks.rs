//! Notebooks repository for database operations

use sqlx::{Pool, Postgres};

use crate::{
    error::{AppError, AppResult},
    models::notebook::{CreateNotebook, Notebook, NotebookStatus},
};

#[derive(Clone)]
pub struct NotebooksRepository {
    pool: Pool<Postgres>,
}

impl NotebooksRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get notebook by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Notebook> {
        sqlx::query_as::<_, Notebook>("SELECT * FROM notebooks WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Notebook with id {} not found", id)))
    }

    /// List notebooks, optionally restricted to one status
    pub async fn list(&self, status: Option<NotebookStatus>) -> AppResult<Vec<Notebook>> {
        let notebooks = match status {
            Some(status) => {
                sqlx::query_as::<_, Notebook>(
                    "SELECT * FROM notebooks WHERE status = $1 ORDER BY model, id",
                )
                .bind(status)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Notebook>("SELECT * FROM notebooks ORDER BY model, id")
                    .fetch_all(&self.pool)
                    .await?
            }
        };
        Ok(notebooks)
    }

    /// Check if a serial number is already registered
    pub async fn serial_exists(&self, serial_number: &str) -> AppResult<bool> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM notebooks WHERE serial_number = $1)")
                .bind(serial_number)
                .fetch_one(&self.pool)
                .await?;
        Ok(exists)
    }

    /// Insert a new notebook; always starts out available
    pub async fn create(&self, notebook: &CreateNotebook) -> AppResult<Notebook> {
        sqlx::query_as::<_, Notebook>(
            r#"
            INSERT INTO notebooks
                (model, cpu, gpu, ram, storage, color, screen, os,
                 serial_number, value, acquired_at, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, 'available')
            RETURNING *
            "#,
        )
        .bind(&notebook.model)
        .bind(&notebook.cpu)
        .bind(&notebook.gpu)
        .bind(&notebook.ram)
        .bind(&notebook.storage)
        .bind(&notebook.color)
        .bind(&notebook.screen)
        .bind(&notebook.os)
        .bind(&notebook.serial_number)
        .bind(notebook.value)
        .bind(notebook.acquired_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match &e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                AppError::DuplicateSerialNumber(notebook.serial_number.clone())
            }
            _ => AppError::from(e),
        })
    }

    /// Set the status of a notebook directly. Ledger-owned transitions
    /// (to or from `loaned`) must go through the loans repository instead;
    /// the service layer enforces that.
    pub async fn set_status(&self, id: i32, status: NotebookStatus) -> AppResult<Notebook> {
        sqlx::query_as::<_, Notebook>(
            "UPDATE notebooks SET status = $2 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(status)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Notebook with id {} not found", id)))
    }

    /// Count all notebooks
    pub async fn count(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notebooks")
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }

    /// Count notebooks in one status
    pub async fn count_by_status(&self, status: NotebookStatus) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM notebooks WHERE status = $1")
            .bind(status)
            .fetch_one(&self.pool)
            .await?;
        Ok(count)
    }
}
