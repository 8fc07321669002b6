//! Notebook inventory service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::notebook::{CreateNotebook, Notebook, NotebookStatus},
    repository::Repository,
};

#[derive(Clone)]
pub struct NotebooksService {
    repository: Repository,
}

impl NotebooksService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, status: Option<NotebookStatus>) -> AppResult<Vec<Notebook>> {
        self.repository.notebooks.list(status).await
    }

    pub async fn get(&self, id: i32) -> AppResult<Notebook> {
        self.repository.notebooks.get_by_id(id).await
    }

    /// Register a notebook; serial numbers are unique across the inventory
    pub async fn create(&self, actor: i32, payload: CreateNotebook) -> AppResult<Notebook> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if self
            .repository
            .notebooks
            .serial_exists(&payload.serial_number)
            .await?
        {
            return Err(AppError::DuplicateSerialNumber(payload.serial_number));
        }

        let notebook = self.repository.notebooks.create(&payload).await?;
        self.repository
            .audit
            .record(actor, "create", "notebooks", Some(notebook.id), Some(&notebook.model))
            .await?;
        Ok(notebook)
    }

    /// Manual status administration: available ↔ maintenance only.
    /// The `loaned` status belongs to the loan ledger on both sides of the
    /// transition, so it can be neither set nor cleared here.
    pub async fn set_status(
        &self,
        actor: i32,
        id: i32,
        status: NotebookStatus,
    ) -> AppResult<Notebook> {
        if status == NotebookStatus::Loaned {
            return Err(AppError::Validation(
                "The loaned status is set by creating a loan, not directly".to_string(),
            ));
        }

        let current = self.repository.notebooks.get_by_id(id).await?;
        if current.status == NotebookStatus::Loaned {
            return Err(AppError::Validation(
                "Notebook is loaned; return the active loan before changing its status".to_string(),
            ));
        }

        let notebook = self.repository.notebooks.set_status(id, status).await?;
        self.repository
            .audit
            .record(actor, "set_status", "notebooks", Some(id), Some(status.as_str()))
            .await?;
        Ok(notebook)
    }
}
