//! Client management service

use validator::Validate;

use crate::{
    error::{AppError, AppResult},
    models::client::{Client, CreateClient},
    repository::Repository,
    taxid,
};

#[derive(Clone)]
pub struct ClientsService {
    repository: Repository,
}

impl ClientsService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self) -> AppResult<Vec<Client>> {
        self.repository.clients.list().await
    }

    pub async fn get(&self, id: i32) -> AppResult<Client> {
        self.repository.clients.get_by_id(id).await
    }

    /// Register a client. The tax id is check-digit validated and stored in
    /// canonical formatted form; duplicates are rejected.
    pub async fn create(&self, actor: i32, payload: CreateClient) -> AppResult<Client> {
        payload
            .validate()
            .map_err(|e| AppError::Validation(e.to_string()))?;

        if !taxid::validate(&payload.tax_id) {
            return Err(AppError::InvalidTaxId(payload.tax_id));
        }
        let canonical = taxid::format(&payload.tax_id);
        if self.repository.clients.tax_id_exists(&canonical).await? {
            return Err(AppError::DuplicateTaxId(canonical));
        }

        let client = self.repository.clients.create(&payload, &canonical).await?;
        self.repository
            .audit
            .record(actor, "create", "clients", Some(client.id), Some(&client.name))
            .await?;
        Ok(client)
    }
}
