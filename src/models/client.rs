//! Client model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

/// Client model from database.
///
/// `tax_id` is stored in canonical formatted form (`XXX.XXX.XXX-XX` or
/// `XX.XXX.XXX/XXXX-XX`) and is unique across all clients.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Client {
    pub id: i32,
    pub name: String,
    pub tax_id: String,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Short client representation for embedding in loan records
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ClientShort {
    pub id: i32,
    pub name: String,
    pub tax_id: String,
}

/// Create client request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateClient {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,
    /// CPF or CNPJ, with or without punctuation
    pub tax_id: String,
    pub phone: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub address: Option<String>,
}
