//! Notebook (asset) model and related types

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::{IntoParams, ToSchema};
use validator::Validate;

/// Notebook availability status.
///
/// `Loaned` is owned by the loan ledger: it is set and cleared only inside
/// loan transactions, never by direct administrative updates. `Maintenance`
/// is the opposite, entered and exited only by manual administration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum NotebookStatus {
    Available,
    Loaned,
    Maintenance,
}

impl NotebookStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            NotebookStatus::Available => "available",
            NotebookStatus::Loaned => "loaned",
            NotebookStatus::Maintenance => "maintenance",
        }
    }
}

impl std::fmt::Display for NotebookStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for NotebookStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "available" => Ok(NotebookStatus::Available),
            "loaned" => Ok(NotebookStatus::Loaned),
            "maintenance" => Ok(NotebookStatus::Maintenance),
            _ => Err(format!("Invalid notebook status: {}", s)),
        }
    }
}

// SQLx conversion for NotebookStatus (stored as TEXT)
impl sqlx::Type<Postgres> for NotebookStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for NotebookStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for NotebookStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// Notebook model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Notebook {
    pub id: i32,
    pub model: String,
    pub cpu: Option<String>,
    pub gpu: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub color: Option<String>,
    pub screen: Option<String>,
    pub os: Option<String>,
    pub serial_number: String,
    pub value: Option<Decimal>,
    pub acquired_at: Option<DateTime<Utc>>,
    pub status: NotebookStatus,
}

/// Short notebook representation for embedding in loan records
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct NotebookShort {
    pub id: i32,
    pub model: String,
    pub serial_number: String,
}

/// Notebook listing query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct NotebookQuery {
    /// Restrict to one status
    pub status: Option<NotebookStatus>,
}

/// Create notebook request
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CreateNotebook {
    #[validate(length(min = 1, message = "Model must not be empty"))]
    pub model: String,
    pub cpu: Option<String>,
    pub gpu: Option<String>,
    pub ram: Option<String>,
    pub storage: Option<String>,
    pub color: Option<String>,
    pub screen: Option<String>,
    pub os: Option<String>,
    #[validate(length(min = 1, message = "Serial number must not be empty"))]
    pub serial_number: String,
    pub value: Option<Decimal>,
    pub acquired_at: Option<DateTime<Utc>>,
}

/// Manual status administration request (available ↔ maintenance)
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdateNotebookStatus {
    pub status: NotebookStatus,
}
