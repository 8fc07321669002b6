//! Error types for Presta server

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// Application error codes surfaced in API responses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Success = 0,
    Failure = 1,
    NotAuthorized = 2,
    DbFailure = 3,
    NoSuchRecord = 4,
    BadValue = 5,
    InvalidTaxId = 6,
    DuplicateTaxId = 7,
    DuplicateSerialNumber = 8,
    DuplicateLogin = 9,
    NotebookUnavailable = 10,
    LoanNotActive = 11,
    NotebookMissing = 12,
    Duplicate = 13,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Authorization failed: {0}")]
    Authorization(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid tax id: {0}")]
    InvalidTaxId(String),

    #[error("A client with tax id {0} already exists")]
    DuplicateTaxId(String),

    #[error("A notebook with serial number {0} already exists")]
    DuplicateSerialNumber(String),

    #[error("A user with login {0} already exists")]
    DuplicateLogin(String),

    #[error("Notebook {0} is not available for loan")]
    NotebookUnavailable(i32),

    #[error("Loan {0} is not active")]
    LoanNotActive(i32),

    #[error("Notebook {0} referenced by the loan no longer exists")]
    NotebookNotFound(i32),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub code: u32,
    pub error: String,
    pub message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Authentication(msg) => {
                (StatusCode::UNAUTHORIZED, ErrorCode::NotAuthorized, msg.clone())
            }
            AppError::Authorization(msg) => {
                (StatusCode::FORBIDDEN, ErrorCode::NotAuthorized, msg.clone())
            }
            AppError::NotFound(msg) => {
                (StatusCode::NOT_FOUND, ErrorCode::NoSuchRecord, msg.clone())
            }
            AppError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, ErrorCode::BadValue, msg.clone())
            }
            AppError::InvalidTaxId(_) => {
                (StatusCode::BAD_REQUEST, ErrorCode::InvalidTaxId, self.to_string())
            }
            AppError::DuplicateTaxId(_) => {
                (StatusCode::CONFLICT, ErrorCode::DuplicateTaxId, self.to_string())
            }
            AppError::DuplicateSerialNumber(_) => {
                (StatusCode::CONFLICT, ErrorCode::DuplicateSerialNumber, self.to_string())
            }
            AppError::DuplicateLogin(_) => {
                (StatusCode::CONFLICT, ErrorCode::DuplicateLogin, self.to_string())
            }
            AppError::NotebookUnavailable(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorCode::NotebookUnavailable, self.to_string())
            }
            AppError::LoanNotActive(_) => {
                (StatusCode::UNPROCESSABLE_ENTITY, ErrorCode::LoanNotActive, self.to_string())
            }
            AppError::NotebookNotFound(_) => {
                (StatusCode::NOT_FOUND, ErrorCode::NotebookMissing, self.to_string())
            }
            AppError::Conflict(msg) => {
                (StatusCode::CONFLICT, ErrorCode::Duplicate, msg.clone())
            }
            AppError::Database(e) => {
                tracing::error!("Database error: {:?}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::DbFailure,
                    "Database error".to_string(),
                )
            }
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorCode::Failure,
                    "Internal server error".to_string(),
                )
            }
        };

        let body = Json(ErrorResponse {
            code: code as u32,
            error: format!("{:?}", code),
            message,
        });

        (status, body).into_response()
    }
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
