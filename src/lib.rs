//! Presta - Notebook Inventory & Lending Server
//!
//! A Rust REST API server tracking notebook inventory, client loans and
//! institutional equipment leases (comodatos).

use std::sync::Arc;

pub mod api;
pub mod config;
pub mod error;
pub mod format;
pub mod models;
pub mod repository;
pub mod services;
pub mod taxid;

pub use config::AppConfig;
pub use error::{AppError, AppResult};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub services: Arc<services::Services>,
}
