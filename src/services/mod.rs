//! Business logic services

pub mod audit;
pub mod clients;
pub mod leases;
pub mod loans;
pub mod notebooks;
pub mod stats;
pub mod users;

use crate::{config::AuthConfig, repository::Repository};

/// Container for all services
#[derive(Clone)]
pub struct Services {
    pub clients: clients::ClientsService,
    pub notebooks: notebooks::NotebooksService,
    pub loans: loans::LoansService,
    pub leases: leases::LeasesService,
    pub users: users::UsersService,
    pub stats: stats::StatsService,
    pub audit: audit::AuditService,
}

impl Services {
    /// Create all services with the given repository
    pub fn new(repository: Repository, auth_config: AuthConfig) -> Self {
        Self {
            clients: clients::ClientsService::new(repository.clone()),
            notebooks: notebooks::NotebooksService::new(repository.clone()),
            loans: loans::LoansService::new(repository.clone()),
            leases: leases::LeasesService::new(repository.clone()),
            users: users::UsersService::new(repository.clone(), auth_config),
            stats: stats::StatsService::new(repository.clone()),
            audit: audit::AuditService::new(repository),
        }
    }
}
