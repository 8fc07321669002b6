//! Repository layer for database operations

pub mod audit;
pub mod clients;
pub mod leases;
pub mod loans;
pub mod notebooks;
pub mod users;

use sqlx::{Pool, Postgres};

/// Main repository struct holding database connection pool
#[derive(Clone)]
pub struct Repository {
    pub pool: Pool<Postgres>,
    pub clients: clients::ClientsRepository,
    pub notebooks: notebooks::NotebooksRepository,
    pub loans: loans::LoansRepository,
    pub leases: leases::LeasesRepository,
    pub users: users::UsersRepository,
    pub audit: audit::AuditRepository,
}

impl Repository {
    /// Create a new repository with the given database pool
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self {
            clients: clients::ClientsRepository::new(pool.clone()),
            notebooks: notebooks::NotebooksRepository::new(pool.clone()),
            loans: loans::LoansRepository::new(pool.clone()),
            leases: leases::LeasesRepository::new(pool.clone()),
            users: users::UsersRepository::new(pool.clone()),
            audit: audit::AuditRepository::new(pool.clone()),
            pool,
        }
    }
}
