//! OpenAPI documentation

use axum::Router;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use crate::api::{audit, auth, clients, health, leases, loans, notebooks, stats, users};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Presta API",
        version = "1.0.0",
        description = "Notebook Inventory & Lending REST API",
        license(name = "AGPL-3.0", url = "https://www.gnu.org/licenses/agpl-3.0.html"),
        contact(name = "Presta Team")
    ),
    servers(
        (url = "/api/v1", description = "API v1")
    ),
    paths(
        // Health
        health::health_check,
        health::readiness_check,
        // Auth
        auth::login,
        auth::me,
        // Clients
        clients::list_clients,
        clients::get_client,
        clients::create_client,
        // Notebooks
        notebooks::list_notebooks,
        notebooks::get_notebook,
        notebooks::create_notebook,
        notebooks::update_notebook_status,
        // Loans
        loans::list_loans,
        loans::create_loan,
        loans::return_loan,
        // Leases
        leases::list_leases,
        leases::get_lease,
        leases::create_lease,
        // Users
        users::list_users,
        users::create_user,
        users::update_user,
        users::deactivate_user,
        users::activate_user,
        // Stats
        stats::get_dashboard,
        stats::get_reports,
        // Audit
        audit::list_audit,
    ),
    components(
        schemas(
            // Auth
            auth::LoginRequest,
            auth::LoginResponse,
            auth::UserInfo,
            // Clients
            crate::models::client::Client,
            crate::models::client::ClientShort,
            crate::models::client::CreateClient,
            // Notebooks
            crate::models::notebook::Notebook,
            crate::models::notebook::NotebookShort,
            crate::models::notebook::NotebookStatus,
            crate::models::notebook::CreateNotebook,
            crate::models::notebook::UpdateNotebookStatus,
            // Loans
            crate::models::loan::LoanDetails,
            crate::models::loan::LoanStatus,
            crate::models::loan::CreateLoan,
            loans::LoanResponse,
            // Leases
            crate::models::lease::Lease,
            crate::models::lease::CreateLease,
            // Users
            crate::models::user::User,
            crate::models::user::UserShort,
            crate::models::user::Role,
            crate::models::user::CreateUser,
            crate::models::user::UpdateUser,
            // Stats
            stats::DashboardResponse,
            stats::ReportsResponse,
            // Audit
            crate::models::audit::AuditEntry,
            // Health
            health::HealthResponse,
            // Errors
            crate::error::ErrorResponse,
        )
    ),
    tags(
        (name = "health", description = "Health check endpoints"),
        (name = "auth", description = "Authentication endpoints"),
        (name = "clients", description = "Client registry"),
        (name = "notebooks", description = "Notebook inventory"),
        (name = "loans", description = "Loan ledger"),
        (name = "leases", description = "Lease (comodato) contracts"),
        (name = "users", description = "Staff account management"),
        (name = "stats", description = "Dashboard and reports"),
        (name = "audit", description = "Audit trail")
    )
)]
pub struct ApiDoc;

/// Create the OpenAPI documentation router
pub fn create_openapi_router() -> Router {
    Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
}
