//! Loan ledger service

use chrono::Utc;

use crate::{
    error::AppResult,
    models::loan::{CreateLoan, Loan, LoanDetails, LoanStatusFilter},
    repository::Repository,
};

#[derive(Clone)]
pub struct LoansService {
    repository: Repository,
}

impl LoansService {
    pub fn new(repository: Repository) -> Self {
        Self { repository }
    }

    pub async fn list(&self, filter: LoanStatusFilter) -> AppResult<Vec<LoanDetails>> {
        self.repository.loans.list(filter).await
    }

    pub async fn get(&self, id: i32) -> AppResult<Loan> {
        self.repository.loans.get_by_id(id).await
    }

    /// Loan a notebook to a client. The notebook must be available; the loan
    /// row and the status flip land in one transaction.
    pub async fn create(&self, actor: i32, payload: CreateLoan) -> AppResult<Loan> {
        // Resolve the client first so an unknown id reads as a lookup
        // failure rather than an availability one.
        self.repository.clients.get_by_id(payload.client_id).await?;

        let loan = self.repository.loans.create(&payload, actor).await?;
        self.repository
            .audit
            .record(actor, "create", "loans", Some(loan.id), None)
            .await?;
        Ok(loan)
    }

    /// Return an active loan, releasing its notebook
    pub async fn return_loan(&self, actor: i32, id: i32) -> AppResult<Loan> {
        let loan = self.repository.loans.return_loan(id, Utc::now()).await?;
        self.repository
            .audit
            .record(actor, "return", "loans", Some(loan.id), None)
            .await?;
        Ok(loan)
    }
}
