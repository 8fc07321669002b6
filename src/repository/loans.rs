//! Loans repository: the ledger coupling loan rows to notebook availability
//!
//! `create` and `return_loan` are the only multi-row writes in the system.
//! Each runs as a single transaction so the invariant "at most one active
//! loan per notebook" can never be observed broken: the notebook row is
//! locked first, so of two racing creates exactly one sees `available`.

use chrono::{DateTime, Utc};
use sqlx::{postgres::PgRow, Pool, Postgres, Row};

use crate::{
    error::{AppError, AppResult},
    models::{
        client::ClientShort,
        loan::{CreateLoan, Loan, LoanDetails, LoanStatus, LoanStatusFilter},
        notebook::{NotebookShort, NotebookStatus},
        user::UserShort,
    },
};

const DETAILS_SELECT: &str = r#"
    SELECT l.id, l.loan_date, l.due_date, l.returned_at, l.status, l.notes,
           c.id AS client_id, c.name AS client_name, c.tax_id AS client_tax_id,
           n.id AS notebook_id, n.model AS notebook_model, n.serial_number,
           u.id AS staff_id, u.name AS staff_name
    FROM loans l
    JOIN clients c ON l.client_id = c.id
    JOIN notebooks n ON l.notebook_id = n.id
    JOIN users u ON l.user_id = u.id
"#;

#[derive(Clone)]
pub struct LoansRepository {
    pool: Pool<Postgres>,
}

impl LoansRepository {
    pub fn new(pool: Pool<Postgres>) -> Self {
        Self { pool }
    }

    /// Get loan by ID
    pub async fn get_by_id(&self, id: i32) -> AppResult<Loan> {
        sqlx::query_as::<_, Loan>("SELECT * FROM loans WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("Loan with id {} not found", id)))
    }

    /// List loans with embedded client/notebook/staff summaries
    pub async fn list(&self, filter: LoanStatusFilter) -> AppResult<Vec<LoanDetails>> {
        let where_clause = match filter {
            LoanStatusFilter::All => "",
            LoanStatusFilter::Active => "WHERE l.status = 'active'",
            LoanStatusFilter::Finalized => "WHERE l.status = 'finalized'",
            LoanStatusFilter::Overdue => "WHERE l.status = 'active' AND l.due_date < NOW()",
        };
        let query = format!("{DETAILS_SELECT} {where_clause} ORDER BY l.loan_date DESC, l.id DESC");

        let rows = sqlx::query(&query).fetch_all(&self.pool).await?;
        let now = Utc::now();
        Ok(rows.into_iter().map(|row| map_details(row, now)).collect())
    }

    /// Active loans with the nearest due dates, for the dashboard
    pub async fn upcoming_returns(&self, limit: i64) -> AppResult<Vec<LoanDetails>> {
        let query = format!(
            "{DETAILS_SELECT} WHERE l.status = 'active' ORDER BY l.due_date ASC LIMIT $1"
        );
        let rows = sqlx::query(&query).bind(limit).fetch_all(&self.pool).await?;
        let now = Utc::now();
        Ok(rows.into_iter().map(|row| map_details(row, now)).collect())
    }

    /// Create a new loan and flip the notebook to `loaned`, atomically.
    ///
    /// The `SELECT ... FOR UPDATE` serializes concurrent creates on the same
    /// notebook: the loser of the race re-reads a `loaned` status after the
    /// winner commits and fails with `NotebookUnavailable`.
    pub async fn create(&self, loan: &CreateLoan, user_id: i32) -> AppResult<Loan> {
        let loan_date = loan.loan_date.unwrap_or_else(Utc::now);
        let mut tx = self.pool.begin().await?;

        let status: Option<NotebookStatus> =
            sqlx::query_scalar("SELECT status FROM notebooks WHERE id = $1 FOR UPDATE")
                .bind(loan.notebook_id)
                .fetch_optional(&mut *tx)
                .await?;

        if status != Some(NotebookStatus::Available) {
            return Err(AppError::NotebookUnavailable(loan.notebook_id));
        }

        sqlx::query("UPDATE notebooks SET status = 'loaned' WHERE id = $1")
            .bind(loan.notebook_id)
            .execute(&mut *tx)
            .await?;

        let created = sqlx::query_as::<_, Loan>(
            r#"
            INSERT INTO loans (client_id, notebook_id, user_id, loan_date, due_date, status, notes)
            VALUES ($1, $2, $3, $4, $5, 'active', $6)
            RETURNING *
            "#,
        )
        .bind(loan.client_id)
        .bind(loan.notebook_id)
        .bind(user_id)
        .bind(loan_date)
        .bind(loan.due_date)
        .bind(&loan.notes)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(created)
    }

    /// Finalize an active loan and release its notebook, atomically.
    ///
    /// A missing notebook row at this point is a data-integrity fault: the
    /// transaction rolls back and the loan stays active rather than silently
    /// finalizing against nothing.
    pub async fn return_loan(&self, id: i32, returned_at: DateTime<Utc>) -> AppResult<Loan> {
        let mut tx = self.pool.begin().await?;

        let loan: Option<Loan> = sqlx::query_as(
            r#"
            UPDATE loans SET status = 'finalized', returned_at = $2
            WHERE id = $1 AND status = 'active'
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(returned_at)
        .fetch_optional(&mut *tx)
        .await?;

        let loan = loan.ok_or(AppError::LoanNotActive(id))?;

        let released = sqlx::query("UPDATE notebooks SET status = 'available' WHERE id = $1")
            .bind(loan.notebook_id)
            .execute(&mut *tx)
            .await?;

        if released.rows_affected() == 0 {
            return Err(AppError::NotebookNotFound(loan.notebook_id));
        }

        tx.commit().await?;
        Ok(loan)
    }

    /// Count active loans
    pub async fn count_active(&self) -> AppResult<i64> {
        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM loans WHERE status = 'active'")
                .fetch_one(&self.pool)
                .await?;
        Ok(count)
    }

    /// Count overdue loans
    pub async fn count_overdue(&self) -> AppResult<i64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM loans WHERE status = 'active' AND due_date < NOW()",
        )
        .fetch_one(&self.pool)
        .await?;
        Ok(count)
    }
}

fn map_details(row: PgRow, now: DateTime<Utc>) -> LoanDetails {
    let status: LoanStatus = row.get("status");
    let due_date: DateTime<Utc> = row.get("due_date");
    LoanDetails {
        id: row.get("id"),
        loan_date: row.get("loan_date"),
        due_date,
        returned_at: row.get("returned_at"),
        status,
        notes: row.get("notes"),
        client: ClientShort {
            id: row.get("client_id"),
            name: row.get("client_name"),
            tax_id: row.get("client_tax_id"),
        },
        notebook: NotebookShort {
            id: row.get("notebook_id"),
            model: row.get("notebook_model"),
            serial_number: row.get("serial_number"),
        },
        created_by: UserShort {
            id: row.get("staff_id"),
            name: row.get("staff_name"),
        },
        is_overdue: status == LoanStatus::Active && now > due_date,
    }
}
