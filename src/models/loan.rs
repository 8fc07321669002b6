//! Loan model and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, FromRow, Postgres};
use utoipa::{IntoParams, ToSchema};

use super::client::ClientShort;
use super::notebook::NotebookShort;
use super::user::UserShort;

/// Loan lifecycle status. The only transition is Active → Finalized;
/// extensions and transfers are modeled as return-then-new-loan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatus {
    Active,
    Finalized,
}

impl LoanStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LoanStatus::Active => "active",
            LoanStatus::Finalized => "finalized",
        }
    }
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for LoanStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(LoanStatus::Active),
            "finalized" => Ok(LoanStatus::Finalized),
            _ => Err(format!("Invalid loan status: {}", s)),
        }
    }
}

// SQLx conversion for LoanStatus (stored as TEXT)
impl sqlx::Type<Postgres> for LoanStatus {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for LoanStatus {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        s.parse().map_err(|e: String| e.into())
    }
}

impl Encode<'_, Postgres> for LoanStatus {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

/// Loan model from database
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Loan {
    pub id: i32,
    pub client_id: i32,
    pub notebook_id: i32,
    pub user_id: i32,
    pub loan_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
    pub status: LoanStatus,
    pub notes: Option<String>,
}

impl Loan {
    /// Overdue is derived, never stored: an active loan past its due date.
    /// A finalized loan is not overdue no matter the timestamps.
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        self.status == LoanStatus::Active && now > self.due_date
    }
}

/// Loan with embedded summaries for display
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoanDetails {
    pub id: i32,
    pub loan_date: DateTime<Utc>,
    pub due_date: DateTime<Utc>,
    pub returned_at: Option<DateTime<Utc>>,
    pub status: LoanStatus,
    pub notes: Option<String>,
    pub client: ClientShort,
    pub notebook: NotebookShort,
    pub created_by: UserShort,
    pub is_overdue: bool,
}

/// Status filter for loan listings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum LoanStatusFilter {
    All,
    Active,
    Finalized,
    Overdue,
}

/// Loan listing query parameters
#[derive(Debug, Deserialize, IntoParams, ToSchema)]
pub struct LoanQuery {
    /// all | active | finalized | overdue (default all)
    pub status: Option<LoanStatusFilter>,
}

/// Create loan request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateLoan {
    pub client_id: i32,
    pub notebook_id: i32,
    /// Defaults to now when omitted
    pub loan_date: Option<DateTime<Utc>>,
    pub due_date: DateTime<Utc>,
    pub notes: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn loan(status: LoanStatus, due_in_hours: i64) -> Loan {
        let now = Utc::now();
        Loan {
            id: 1,
            client_id: 1,
            notebook_id: 1,
            user_id: 1,
            loan_date: now - Duration::days(7),
            due_date: now + Duration::hours(due_in_hours),
            returned_at: None,
            status,
            notes: None,
        }
    }

    #[test]
    fn active_past_due_is_overdue() {
        let l = loan(LoanStatus::Active, -1);
        assert!(l.is_overdue(Utc::now()));
    }

    #[test]
    fn active_before_due_is_not_overdue() {
        let l = loan(LoanStatus::Active, 1);
        assert!(!l.is_overdue(Utc::now()));
    }

    #[test]
    fn finalized_is_never_overdue() {
        let mut l = loan(LoanStatus::Finalized, -48);
        l.returned_at = Some(Utc::now());
        assert!(!l.is_overdue(Utc::now()));
    }
}
