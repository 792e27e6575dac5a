use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::{LibraryPolicy, DEFAULT_MAX_LOAN_EXTENSIONS};
use crate::domain::rules::add_days;
use crate::domain::{DomainError, DomainResult};

/// A book copy lent to a user
///
/// Date-dependent queries take `today` explicitly; nothing here reads
/// the system clock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Loan {
    pub id: Option<i64>,

    /// Required reference to the borrower
    pub user_id: Option<i64>,

    /// Required reference to the lent copy
    pub book_copy_id: Option<i64>,

    pub loan_date: DateTime<Utc>,

    pub due_date: NaiveDate,

    /// Set once, when the copy comes back
    pub return_date: Option<DateTime<Utc>>,

    #[serde(default)]
    pub extensions_count: u32,

    #[serde(default = "default_max_extensions")]
    pub max_extensions_allowed: u32,

    #[serde(default)]
    pub status: LoanStatus,

    pub notes: Option<String>,
}

fn default_max_extensions() -> u32 {
    DEFAULT_MAX_LOAN_EXTENSIONS
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LoanStatus {
    #[default]
    Active,
    Returned,
    Overdue,
    Lost,
    Damaged,
}

impl Loan {
    pub fn new(
        user_id: i64,
        book_copy_id: i64,
        loan_date: DateTime<Utc>,
        due_date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            user_id: Some(user_id),
            book_copy_id: Some(book_copy_id),
            loan_date,
            due_date,
            return_date: None,
            extensions_count: 0,
            max_extensions_allowed: DEFAULT_MAX_LOAN_EXTENSIONS,
            status: LoanStatus::Active,
            notes: None,
        }
    }

    /// Due `days` after the loan date
    pub fn for_period(
        user_id: i64,
        book_copy_id: i64,
        loan_date: DateTime<Utc>,
        days: i64,
    ) -> DomainResult<Self> {
        let due_date = add_days(loan_date.date_naive(), days).ok_or_else(|| {
            DomainError::InvariantViolation(format!(
                "Loan period of {} days is out of calendar range",
                days
            ))
        })?;
        Ok(Self::new(user_id, book_copy_id, loan_date, due_date))
    }

    /// Loan on the policy's default period and extension limit
    pub fn under_policy(
        user_id: i64,
        book_copy_id: i64,
        loan_date: DateTime<Utc>,
        policy: &LibraryPolicy,
    ) -> DomainResult<Self> {
        let mut loan = Self::for_period(
            user_id,
            book_copy_id,
            loan_date,
            i64::from(policy.default_loan_period_days),
        )?;
        loan.max_extensions_allowed = policy.max_loan_extensions;
        Ok(loan)
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn is_returned(&self) -> bool {
        self.return_date.is_some()
    }

    pub fn is_active(&self) -> bool {
        !self.is_returned() && self.status == LoanStatus::Active
    }

    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.is_returned() && today > self.due_date
    }

    pub fn days_overdue(&self, today: NaiveDate) -> i64 {
        if !self.is_overdue(today) {
            return 0;
        }
        (today - self.due_date).num_days()
    }

    pub fn return_book(&mut self, at: DateTime<Utc>) -> DomainResult<()> {
        if self.is_returned() {
            return Err(DomainError::InvalidStateTransition(
                "Loan has already been returned".to_string(),
            ));
        }
        self.return_date = Some(at);
        self.status = LoanStatus::Returned;
        Ok(())
    }

    /// Push the due date back, up to `max_extensions_allowed` times
    pub fn extend_due_date(&mut self, days: i64) -> DomainResult<()> {
        if days <= 0 {
            return Err(DomainError::InvalidStateTransition(format!(
                "Extension must add at least one day, got {}",
                days
            )));
        }
        if self.is_returned() {
            return Err(DomainError::InvalidStateTransition(
                "Cannot extend a returned loan".to_string(),
            ));
        }
        if self.extensions_count >= self.max_extensions_allowed {
            return Err(DomainError::InvalidStateTransition(format!(
                "Loan already extended {} of {} allowed times",
                self.extensions_count, self.max_extensions_allowed
            )));
        }
        self.due_date = add_days(self.due_date, days).ok_or_else(|| {
            DomainError::InvalidStateTransition(format!(
                "Extending by {} days leaves the calendar range",
                days
            ))
        })?;
        self.extensions_count += 1;
        Ok(())
    }

    pub fn can_be_extended(&self, today: NaiveDate) -> bool {
        self.is_active()
            && self.extensions_count < self.max_extensions_allowed
            && !self.is_overdue(today)
    }

    /// Days between lending and the due date
    pub fn loan_duration_days(&self) -> i64 {
        (self.due_date - self.loan_date.date_naive()).num_days()
    }

    /// Days actually held, up to the return date or `today`
    pub fn actual_loan_duration_days(&self, today: NaiveDate) -> i64 {
        let end = self.return_date.map(|r| r.date_naive()).unwrap_or(today);
        (end - self.loan_date.date_naive()).num_days()
    }

    pub fn mark_as_lost(&mut self, notes: impl Into<String>) {
        self.status = LoanStatus::Lost;
        self.notes = Some(notes.into());
    }

    pub fn mark_as_damaged(&mut self, notes: impl Into<String>) {
        self.status = LoanStatus::Damaged;
        self.notes = Some(notes.into());
    }

    /// Accrued fine in cents for an unreturned overdue loan
    pub fn calculate_fine_cents(&self, today: NaiveDate, policy: &LibraryPolicy) -> u64 {
        let days = u64::try_from(self.days_overdue(today)).unwrap_or(0);
        days.saturating_mul(policy.daily_fine_cents)
    }

    pub fn overdue_status(&self, today: NaiveDate) -> String {
        match self.days_overdue(today) {
            0 => "Not overdue".to_string(),
            1 => "1 day overdue".to_string(),
            days => format!("{} days overdue", days),
        }
    }
}

impl std::fmt::Display for LoanStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoanStatus::Active => write!(f, "ACTIVE"),
            LoanStatus::Returned => write!(f, "RETURNED"),
            LoanStatus::Overdue => write!(f, "OVERDUE"),
            LoanStatus::Lost => write!(f, "LOST"),
            LoanStatus::Damaged => write!(f, "DAMAGED"),
        }
    }
}
