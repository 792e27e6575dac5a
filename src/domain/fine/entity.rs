use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::config::LibraryPolicy;
use crate::domain::loan::Loan;
use crate::domain::{DomainError, DomainResult};

/// A charge raised against a loan, in cents
///
/// Payments accumulate in `paid_cents` until the charge is settled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fine {
    pub id: Option<i64>,

    /// Required reference to the loan that incurred the charge
    pub loan_id: Option<i64>,

    /// Required reference to the user who owes it
    pub user_id: Option<i64>,

    pub amount_cents: u64,

    pub fine_date: NaiveDate,

    pub reason: Option<String>,

    #[serde(default)]
    pub paid_cents: u64,

    #[serde(default)]
    pub status: FineStatus,

    /// Day the charge was settled in full
    pub payment_date: Option<NaiveDate>,

    pub payment_method: Option<String>,

    pub transaction_id: Option<String>,

    pub waiver_reason: Option<String>,

    pub waived_by: Option<String>,

    pub waived_date: Option<DateTime<Utc>>,

    pub notes: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FineStatus {
    #[default]
    Active,
    PartiallyPaid,
    Paid,
    Waived,
    Cancelled,
}

impl Fine {
    pub fn new(
        loan_id: i64,
        user_id: i64,
        amount_cents: u64,
        reason: impl Into<String>,
        fine_date: NaiveDate,
    ) -> Self {
        Self {
            id: None,
            loan_id: Some(loan_id),
            user_id: Some(user_id),
            amount_cents,
            fine_date,
            reason: Some(reason.into()),
            paid_cents: 0,
            status: FineStatus::Active,
            payment_date: None,
            payment_method: None,
            transaction_id: None,
            waiver_reason: None,
            waived_by: None,
            waived_date: None,
            notes: None,
        }
    }

    /// Overdue charge for `loan` as of `today`
    pub fn for_overdue_loan(
        loan: &Loan,
        today: NaiveDate,
        policy: &LibraryPolicy,
    ) -> DomainResult<Self> {
        let (Some(loan_id), Some(user_id)) = (loan.id, loan.user_id) else {
            return Err(DomainError::MissingReference { field: "loan" });
        };
        let amount = loan.calculate_fine_cents(today, policy);
        if amount == 0 {
            return Err(DomainError::InvariantViolation(format!(
                "Loan {} accrues no fine on {}",
                loan_id, today
            )));
        }
        Ok(Self::new(loan_id, user_id, amount, "Overdue return", today))
    }

    pub fn is_paid(&self) -> bool {
        self.status == FineStatus::Paid
    }

    /// Still owed. Zero once paid, waived or cancelled.
    pub fn remaining_cents(&self) -> u64 {
        if self.can_be_paid() {
            self.amount_cents.saturating_sub(self.paid_cents)
        } else {
            0
        }
    }

    pub fn can_be_paid(&self) -> bool {
        matches!(self.status, FineStatus::Active | FineStatus::PartiallyPaid)
    }

    /// Only untouched charges can be waived
    pub fn can_be_waived(&self) -> bool {
        self.status == FineStatus::Active
    }

    /// Settle whatever remains in one payment
    pub fn mark_as_paid(
        &mut self,
        payment_method: impl Into<String>,
        transaction_id: impl Into<String>,
        on: NaiveDate,
    ) -> DomainResult<()> {
        self.ensure_payable()?;
        self.paid_cents = self.amount_cents;
        self.settle(payment_method.into(), transaction_id.into(), on);
        Ok(())
    }

    /// Apply a payment no larger than the remaining balance
    pub fn process_partial_payment(
        &mut self,
        payment_cents: u64,
        payment_method: impl Into<String>,
        transaction_id: impl Into<String>,
        on: NaiveDate,
    ) -> DomainResult<()> {
        self.ensure_payable()?;
        if payment_cents == 0 {
            return Err(DomainError::InvalidStateTransition(
                "Payment must be greater than zero".to_string(),
            ));
        }
        let remaining = self.remaining_cents();
        if payment_cents > remaining {
            return Err(DomainError::InvalidStateTransition(format!(
                "Payment of {} cents exceeds remaining {} cents",
                payment_cents, remaining
            )));
        }

        self.paid_cents += payment_cents;
        if self.paid_cents >= self.amount_cents {
            self.settle(payment_method.into(), transaction_id.into(), on);
        } else {
            self.status = FineStatus::PartiallyPaid;
            self.payment_method = Some(payment_method.into());
            self.transaction_id = Some(transaction_id.into());
        }
        Ok(())
    }

    pub fn waive(
        &mut self,
        reason: impl Into<String>,
        waived_by: impl Into<String>,
        at: DateTime<Utc>,
    ) -> DomainResult<()> {
        if !self.can_be_waived() {
            return Err(DomainError::InvalidStateTransition(format!(
                "Cannot waive a fine in state {}",
                self.status
            )));
        }
        self.status = FineStatus::Waived;
        self.waiver_reason = Some(reason.into());
        self.waived_by = Some(waived_by.into());
        self.waived_date = Some(at);
        Ok(())
    }

    pub fn cancel(&mut self, notes: impl Into<String>) -> DomainResult<()> {
        if !self.can_be_waived() {
            return Err(DomainError::InvalidStateTransition(format!(
                "Cannot cancel a fine in state {}",
                self.status
            )));
        }
        self.status = FineStatus::Cancelled;
        self.notes = Some(notes.into());
        Ok(())
    }

    fn ensure_payable(&self) -> DomainResult<()> {
        if !self.can_be_paid() {
            return Err(DomainError::InvalidStateTransition(format!(
                "Cannot pay a fine in state {}",
                self.status
            )));
        }
        Ok(())
    }

    fn settle(&mut self, payment_method: String, transaction_id: String, on: NaiveDate) {
        self.status = FineStatus::Paid;
        self.payment_date = Some(on);
        self.payment_method = Some(payment_method);
        self.transaction_id = Some(transaction_id);
    }
}

impl std::fmt::Display for FineStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FineStatus::Active => write!(f, "ACTIVE"),
            FineStatus::PartiallyPaid => write!(f, "PARTIALLY_PAID"),
            FineStatus::Paid => write!(f, "PAID"),
            FineStatus::Waived => write!(f, "WAIVED"),
            FineStatus::Cancelled => write!(f, "CANCELLED"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn fine() -> Fine {
        Fine::new(11, 3, 500, "Overdue return", date(2024, 3, 25))
    }

    #[test]
    fn test_new_fine_is_payable_and_waivable() {
        let f = fine();
        assert_eq!(f.remaining_cents(), 500);
        assert!(f.can_be_paid());
        assert!(f.can_be_waived());
        assert!(!f.is_paid());
    }

    #[test]
    fn test_mark_as_paid() {
        let mut f = fine();
        f.mark_as_paid("card", "TX-1", date(2024, 3, 26)).unwrap();
        assert!(f.is_paid());
        assert_eq!(f.paid_cents, 500);
        assert_eq!(f.remaining_cents(), 0);
        assert_eq!(f.payment_date, Some(date(2024, 3, 26)));
        assert_eq!(f.transaction_id.as_deref(), Some("TX-1"));

        assert!(matches!(
            f.mark_as_paid("card", "TX-2", date(2024, 3, 27)),
            Err(DomainError::InvalidStateTransition(_))
        ));
    }

    #[test]
    fn test_partial_payments_settle() {
        let mut f = fine();
        f.process_partial_payment(200, "cash", "R-1", date(2024, 3, 26)).unwrap();
        assert_eq!(f.status, FineStatus::PartiallyPaid);
        assert_eq!(f.remaining_cents(), 300);
        assert_eq!(f.payment_date, None);

        f.process_partial_payment(300, "cash", "R-2", date(2024, 3, 27)).unwrap();
        assert!(f.is_paid());
        assert_eq!(f.remaining_cents(), 0);
        assert_eq!(f.payment_date, Some(date(2024, 3, 27)));
    }

    #[test]
    fn test_partial_payment_rejects_zero_and_overpayment() {
        let mut f = fine();
        assert!(f.process_partial_payment(0, "cash", "R-0", date(2024, 3, 26)).is_err());

        let result = f.process_partial_payment(501, "cash", "R-1", date(2024, 3, 26));
        match result {
            Err(DomainError::InvalidStateTransition(msg)) => assert!(msg.contains("exceeds")),
            other => panic!("Expected InvalidStateTransition, got {:?}", other),
        }
        assert_eq!(f.paid_cents, 0);
        assert_eq!(f.status, FineStatus::Active);
    }

    #[test]
    fn test_waive() {
        let mut f = fine();
        let at = Utc.with_ymd_and_hms(2024, 3, 26, 9, 0, 0).unwrap();
        f.waive("First offence", "desk-2", at).unwrap();
        assert_eq!(f.status, FineStatus::Waived);
        assert_eq!(f.remaining_cents(), 0);
        assert_eq!(f.waived_by.as_deref(), Some("desk-2"));
        assert!(!f.can_be_paid());
        assert!(f.process_partial_payment(100, "cash", "R", date(2024, 3, 27)).is_err());
    }

    #[test]
    fn test_partially_paid_cannot_be_waived_or_cancelled() {
        let mut f = fine();
        f.process_partial_payment(100, "cash", "R-1", date(2024, 3, 26)).unwrap();
        assert!(!f.can_be_waived());
        assert!(f.waive("goodwill", "desk-1", Utc::now()).is_err());
        assert!(f.cancel("entered twice").is_err());
    }

    #[test]
    fn test_cancel() {
        let mut f = fine();
        f.cancel("Entered twice").unwrap();
        assert_eq!(f.status, FineStatus::Cancelled);
        assert_eq!(f.remaining_cents(), 0);
    }

    #[test]
    fn test_for_overdue_loan() {
        let lent = Utc.with_ymd_and_hms(2024, 3, 1, 10, 0, 0).unwrap();
        let loan = Loan::new(3, 8, lent, date(2024, 3, 15)).with_id(11);
        let policy = LibraryPolicy::default();

        let f = Fine::for_overdue_loan(&loan, date(2024, 3, 25), &policy).unwrap();
        assert_eq!(f.amount_cents, 500);
        assert_eq!(f.loan_id, Some(11));
        assert_eq!(f.user_id, Some(3));

        assert!(matches!(
            Fine::for_overdue_loan(&loan, date(2024, 3, 10), &policy),
            Err(DomainError::InvariantViolation(_))
        ));

        let unsaved = Loan::new(3, 8, lent, date(2024, 3, 15));
        assert_eq!(
            Fine::for_overdue_loan(&unsaved, date(2024, 3, 25), &policy),
            Err(DomainError::MissingReference { field: "loan" })
        );
    }
}
