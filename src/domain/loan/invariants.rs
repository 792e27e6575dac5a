use super::entity::Loan;
use crate::domain::rules::is_valid_id;
use crate::domain::{DomainError, DomainResult};

/// Stateless validator for Loan records
#[derive(Debug, Clone, Copy, Default)]
pub struct LoanValidator;

impl LoanValidator {
    /// User and book copy references present
    pub fn is_valid_loan(&self, loan: Option<&Loan>) -> bool {
        loan.is_some_and(|l| validate_loan(l).is_ok())
    }

    pub fn is_valid_loan_id(&self, id: Option<i64>) -> bool {
        is_valid_id(id)
    }

    pub fn is_valid_user_id(&self, id: Option<i64>) -> bool {
        is_valid_id(id)
    }

    pub fn is_valid_book_copy_id(&self, id: Option<i64>) -> bool {
        is_valid_id(id)
    }
}

/// Validates Loan invariants (reference presence only)
pub fn validate_loan(loan: &Loan) -> DomainResult<()> {
    if loan.user_id.is_none() {
        return Err(DomainError::MissingReference { field: "user" });
    }
    if loan.book_copy_id.is_none() {
        return Err(DomainError::MissingReference { field: "book_copy" });
    }
    Ok(())
}
