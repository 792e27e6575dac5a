use super::entity::Fine;
use crate::domain::rules::{is_present_and_not_blank, is_valid_id};
use crate::domain::{DomainError, DomainResult};

/// Stateless validator for Fine records
#[derive(Debug, Clone, Copy, Default)]
pub struct FineValidator;

impl FineValidator {
    /// References present, positive amount, a stated reason, and no more
    /// paid than charged
    pub fn is_valid_fine(&self, fine: Option<&Fine>) -> bool {
        fine.is_some_and(|f| validate_fine(f).is_ok())
    }

    pub fn is_valid_fine_id(&self, id: Option<i64>) -> bool {
        is_valid_id(id)
    }

    pub fn is_valid_loan_id(&self, id: Option<i64>) -> bool {
        is_valid_id(id)
    }

    pub fn is_valid_user_id(&self, id: Option<i64>) -> bool {
        is_valid_id(id)
    }
}

/// Validates Fine invariants, reporting the first rule broken
pub fn validate_fine(fine: &Fine) -> DomainResult<()> {
    if fine.loan_id.is_none() {
        return Err(DomainError::MissingReference { field: "loan" });
    }
    if fine.user_id.is_none() {
        return Err(DomainError::MissingReference { field: "user" });
    }
    if fine.amount_cents == 0 {
        return Err(DomainError::InvariantViolation(
            "Fine amount must be positive".to_string(),
        ));
    }
    if !is_present_and_not_blank(fine.reason.as_deref()) {
        return Err(DomainError::InvariantViolation(
            "Fine reason cannot be blank".to_string(),
        ));
    }
    if fine.paid_cents > fine.amount_cents {
        return Err(DomainError::InvariantViolation(format!(
            "Paid {} cents exceeds fine of {} cents",
            fine.paid_cents, fine.amount_cents
        )));
    }
    Ok(())
}
