use super::entity::User;
use crate::domain::rules::{
    contains_at_sign, is_present_and_not_blank, is_valid_id, is_valid_search_term,
};
use crate::domain::{DomainError, DomainResult};

/// Stateless validator for User records and member lookups
#[derive(Debug, Clone, Copy, Default)]
pub struct UserValidator;

impl UserValidator {
    /// Names present and not blank, email present (content not inspected)
    pub fn is_valid_user(&self, user: Option<&User>) -> bool {
        user.is_some_and(|u| validate_user(u).is_ok())
    }

    pub fn is_valid_user_id(&self, id: Option<i64>) -> bool {
        is_valid_id(id)
    }

    /// Present and contains '@' anywhere
    pub fn is_valid_email(&self, email: Option<&str>) -> bool {
        contains_at_sign(email)
    }

    pub fn is_valid_name_search(&self, term: Option<&str>) -> bool {
        is_valid_search_term(term)
    }

    /// Borrowing eligibility. Currently identical to `is_valid_user_id`:
    /// no loan-limit or suspension lookup happens here. See
    /// `User::has_loan_capacity` for the loan-limit rule.
    pub fn can_user_borrow_books(&self, user_id: Option<i64>) -> bool {
        self.is_valid_user_id(user_id)
    }
}

/// Validates User record invariants, reporting the first rule broken
pub fn validate_user(user: &User) -> DomainResult<()> {
    if !is_present_and_not_blank(user.first_name.as_deref()) {
        return Err(DomainError::InvariantViolation(
            "User first name cannot be blank".to_string(),
        ));
    }
    if !is_present_and_not_blank(user.last_name.as_deref()) {
        return Err(DomainError::InvariantViolation(
            "User last name cannot be blank".to_string(),
        ));
    }
    if user.email.is_none() {
        return Err(DomainError::InvariantViolation(
            "User email is required".to_string(),
        ));
    }
    Ok(())
}
