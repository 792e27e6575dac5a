use super::entity::Staff;
use crate::domain::rules::{contains_at_sign, is_present_and_not_blank, is_valid_id};
use crate::domain::{DomainError, DomainResult};

/// Stateless validator for Staff records and staff fields
#[derive(Debug, Clone, Copy, Default)]
pub struct StaffValidator;

impl StaffValidator {
    /// Names present and not blank, email present.
    ///
    /// Email content is not inspected here, not even for emptiness;
    /// `is_valid_email` is the stricter check.
    pub fn is_valid_staff(&self, staff: Option<&Staff>) -> bool {
        staff.is_some_and(|s| validate_staff(s).is_ok())
    }

    pub fn is_valid_staff_id(&self, id: Option<i64>) -> bool {
        is_valid_id(id)
    }

    pub fn is_valid_library_id(&self, id: Option<i64>) -> bool {
        is_valid_id(id)
    }

    /// Present and contains '@' anywhere
    pub fn is_valid_email(&self, email: Option<&str>) -> bool {
        contains_at_sign(email)
    }

    pub fn is_valid_department(&self, department: Option<&str>) -> bool {
        is_present_and_not_blank(department)
    }

    pub fn is_valid_position(&self, position: Option<&str>) -> bool {
        is_present_and_not_blank(position)
    }
}

/// Validates Staff record invariants, reporting the first rule broken
pub fn validate_staff(staff: &Staff) -> DomainResult<()> {
    if !is_present_and_not_blank(staff.first_name.as_deref()) {
        return Err(DomainError::InvariantViolation(
            "Staff first name cannot be blank".to_string(),
        ));
    }
    if !is_present_and_not_blank(staff.last_name.as_deref()) {
        return Err(DomainError::InvariantViolation(
            "Staff last name cannot be blank".to_string(),
        ));
    }
    if staff.email.is_none() {
        return Err(DomainError::InvariantViolation(
            "Staff email is required".to_string(),
        ));
    }
    Ok(())
}
