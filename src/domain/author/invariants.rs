use super::entity::Author;
use crate::domain::rules::{
    is_present_and_not_blank, is_present_and_not_empty, is_valid_id, is_valid_search_term,
};
use crate::domain::{DomainError, DomainResult};

/// Stateless validator for Author records and author lookups
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorValidator;

impl AuthorValidator {
    /// Both names present and not blank
    pub fn is_valid_author(&self, author: Option<&Author>) -> bool {
        author.is_some_and(|a| validate_author(a).is_ok())
    }

    pub fn is_valid_author_id(&self, id: Option<i64>) -> bool {
        is_valid_id(id)
    }

    pub fn is_valid_name_search(&self, term: Option<&str>) -> bool {
        is_valid_search_term(term)
    }

    /// Looser than `is_valid_author`: only the empty string is rejected,
    /// whitespace-only names pass.
    pub fn is_valid_author_names(&self, first_name: Option<&str>, last_name: Option<&str>) -> bool {
        is_present_and_not_empty(first_name) && is_present_and_not_empty(last_name)
    }
}

/// Validates all Author invariants, reporting the first rule broken
pub fn validate_author(author: &Author) -> DomainResult<()> {
    if !is_present_and_not_blank(author.first_name.as_deref()) {
        return Err(DomainError::InvariantViolation(
            "Author first name cannot be blank".to_string(),
        ));
    }
    if !is_present_and_not_blank(author.last_name.as_deref()) {
        return Err(DomainError::InvariantViolation(
            "Author last name cannot be blank".to_string(),
        ));
    }
    Ok(())
}
