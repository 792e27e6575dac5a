use super::entity::Book;
use crate::domain::rules::{
    has_min_length, is_non_negative, is_present_and_not_blank, is_present_and_not_empty,
    is_valid_id, is_valid_search_term, MIN_ISBN_LENGTH,
};
use crate::domain::{DomainError, DomainResult};

/// Stateless validator for Book records, ISBNs and title searches
#[derive(Debug, Clone, Copy, Default)]
pub struct BookValidator;

impl BookValidator {
    /// Title present and not blank, ISBN present and not empty
    pub fn is_valid_book(&self, book: Option<&Book>) -> bool {
        book.is_some_and(|b| validate_book(b).is_ok())
    }

    pub fn is_valid_book_id(&self, id: Option<i64>) -> bool {
        is_valid_id(id)
    }

    /// Length check only; no checksum
    pub fn is_valid_isbn(&self, isbn: Option<&str>) -> bool {
        has_min_length(isbn, MIN_ISBN_LENGTH)
    }

    pub fn is_valid_title_search(&self, term: Option<&str>) -> bool {
        is_valid_search_term(term)
    }

    /// The book's author reference
    pub fn is_valid_author_id(&self, id: Option<i64>) -> bool {
        is_valid_id(id)
    }

    /// Both counts present and non-negative, available never above total
    pub fn is_valid_copy_counts(&self, total: Option<i32>, available: Option<i32>) -> bool {
        match (total, available) {
            (Some(t), Some(a)) => is_non_negative(total) && is_non_negative(available) && a <= t,
            _ => false,
        }
    }
}

/// Validates all Book invariants, reporting the first rule broken.
///
/// Copy counts and the author reference are not part of the record rule;
/// callers check them separately before accepting a write.
pub fn validate_book(book: &Book) -> DomainResult<()> {
    if !is_present_and_not_blank(book.title.as_deref()) {
        return Err(DomainError::InvariantViolation(
            "Book title cannot be blank".to_string(),
        ));
    }
    if !is_present_and_not_empty(book.isbn.as_deref()) {
        return Err(DomainError::InvariantViolation(
            "Book ISBN cannot be empty".to_string(),
        ));
    }
    Ok(())
}

/// Copy-count consistency as a reportable rule
pub fn validate_copy_counts(book: &Book) -> DomainResult<()> {
    if BookValidator.is_valid_copy_counts(book.total_copies, book.available_copies) {
        Ok(())
    } else {
        Err(DomainError::CopyCountMismatch {
            total: book.total_copies,
            available: book.available_copies,
        })
    }
}
