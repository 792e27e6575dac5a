use super::entity::BookCopy;
use crate::domain::rules::{is_present_and_not_blank, is_valid_id};
use crate::domain::{DomainError, DomainResult};

/// Stateless validator for BookCopy records
#[derive(Debug, Clone, Copy, Default)]
pub struct BookCopyValidator;

impl BookCopyValidator {
    /// Book and library references present. The referenced records are
    /// not inspected.
    pub fn is_valid_book_copy(&self, copy: Option<&BookCopy>) -> bool {
        copy.is_some_and(|c| validate_book_copy(c).is_ok())
    }

    pub fn is_valid_book_copy_id(&self, id: Option<i64>) -> bool {
        is_valid_id(id)
    }

    pub fn is_valid_book_id(&self, id: Option<i64>) -> bool {
        is_valid_id(id)
    }

    pub fn is_valid_library_id(&self, id: Option<i64>) -> bool {
        is_valid_id(id)
    }

    pub fn is_valid_barcode(&self, barcode: Option<&str>) -> bool {
        is_present_and_not_blank(barcode)
    }
}

/// Validates BookCopy invariants (reference presence only)
pub fn validate_book_copy(copy: &BookCopy) -> DomainResult<()> {
    if copy.book_id.is_none() {
        return Err(DomainError::MissingReference { field: "book" });
    }
    if copy.library_id.is_none() {
        return Err(DomainError::MissingReference { field: "library" });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const V: BookCopyValidator = BookCopyValidator;

    #[test]
    fn test_valid_copy() {
        let copy = BookCopy::new(1, 2, "BC-1");
        assert!(V.is_valid_book_copy(Some(&copy)));
    }

    #[test]
    fn test_null_copy_fails() {
        assert!(!V.is_valid_book_copy(None));
    }

    #[test]
    fn test_missing_references_fail() {
        let mut copy = BookCopy::new(1, 2, "BC-1");
        copy.book_id = None;
        assert!(!V.is_valid_book_copy(Some(&copy)));
        assert_eq!(
            validate_book_copy(&copy),
            Err(DomainError::MissingReference { field: "book" })
        );

        let mut copy = BookCopy::new(1, 2, "BC-1");
        copy.library_id = None;
        assert!(!V.is_valid_book_copy(Some(&copy)));
        assert_eq!(
            validate_book_copy(&copy),
            Err(DomainError::MissingReference { field: "library" })
        );
    }

    #[test]
    fn test_presence_only_no_deep_checks() {
        // a zero id is still a present reference
        let copy = BookCopy {
            book_id: Some(0),
            library_id: Some(-3),
            barcode: None,
            ..BookCopy::default()
        };
        assert!(V.is_valid_book_copy(Some(&copy)));
    }

    #[test]
    fn test_identifiers() {
        for check in [
            BookCopyValidator::is_valid_book_copy_id,
            BookCopyValidator::is_valid_book_id,
            BookCopyValidator::is_valid_library_id,
        ] {
            assert!(check(&V, Some(1)));
            assert!(!check(&V, Some(0)));
            assert!(!check(&V, Some(-1)));
            assert!(!check(&V, None));
        }
    }

    #[test]
    fn test_barcode() {
        assert!(V.is_valid_barcode(Some("BC-0001")));
        assert!(!V.is_valid_barcode(Some("  ")));
        assert!(!V.is_valid_barcode(None));
    }
}
