use super::entity::Reservation;
use crate::domain::rules::is_valid_id;
use crate::domain::{DomainError, DomainResult};

/// Stateless validator for Reservation records
#[derive(Debug, Clone, Copy, Default)]
pub struct ReservationValidator;

impl ReservationValidator {
    /// User and book references present
    pub fn is_valid_reservation(&self, reservation: Option<&Reservation>) -> bool {
        reservation.is_some_and(|r| validate_reservation(r).is_ok())
    }

    pub fn is_valid_reservation_id(&self, id: Option<i64>) -> bool {
        is_valid_id(id)
    }

    pub fn is_valid_user_id(&self, id: Option<i64>) -> bool {
        is_valid_id(id)
    }

    pub fn is_valid_book_id(&self, id: Option<i64>) -> bool {
        is_valid_id(id)
    }
}

/// Validates Reservation invariants (reference presence only)
pub fn validate_reservation(reservation: &Reservation) -> DomainResult<()> {
    if reservation.user_id.is_none() {
        return Err(DomainError::MissingReference { field: "user" });
    }
    if reservation.book_id.is_none() {
        return Err(DomainError::MissingReference { field: "book" });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    const V: ReservationValidator = ReservationValidator;

    fn reservation() -> Reservation {
        let expiry = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
        Reservation::new(5, 6, Utc::now(), expiry)
    }

    #[test]
    fn test_valid_reservation() {
        assert!(V.is_valid_reservation(Some(&reservation())));
    }

    #[test]
    fn test_null_reservation_fails() {
        assert!(!V.is_valid_reservation(None));
    }

    #[test]
    fn test_missing_references_fail() {
        let mut r = reservation();
        r.user_id = None;
        assert!(!V.is_valid_reservation(Some(&r)));
        assert_eq!(
            validate_reservation(&r),
            Err(DomainError::MissingReference { field: "user" })
        );

        let mut r = reservation();
        r.book_id = None;
        assert!(!V.is_valid_reservation(Some(&r)));
    }

    #[test]
    fn test_identifiers() {
        assert!(V.is_valid_reservation_id(Some(1)));
        assert!(!V.is_valid_reservation_id(Some(0)));
        assert!(V.is_valid_user_id(Some(2)));
        assert!(!V.is_valid_user_id(None));
        assert!(V.is_valid_book_id(Some(3)));
        assert!(!V.is_valid_book_id(Some(-3)));
    }
}
