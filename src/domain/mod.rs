// src/domain/mod.rs
//
// Domain Root - The Single Source of Truth for Domain API
//
// Each entity module owns its record (entity.rs) and its validator
// (invariants.rs). All other modules import from `crate::domain::*`

// ============================================================================
// MODULE DECLARATIONS
// ============================================================================

pub mod author;
pub mod book;
pub mod book_copy;
pub mod fine;
pub mod library;
pub mod loan;
pub mod reservation;
pub mod rules;
pub mod staff;
pub mod user;

// ============================================================================
// PUBLIC API RE-EXPORTS
// ============================================================================

// Author
pub use author::{validate_author, Author, AuthorValidator};

// Book
pub use book::{validate_book, Book, BookValidator};

// Book Copy
pub use book_copy::{validate_book_copy, BookCopy, BookCopyStatus, BookCopyValidator};

// Fine
pub use fine::{validate_fine, Fine, FineStatus, FineValidator};

// Library (referenced, never validated)
pub use library::Library;

// Loan
pub use loan::{validate_loan, Loan, LoanStatus, LoanValidator};

// Reservation
pub use reservation::{validate_reservation, Reservation, ReservationStatus, ReservationValidator};

// Staff
pub use staff::{validate_staff, EmploymentStatus, Staff, StaffValidator};

// User
pub use user::{validate_user, User, UserValidator};

// ============================================================================
// DOMAIN ERROR TYPES
// ============================================================================

use thiserror::Error;

/// Domain-level errors
/// These represent violations of business rules and invariants
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("Invariant violation: {0}")]
    InvariantViolation(String),

    #[error("Invalid identifier for {field}: must be present and greater than zero")]
    InvalidIdentifier { field: &'static str },

    #[error("Missing required reference: {field}")]
    MissingReference { field: &'static str },

    #[error("Available copies {available:?} inconsistent with total copies {total:?}")]
    CopyCountMismatch {
        total: Option<i32>,
        available: Option<i32>,
    },

    #[error("Invalid state transition: {0}")]
    InvalidStateTransition(String),
}

/// Domain result type
pub type DomainResult<T> = Result<T, DomainError>;
