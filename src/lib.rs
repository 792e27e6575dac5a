// src/lib.rs
// Davon Library - validation and domain rules for library management
//
// Architecture:
// - Domain-centric: every entity owns its record and its validator
// - Pure: validators are total boolean predicates, no I/O, no shared state
// - Explicit: validators are plain values, constructed where needed
// - Persistence and transport belong to the embedding application

// ============================================================================
// FOUNDATION
// ============================================================================

pub mod config;
pub mod domain;
pub mod error;

// ============================================================================
// ORCHESTRATION & BOUNDARY
// ============================================================================

pub mod application;
pub mod services;

// ============================================================================
// PUBLIC API - Domain Entities & Validators
// ============================================================================

pub use domain::{
    validate_author,
    validate_book,
    validate_book_copy,
    validate_fine,
    validate_loan,
    validate_reservation,
    validate_staff,
    validate_user,
    // Author
    Author,
    AuthorValidator,
    // Book
    Book,
    // Book Copy
    BookCopy,
    BookCopyStatus,
    BookCopyValidator,
    BookValidator,
    DomainError,
    DomainResult,
    EmploymentStatus,
    // Fine
    Fine,
    FineStatus,
    FineValidator,
    // Library
    Library,
    // Loan
    Loan,
    LoanStatus,
    LoanValidator,
    // Reservation
    Reservation,
    ReservationStatus,
    ReservationValidator,
    // Staff
    Staff,
    StaffValidator,
    // User
    User,
    UserValidator,
};

// ============================================================================
// PUBLIC API - Errors & Configuration
// ============================================================================

pub use config::LibraryPolicy;
pub use error::{AppError, AppResult};

// ============================================================================
// PUBLIC API - Services & Application Layer
// ============================================================================

pub use application::{ErrorResponse, ErrorType, ToErrorResponse};
pub use services::AdmissionService;
