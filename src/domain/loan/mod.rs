pub mod entity;
pub mod invariants;

pub use entity::{Loan, LoanStatus};
pub use invariants::{validate_loan, LoanValidator};
