pub mod entity;
pub mod invariants;

pub use entity::{BookCopy, BookCopyStatus};
pub use invariants::{validate_book_copy, BookCopyValidator};
