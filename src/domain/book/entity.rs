use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// A catalogued title. Physical copies are tracked as `BookCopy` records;
/// the counters here are the catalogue-level summary.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Book {
    pub id: Option<i64>,

    pub title: Option<String>,

    pub isbn: Option<String>,

    pub total_copies: Option<i32>,

    pub available_copies: Option<i32>,

    /// Reference to the credited author
    pub author_id: Option<i64>,
}

impl Book {
    /// New books start with a single available copy
    pub fn new(title: impl Into<String>, isbn: impl Into<String>, author_id: Option<i64>) -> Self {
        Self {
            id: None,
            title: Some(title.into()),
            isbn: Some(isbn.into()),
            total_copies: Some(1),
            available_copies: Some(1),
            author_id,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_copies(mut self, total: i32, available: i32) -> Self {
        self.total_copies = Some(total);
        self.available_copies = Some(available);
        self
    }

    pub fn is_available(&self) -> bool {
        self.available_copies.unwrap_or(0) > 0
    }

    /// Take one copy off the shelf
    pub fn checkout_copy(&mut self) -> DomainResult<()> {
        match self.available_copies {
            Some(n) if n > 0 => {
                self.available_copies = Some(n - 1);
                Ok(())
            }
            _ => Err(DomainError::InvalidStateTransition(format!(
                "No available copies of {}",
                self
            ))),
        }
    }

    /// Put one copy back, never exceeding the total
    pub fn return_copy(&mut self) {
        let total = self.total_copies.unwrap_or(0);
        let available = self.available_copies.unwrap_or(0);
        if available < total {
            self.available_copies = Some(available + 1);
        }
    }
}

impl std::fmt::Display for Book {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} (ISBN {})",
            self.title.as_deref().unwrap_or("untitled"),
            self.isbn.as_deref().unwrap_or("unknown")
        )
    }
}
