use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, DomainResult};

/// A physical copy of a book held by a library branch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCopy {
    pub id: Option<i64>,

    /// Required reference to the catalogued book
    pub book_id: Option<i64>,

    /// Required reference to the holding library
    pub library_id: Option<i64>,

    pub barcode: Option<String>,

    #[serde(default)]
    pub status: BookCopyStatus,

    /// Shelf location inside the branch
    pub location: Option<String>,

    pub notes: Option<String>,
}

/// Shelf state of a physical copy
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookCopyStatus {
    #[default]
    Available,
    CheckedOut,
    Reserved,
    Maintenance,
    Lost,
    Damaged,
}

impl BookCopy {
    pub fn new(book_id: i64, library_id: i64, barcode: impl Into<String>) -> Self {
        Self {
            id: None,
            book_id: Some(book_id),
            library_id: Some(library_id),
            barcode: Some(barcode.into()),
            status: BookCopyStatus::Available,
            location: None,
            notes: None,
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    pub fn is_available(&self) -> bool {
        self.status == BookCopyStatus::Available
    }

    /// Available -> CheckedOut
    pub fn check_out(&mut self) -> DomainResult<()> {
        if self.status != BookCopyStatus::Available {
            return Err(DomainError::InvalidStateTransition(format!(
                "Cannot check out copy in state {}",
                self.status
            )));
        }
        self.status = BookCopyStatus::CheckedOut;
        Ok(())
    }

    /// CheckedOut -> Available. Returning an available copy is a no-op.
    pub fn return_copy(&mut self) -> DomainResult<()> {
        match self.status {
            BookCopyStatus::CheckedOut | BookCopyStatus::Available => {
                self.status = BookCopyStatus::Available;
                Ok(())
            }
            other => Err(DomainError::InvalidStateTransition(format!(
                "Cannot return copy in state {}",
                other
            ))),
        }
    }

    pub fn mark_as_damaged(&mut self) {
        self.status = BookCopyStatus::Damaged;
    }

    pub fn send_to_maintenance(&mut self, reason: impl Into<String>) {
        self.status = BookCopyStatus::Maintenance;
        self.notes = Some(reason.into());
    }
}

impl std::fmt::Display for BookCopyStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BookCopyStatus::Available => write!(f, "AVAILABLE"),
            BookCopyStatus::CheckedOut => write!(f, "CHECKED_OUT"),
            BookCopyStatus::Reserved => write!(f, "RESERVED"),
            BookCopyStatus::Maintenance => write!(f, "MAINTENANCE"),
            BookCopyStatus::Lost => write!(f, "LOST"),
            BookCopyStatus::Damaged => write!(f, "DAMAGED"),
        }
    }
}
