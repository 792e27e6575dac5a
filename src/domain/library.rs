// src/domain/library.rs
//
// Library Entity
//
// A branch that holds copies and employs staff. Other records reference it
// by identifier; it carries no validator of its own.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Library {
    pub id: Option<i64>,

    pub name: Option<String>,

    pub address: Option<String>,

    pub city: Option<String>,
}

impl Library {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            id: None,
            name: Some(name.into()),
            address: Some(address.into()),
            city: None,
        }
    }

    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = Some(city.into());
        self
    }

    /// "address, city", skipping whichever part is missing
    pub fn full_address(&self) -> String {
        [self.address.as_deref(), self.city.as_deref()]
            .into_iter()
            .flatten()
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_address() {
        let library = Library::new("Central", "1 Main St").with_city("Springfield");
        assert_eq!(library.full_address(), "1 Main St, Springfield");
    }

    #[test]
    fn test_full_address_partial() {
        let library = Library::new("Central", "1 Main St");
        assert_eq!(library.full_address(), "1 Main St");

        let library = Library {
            city: Some("Springfield".to_string()),
            ..Library::default()
        };
        assert_eq!(library.full_address(), "Springfield");
        assert_eq!(Library::default().full_address(), "");
    }
}
