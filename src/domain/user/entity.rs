use serde::{Deserialize, Serialize};

use crate::config::LibraryPolicy;
use crate::domain::author::entity::join_name;

/// A library member who can borrow and reserve books
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: Option<i64>,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    pub email: Option<String>,
}

impl User {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            email: Some(email.into()),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    pub fn full_name(&self) -> String {
        join_name(self.first_name.as_deref(), self.last_name.as_deref())
    }

    /// Loan-limit check. The caller supplies the count of unreturned loans.
    ///
    /// Not consulted by `UserValidator::can_user_borrow_books`.
    pub fn has_loan_capacity(&self, active_loans: usize, policy: &LibraryPolicy) -> bool {
        active_loans < policy.max_active_loans
    }
}
