use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::domain::author::entity::join_name;
use crate::domain::{DomainError, DomainResult};

/// An employee of a library branch
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Staff {
    pub id: Option<i64>,

    pub first_name: Option<String>,

    pub last_name: Option<String>,

    pub email: Option<String>,

    pub department: Option<String>,

    pub position: Option<String>,

    /// Payroll number, distinct from the record id
    pub employee_id: Option<String>,

    pub hire_date: Option<NaiveDate>,

    pub termination_date: Option<NaiveDate>,

    #[serde(default)]
    pub employment_status: EmploymentStatus,

    /// Branch the staff member works at
    pub library_id: Option<i64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmploymentStatus {
    #[default]
    Active,
    OnLeave,
    Suspended,
    Terminated,
    Retired,
}

impl Staff {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
        position: impl Into<String>,
        library_id: Option<i64>,
    ) -> Self {
        Self {
            first_name: Some(first_name.into()),
            last_name: Some(last_name.into()),
            email: Some(email.into()),
            position: Some(position.into()),
            library_id,
            ..Self::default()
        }
    }

    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    pub fn hired_on(mut self, date: NaiveDate) -> Self {
        self.hire_date = Some(date);
        self
    }

    pub fn full_name(&self) -> String {
        join_name(self.first_name.as_deref(), self.last_name.as_deref())
    }

    pub fn is_active(&self) -> bool {
        self.employment_status == EmploymentStatus::Active
    }

    /// Still on the payroll, even if on leave or suspended
    pub fn is_currently_employed(&self) -> bool {
        !matches!(
            self.employment_status,
            EmploymentStatus::Terminated | EmploymentStatus::Retired
        )
    }

    /// Whole years from hire to termination, or to `today` while employed
    pub fn years_of_service(&self, today: NaiveDate) -> u32 {
        let Some(hired) = self.hire_date else {
            return 0;
        };
        let end = self.termination_date.unwrap_or(today);
        if end < hired {
            return 0;
        }
        let mut years = end.year() - hired.year();
        if (end.month(), end.day()) < (hired.month(), hired.day()) {
            years -= 1;
        }
        u32::try_from(years).unwrap_or(0)
    }

    pub fn terminate(&mut self, date: NaiveDate) -> DomainResult<()> {
        self.ensure_employed("terminate")?;
        self.termination_date = Some(date);
        self.employment_status = EmploymentStatus::Terminated;
        Ok(())
    }

    pub fn put_on_leave(&mut self) -> DomainResult<()> {
        self.ensure_employed("put on leave")?;
        self.employment_status = EmploymentStatus::OnLeave;
        Ok(())
    }

    pub fn return_from_leave(&mut self) -> DomainResult<()> {
        if self.employment_status != EmploymentStatus::OnLeave {
            return Err(DomainError::InvalidStateTransition(format!(
                "Cannot return from leave while {}",
                self.employment_status
            )));
        }
        self.employment_status = EmploymentStatus::Active;
        Ok(())
    }

    fn ensure_employed(&self, action: &str) -> DomainResult<()> {
        if !self.is_currently_employed() {
            return Err(DomainError::InvalidStateTransition(format!(
                "Cannot {} staff member who is {}",
                action, self.employment_status
            )));
        }
        Ok(())
    }
}

impl std::fmt::Display for EmploymentStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmploymentStatus::Active => write!(f, "ACTIVE"),
            EmploymentStatus::OnLeave => write!(f, "ON_LEAVE"),
            EmploymentStatus::Suspended => write!(f, "SUSPENDED"),
            EmploymentStatus::Terminated => write!(f, "TERMINATED"),
            EmploymentStatus::Retired => write!(f, "RETIRED"),
        }
    }
}
