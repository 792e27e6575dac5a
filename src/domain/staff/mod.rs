pub mod entity;
pub mod invariants;

pub use entity::{EmploymentStatus, Staff};
pub use invariants::{validate_staff, StaffValidator};
