pub mod entity;
pub mod invariants;

pub use entity::{Fine, FineStatus};
pub use invariants::{validate_fine, FineValidator};
