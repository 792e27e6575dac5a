pub mod entity;
pub mod invariants;

pub use entity::{Reservation, ReservationStatus};
pub use invariants::{validate_reservation, ReservationValidator};
