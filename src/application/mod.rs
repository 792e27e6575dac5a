// src/application/mod.rs
//
// Application Layer
//
// The boundary toward whatever transport embeds this crate. It turns
// admission and domain failures into uniform responses.

pub mod error_handling;

pub use error_handling::{ErrorResponse, ErrorType, ToErrorResponse};
