// src/application/error_handling.rs
//
// Error responses for callers
//
// ARCHITECTURE:
// - Maps internal errors -> caller-facing responses
// - Rejections become Validation (400-class), broken invariants DomainError (422)
// - Never exposes file paths or parser internals
// - Logs server-side failures

use log::error;
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Standard error response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error_type: ErrorType,
    pub message: String,
    pub details: Option<String>,
}

/// Error categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// Invalid input, write refused (400)
    Validation,

    /// Domain invariant violation (422)
    DomainError,

    /// Bad policy configuration (500)
    Configuration,

    /// File system error (500)
    FileSystem,

    /// Other/unknown error (500)
    Internal,
}

impl ErrorType {
    /// Suggested HTTP status for transports that want one
    pub fn status_code(self) -> u16 {
        match self {
            ErrorType::Validation => 400,
            ErrorType::DomainError => 422,
            ErrorType::Configuration | ErrorType::FileSystem | ErrorType::Internal => 500,
        }
    }
}

impl ErrorResponse {
    /// Create error response from AppError
    pub fn from_app_error(error: AppError) -> Self {
        match error {
            AppError::Rejected { entity, reason } => Self {
                details: Some(reason),
                ..Self::validation(format!("Invalid {}", entity))
            },

            AppError::Domain(domain_error) => Self {
                success: false,
                error_type: ErrorType::DomainError,
                message: "Domain validation failed".to_string(),
                details: Some(domain_error.to_string()),
            },

            AppError::Config(message) => {
                error!("Configuration error: {}", message);

                Self {
                    success: false,
                    error_type: ErrorType::Configuration,
                    message: "Library policy is misconfigured".to_string(),
                    details: Some(message),
                }
            }

            AppError::Serialization(serde_error) => {
                error!("Serialization error: {:?}", serde_error);

                Self {
                    success: false,
                    error_type: ErrorType::Internal,
                    message: "Data serialization failed".to_string(),
                    details: None,
                }
            }

            AppError::Io(io_error) => {
                error!("IO error: {:?}", io_error);

                Self {
                    success: false,
                    error_type: ErrorType::FileSystem,
                    message: "File system operation failed".to_string(),
                    details: None,
                }
            }
        }
    }

    /// Create validation error
    pub fn validation(message: String) -> Self {
        Self {
            success: false,
            error_type: ErrorType::Validation,
            message,
            details: None,
        }
    }
}

/// Helper trait to convert Results to a serialized ErrorResponse
pub trait ToErrorResponse<T> {
    fn to_error_response(self) -> Result<T, String>;
}

impl<T> ToErrorResponse<T> for Result<T, AppError> {
    fn to_error_response(self) -> Result<T, String> {
        self.map_err(|e| {
            let error_response = ErrorResponse::from_app_error(e);
            serde_json::to_string(&error_response).unwrap_or_else(|_| "Internal error".to_string())
        })
    }
}
