//! # Payment Error Types
//!
//! Typed error handling for the ticket-booth payment layer.
//!
//! A declined payment is NOT an error: payment methods report declines
//! through their boolean result and `PaymentStatus::Failed`. These errors
//! cover everything around the payment decision (configuration, catalog
//! lookups, request validation).

use thiserror::Error;

/// Core error type for the payment layer and its callers
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (bad env values, unknown providers)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Movie not found in catalog
    #[error("Movie not found: {movie_id}")]
    MovieNotFound { movie_id: String },

    /// Price mismatch or invalid amount
    #[error("Invalid price: {message}")]
    InvalidPrice { message: String },

    /// Payment type not registered with the selector
    #[error("Unsupported payment method: {payment_type}")]
    UnsupportedPaymentType { payment_type: String },

    /// Search text outside the accepted length
    #[error("Invalid search text! It should contain 1 to 12 characters.")]
    InvalidSearch,

    /// Catalog parse error
    #[error("Catalog parse error: {0}")]
    Catalog(#[from] toml::de::Error),
}

impl PaymentError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::Configuration(_) => 500,
            PaymentError::InvalidRequest(_) => 400,
            PaymentError::MovieNotFound { .. } => 404,
            PaymentError::InvalidPrice { .. } => 400,
            PaymentError::UnsupportedPaymentType { .. } => 400,
            PaymentError::InvalidSearch => 400,
            PaymentError::Catalog(_) => 500,
        }
    }
}

/// Result type alias for payment-layer operations
pub type PaymentResult<T> = Result<T, PaymentError>;
