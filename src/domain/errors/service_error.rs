//! Audit service error types.

use thiserror::Error;

/// Audit service error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum ServiceError {
    #[error("listing URL must not be empty")]
    EmptyListingUrl,

    #[error("no vehicle found for VIN {vin}")]
    VehicleNotFound { vin: String },

    #[error("{service} service unavailable: {message}")]
    Unavailable {
        service: &'static str,
        message: String,
    },
}

impl ServiceError {
    /// Creates unavailable error.
    #[must_use]
    pub fn unavailable(service: &'static str, message: impl Into<String>) -> Self {
        Self::Unavailable {
            service,
            message: message.into(),
        }
    }
}
