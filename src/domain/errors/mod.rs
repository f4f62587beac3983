//! Domain error types.

mod service_error;
mod vin_error;

pub use service_error::ServiceError;
pub use vin_error::VinError;
