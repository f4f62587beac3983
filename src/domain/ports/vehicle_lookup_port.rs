//! Vehicle identity lookup port definition.

use async_trait::async_trait;

use crate::domain::entities::{VehicleInfo, Vin};
use crate::domain::errors::ServiceError;

/// Port resolving a VIN to vehicle metadata.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VehicleLookupPort: Send + Sync {
    /// Looks up vehicle metadata for a VIN.
    async fn lookup(&self, vin: &Vin) -> Result<VehicleInfo, ServiceError>;
}
