//! Data transfer objects for the application layer.

mod audit_dto;

pub use audit_dto::{ListingRequest, ReportRequest};
