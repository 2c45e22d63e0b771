//! Metrica API - model types for the measurement data service
//!
//! This crate provides:
//! - DTO types for parts, characteristics, measurements and catalogs
//! - Interface version types used for capability negotiation

pub mod model;
pub mod version;

pub use model::*;
pub use version::{ApiVersion, InterfaceVersionRange, ParseVersionError};
