//! Metrica Client - HTTP SDK for the measurement data service
//!
//! This crate provides:
//! - A typed client for the REST based data service
//! - Adaptive request splitting for large identifier collections, keeping
//!   every physical request below the transport URI length limit
//! - Deterministic reassembly of split responses, including merging of
//!   measurements fetched per characteristic chunk
//! - Capability negotiation against the server's reported interface
//!   versions, with a cached feature matrix

pub mod cache;
pub mod client;
pub mod config;
pub mod constants;
pub mod error;
pub mod feature;
pub mod filter;
pub mod merge;
pub mod request;
pub mod split;
pub mod transport;

pub use cache::{FetchBehavior, VersionInfo};
pub use client::DataServiceClient;
pub use config::ClientConfig;
pub use error::{DataServiceError, Result};
pub use feature::{Feature, FeatureMatrix};
pub use filter::{AggregationSelection, MeasurementFilter, MeasurementValueFilter};
pub use merge::{MergeEntity, merge_fragments};
pub use request::{CollectionParameter, HttpMethod, ParameterDefinition, RestRequest};
pub use split::ParameterSplitter;
pub use transport::{HttpTransport, Transport};
