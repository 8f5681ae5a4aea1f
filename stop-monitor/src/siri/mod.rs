//! SIRI Stop Monitoring (SM) client.
//!
//! This module provides an HTTP client for the transit authority's
//! `SmQuery` endpoint, which answers "what is arriving at this stop?".
//!
//! Key characteristics of the endpoint:
//! - Authentication is a plain `Key` query parameter, not a header
//! - The stop is selected by `MonitoringRef` (the station number)
//! - The body is returned as-is; nothing here parses it

mod client;
mod error;
#[cfg(test)]
pub(crate) mod mock;
mod query;
mod response;

pub use client::{DEFAULT_ENDPOINT, ResponseFormat, SmClient, SmConfig};
pub use error::SmError;
pub use query::StopMonitoringQuery;
pub use response::SmResponse;
