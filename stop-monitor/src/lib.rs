//! Stop Monitoring query tool.
//!
//! Asks the transit authority's SIRI Stop Monitoring service what is
//! arriving at one stop and prints the raw answer.

pub mod cli;
pub mod fetcher;
pub mod report;
pub mod siri;
