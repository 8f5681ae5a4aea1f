//! One request, one report.

use std::io::{self, Write};

use crate::report::write_report;
use crate::siri::{SmClient, SmError, SmResponse, StopMonitoringQuery};

/// Errors from [`Fetcher::fetch_and_report`].
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// No response was received
    #[error(transparent)]
    Request(#[from] SmError),

    /// The report could not be written out
    #[error("failed to write report: {0}")]
    Output(#[from] io::Error),
}

/// Queries one stop and reports the outcome.
///
/// Holds no state between calls: fetching twice sends the same request twice.
#[derive(Debug, Clone)]
pub struct Fetcher {
    client: SmClient,
    query: StopMonitoringQuery,
}

impl Fetcher {
    pub fn new(client: SmClient, query: StopMonitoringQuery) -> Self {
        Self { client, query }
    }

    pub fn query(&self) -> &StopMonitoringQuery {
        &self.query
    }

    /// Send the request and return status and body, whatever the status.
    pub async fn fetch(&self) -> Result<SmResponse, SmError> {
        self.client.fetch(&self.query).await
    }

    /// Send the request and write the report to `out`.
    ///
    /// Nothing is written if no response arrives.
    pub async fn fetch_and_report<W: Write>(&self, out: &mut W) -> Result<SmResponse, FetchError> {
        let response = self.fetch().await?;
        write_report(&response, out)?;
        Ok(response)
    }
}
