//! Stop Monitoring HTTP client.
//!
//! Sends one GET per call and hands back whatever the service answered.
//! There is no retry and no status interpretation at this layer.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use reqwest::Url;
use tracing::debug;

use super::error::SmError;
use super::query::StopMonitoringQuery;
use super::response::SmResponse;

/// Base URL of the SmQuery service, without the format segment.
macro_rules! base_url {
    () => {
        "http://moran.mot.gov.il:110/Channels/HTTPChannel/SmQuery/2.8"
    };
}

/// Default endpoint: the XML flavour of the SmQuery service.
pub const DEFAULT_ENDPOINT: &str = concat!(base_url!(), "/xml");

/// Body format served by the SmQuery service.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResponseFormat {
    #[default]
    Xml,
    Json,
}

impl ResponseFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ResponseFormat::Xml => "xml",
            ResponseFormat::Json => "json",
        }
    }

    /// Default endpoint serving this format.
    pub fn endpoint(self) -> String {
        format!("{}/{}", base_url!(), self.as_str())
    }
}

impl fmt::Display for ResponseFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResponseFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "xml" => Ok(ResponseFormat::Xml),
            "json" => Ok(ResponseFormat::Json),
            other => Err(format!("unknown format {other:?} (expected xml or json)")),
        }
    }
}

/// Configuration for the Stop Monitoring client.
#[derive(Debug, Clone)]
pub struct SmConfig {
    /// Endpoint URL (defaults to the production XML endpoint)
    pub endpoint: String,
    /// Overall request timeout in seconds; `None` leaves it to reqwest
    pub timeout_secs: Option<u64>,
}

impl Default for SmConfig {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl SmConfig {
    /// Create a new config for the given endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_secs: None,
        }
    }

    /// Set request timeout.
    pub fn with_timeout(mut self, secs: u64) -> Self {
        self.timeout_secs = Some(secs);
        self
    }
}

/// Stop Monitoring API client.
#[derive(Debug, Clone)]
pub struct SmClient {
    http: reqwest::Client,
    endpoint: Url,
}

impl SmClient {
    /// Create a new client with the given configuration.
    ///
    /// Fails if the endpoint is not an absolute http(s) URL.
    pub fn new(config: SmConfig) -> Result<Self, SmError> {
        let endpoint = Url::parse(&config.endpoint).map_err(|e| SmError::InvalidEndpoint {
            endpoint: config.endpoint.clone(),
            message: e.to_string(),
        })?;

        if !matches!(endpoint.scheme(), "http" | "https") {
            return Err(SmError::InvalidEndpoint {
                endpoint: config.endpoint,
                message: format!("unsupported scheme {:?}", endpoint.scheme()),
            });
        }

        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http = builder.build()?;

        Ok(Self { http, endpoint })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Send one Stop Monitoring request.
    ///
    /// Any HTTP response, whatever its status, is returned as `Ok`. Only a
    /// failure to get a response at all is an error. The error carries no
    /// URL, since the URL contains the user key.
    pub async fn fetch(&self, query: &StopMonitoringQuery) -> Result<SmResponse, SmError> {
        let url = query.to_url(&self.endpoint);

        debug!(
            endpoint = %self.endpoint,
            monitoring_ref = query.monitoring_ref(),
            "sending stop monitoring request"
        );

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(reqwest::Error::without_url)?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)?;

        debug!(status, bytes = body.len(), "received stop monitoring response");

        Ok(SmResponse::new(status, body))
    }
}
