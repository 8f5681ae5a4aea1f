//! Stop Monitoring request parameters.

use reqwest::Url;

/// Query parameters for one Stop Monitoring request.
///
/// `Key` and `MonitoringRef` are always sent. The optional SIRI parameters
/// are only sent when set. None of the values are validated; the service is
/// the judge of what it accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopMonitoringQuery {
    key: String,
    monitoring_ref: String,
    detail_level: Option<String>,
    preview_interval: Option<String>,
    line_ref: Option<String>,
}

impl StopMonitoringQuery {
    /// Create a query for one stop with the given user key.
    pub fn new(key: impl Into<String>, monitoring_ref: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            monitoring_ref: monitoring_ref.into(),
            detail_level: None,
            preview_interval: None,
            line_ref: None,
        }
    }

    /// Set `StopVisitDetailLevel` (e.g. `calls`).
    pub fn with_detail_level(mut self, level: impl Into<String>) -> Self {
        self.detail_level = Some(level.into());
        self
    }

    /// Set `PreviewInterval` as an ISO 8601 duration (e.g. `PT30M`).
    pub fn with_preview_interval(mut self, interval: impl Into<String>) -> Self {
        self.preview_interval = Some(interval.into());
        self
    }

    /// Restrict results to one line with `LineRef`.
    pub fn with_line_ref(mut self, line_ref: impl Into<String>) -> Self {
        self.line_ref = Some(line_ref.into());
        self
    }

    pub fn monitoring_ref(&self) -> &str {
        &self.monitoring_ref
    }

    /// Parameters in the order they are sent.
    pub fn params(&self) -> Vec<(&'static str, &str)> {
        let mut params = vec![
            ("Key", self.key.as_str()),
            ("MonitoringRef", self.monitoring_ref.as_str()),
        ];
        if let Some(level) = &self.detail_level {
            params.push(("StopVisitDetailLevel", level.as_str()));
        }
        if let Some(interval) = &self.preview_interval {
            params.push(("PreviewInterval", interval.as_str()));
        }
        if let Some(line_ref) = &self.line_ref {
            params.push(("LineRef", line_ref.as_str()));
        }
        params
    }

    /// Append the parameters to `endpoint`, form-encoded.
    ///
    /// Query parameters already present on the endpoint are kept.
    pub fn to_url(&self, endpoint: &Url) -> Url {
        let mut url = endpoint.clone();
        url.query_pairs_mut().extend_pairs(self.params());
        url
    }
}
