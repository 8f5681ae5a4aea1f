//! Command-line and environment configuration.

use clap::Parser;

use crate::siri::{ResponseFormat, SmConfig, StopMonitoringQuery};

/// Print what is arriving at a stop, as reported by the SIRI Stop Monitoring service.
#[derive(Debug, Parser)]
#[command(name = "stop-monitor", version)]
pub struct Cli {
    /// User key issued by the transit authority.
    #[arg(long, env = "STOP_MONITOR_KEY", hide_env_values = true)]
    pub key: String,

    /// Station/stop number to monitor.
    #[arg(long, env = "STOP_MONITOR_MONITORING_REF")]
    pub monitoring_ref: String,

    /// Full endpoint URL. Overrides --format.
    #[arg(long, env = "STOP_MONITOR_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Response format of the default endpoint: "xml" or "json".
    #[arg(long, env = "STOP_MONITOR_FORMAT", default_value_t = ResponseFormat::Xml)]
    pub format: ResponseFormat,

    /// Only report visits of this line (LineRef).
    #[arg(long, env = "STOP_MONITOR_LINE_REF")]
    pub line_ref: Option<String>,

    /// StopVisitDetailLevel, e.g. "calls".
    #[arg(long, env = "STOP_MONITOR_DETAIL_LEVEL")]
    pub detail_level: Option<String>,

    /// PreviewInterval as an ISO 8601 duration, e.g. "PT30M".
    #[arg(long, env = "STOP_MONITOR_PREVIEW_INTERVAL")]
    pub preview_interval: Option<String>,

    /// Request timeout in seconds. No timeout if unset.
    #[arg(long, env = "STOP_MONITOR_TIMEOUT", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Client configuration for these arguments.
    pub fn sm_config(&self) -> SmConfig {
        let endpoint = self
            .endpoint
            .clone()
            .unwrap_or_else(|| self.format.endpoint());
        let config = SmConfig::new(endpoint);
        match self.timeout {
            Some(secs) => config.with_timeout(secs),
            None => config,
        }
    }

    /// Query parameters for these arguments.
    pub fn query(&self) -> StopMonitoringQuery {
        let mut query = StopMonitoringQuery::new(&self.key, &self.monitoring_ref);
        if let Some(level) = &self.detail_level {
            query = query.with_detail_level(level);
        }
        if let Some(interval) = &self.preview_interval {
            query = query.with_preview_interval(interval);
        }
        if let Some(line_ref) = &self.line_ref {
            query = query.with_line_ref(line_ref);
        }
        query
    }
}
