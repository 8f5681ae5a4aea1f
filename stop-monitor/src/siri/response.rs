//! Raw response from the Stop Monitoring endpoint.

/// Status code and body of one Stop Monitoring response.
///
/// The body is kept as text and never parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmResponse {
    pub status: u16,
    pub body: String,
}

impl SmResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// Whether the service answered with exactly `200 OK`.
    ///
    /// Other 2xx codes count as errors.
    pub fn is_ok(&self) -> bool {
        self.status == 200
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_200_is_ok() {
        assert!(SmResponse::new(200, "").is_ok());
        assert!(!SmResponse::new(204, "").is_ok());
        assert!(!SmResponse::new(404, "").is_ok());
        assert!(!SmResponse::new(500, "").is_ok());
    }
}
