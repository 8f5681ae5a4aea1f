//! Mock SmQuery upstream for testing without network access.
//!
//! Runs a small axum server on a loopback port that answers every request
//! with a fixed status and body, and records what it was asked.

use std::sync::{Arc, Mutex};

use axum::Router;
use axum::extract::{OriginalUri, Query, State};
use axum::http::StatusCode;
use tokio::net::TcpListener;

/// One request as seen by the mock upstream.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path: String,
    pub params: Vec<(String, String)>,
}

impl RecordedRequest {
    /// First value of the named query parameter.
    pub fn param(&self, name: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }
}

#[derive(Clone)]
struct MockState {
    status: StatusCode,
    body: Arc<str>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

/// Handle to a running mock upstream.
///
/// The server task lives until the test's runtime shuts down.
pub struct MockUpstream {
    base: String,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockUpstream {
    /// Start a server answering every request with `status` and `body`.
    pub async fn start(status: u16, body: &str) -> Self {
        let requests = Arc::new(Mutex::new(Vec::new()));
        let state = MockState {
            status: StatusCode::from_u16(status).unwrap(),
            body: Arc::from(body),
            requests: Arc::clone(&requests),
        };

        let app = Router::new().fallback(answer).with_state(state);
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self {
            base: format!("http://{addr}"),
            requests,
        }
    }

    /// An endpoint on a loopback port nothing is listening on.
    pub async fn refused_endpoint() -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        format!("http://{addr}/SmQuery/2.8/xml")
    }

    /// Endpoint shaped like the real one, pointing at this server.
    pub fn endpoint(&self) -> String {
        format!("{}/SmQuery/2.8/xml", self.base)
    }

    /// Requests received so far, oldest first.
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }
}

async fn answer(
    State(state): State<MockState>,
    OriginalUri(uri): OriginalUri,
    Query(params): Query<Vec<(String, String)>>,
) -> (StatusCode, String) {
    state.requests.lock().unwrap().push(RecordedRequest {
        path: uri.path().to_string(),
        params,
    });
    (state.status, state.body.to_string())
}
