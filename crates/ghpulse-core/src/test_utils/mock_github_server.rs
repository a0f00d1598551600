// src/test_utils/mock_github_server.rs
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode, Uri};
use axum::{Json, Router};
use serde_json::Value;
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use tokio::net::TcpListener;

/// What the mock saw for one request
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    pub path_and_query: String,
    pub accept: Option<String>,
    pub user_agent: Option<String>,
    pub authorization: Option<String>,
}

/// Canned responses keyed by request path (query string ignored)
#[derive(Debug, Clone, Default)]
pub struct MockRoutes {
    routes: HashMap<String, (u16, Value)>,
}

impl MockRoutes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn json(mut self, path: &str, body: Value) -> Self {
        self.routes.insert(path.to_string(), (200, body));
        self
    }

    pub fn status(mut self, path: &str, status: u16) -> Self {
        self.routes.insert(
            path.to_string(),
            (status, serde_json::json!({"message": "mock failure"})),
        );
        self
    }
}

#[derive(Clone)]
struct MockServerState {
    routes: Arc<HashMap<String, (u16, Value)>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

fn header_value(headers: &HeaderMap, name: header::HeaderName) -> Option<String> {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}

async fn github_handler(
    State(state): State<MockServerState>,
    uri: Uri,
    headers: HeaderMap,
) -> (StatusCode, Json<Value>) {
    let path_and_query = uri
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| uri.path().to_string());
    log::debug!("Mock GitHub server received request: {}", path_and_query);

    state.requests.lock().unwrap().push(RecordedRequest {
        path_and_query,
        accept: header_value(&headers, header::ACCEPT),
        user_agent: header_value(&headers, header::USER_AGENT),
        authorization: header_value(&headers, header::AUTHORIZATION),
    });

    match state.routes.get(uri.path()) {
        Some((status, body)) => (
            StatusCode::from_u16(*status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            Json(body.clone()),
        ),
        None => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({"message": "Not Found"})),
        ),
    }
}

pub struct MockGitHubServer {
    addr: SocketAddr,
    shutdown_tx: tokio::sync::oneshot::Sender<()>,
    recorded_requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockGitHubServer {
    pub async fn start(routes: MockRoutes) -> Self {
        let state = MockServerState {
            routes: Arc::new(routes.routes),
            requests: Arc::new(Mutex::new(Vec::new())),
        };
        let recorded_requests = state.requests.clone();

        let app = Router::new().fallback(github_handler).with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap_or_else(|e| {
            panic!("Failed to bind mock server to 127.0.0.1:0. Error: {}", e);
        });
        let addr = listener.local_addr().unwrap();
        log::info!("Mock GitHub server listening on {}", addr);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                })
                .await
                .unwrap_or_else(|e| {
                    log::error!("Mock GitHub server error: {}", e);
                });
        });

        MockGitHubServer {
            addr,
            shutdown_tx,
            recorded_requests,
        }
    }

    pub fn address(&self) -> String {
        format!("http://{}", self.addr)
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.recorded_requests.lock().unwrap().clone()
    }

    /// Number of requests whose path (without query) equals `path`
    pub fn hits(&self, path: &str) -> usize {
        self.requests()
            .iter()
            .filter(|r| r.path_and_query.split('?').next() == Some(path))
            .count()
    }

    pub async fn shutdown(self) {
        if self.shutdown_tx.send(()).is_err() {
            log::warn!("Mock GitHub server shutdown signal already sent or receiver dropped.");
        }
    }
}
