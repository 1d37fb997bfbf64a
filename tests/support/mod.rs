//! In-process stand-in for the Replicon services.
//!
//! Records every request it receives and answers from a table of canned
//! replies keyed by operation path (`UserService1.svc/GetAllUsers`). Paths
//! without a canned reply get a 404.

#![allow(dead_code)]

use std::{
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use axum::{
    Router,
    extract::State,
    http::{HeaderMap, Method, StatusCode, Uri, header},
};
use replicon::{RepliconClient, RepliconConfig};
use serde_json::Value;
use tokio::net::TcpListener;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: Method,
    pub path: String,
    pub headers: HeaderMap,
    pub body: String,
}

impl CapturedRequest {
    pub fn header(&self, name: header::HeaderName) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    pub fn json(&self) -> Value {
        serde_json::from_str(&self.body).unwrap()
    }
}

#[derive(Clone, Default)]
struct MockState {
    replies: Arc<Mutex<Vec<(String, StatusCode, String)>>>,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct MockReplicon {
    addr: SocketAddr,
    state: MockState,
}

impl MockReplicon {
    pub async fn start() -> Self {
        let state = MockState::default();
        let app = Router::new().fallback(handle).with_state(state.clone());

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        Self { addr, state }
    }

    pub fn host(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Client for tenant `acme`, user `jdoe`, password `secret`.
    pub fn client(&self) -> RepliconClient {
        self.client_for("acme", "jdoe", "secret")
    }

    pub fn client_for(&self, company: &str, username: &str, password: &str) -> RepliconClient {
        let config = RepliconConfig::new(company, username, password).with_host(self.host());
        RepliconClient::new(&config).unwrap()
    }

    pub fn reply(&self, operation: &str, status: StatusCode, body: impl Into<String>) {
        self.state
            .replies
            .lock()
            .unwrap()
            .push((operation.to_string(), status, body.into()));
    }

    /// Answer `operation` with 200 and `{"d": payload}`.
    pub fn reply_payload(&self, operation: &str, payload: Value) {
        self.reply(operation, StatusCode::OK, serde_json::json!({ "d": payload }).to_string());
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.state.captured.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> CapturedRequest {
        self.requests().pop().expect("no request reached the mock")
    }
}

async fn handle(
    State(state): State<MockState>,
    method: Method,
    uri: Uri,
    headers: HeaderMap,
    body: String,
) -> (StatusCode, [(header::HeaderName, &'static str); 1], String) {
    let path = uri.path().to_string();
    let reply = state
        .replies
        .lock()
        .unwrap()
        .iter()
        .find(|(operation, _, _)| path.ends_with(&format!("/{operation}")))
        .map(|(_, status, body)| (*status, body.clone()));

    state.captured.lock().unwrap().push(CapturedRequest {
        method,
        path,
        headers,
        body,
    });

    let (status, body) = reply.unwrap_or((StatusCode::NOT_FOUND, String::new()));
    (status, [(header::CONTENT_TYPE, "application/json")], body)
}
