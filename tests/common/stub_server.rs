// tests/common/stub_server.rs
//
// Local HTTP server for gateway tests: one canned reply per "METHOD /path",
// every request captured for assertions. Runs on its own tokio runtime so the
// blocking client under test never sits inside an async context.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{header, Method, Response, StatusCode, Uri};
use axum::Router;
use tokio::net::TcpListener;
use tokio::sync::watch;

#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub body: Vec<u8>,
}

impl CapturedRequest {
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_slice(&self.body).expect("request body is not JSON")
    }
}

#[derive(Debug, Clone)]
pub struct StubResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl StubResponse {
    pub fn json(body: &str) -> Self {
        Self { status: 200, body: body.as_bytes().to_vec() }
    }

    pub fn error(status: u16, body: &str) -> Self {
        Self { status, body: body.as_bytes().to_vec() }
    }

    pub fn empty() -> Self {
        Self { status: 200, body: Vec::new() }
    }
}

#[derive(Clone)]
struct StubState {
    routes: Arc<HashMap<String, StubResponse>>,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
}

pub struct StubServer {
    pub base_url: String,
    captured: Arc<Mutex<Vec<CapturedRequest>>>,
    shutdown: watch::Sender<bool>,
}

impl StubServer {
    /// Serve `routes` ("GET /api/health" → reply) until dropped.
    /// Unknown routes get a 404 with no body.
    pub fn start(routes: Vec<(&str, StubResponse)>) -> Self {
        let state = StubState {
            routes: Arc::new(routes.into_iter().map(|(k, v)| (k.to_string(), v)).collect()),
            captured: Arc::new(Mutex::new(Vec::new())),
        };
        let captured = Arc::clone(&state.captured);
        let (shutdown, mut shutdown_rx) = watch::channel(false);
        let (addr_tx, addr_rx) = mpsc::channel::<SocketAddr>();

        thread::spawn(move || {
            let rt = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()
                .expect("build stub runtime");
            rt.block_on(async move {
                let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind stub server");
                addr_tx.send(listener.local_addr().expect("stub addr")).expect("report stub addr");

                let app = Router::new().fallback(handle).with_state(state);
                axum::serve(listener, app)
                    .with_graceful_shutdown(async move {
                        let _ = shutdown_rx.changed().await;
                    })
                    .await
                    .expect("stub server failed");
            });
        });

        let addr = addr_rx.recv().expect("stub server did not start");
        Self { base_url: format!("http://{addr}"), captured, shutdown }
    }

    pub fn requests(&self) -> Vec<CapturedRequest> {
        self.captured.lock().unwrap().clone()
    }
}

impl Drop for StubServer {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn handle(State(state): State<StubState>, method: Method, uri: Uri, body: Bytes) -> Response<Body> {
    let key = format!("{} {}", method, uri.path());
    state.captured.lock().unwrap().push(CapturedRequest {
        method: method.to_string(),
        path: uri.path().to_string(),
        body: body.to_vec(),
    });

    let reply = state.routes.get(&key).cloned().unwrap_or(StubResponse { status: 404, body: Vec::new() });
    Response::builder()
        .status(StatusCode::from_u16(reply.status).expect("valid status"))
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(reply.body))
        .expect("build stub response")
}
