// system-tests/tests/helpers/catalog_stub.rs
// ============================================================================
// Module: Catalog Stub
// Description: Local stand-in for the breed catalog endpoint.
// Purpose: Exercise fixture fetch and failure paths without the public API.
// Dependencies: axum, tokio
// ============================================================================

//! ## Overview
//! Serves `GET /api/breeds/list/all` with a fixed status and JSON body on an
//! ephemeral loopback port and records every request it receives. Any other
//! path answers with axum's default 404.

use std::net::TcpListener as StdTcpListener;
use std::sync::Arc;
use std::sync::Mutex;
use std::thread;

use axum::Json;
use axum::Router;
use axum::extract::State;
use axum::http::StatusCode;
use axum::http::Uri;
use axum::response::IntoResponse;
use axum::routing::get;
use serde_json::Value;
use tokio::runtime::Builder;
use tokio::sync::oneshot;

const CATALOG_ROUTE: &str = "/api/breeds/list/all";

#[derive(Clone)]
struct StubState {
    status: StatusCode,
    body: Value,
    requests: Arc<Mutex<Vec<String>>>,
}

/// Handle for a running catalog stub; dropping it stops the server.
pub struct CatalogStubHandle {
    base_url: String,
    shutdown: Option<oneshot::Sender<()>>,
    join: Option<thread::JoinHandle<()>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl CatalogStubHandle {
    /// Returns the API base URL, ending with `/`.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the request paths received so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }
}

impl Drop for CatalogStubHandle {
    fn drop(&mut self) {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

/// Spawns a stub answering the catalog route with `status` and `body`.
pub fn spawn_catalog_stub(status: u16, body: Value) -> Result<CatalogStubHandle, String> {
    let status =
        StatusCode::from_u16(status).map_err(|err| format!("invalid stub status {status}: {err}"))?;
    let listener = StdTcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("catalog stub bind failed: {err}"))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("catalog stub listener nonblocking failed: {err}"))?;
    let addr =
        listener.local_addr().map_err(|err| format!("catalog stub local addr failed: {err}"))?;
    let base_url = format!("http://{addr}/api/");

    let requests = Arc::new(Mutex::new(Vec::new()));
    let state = StubState {
        status,
        body,
        requests: Arc::clone(&requests),
    };
    let app = Router::new().route(CATALOG_ROUTE, get(handle_catalog)).with_state(state);
    let (shutdown_tx, shutdown_rx) = oneshot::channel();
    let join = thread::spawn(move || {
        let Ok(runtime) = Builder::new_current_thread().enable_all().build() else {
            return;
        };
        runtime.block_on(async move {
            let Ok(listener) = tokio::net::TcpListener::from_std(listener) else {
                return;
            };
            let server = axum::serve(listener, app).with_graceful_shutdown(async move {
                let _ = shutdown_rx.await;
            });
            let _ = server.await;
        });
    });
    Ok(CatalogStubHandle {
        base_url,
        shutdown: Some(shutdown_tx),
        join: Some(join),
        requests,
    })
}

#[allow(clippy::unused_async, reason = "axum handlers are async functions.")]
async fn handle_catalog(State(state): State<StubState>, uri: Uri) -> impl IntoResponse {
    if let Ok(mut requests) = state.requests.lock() {
        requests.push(uri.path().to_string());
    }
    (state.status, Json(state.body))
}
