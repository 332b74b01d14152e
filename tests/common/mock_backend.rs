//! Local film catalog server for exercising the reqwest transport.

#![allow(dead_code)]

use axum::body::Body;
use axum::extract::State;
use axum::http::{Request, Response, StatusCode};
use axum::routing::any;
use axum::Router;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::sync::watch;

/// What the catalog saw.
#[derive(Debug, Clone)]
pub struct CapturedRequest {
    pub method: String,
    pub path: String,
    pub body: Vec<u8>,
}

/// Canned reply, served in enqueue order.
#[derive(Debug, Clone)]
pub struct MockResponse {
    pub status: u16,
    pub content_type: &'static str,
    pub body: String,
    pub delay: Duration,
}

impl MockResponse {
    pub fn json(body: &str) -> Self {
        Self::with_body(200, "application/json", body.to_string())
    }

    pub fn error(status: u16, message: &str) -> Self {
        Self::with_body(status, "application/json", format!(r#"{{"detail": "{}"}}"#, message))
    }

    pub fn html(body: &str) -> Self {
        Self::with_body(200, "text/html", body.to_string())
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }

    fn with_body(status: u16, content_type: &'static str, body: String) -> Self {
        Self {
            status,
            content_type,
            body,
            delay: Duration::ZERO,
        }
    }
}

#[derive(Clone, Default)]
struct Catalog {
    requests: Arc<Mutex<Vec<CapturedRequest>>>,
    replies: Arc<Mutex<VecDeque<MockResponse>>>,
}

/// Mock catalog bound to an ephemeral localhost port. Shuts down on drop.
pub struct MockBackend {
    pub addr: SocketAddr,
    catalog: Catalog,
    shutdown: watch::Sender<bool>,
}

impl MockBackend {
    pub async fn start() -> Self {
        let catalog = Catalog::default();
        let (shutdown, mut shutdown_rx) = watch::channel(false);

        let app = Router::new()
            .route("/{*path}", any(serve_catalog))
            .with_state(catalog.clone());

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind mock catalog");
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    let _ = shutdown_rx.changed().await;
                })
                .await
                .ok();
        });

        Self {
            addr,
            catalog,
            shutdown,
        }
    }

    /// Queue the reply for the next request. With nothing queued the
    /// catalog answers with an empty `results` list.
    pub fn enqueue_response(&self, reply: MockResponse) {
        self.catalog.replies.lock().push_back(reply);
    }

    pub fn captured_requests(&self) -> Vec<CapturedRequest> {
        self.catalog.requests.lock().clone()
    }

    pub fn films_url(&self) -> String {
        format!("http://{}/api/films", self.addr)
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        let _ = self.shutdown.send(true);
    }
}

async fn serve_catalog(State(catalog): State<Catalog>, req: Request<Body>) -> Response<Body> {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();
    let body = axum::body::to_bytes(req.into_body(), 64 * 1024)
        .await
        .unwrap_or_default()
        .to_vec();
    catalog
        .requests
        .lock()
        .push(CapturedRequest { method, path, body });

    let reply = catalog
        .replies
        .lock()
        .pop_front()
        .unwrap_or_else(|| MockResponse::json(r#"{"results": []}"#));

    if !reply.delay.is_zero() {
        tokio::time::sleep(reply.delay).await;
    }

    Response::builder()
        .status(StatusCode::from_u16(reply.status).unwrap())
        .header("content-type", reply.content_type)
        .body(Body::from(reply.body))
        .unwrap()
}
