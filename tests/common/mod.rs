//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod mock_backend;

use moviefetch::api::{HttpResponse, HttpTransport, TransportError};
use moviefetch::controller::FilmController;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::future::Future;
use std::net::TcpListener;
use std::sync::Arc;
use std::time::Duration;

pub const ENDPOINT: &str = "http://films.test/api/films";

/// The single-film catalog used by the end-to-end scenario.
pub const NEW_HOPE: &str = r#"{"results":[{"episode_id":4,"title":"A New Hope","opening_crawl":"It is a period...","release_date":"1977-05-25"}]}"#;

/// Three films, in the order the API lists them.
pub const TRILOGY: &str = r#"{
    "count": 3,
    "next": null,
    "results": [
        {"episode_id": 4, "title": "A New Hope", "opening_crawl": "It is a period of civil war.", "release_date": "1977-05-25", "director": "George Lucas"},
        {"episode_id": 6, "title": "Return of the Jedi", "opening_crawl": "Luke Skywalker has returned...", "release_date": "1983-05-25", "director": "Richard Marquand"},
        {"episode_id": 5, "title": "The Empire Strikes Back", "opening_crawl": "It is a dark time...", "release_date": "1980-05-17", "director": "Irvin Kershner"}
    ]
}"#;

/// A reply handed out by [`ScriptedTransport`].
pub struct ScriptedReply {
    pub result: Result<HttpResponse, TransportError>,
    pub delay: Duration,
}

impl ScriptedReply {
    pub fn ok(status: u16, body: &str) -> Self {
        Self {
            result: Ok(HttpResponse::new(status, body.as_bytes().to_vec())),
            delay: Duration::ZERO,
        }
    }

    pub fn transport_error(message: &str) -> Self {
        Self {
            result: Err(TransportError::new(message)),
            delay: Duration::ZERO,
        }
    }

    pub fn with_delay(mut self, ms: u64) -> Self {
        self.delay = Duration::from_millis(ms);
        self
    }
}

/// In-process transport returning queued replies in call order.
///
/// The reply is taken when `get` is called, not when the future is first
/// polled, so call order decides which request gets which reply.
#[derive(Clone, Default)]
pub struct ScriptedTransport {
    replies: Arc<Mutex<VecDeque<ScriptedReply>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl ScriptedTransport {
    pub fn new(replies: Vec<ScriptedReply>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().clone()
    }
}

impl HttpTransport for ScriptedTransport {
    fn get(
        &self,
        url: &str,
    ) -> impl Future<Output = Result<HttpResponse, TransportError>> + Send {
        self.requests.lock().push(url.to_string());
        let reply = self.replies.lock().pop_front();
        async move {
            let Some(reply) = reply else {
                return Err(TransportError::new("no scripted reply left"));
            };
            if !reply.delay.is_zero() {
                tokio::time::sleep(reply.delay).await;
            }
            reply.result
        }
    }
}

/// Controller over a scripted transport; the transport handle is returned
/// for request assertions.
pub fn scripted_controller(
    replies: Vec<ScriptedReply>,
) -> (FilmController<ScriptedTransport>, ScriptedTransport) {
    let transport = ScriptedTransport::new(replies);
    let controller = FilmController::new(transport.clone(), ENDPOINT);
    (controller, transport)
}

/// Find a port nothing is listening on.
pub fn free_port() -> u16 {
    let listener = TcpListener::bind("127.0.0.1:0").expect("Failed to bind to free port");
    listener.local_addr().unwrap().port()
}
