//! Movie fetch controller.
//!
//! Owns the [`FetchState`] and runs the fetch cycle:
//!
//! ```text
//! Start ──→ GET ──→ status check ──→ decode ──→ Succeeded / Failed
//! ```
//!
//! Every transition goes through [`FetchReducer`]; the controller only holds
//! the state, the transport and the side effects around dispatch.
//!
//! # Architecture
//!
//! - `state.rs` - FetchState and content derivation
//! - `intent.rs` - Start / Succeeded / Failed
//! - `reducer.rs` - State transitions, stale completion filtering
//! - `content.rs` - The derived display value

mod content;
mod intent;
mod reducer;
mod state;

pub use content::{crawl_lines, Content, EMPTY_PLACEHOLDER, LOADING_TEXT};
pub use intent::FetchIntent;
pub use reducer::FetchReducer;
pub use state::FetchState;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::api::{fetch_films, HttpTransport};
use crate::ui::mvi::Reducer;

/// What caused a refresh. Only used for logging; both run the same path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// Automatic fetch when the controller is first mounted.
    Mount,
    /// Explicit user action.
    User,
}

/// Callback invoked after every state change.
pub type StateListener = Arc<dyn Fn(&FetchState) + Send + Sync>;

/// Fetches the film catalog and keeps the resulting [`FetchState`].
///
/// Cheap to clone; clones share state.
pub struct FilmController<T: HttpTransport> {
    transport: Arc<T>,
    endpoint: Arc<str>,
    state: Arc<Mutex<FetchState>>,
    mounted: Arc<AtomicBool>,
    listener: Option<StateListener>,
}

impl<T: HttpTransport> Clone for FilmController<T> {
    fn clone(&self) -> Self {
        Self {
            transport: Arc::clone(&self.transport),
            endpoint: Arc::clone(&self.endpoint),
            state: Arc::clone(&self.state),
            mounted: Arc::clone(&self.mounted),
            listener: self.listener.clone(),
        }
    }
}

impl<T: HttpTransport> FilmController<T> {
    pub fn new(transport: T, endpoint: impl Into<String>) -> Self {
        let endpoint: String = endpoint.into();
        Self {
            transport: Arc::new(transport),
            endpoint: Arc::from(endpoint),
            state: Arc::new(Mutex::new(FetchState::default())),
            mounted: Arc::new(AtomicBool::new(false)),
            listener: None,
        }
    }

    /// Register a callback run after every transition. The callback must not
    /// call back into the controller.
    pub fn with_listener(mut self, listener: StateListener) -> Self {
        self.listener = Some(listener);
        self
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> FetchState {
        self.state.lock().clone()
    }

    /// Current display value.
    pub fn content(&self) -> Content {
        self.state.lock().content()
    }

    /// Run one fetch cycle. Never fails: errors end up in `state().error`.
    pub async fn refresh(&self) {
        let request = self.dispatch(FetchIntent::Start).latest_request;
        tracing::info!(request, endpoint = %self.endpoint, "Fetching films");

        let intent = match fetch_films(self.transport.as_ref(), &self.endpoint).await {
            Ok(movies) => {
                tracing::info!(request, count = movies.len(), "Films fetched");
                FetchIntent::Succeeded { request, movies }
            }
            Err(err) => {
                tracing::warn!(request, kind = err.kind(), error = %err, "Film fetch failed");
                FetchIntent::Failed {
                    request,
                    message: err.to_string(),
                }
            }
        };

        let state = self.dispatch(intent);
        if !state.is_current(request) {
            tracing::debug!(
                request,
                latest = state.latest_request,
                "Discarded stale fetch result"
            );
        }
    }

    /// Spawn a refresh on `handle`.
    pub fn spawn_refresh(&self, handle: &Handle, trigger: Trigger) -> JoinHandle<()> {
        tracing::debug!(?trigger, "Refresh requested");
        let controller = self.clone();
        handle.spawn(async move { controller.refresh().await })
    }

    /// Run the initial refresh. Only the first call on a controller (or any
    /// of its clones) fetches; later calls return `None`.
    pub fn mount(&self, handle: &Handle) -> Option<JoinHandle<()>> {
        if self.mounted.swap(true, Ordering::SeqCst) {
            return None;
        }
        Some(self.spawn_refresh(handle, Trigger::Mount))
    }

    // The listener runs under the state lock so observers see transitions in
    // order. It must not call back into the controller.
    fn dispatch(&self, intent: FetchIntent) -> FetchState {
        let mut state = self.state.lock();
        *state = FetchReducer::reduce(std::mem::take(&mut *state), intent);
        if let Some(listener) = &self.listener {
            listener(&state);
        }
        state.clone()
    }
}
