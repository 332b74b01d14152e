//! One-shot mode: mount, wait for the first fetch, print.

use anyhow::{bail, Context};
use tokio::runtime::Handle;

use crate::api::HttpTransport;
use crate::controller::{FetchState, FilmController};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

/// Mount the controller and wait until the initial fetch has settled.
pub async fn fetch_once<T: HttpTransport>(
    controller: &FilmController<T>,
) -> anyhow::Result<FetchState> {
    if let Some(task) = controller.mount(&Handle::current()) {
        task.await.context("initial fetch task failed")?;
    }
    Ok(controller.state())
}

/// Render a settled state. A fetch error becomes the returned error.
pub fn render(state: &FetchState, format: OutputFormat) -> anyhow::Result<String> {
    if let Some(error) = &state.error {
        bail!("{}", error);
    }

    match format {
        OutputFormat::Text => Ok(state.content().to_string()),
        OutputFormat::Json => {
            serde_json::to_string_pretty(&state.movies).context("failed to serialize movies")
        }
    }
}
