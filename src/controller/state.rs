//! Fetch state owned by the controller.

use crate::api::Movie;
use crate::controller::content::Content;
use crate::ui::mvi::UiState;

/// Movies, loading flag and error text.
///
/// `latest_request` is the sequence number of the most recently issued
/// request; completions tagged with any other number are stale.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FetchState {
    pub movies: Vec<Movie>,
    pub is_loading: bool,
    pub error: Option<String>,
    pub latest_request: u64,
}

impl UiState for FetchState {}

impl FetchState {
    /// Derive the single display value.
    ///
    /// Precedence, lowest to highest: placeholder, movie list, error, loading.
    pub fn content(&self) -> Content {
        let mut content = Content::Empty;

        if !self.movies.is_empty() {
            content = Content::Movies(self.movies.clone());
        }

        if let Some(error) = &self.error {
            content = Content::Error(error.clone());
        }

        if self.is_loading {
            content = Content::Loading;
        }

        content
    }

    pub fn is_current(&self, request: u64) -> bool {
        request == self.latest_request
    }
}
