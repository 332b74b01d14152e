//! Reducer for the fetch state machine.

use crate::ui::mvi::Reducer;

use super::intent::FetchIntent;
use super::state::FetchState;

/// Pure transitions over [`FetchState`].
///
/// Completions from anything but the latest request leave the state as is.
pub struct FetchReducer;

impl Reducer for FetchReducer {
    type State = FetchState;
    type Intent = FetchIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            // Previous movies stay visible while loading.
            FetchIntent::Start => FetchState {
                is_loading: true,
                error: None,
                latest_request: state.latest_request.wrapping_add(1),
                ..state
            },

            FetchIntent::Succeeded { request, movies } => {
                if !state.is_current(request) {
                    return state;
                }
                FetchState {
                    movies,
                    is_loading: false,
                    error: None,
                    ..state
                }
            }

            FetchIntent::Failed { request, message } => {
                if !state.is_current(request) {
                    return state;
                }
                FetchState {
                    is_loading: false,
                    error: Some(message),
                    ..state
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Movie;

    fn movie(id: u32) -> Movie {
        Movie {
            id,
            title: format!("Episode {}", id),
            opening_text: "crawl".into(),
            release_date: "1977-05-25".into(),
        }
    }

    #[test]
    fn start_sets_loading_and_clears_error() {
        let state = FetchState {
            movies: vec![movie(4)],
            error: Some("Something went wrong".into()),
            ..FetchState::default()
        };

        let new_state = FetchReducer::reduce(state, FetchIntent::Start);
        assert!(new_state.is_loading);
        assert_eq!(new_state.error, None);
        assert_eq!(new_state.movies, vec![movie(4)]);
        assert_eq!(new_state.latest_request, 1);
    }

    #[test]
    fn start_increments_sequence() {
        let state = FetchReducer::reduce(FetchState::default(), FetchIntent::Start);
        let state = FetchReducer::reduce(state, FetchIntent::Start);
        assert_eq!(state.latest_request, 2);
    }

    #[test]
    fn success_replaces_movies_and_finishes() {
        let state = FetchReducer::reduce(
            FetchState {
                movies: vec![movie(1)],
                ..FetchState::default()
            },
            FetchIntent::Start,
        );

        let new_state = FetchReducer::reduce(
            state,
            FetchIntent::Succeeded {
                request: 1,
                movies: vec![movie(4), movie(5)],
            },
        );

        assert_eq!(new_state.movies, vec![movie(4), movie(5)]);
        assert!(!new_state.is_loading);
        assert_eq!(new_state.error, None);
    }

    #[test]
    fn failure_keeps_movies_and_finishes() {
        let state = FetchReducer::reduce(
            FetchState {
                movies: vec![movie(4)],
                ..FetchState::default()
            },
            FetchIntent::Start,
        );

        let new_state = FetchReducer::reduce(
            state,
            FetchIntent::Failed {
                request: 1,
                message: "Something went wrong".into(),
            },
        );

        assert_eq!(new_state.movies, vec![movie(4)]);
        assert!(!new_state.is_loading);
        assert_eq!(new_state.error.as_deref(), Some("Something went wrong"));
    }

    #[test]
    fn stale_completion_is_discarded() {
        let state = FetchReducer::reduce(FetchState::default(), FetchIntent::Start);
        let state = FetchReducer::reduce(state, FetchIntent::Start);

        let after_stale = FetchReducer::reduce(
            state.clone(),
            FetchIntent::Succeeded {
                request: 1,
                movies: vec![movie(4)],
            },
        );
        assert_eq!(after_stale, state);
        assert!(after_stale.is_loading);

        let after_stale_error = FetchReducer::reduce(
            state.clone(),
            FetchIntent::Failed {
                request: 1,
                message: "late".into(),
            },
        );
        assert_eq!(after_stale_error, state);
    }

    #[test]
    fn empty_success_shows_placeholder_again() {
        let state = FetchReducer::reduce(
            FetchState {
                movies: vec![movie(4)],
                ..FetchState::default()
            },
            FetchIntent::Start,
        );
        let new_state = FetchReducer::reduce(
            state,
            FetchIntent::Succeeded {
                request: 1,
                movies: Vec::new(),
            },
        );
        assert!(new_state.movies.is_empty());
        assert_eq!(new_state.content(), crate::controller::Content::Empty);
    }
}
