//! Intents for the fetch state machine.

use crate::api::Movie;
use crate::ui::mvi::Intent;

/// Transitions driven by one `refresh()`.
#[derive(Debug, Clone)]
pub enum FetchIntent {
    /// A request is about to be issued. The reducer assigns its sequence
    /// number.
    Start,

    /// Request `request` produced movies.
    Succeeded { request: u64, movies: Vec<Movie> },

    /// Request `request` failed with `message`.
    Failed { request: u64, message: String },
}

impl Intent for FetchIntent {}
