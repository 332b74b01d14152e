//! Error taxonomy for film catalog requests.
//!
//! Every variant ends up as the single `error` text of the fetch state, so the
//! `Display` output is what the user sees.

use thiserror::Error;

/// Message shown for any non-success HTTP status.
pub const HTTP_FAILURE_MESSAGE: &str = "Something went wrong";

/// The request could not complete (DNS, connection refused, timeout, ...).
///
/// Carries the underlying description verbatim, causes included.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct TransportError {
    message: String,
}

impl TransportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<reqwest::Error> for TransportError {
    fn from(err: reqwest::Error) -> Self {
        Self::new(describe_chain(&err))
    }
}

/// Join an error with its `source()` chain, e.g.
/// `error sending request for url (..): client error (Connect): tcp connect
/// error: Connection refused (os error 111)`.
///
/// A cause whose text is already part of the message is skipped.
fn describe_chain(err: &dyn std::error::Error) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

/// Errors that can occur while fetching and decoding the film catalog.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Upstream answered with a non-success status. The status is kept for
    /// logging; the message is fixed.
    #[error("{}", HTTP_FAILURE_MESSAGE)]
    HttpStatus { status: u16 },

    /// Request never produced a response.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Body is not valid JSON.
    #[error("{0}")]
    Decode(#[from] serde_json::Error),

    /// Body is JSON but has no `results` array.
    #[error("response has no results list")]
    MissingResults,

    /// One element of `results` does not have the film shape.
    #[error("film #{index} is malformed: {source}")]
    MalformedFilm {
        index: usize,
        #[source]
        source: serde_json::Error,
    },
}

impl FetchError {
    /// Short identifier used in log records.
    pub fn kind(&self) -> &'static str {
        match self {
            FetchError::HttpStatus { .. } => "http_status",
            FetchError::Transport(_) => "transport",
            FetchError::Decode(_) => "decode",
            FetchError::MissingResults => "missing_results",
            FetchError::MalformedFilm { .. } => "malformed_film",
        }
    }
}
