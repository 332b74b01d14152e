//! Film catalog wire format and its mapping to [`Movie`].

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::error::FetchError;

/// A film as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    /// Episode number. Not guaranteed to be unique across the catalog.
    pub id: u32,
    pub title: String,
    pub opening_text: String,
    /// Kept as sent by the API (e.g. "1977-05-25").
    pub release_date: String,
}

/// One element of the `results` array. Unknown fields are ignored.
#[derive(Debug, Deserialize)]
struct FilmRecord {
    episode_id: u32,
    title: String,
    opening_crawl: String,
    release_date: String,
}

impl From<FilmRecord> for Movie {
    fn from(record: FilmRecord) -> Self {
        Self {
            id: record.episode_id,
            title: record.title,
            opening_text: record.opening_crawl,
            release_date: record.release_date,
        }
    }
}

/// Parse a catalog response body into movies, preserving `results` order.
pub fn decode_films(body: &[u8]) -> Result<Vec<Movie>, FetchError> {
    let mut document: Value = serde_json::from_slice(body)?;

    let Some(Value::Array(results)) = document.get_mut("results").map(Value::take) else {
        return Err(FetchError::MissingResults);
    };

    results
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<FilmRecord>(item)
                .map(Movie::from)
                .map_err(|source| FetchError::MalformedFilm { index, source })
        })
        .collect()
}
