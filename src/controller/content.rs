use std::fmt;

use crate::api::Movie;

/// Shown when nothing has been fetched (or the catalog came back empty).
pub const EMPTY_PLACEHOLDER: &str = "Found no movies!";

/// Shown while a request is in flight.
pub const LOADING_TEXT: &str = "Loading...";

/// What the display region shows. Exactly one at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Content {
    Empty,
    Movies(Vec<Movie>),
    Error(String),
    Loading,
}

impl fmt::Display for Content {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Content::Empty => f.write_str(EMPTY_PLACEHOLDER),
            Content::Loading => f.write_str(LOADING_TEXT),
            Content::Error(message) => f.write_str(message),
            Content::Movies(movies) => {
                for (idx, movie) in movies.iter().enumerate() {
                    if idx > 0 {
                        writeln!(f)?;
                    }
                    writeln!(
                        f,
                        "Episode {}: {} ({})",
                        movie.id, movie.title, movie.release_date
                    )?;
                    for line in crawl_lines(&movie.opening_text) {
                        writeln!(f, "    {}", line)?;
                    }
                }
                Ok(())
            }
        }
    }
}

/// Split an opening crawl into display lines.
///
/// The API uses `\r\n` line breaks and blank lines between paragraphs;
/// blank lines are kept, trailing whitespace is not.
pub fn crawl_lines(text: &str) -> Vec<&str> {
    text.trim_end().lines().map(str::trim_end).collect()
}
