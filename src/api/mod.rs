//! Film catalog API: transport, wire decoding and error taxonomy.
//!
//! ```text
//! GET endpoint ──→ HttpResponse ──→ status check ──→ decode_films ──→ Vec<Movie>
//! ```

pub mod error;
pub mod film;
pub mod transport;

pub use error::{FetchError, TransportError, HTTP_FAILURE_MESSAGE};
pub use film::{decode_films, Movie};
pub use transport::{HttpResponse, HttpTransport, ReqwestTransport};

/// Default catalog endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://swapi.py4e.com/api/films";

/// Run one request against `endpoint` and turn it into movies.
///
/// Status is validated before the body is looked at.
pub async fn fetch_films<T: HttpTransport>(
    transport: &T,
    endpoint: &str,
) -> Result<Vec<Movie>, FetchError> {
    let response = transport.get(endpoint).await?;
    if !response.is_success() {
        return Err(FetchError::HttpStatus {
            status: response.status,
        });
    }
    decode_films(&response.body)
}
