//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents are either user actions (a key press asking for a fetch) or
/// system events (a request settling). Reducers consume them.
pub trait Intent: Send + 'static {}
