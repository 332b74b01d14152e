//! Base trait for UI state.

/// Marker trait for state objects.
///
/// States are cloned to publish snapshots, compared to detect changes, and
/// start from `Default`.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
