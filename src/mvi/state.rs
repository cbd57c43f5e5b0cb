//! Base trait for view state.

/// Marker trait for state objects.
///
/// States should be:
/// - Cheap to snapshot (Clone) for rendering outside the owner's lock
/// - Self-contained (all data needed to render the report)
/// - Comparable (PartialEq for detecting changes)
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
