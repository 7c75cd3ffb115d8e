//! Base trait for UI state in MVI architecture.

/// Marker trait for UI state objects.
///
/// States are cloned rather than mutated in place, compared to detect
/// changes, and default to their resting value so dispatch can take them.
pub trait UiState: Clone + PartialEq + Default + 'static {}
