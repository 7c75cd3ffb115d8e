//! Base trait for intents in MVI architecture.

/// Marker trait for intent objects: key presses, overlay requests and
/// other events a reducer turns into a new state.
pub trait Intent: 'static {}
