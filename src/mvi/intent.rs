//! Base trait for intents.

/// Marker trait for intent objects.
///
/// Intents represent user submissions and the completion of the
/// asynchronous work they start. Reducers consume them to produce new
/// states.
pub trait Intent: Send + 'static {}
