/// Marker trait for intent objects.
///
/// Intents carry key presses forwarded by the input router and the results
/// of effects run by the shell (generated ids, loaded images, timer ticks).
pub trait Intent: Send + 'static {}
