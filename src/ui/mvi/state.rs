/// Marker trait for screen state.
///
/// States are replaced wholesale by reducers, compared to detect changes
/// and default to the screen's initial view.
pub trait UiState: Clone + PartialEq + Default + Send + 'static {}
