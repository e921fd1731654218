/// The editor session façade tying input, history, rendering and synthesis together.
pub mod editor;
/// Seams to the hosting UI and the generation service.
pub mod host;
/// Editor configuration.
pub mod opts;
