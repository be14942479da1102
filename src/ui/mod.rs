// UI module - egui control panel for the demo host

mod stats;
mod ui;

// Re-export the public interface
pub use ui::{UIState, draw_ui, process_egui};
