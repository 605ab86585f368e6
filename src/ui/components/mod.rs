//! Reusable UI components

mod button;
mod dialog;
mod dropdown;

pub use button::{render_action_button, render_button, BUTTON_HEIGHT};
pub use dialog::render_error_dialog;
pub use dropdown::render_dropdown;
