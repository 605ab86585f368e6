//! Application state module

mod app_state;
mod directory;
mod forms;

pub use app_state::*;
pub use directory::{CountryDirectory, CountryEntry};
pub use forms::*;
