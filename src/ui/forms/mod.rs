//! Form rendering module
//!
//! - `field_renderer`: input boxes with inline errors
//! - `registration_form`: the registration entry form

mod field_renderer;
mod registration_form;

pub use registration_form::draw_registration;
