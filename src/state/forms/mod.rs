//! Form domain layer
//!
//! Field metadata, the raw value set, the coordinator that validates it and
//! the entry-screen form that drives focus and dropdowns.

mod coordinator;
mod field;
mod field_set;
mod form_state;

pub use coordinator::{ErrorMap, FormCoordinator};
pub use field::{FieldKind, FieldName};
pub use field_set::SubmittedRecord;
pub use form_state::{Dropdown, Form, RegistrationForm, FOCUS_ORDER};
#[cfg(test)]
pub use form_state::SUBMIT_INDEX;
