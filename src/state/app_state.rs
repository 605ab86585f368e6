//! Application state definitions

use super::forms::{RegistrationForm, SubmittedRecord};
use super::CountryDirectory;
use std::collections::VecDeque;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// Registration form
    #[default]
    Entry,
    /// Read-only summary of the submitted registration
    Confirmation,
}

impl View {
    /// Route name of the view
    pub fn route(&self) -> &'static str {
        match self {
            Self::Entry => "entry",
            Self::Confirmation => "confirmation",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Entry => "Registration Form",
            Self::Confirmation => "Registration Successful!",
        }
    }
}

/// Moves the application between views
#[cfg_attr(test, mockall::automock)]
pub trait Navigator {
    fn go_to(&mut self, view: View);
}

/// Tracks the active view
#[derive(Debug, Clone, Default)]
pub struct Router {
    current: View,
}

impl Router {
    pub fn current(&self) -> View {
        self.current
    }
}

impl Navigator for Router {
    fn go_to(&mut self, view: View) {
        if self.current != view {
            tracing::info!(from = self.current.route(), to = view.route(), "navigate");
        }
        self.current = view;
    }
}

/// Buttons on the confirmation view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmationButton {
    #[default]
    BackToForm,
    CopyDetails,
}

impl ConfirmationButton {
    pub fn toggle(&mut self) {
        *self = match self {
            Self::BackToForm => Self::CopyDetails,
            Self::CopyDetails => Self::BackToForm,
        };
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::BackToForm => "Back to Form",
            Self::CopyDetails => "Copy Details",
        }
    }
}

/// Main application state
#[derive(Default)]
pub struct AppState {
    // Navigation
    pub router: Router,

    // Entry view
    pub form: RegistrationForm,

    // Confirmation view
    pub submitted: Option<SubmittedRecord>,
    pub confirmation_button: ConfirmationButton,
    pub scroll_offset: usize,

    // Modal error queue, oldest first
    errors: VecDeque<String>,
}

impl AppState {
    pub fn new(directory: CountryDirectory) -> Self {
        Self {
            form: RegistrationForm::new(directory),
            ..Default::default()
        }
    }

    pub fn current_view(&self) -> View {
        self.router.current()
    }

    /// Queue an error for the modal dialog
    pub fn push_error(&mut self, message: String) {
        tracing::warn!(%message, "error shown to user");
        self.errors.push_back(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// The error currently displayed, if any
    pub fn current_error(&self) -> Option<&str> {
        self.errors.front().map(String::as_str)
    }

    pub fn pending_error_count(&self) -> usize {
        self.errors.len()
    }

    pub fn dismiss_error(&mut self) {
        self.errors.pop_front();
    }

    /// Scroll down
    pub fn scroll_down(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_add(1);
    }

    /// Scroll up
    pub fn scroll_up(&mut self) {
        self.scroll_offset = self.scroll_offset.saturating_sub(1);
    }
}
