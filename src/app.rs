//! Application state and core logic

use crate::config::RegistrationConfig;
use crate::platform::COPY_MODIFIER;
use crate::state::{AppState, ConfirmationButton, FieldKind, Form, Navigator, View, FOCUS_ORDER};
use crate::storage::{
    load_confirmation, return_to_form, submit_and_transfer, FileStore, StorageError,
    SubmitOutcome, TransferStore,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Where a submitted record waits for the confirmation view
    store: Box<dyn TransferStore>,
    /// Whether the app should quit
    quit: bool,
    /// Transient feedback shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create an App backed by the file store from the config
    pub fn new(config: &RegistrationConfig) -> Result<Self> {
        let store = FileStore::from_config(config)?;
        tracing::debug!(path = %store.path().display(), "using file store");
        Ok(Self::with_store(
            AppState::new(config.country_directory()),
            Box::new(store),
        ))
    }

    pub fn with_store(state: AppState, store: Box<dyn TransferStore>) -> Self {
        Self {
            state,
            store,
            quit: false,
            status_message: None,
        }
    }

    /// Begin a fresh session, discarding a record left by an earlier run
    pub async fn start(&mut self) {
        if let Err(err) = self.store.clear().await {
            self.storage_failed("Could not reset saved data", err);
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Push an error message to the error queue for display
    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Handle error dialog dismissal first (modal)
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return Ok(());
        }

        // Clear any status messages on key press
        self.status_message = None;

        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        match self.state.current_view() {
            View::Entry => self.handle_entry_key(key).await,
            View::Confirmation => self.handle_confirmation_key(key).await,
        }
        Ok(())
    }

    /// Handle keys in the registration form
    async fn handle_entry_key(&mut self, key: KeyEvent) {
        if self.state.form.dropdown.is_some() {
            self.handle_dropdown_key(key);
            return;
        }

        let form = &mut self.state.form;
        let on_submit = form.is_submit_active();
        let on_select = form
            .active_field_name()
            .is_some_and(|field| field.kind() == FieldKind::Select);

        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => form.next_field(),
            KeyCode::BackTab | KeyCode::Up => form.prev_field(),
            // Keyboard shortcuts (work from anywhere)
            KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.submit().await;
            }
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.toggle_password_visibility();
            }
            KeyCode::Enter if on_submit => {
                if form.coordinator.is_ready() {
                    self.submit().await;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') if on_select => form.open_dropdown(),
            KeyCode::Enter => form.next_field(),
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                form.input_char(c)
            }
            KeyCode::Backspace => form.backspace(),
            _ => {}
        }
    }

    /// Handle keys while a country or city list is open
    fn handle_dropdown_key(&mut self, key: KeyEvent) {
        let form = &mut self.state.form;
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                if let Some(dropdown) = form.dropdown.as_mut() {
                    dropdown.select_prev();
                }
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if let Some(dropdown) = form.dropdown.as_mut() {
                    dropdown.select_next();
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => form.confirm_dropdown(),
            KeyCode::Esc | KeyCode::Tab | KeyCode::BackTab => form.close_dropdown(),
            _ => {}
        }
    }

    /// Handle keys on the confirmation view
    async fn handle_confirmation_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('p') if key.modifiers.contains(COPY_MODIFIER) => self.copy_details(),
            KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
                self.state.confirmation_button.toggle();
            }
            KeyCode::Enter => match self.state.confirmation_button {
                ConfirmationButton::BackToForm => self.back_to_form().await,
                ConfirmationButton::CopyDetails => self.copy_details(),
            },
            KeyCode::Char('b') => self.back_to_form().await,
            KeyCode::Char('p') => self.copy_details(),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(),
            KeyCode::Esc | KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    /// Validate the form and hand a valid record to the confirmation view
    pub async fn submit(&mut self) {
        self.state.form.close_dropdown();

        let result = submit_and_transfer(
            &mut self.state.form.coordinator,
            self.store.as_ref(),
            &mut self.state.router,
        )
        .await;

        match result {
            Ok(SubmitOutcome::Transferred(_)) => self.enter_confirmation().await,
            Ok(SubmitOutcome::Rejected(errors)) => {
                // Jump to the first field that needs fixing
                let first_failing = errors
                    .iter()
                    .find_map(|(field, _)| FOCUS_ORDER.iter().position(|f| *f == field));
                if let Some(index) = first_failing {
                    self.state.form.set_active_field(index);
                }
                self.status_message = Some(match errors.len() {
                    1 => "1 field needs attention".to_string(),
                    n => format!("{n} fields need attention"),
                });
            }
            Err(err) => self.storage_failed("Could not save your registration", err),
        }
    }

    /// Load the stored record for the confirmation view
    async fn enter_confirmation(&mut self) {
        self.state.confirmation_button = ConfirmationButton::default();
        self.state.scroll_offset = 0;

        match load_confirmation(self.store.as_ref(), &mut self.state.router).await {
            Ok(record) => self.state.submitted = record,
            Err(err) => {
                self.state.submitted = None;
                self.state.router.go_to(View::Entry);
                self.storage_failed("Could not load your registration", err);
            }
        }
    }

    /// Discard the submitted record and start a new session on the form
    pub async fn back_to_form(&mut self) {
        if let Err(err) = return_to_form(self.store.as_ref(), &mut self.state.router).await {
            self.storage_failed("Could not clear saved data", err);
            return;
        }
        self.state.submitted = None;
        self.state.form.reset();
        self.state.scroll_offset = 0;
    }

    /// Copy the formatted details to the system clipboard
    pub fn copy_details(&mut self) {
        let Some(summary) = self.state.submitted.as_ref().map(|r| r.summary()) else {
            return;
        };
        match copy_to_clipboard(&summary) {
            Ok(()) => self.status_message = Some("Copied details to clipboard".to_string()),
            Err(err) => {
                tracing::warn!(error = %err, "clipboard copy failed");
                self.push_error(format!("Could not copy details: {err}"));
            }
        }
    }

    fn storage_failed(&mut self, context: &str, err: StorageError) {
        tracing::warn!(error = %err, "{context}");
        self.push_error(format!("{context}: {err}"));
    }
}

fn copy_to_clipboard(text: &str) -> Result<()> {
    use arboard::Clipboard;
    let mut clipboard = Clipboard::new()?;
    clipboard.set_text(text)?;
    Ok(())
}
