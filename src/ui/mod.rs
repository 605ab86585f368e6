//! UI module for rendering the TUI

mod components;
mod confirmation;
mod forms;
mod layout;
mod widgets;

use crate::app::App;
use crate::state::View;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (header_area, content_area, status_area) = layout::create_layout(frame.area());

    layout::draw_header(frame, header_area, app.state.current_view());

    match app.state.current_view() {
        View::Entry => forms::draw_registration(frame, content_area, app),
        View::Confirmation => confirmation::draw(frame, content_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    // Error dialog goes on top of everything
    if let Some(error) = app.state.current_error() {
        let queued = app.state.pending_error_count().saturating_sub(1);
        components::render_error_dialog(frame, error, queued);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{AppState, FieldName, Navigator, SubmittedRecord};
    use crate::storage::MockTransferStore;
    use ratatui::{backend::TestBackend, Terminal};

    fn test_app() -> App {
        App::with_store(AppState::default(), Box::new(MockTransferStore::new()))
    }

    fn render(app: &App) -> String {
        let backend = TestBackend::new(100, 32);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| draw(frame, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let width = buffer.area.width as usize;
        buffer
            .content
            .chunks(width)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_entry_view_renders_fields() {
        let screen = render(&test_app());
        assert!(screen.contains("Registration Form"));
        assert!(screen.contains("First Name *"));
        assert!(screen.contains("Aadhar Number *"));
        assert!(screen.contains("Enter your first name"));
        assert!(screen.contains("Submit Registration"));
    }

    #[test]
    fn test_inline_error_is_shown() {
        let mut app = test_app();
        app.state.form.blur_active();
        let screen = render(&app);
        assert!(screen.contains("First Name is required"));
    }

    #[test]
    fn test_password_is_masked() {
        let mut app = test_app();
        app.state
            .form
            .coordinator
            .update_field(FieldName::Password, "Secret1!");
        let screen = render(&app);
        assert!(screen.contains("••••••••"));
        assert!(!screen.contains("Secret1!"));
    }

    #[test]
    fn test_open_dropdown_lists_countries() {
        let mut app = test_app();
        app.state.form.active_field_index = 6;
        app.state.form.open_dropdown();
        let screen = render(&app);
        assert!(screen.contains("United Kingdom"));
        assert!(screen.contains("Australia"));
    }

    #[test]
    fn test_confirmation_view_renders_record() {
        let mut app = test_app();
        app.state.router.go_to(View::Confirmation);
        app.state.submitted = Some(SubmittedRecord::sample());
        let screen = render(&app);

        assert!(screen.contains("Registration Successful!"));
        assert!(screen.contains("+91 9876543210"));
        assert!(screen.contains("ABCDE1234F"));
        assert!(screen.contains("1234 5678 9012"));
        assert!(screen.contains("Back to Form"));
        assert!(screen.contains("Copy Details"));
        assert!(!screen.contains("Passw0rd!"));
    }

    #[test]
    fn test_error_dialog_overlays_view() {
        let mut app = test_app();
        app.push_error("Could not save your registration");
        app.push_error("second");
        let screen = render(&app);
        assert!(screen.contains("Error"));
        assert!(screen.contains("Could not save your registration"));
        assert!(screen.contains("(1 more)"));
    }
}
