//! Confirmation view: read-only summary of the submitted registration

use crate::app::App;
use crate::state::{ConfirmationButton, FieldName, SubmittedRecord};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

const DEMO_NOTE: &str = "This is a demo form. In a real application, this data would be \
securely stored in a database and you would receive a confirmation email.";

const MAX_WIDTH: u16 = 80;
const LABEL_WIDTH: usize = 16;

/// Draw the confirmation view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let [area] = Layout::horizontal([Constraint::Max(MAX_WIDTH)])
        .flex(Flex::Center)
        .areas(area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(6),                // Details
            Constraint::Length(4),             // Demo note
            Constraint::Length(BUTTON_HEIGHT), // Buttons
        ])
        .margin(1)
        .split(area);

    let Some(record) = &app.state.submitted else {
        let empty = Paragraph::new("No submission to show.")
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(empty, chunks[0]);
        return;
    };

    let details = Paragraph::new(detail_lines(record))
        .scroll((app.state.scroll_offset.min(u16::MAX as usize) as u16, 0))
        .block(
            Block::default()
                .title(" Submitted Details ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Green)),
        );
    frame.render_widget(details, chunks[0]);

    let note = Paragraph::new(DEMO_NOTE)
        .style(Style::default().fg(Color::Yellow))
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    frame.render_widget(note, chunks[1]);

    draw_buttons(frame, chunks[2], app.state.confirmation_button);
}

fn draw_buttons(frame: &mut Frame, area: Rect, selected: ConfirmationButton) {
    let [back, copy] = Layout::horizontal([Constraint::Length(20), Constraint::Length(20)])
        .flex(Flex::Center)
        .spacing(2)
        .areas(area);

    for (button, button_area) in [
        (ConfirmationButton::BackToForm, back),
        (ConfirmationButton::CopyDetails, copy),
    ] {
        render_button(frame, button_area, button.label(), button == selected, true);
    }
}

fn detail_lines(record: &SubmittedRecord) -> Vec<Line<'static>> {
    let plain = |field: FieldName| (field.label(), record.get(field).to_string());
    let mut lines = Vec::new();

    section(&mut lines, "Personal Information");
    for field in [
        FieldName::FirstName,
        FieldName::LastName,
        FieldName::Username,
        FieldName::Email,
    ] {
        row(&mut lines, plain(field));
    }
    row(&mut lines, (FieldName::Password.label(), record.masked_password()));

    lines.push(Line::from(""));
    section(&mut lines, "Contact & Location");
    row(&mut lines, (FieldName::PhoneNumber.label(), record.display_phone()));
    row(&mut lines, plain(FieldName::Country));
    row(&mut lines, plain(FieldName::City));

    lines.push(Line::from(""));
    section(&mut lines, "Identity Documents");
    row(&mut lines, (FieldName::PanNumber.label(), record.display_pan()));
    row(&mut lines, (FieldName::AadharNumber.label(), record.display_aadhar()));

    lines
}

fn section(lines: &mut Vec<Line<'static>>, title: &'static str) {
    lines.push(Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )));
}

fn row(lines: &mut Vec<Line<'static>>, (label, value): (&'static str, String)) {
    lines.push(Line::from(vec![
        Span::styled(
            format!("  {label:<LABEL_WIDTH$}"),
            Style::default().fg(Color::Gray),
        ),
        Span::raw(value),
    ]));
}
