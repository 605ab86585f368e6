//! Registration form rendering

use super::field_renderer::{draw_code_box, draw_input, InputView};
use crate::app::App;
use crate::state::FieldName;
use crate::ui::components::{render_action_button, render_dropdown, BUTTON_HEIGHT};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Style},
    widgets::Paragraph,
    Frame,
};

/// Inputs laid out two per row
const ROWS: [(FieldName, FieldName); 5] = [
    (FieldName::FirstName, FieldName::LastName),
    (FieldName::Username, FieldName::Email),
    (FieldName::Password, FieldName::PhoneNumber),
    (FieldName::Country, FieldName::City),
    (FieldName::PanNumber, FieldName::AadharNumber),
];

const FIELD_HEIGHT: u16 = 3;
const MAX_FORM_WIDTH: u16 = 96;
const CODE_BOX_WIDTH: u16 = 8;
const SUBMIT_LABEL: &str = "Submit Registration";

/// Draw the registration form
pub fn draw_registration(frame: &mut Frame, area: Rect, app: &App) {
    let [form_area] = Layout::horizontal([Constraint::Max(MAX_FORM_WIDTH)])
        .flex(Flex::Center)
        .areas(area);

    let mut constraints = vec![Constraint::Length(FIELD_HEIGHT); ROWS.len()];
    constraints.push(Constraint::Length(1)); // spacer
    constraints.push(Constraint::Length(BUTTON_HEIGHT)); // submit
    constraints.push(Constraint::Min(0));
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .margin(1)
        .split(form_area);

    let form = &app.state.form;
    let mut dropdown_anchor = None;

    for (row, (left, right)) in rows.iter().zip(ROWS) {
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .spacing(1)
            .split(*row);

        for (field, field_area) in [(left, columns[0]), (right, columns[1])] {
            let input_area = if field == FieldName::PhoneNumber {
                draw_phone_prefix(frame, field_area, app)
            } else {
                field_area
            };
            draw_input(frame, input_area, &InputView::of(form, field));

            if form.dropdown.as_ref().is_some_and(|d| d.field == field) {
                dropdown_anchor = Some(input_area);
            }
        }
    }

    // Submit button
    let [button_area] = Layout::horizontal([Constraint::Length(SUBMIT_LABEL.len() as u16 + 6)])
        .flex(Flex::Center)
        .areas(rows[ROWS.len() + 1]);
    render_action_button(
        frame,
        button_area,
        SUBMIT_LABEL,
        form.is_submit_active(),
        form.coordinator.is_ready(),
        Some(Color::Green),
    );

    let error_count = form.coordinator.errors().len();
    if error_count > 0 {
        let noun = if error_count == 1 { "field needs" } else { "fields need" };
        let summary = Paragraph::new(format!("{error_count} {noun} attention"))
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center);
        frame.render_widget(summary, rows[ROWS.len() + 2]);
    }

    // Dropdown overlays everything below its field
    if let (Some(dropdown), Some(anchor)) = (&form.dropdown, dropdown_anchor) {
        render_dropdown(frame, anchor, dropdown);
    }
}

/// Draw the dialing code box and return the area left for the number
fn draw_phone_prefix(frame: &mut Frame, area: Rect, app: &App) -> Rect {
    let [code_area, number_area] =
        Layout::horizontal([Constraint::Length(CODE_BOX_WIDTH), Constraint::Min(0)]).areas(area);
    draw_code_box(
        frame,
        code_area,
        app.state.form.coordinator.value(FieldName::CountryCode),
    );
    number_area
}
