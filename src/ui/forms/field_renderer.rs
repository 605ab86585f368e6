//! Field rendering utilities for forms

use crate::state::{FieldKind, FieldName, RegistrationForm};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Everything needed to draw one input box
pub struct InputView<'a> {
    pub title: String,
    pub value: String,
    pub placeholder: &'a str,
    pub error: Option<&'a str>,
    pub is_active: bool,
    pub is_disabled: bool,
    /// Touched, filled and passing its rule
    pub is_valid: bool,
    /// Shows an open indicator and no text cursor
    pub is_select: bool,
}

impl<'a> InputView<'a> {
    /// Build the view of a form field, masking the password unless revealed
    pub fn of(form: &'a RegistrationForm, field: FieldName) -> Self {
        let coordinator = &form.coordinator;
        let raw = coordinator.value(field);
        let value = if field.kind() == FieldKind::Secret && !form.show_password {
            mask(raw)
        } else {
            raw.to_string()
        };

        let error = coordinator.error(field);
        Self {
            title: format!("{} *", field.label()),
            value,
            placeholder: field.placeholder(),
            error,
            is_active: form.active_field_name() == Some(field),
            is_disabled: form.is_disabled(field),
            is_valid: coordinator.is_touched(field) && error.is_none() && !raw.is_empty(),
            is_select: field.kind() == FieldKind::Select,
        }
    }
}

/// One bullet per character
pub fn mask(value: &str) -> String {
    "•".repeat(value.chars().count())
}

/// Draw an input box with its error message on the bottom border
pub fn draw_input(frame: &mut Frame, area: Rect, input: &InputView) {
    let border_color = if input.error.is_some() {
        Color::Red
    } else if input.is_active {
        Color::Cyan
    } else if input.is_disabled {
        Color::Black
    } else {
        Color::DarkGray
    };

    let mut spans = if input.value.is_empty() {
        vec![Span::styled(
            input.placeholder,
            Style::default().fg(Color::DarkGray),
        )]
    } else {
        vec![Span::raw(input.value.as_str())]
    };
    if input.is_select {
        if !input.is_disabled {
            spans.push(Span::styled(" ▾", Style::default().fg(Color::Gray)));
        }
    } else if input.is_active {
        spans.insert(
            usize::from(!input.value.is_empty()),
            Span::styled("▌", Style::default().fg(Color::Cyan)),
        );
    }

    let title_style = if input.is_disabled {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
            .fg(border_color)
            .add_modifier(Modifier::BOLD)
    };

    let mut title = vec![Span::styled(format!(" {} ", input.title), title_style)];
    if input.is_valid {
        title.push(Span::styled("✓ ", Style::default().fg(Color::Green)));
    }

    let mut block = Block::default()
        .title(Line::from(title))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    if let Some(error) = input.error {
        block = block.title_bottom(Line::from(Span::styled(
            format!(" {error} "),
            Style::default().fg(Color::Red),
        )));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

/// Draw the read-only dialing code box beside the phone number
pub fn draw_code_box(frame: &mut Frame, area: Rect, code: &str) {
    let content = if code.is_empty() {
        Span::styled(
            FieldName::CountryCode.placeholder(),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        Span::raw(code)
    };
    let block = Block::default()
        .title(format!(" {} ", FieldName::CountryCode.label()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    frame.render_widget(Paragraph::new(Line::from(content)).block(block), area);
}
