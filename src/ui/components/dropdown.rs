//! Option list shown under an open select field

use crate::state::Dropdown;
use crate::ui::widgets::render_scrollable_list;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear, List, ListItem},
    Frame,
};

/// Most rows the list occupies before it scrolls
const MAX_VISIBLE_OPTIONS: u16 = 8;

/// Render the dropdown just below `anchor`, flipping above it when there is
/// no room underneath
pub fn render_dropdown(frame: &mut Frame, anchor: Rect, dropdown: &Dropdown) {
    let screen = frame.area();
    let rows = (dropdown.options.len() as u16).min(MAX_VISIBLE_OPTIONS);
    let height = rows + 2;

    let below = anchor.y + anchor.height;
    let y = if below + height <= screen.y + screen.height {
        below
    } else {
        anchor.y.saturating_sub(height).max(screen.y)
    };
    let area = Rect {
        x: anchor.x,
        y,
        width: anchor.width,
        height: height.min(screen.height),
    };

    let items: Vec<ListItem> = (0..dropdown.options.len())
        .map(|index| {
            let label = dropdown.option_label(index);
            let style = if dropdown.options[index].is_empty() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            ListItem::new(label.to_string()).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .title(format!(" {} ", dropdown.field.label()))
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .style(Style::default().bg(Color::Black)),
        )
        .highlight_style(
            Style::default()
                .bg(Color::Cyan)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_widget(Clear, area);
    render_scrollable_list(frame, area, list, dropdown.selected);
}
