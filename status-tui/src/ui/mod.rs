//! UI rendering
//!
//! Pure rendering functions that transform state into terminal frames.
//! The only stateful piece is the [`FieldEditor`], drawn in place of the
//! focused field.

pub mod editor;

pub use editor::FieldEditor;

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::app::{AppState, Focus};
use libstatusmaker::{EntryField, StatusBoard, StatusEntry};

const LABEL_WIDTH: u16 = 7;

/// Render the application UI
///
/// Main rendering entry point. `editor` must already be synced with `state`.
pub fn render(frame: &mut Frame, state: &AppState, editor: &FieldEditor) {
    let area = frame.size();

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(3),    // Board + preview
            Constraint::Length(4), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(rows[0]);

    render_board(frame, columns[0], state, editor);
    render_preview(frame, columns[1], state);
    render_status_bar(frame, rows[1], state);

    if state.help_visible {
        render_help_overlay(frame, area);
    }

    if let Some(ref error) = state.error {
        render_error_overlay(frame, area, error);
    }
}

/// Headline box above the entry boxes
fn render_board(frame: &mut Frame, area: Rect, state: &AppState, editor: &FieldEditor) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(area);

    let headline_focused = state.focus == Focus::Headline && state.drag.is_none();
    let block = Block::default()
        .title(" Headline ")
        .borders(Borders::ALL)
        .border_style(border_style(state, headline_focused, false));
    let inner = block.inner(chunks[0]);
    frame.render_widget(block, chunks[0]);

    if headline_focused && state.accepts_text() {
        editor.render(frame, inner);
    } else {
        frame.render_widget(value_paragraph(&state.board.headline, "Headline (optional)"), inner);
    }

    render_entries(frame, chunks[1], state, editor);
}

fn render_entries(frame: &mut Frame, area: Rect, state: &AppState, editor: &FieldEditor) {
    let (board, dragged) = display_board(state);
    let heights: Vec<u16> = board.entries.iter().map(entry_height).collect();

    let anchor = dragged.or(state.focus.entry_index()).unwrap_or(0);
    let first = first_visible(&heights, anchor, area.height);

    let mut y = area.y;
    for (index, entry) in board.entries.iter().enumerate().skip(first) {
        let remaining = area.bottom().saturating_sub(y);
        if remaining < 3 {
            break;
        }

        let height = heights[index].min(remaining);
        let rect = Rect::new(area.x, y, area.width, height);
        render_entry(frame, rect, index, entry, state, editor, dragged == Some(index));
        y += height;
    }
}

fn render_entry(
    frame: &mut Frame,
    area: Rect,
    index: usize,
    entry: &StatusEntry,
    state: &AppState,
    editor: &FieldEditor,
    dragged: bool,
) {
    let focused = state.drag.is_none() && state.focus.entry_index() == Some(index);

    let title = if dragged {
        let marker = if state.config.unicode_enabled { "↕" } else { "<>" };
        format!(" {} {} moving ", index + 1, marker)
    } else {
        format!(" {} ", index + 1)
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style(state, focused, dragged));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1), Constraint::Min(1)])
        .split(inner);

    for (field, row) in EntryField::ALL.into_iter().zip(rows.iter()) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(LABEL_WIDTH), Constraint::Min(1)])
            .split(*row);

        frame.render_widget(
            Paragraph::new(field_label(field)).style(Style::default().add_modifier(Modifier::DIM)),
            cells[0],
        );

        let editing = focused
            && state.accepts_text()
            && state.focus == (Focus::Entry { index, field });
        if editing {
            editor.render(frame, cells[1]);
        } else {
            frame.render_widget(value_paragraph(entry.get(field), ""), cells[1]);
        }
    }
}

/// Formatted result, and the copied acknowledgment over it
fn render_preview(frame: &mut Frame, area: Rect, state: &AppState) {
    let copied = state.copied.is_visible();

    let block = Block::default()
        .title(if copied { " Preview - Copied! " } else { " Preview " })
        .borders(Borders::ALL)
        .border_style(if copied {
            accent(state, Color::Green)
        } else {
            Style::default()
        });

    let preview = Paragraph::new(state.result())
        .block(block)
        .wrap(Wrap { trim: false });
    frame.render_widget(preview, area);

    if copied {
        let popup_area = centered_rect(90, 40, area);
        let text = vec![
            Line::from(Span::styled(
                "Copied!",
                accent(state, Color::Green).add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from("Now go paste it into Slack!"),
            Line::from("Have a nice day!"),
        ];

        let popup = Paragraph::new(text)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(accent(state, Color::Green)),
            )
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true });

        frame.render_widget(Clear, popup_area);
        frame.render_widget(popup, popup_area);
    }
}

/// Render status bar with the last message and key hints
fn render_status_bar(frame: &mut Frame, area: Rect, state: &AppState) {
    let message = state
        .status
        .message
        .clone()
        .unwrap_or_else(|| match state.board.len() {
            1 => "1 entry".to_string(),
            n => format!("{} entries", n),
        });

    let hints = if state.drag.is_some() {
        "Up/Down: Move | Enter: Drop | Esc: Cancel"
    } else if state.can_copy() {
        "Tab: Next field | Ctrl+N: Add | Ctrl+D: Delete | Ctrl+C: Copy | F1: Help | Ctrl+Q: Quit"
    } else {
        "Tab: Next field | Ctrl+N: Add | Ctrl+D: Delete | F1: Help | Ctrl+Q: Quit"
    };

    let lines = vec![
        Line::from(Span::raw(message)),
        Line::from(Span::styled(hints, Style::default().fg(Color::Gray))),
    ];

    let status = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

/// Render help overlay
fn render_help_overlay(frame: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 80, area);

    let help_text = vec![
        Line::from(Span::styled("Keyboard Shortcuts", Style::default().add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from("Editing:"),
        Line::from("  Tab/Shift+Tab  - Next/previous field"),
        Line::from("  Enter          - Next field (new line in body)"),
        Line::from("  Ctrl+N         - Add entry"),
        Line::from("  Ctrl+D         - Delete entry"),
        Line::from("  Ctrl+R         - New emoji"),
        Line::from("  Alt+Up/Down    - Move entry"),
        Line::from(""),
        Line::from("Drag:"),
        Line::from("  Ctrl+G         - Pick up entry"),
        Line::from("  Up/Down        - Choose slot"),
        Line::from("  Enter/Esc      - Drop/cancel"),
        Line::from(""),
        Line::from("Global:"),
        Line::from("  Ctrl+C, F5     - Copy to clipboard"),
        Line::from("  F1             - Toggle help"),
        Line::from("  Ctrl+Q         - Quit"),
        Line::from(""),
        Line::from("Press Esc or F1 to close"),
    ];

    let help = Paragraph::new(help_text)
        .block(
            Block::default()
                .title(" Help ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan)),
        )
        .wrap(Wrap { trim: false });

    frame.render_widget(Clear, popup_area);
    frame.render_widget(help, popup_area);
}

/// Render error overlay
fn render_error_overlay(frame: &mut Frame, area: Rect, error: &str) {
    let popup_area = centered_rect(70, 30, area);

    let error_text = vec![
        Line::from(Span::styled("Error", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(error),
        Line::from(""),
        Line::from("Press Esc to dismiss"),
    ];

    let error_widget = Paragraph::new(error_text)
        .block(
            Block::default()
                .title(" Error ")
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Red)),
        )
        .wrap(Wrap { trim: false })
        .alignment(Alignment::Center);

    frame.render_widget(Clear, popup_area);
    frame.render_widget(error_widget, popup_area);
}

/// Board as it should be drawn, and the row holding a dragged entry.
///
/// While dragging, entries show in the order they would land in.
fn display_board(state: &AppState) -> (StatusBoard, Option<usize>) {
    match state.drag {
        Some(drag) => match state.board.drop_entry(drag.source, Some(drag.target)) {
            Ok(board) => (board, Some(drag.target)),
            Err(_) => (state.board.clone(), None),
        },
        None => (state.board.clone(), None),
    }
}

/// Rows an entry box needs: borders, emoji, title and its body lines
fn entry_height(entry: &StatusEntry) -> u16 {
    let body_lines = entry.body.split('\n').count().max(1);
    let body_lines = u16::try_from(body_lines).unwrap_or(u16::MAX);
    body_lines.saturating_add(4)
}

/// First entry to draw so that `anchor` fits in `available` rows
fn first_visible(heights: &[u16], anchor: usize, available: u16) -> usize {
    let Some(&anchor_height) = heights.get(anchor) else {
        return 0;
    };

    let mut first = anchor;
    let mut used = anchor_height;
    while first > 0 {
        let above = heights[first - 1];
        if used.saturating_add(above) > available {
            break;
        }
        used += above;
        first -= 1;
    }
    first
}

fn field_label(field: EntryField) -> &'static str {
    match field {
        EntryField::Emoji => "Emoji",
        EntryField::Title => "Title",
        EntryField::Body => "Body",
    }
}

fn value_paragraph<'a>(value: &'a str, placeholder: &'a str) -> Paragraph<'a> {
    if value.is_empty() {
        Paragraph::new(placeholder).style(Style::default().add_modifier(Modifier::DIM))
    } else {
        Paragraph::new(value)
    }
}

fn border_style(state: &AppState, focused: bool, dragged: bool) -> Style {
    if dragged {
        accent(state, Color::Yellow)
    } else if focused {
        accent(state, Color::Cyan)
    } else {
        Style::default()
    }
}

/// Color when allowed, bold otherwise
fn accent(state: &AppState, color: Color) -> Style {
    if state.config.colors_enabled {
        Style::default().fg(color)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    }
}

/// Helper to create centered rectangle
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
