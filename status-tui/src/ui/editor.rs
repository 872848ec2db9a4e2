//! Field editor with tui-textarea integration
//!
//! One `TextArea` edits whichever field has focus. It is rebuilt from state
//! when focus moves or the field changes underneath it, and reports the
//! field's new text after each edit.

use crossterm::event::KeyEvent;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    Frame,
};
use tui_textarea::{CursorMove, TextArea};

use crate::app::{AppState, Focus};
use libstatusmaker::EntryField;

/// Stateful editor for the focused field
pub struct FieldEditor<'a> {
    textarea: TextArea<'a>,
    focus: Focus,
}

impl<'a> FieldEditor<'a> {
    /// Editor for the field focused in `state`
    pub fn new(state: &AppState) -> Self {
        Self {
            textarea: build_textarea(state.focus, state.focused_value()),
            focus: state.focus,
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Current text, newline-joined
    pub fn content(&self) -> String {
        self.textarea.lines().join("\n")
    }

    /// Rebuild if focus moved or the field no longer matches the buffer
    pub fn sync(&mut self, state: &AppState) {
        if self.focus != state.focus || self.content() != state.focused_value() {
            *self = Self::new(state);
        }
    }

    /// Feed a key to the textarea; returns the field's new text if it changed
    pub fn input(&mut self, key: KeyEvent) -> Option<String> {
        if !self.textarea.input(key) {
            return None;
        }

        if !self.focus.is_multiline() && self.textarea.lines().len() > 1 {
            // Pasted or Ctrl+M newlines have no place in a one-line field
            let flattened = self.textarea.lines().concat();
            self.textarea = build_textarea(self.focus, &flattened);
        }

        Some(self.content())
    }

    /// Draw the textarea into `area`
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        frame.render_widget(&self.textarea, area);
    }
}

fn build_textarea<'a>(focus: Focus, value: &str) -> TextArea<'a> {
    let lines: Vec<String> = if value.is_empty() {
        vec![String::new()]
    } else {
        value.split('\n').map(str::to_string).collect()
    };

    let mut textarea = TextArea::new(lines);
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(Style::default().add_modifier(Modifier::REVERSED));
    textarea.set_placeholder_text(placeholder(focus));
    textarea.move_cursor(CursorMove::Bottom);
    textarea.move_cursor(CursorMove::End);
    textarea
}

fn placeholder(focus: Focus) -> &'static str {
    match focus {
        Focus::Headline => "Headline (optional)",
        Focus::Entry { field, .. } => match field {
            EntryField::Emoji => "Emoji",
            EntryField::Title => "What happened?",
            EntryField::Body => "Details (Enter for a new line)",
        },
    }
}
