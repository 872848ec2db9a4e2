//! Status text formatting
//!
//! Produces the chat-ready text for a status: the headline and every entry
//! header are wrapped in `*...*` (bold in Slack-style markup), bodies follow
//! their header on the next line.

use crate::model::StatusEntry;

/// Format a headline and entries into the shareable status text.
///
/// Pure: the output depends only on the arguments.
pub fn format_status(headline: &str, entries: &[StatusEntry]) -> String {
    let mut result = if headline.is_empty() {
        String::new()
    } else {
        format!("*{}*\n\n", headline)
    };

    for (index, entry) in entries.iter().enumerate() {
        if index != 0 {
            result.push('\n');
        }
        result.push_str(&format_entry(entry));
    }

    result
        .trim_matches(|c: char| c.is_whitespace() || c == '\u{feff}')
        .to_string()
}

/// Header line plus optional body for a single entry
fn format_entry(entry: &StatusEntry) -> String {
    let emoji = if entry.emoji.is_empty() {
        String::new()
    } else {
        format!("{} ", entry.emoji)
    };

    let mut chunk = format!("*{}{}*", emoji, entry.title);
    if !entry.body.is_empty() {
        chunk.push('\n');
        chunk.push_str(&entry.body);
    }
    chunk
}
