//! Status list store
//!
//! A status is a headline plus an ordered, never-empty list of entries.
//! Every operation on [`StatusBoard`] takes `&self` and returns a brand new
//! snapshot; entries are plain values and are rebuilt rather than edited.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::StatusError;
use crate::format::format_status;

/// One emoji + title + body line item.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    #[serde(default)]
    pub emoji: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub body: String,
}

impl StatusEntry {
    /// Entry with the given emoji and empty title/body
    pub fn new(emoji: impl Into<String>) -> Self {
        Self {
            emoji: emoji.into(),
            ..Self::default()
        }
    }

    pub fn get(&self, field: EntryField) -> &str {
        match field {
            EntryField::Emoji => &self.emoji,
            EntryField::Title => &self.title,
            EntryField::Body => &self.body,
        }
    }

    /// Copy of this entry with one field replaced
    pub fn with(&self, field: EntryField, value: impl Into<String>) -> Self {
        let value = value.into();
        match field {
            EntryField::Emoji => Self {
                emoji: value,
                ..self.clone()
            },
            EntryField::Title => Self {
                title: value,
                ..self.clone()
            },
            EntryField::Body => Self {
                body: value,
                ..self.clone()
            },
        }
    }
}

/// Editable field of a [`StatusEntry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntryField {
    Emoji,
    Title,
    Body,
}

impl EntryField {
    pub const ALL: [EntryField; 3] = [EntryField::Emoji, EntryField::Title, EntryField::Body];

    pub fn next(self) -> Option<EntryField> {
        match self {
            EntryField::Emoji => Some(EntryField::Title),
            EntryField::Title => Some(EntryField::Body),
            EntryField::Body => None,
        }
    }

    pub fn previous(self) -> Option<EntryField> {
        match self {
            EntryField::Emoji => None,
            EntryField::Title => Some(EntryField::Emoji),
            EntryField::Body => Some(EntryField::Title),
        }
    }
}

impl FromStr for EntryField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "emoji" => Ok(EntryField::Emoji),
            "title" => Ok(EntryField::Title),
            "body" => Ok(EntryField::Body),
            _ => Err(format!(
                "Invalid entry field: '{}'. Valid options: emoji, title, body",
                s
            )),
        }
    }
}

impl fmt::Display for EntryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntryField::Emoji => write!(f, "emoji"),
            EntryField::Title => write!(f, "title"),
            EntryField::Body => write!(f, "body"),
        }
    }
}

/// Ordered list of entries holding at least one element.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EntryList(Vec<StatusEntry>);

impl EntryList {
    pub fn single(entry: StatusEntry) -> Self {
        Self(vec![entry])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Always false; kept for the usual `len`/`is_empty` pairing.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&StatusEntry> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StatusEntry> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[StatusEntry] {
        &self.0
    }
}

impl TryFrom<Vec<StatusEntry>> for EntryList {
    type Error = StatusError;

    fn try_from(entries: Vec<StatusEntry>) -> Result<Self, Self::Error> {
        if entries.is_empty() {
            return Err(StatusError::EmptyList);
        }
        Ok(Self(entries))
    }
}

impl<'de> Deserialize<'de> for EntryList {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let entries = Vec::<StatusEntry>::deserialize(deserializer)?;
        EntryList::try_from(entries).map_err(serde::de::Error::custom)
    }
}

impl<'a> IntoIterator for &'a EntryList {
    type Item = &'a StatusEntry;
    type IntoIter = std::slice::Iter<'a, StatusEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// Immutable snapshot of a status: headline plus entries
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusBoard {
    #[serde(default)]
    pub headline: String,
    pub entries: EntryList,
}

impl StatusBoard {
    /// Fresh board with one entry carrying the seed emoji
    pub fn new(headline: impl Into<String>, seed_emoji: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            entries: EntryList::single(StatusEntry::new(seed_emoji)),
        }
    }

    pub fn from_parts(headline: impl Into<String>, entries: Vec<StatusEntry>) -> Result<Self, StatusError> {
        Ok(Self {
            headline: headline.into(),
            entries: EntryList::try_from(entries)?,
        })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entry(&self, index: usize) -> Option<&StatusEntry> {
        self.entries.get(index)
    }

    /// Append an entry with `emoji` and empty title/body
    pub fn add(&self, emoji: impl Into<String>) -> Self {
        let mut entries = self.entries.0.clone();
        entries.push(StatusEntry::new(emoji));
        self.with_entries(entries)
    }

    /// Replace one field of the entry at `index`
    pub fn update(
        &self,
        index: usize,
        field: EntryField,
        value: impl Into<String>,
    ) -> Result<Self, StatusError> {
        let current = self.entries.get(index).ok_or(StatusError::IndexOutOfRange {
            index,
            len: self.len(),
        })?;
        let replacement = current.with(field, value);

        let entries = self
            .entries
            .iter()
            .enumerate()
            .map(|(i, entry)| {
                if i == index {
                    replacement.clone()
                } else {
                    entry.clone()
                }
            })
            .collect();
        Ok(self.with_entries(entries))
    }

    /// Remove the entry at `index`.
    ///
    /// Refused (returns an identical snapshot) when only one entry is left
    /// or when `index` does not name an entry.
    pub fn delete(&self, index: usize) -> Self {
        if self.len() <= 1 {
            tracing::debug!(index, "Refusing to delete the last entry");
            return self.clone();
        }
        if index >= self.len() {
            tracing::debug!(index, len = self.len(), "Ignoring delete of missing entry");
            return self.clone();
        }

        let mut entries = self.entries.0.clone();
        entries.remove(index);
        self.with_entries(entries)
    }

    /// Move the entry at `source` to `destination`
    pub fn reorder(&self, source: usize, destination: usize) -> Result<Self, StatusError> {
        let entries = reorder(self.entries.as_slice(), source, destination)?;
        Ok(self.with_entries(entries))
    }

    /// Finish a drag: no destination means the drag was abandoned
    pub fn drop_entry(&self, source: usize, destination: Option<usize>) -> Result<Self, StatusError> {
        match destination {
            Some(destination) => self.reorder(source, destination),
            None => Ok(self.clone()),
        }
    }

    pub fn set_headline(&self, headline: impl Into<String>) -> Self {
        Self {
            headline: headline.into(),
            entries: self.entries.clone(),
        }
    }

    /// Formatted text for preview and clipboard
    pub fn render(&self) -> String {
        format_status(&self.headline, self.entries.as_slice())
    }

    fn with_entries(&self, entries: Vec<StatusEntry>) -> Self {
        debug_assert!(!entries.is_empty());
        Self {
            headline: self.headline.clone(),
            entries: EntryList(entries),
        }
    }
}

/// Remove the element at `source` and reinsert it at `destination`.
///
/// The input is left untouched. Both indices must be positions in `items`.
pub fn reorder<T: Clone>(items: &[T], source: usize, destination: usize) -> Result<Vec<T>, StatusError> {
    let len = items.len();
    for index in [source, destination] {
        if index >= len {
            return Err(StatusError::IndexOutOfRange { index, len });
        }
    }

    let mut result = items.to_vec();
    let removed = result.remove(source);
    result.insert(destination, removed);
    Ok(result)
}
