use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(
    Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd,
    Serialize,
)]
#[serde(transparent)]
pub struct NoteId(pub u64);

impl fmt::Display for NoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl FromStr for NoteId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        u64::from_str(s.trim()).map(NoteId)
    }
}

/// A stored note, in the shape it takes in the persistence slot.
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub created_at: String,
    pub last_edited: String,
    pub color: String,
    #[serde(default)]
    pub is_pinned: bool,
}

impl Note {
    pub fn matches(&self, lowercase_term: &str) -> bool {
        [&self.title, &self.subtitle, &self.content]
            .into_iter()
            .any(|field| field.to_lowercase().contains(lowercase_term))
    }
}

/// User input for creating or editing a note; trimmed and validated by the
/// store.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NoteDraft {
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub subject: Option<String>,
}

impl NoteDraft {
    pub fn new(
        title: impl Into<String>,
        subtitle: impl Into<String>,
        content: impl Into<String>,
    ) -> Self {
        NoteDraft {
            title: title.into(),
            subtitle: subtitle.into(),
            content: content.into(),
            subject: None,
        }
    }

    pub fn with_subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = Some(subject.into());
        self
    }
}

impl From<&Note> for NoteDraft {
    fn from(note: &Note) -> Self {
        NoteDraft {
            title: note.title.clone(),
            subtitle: note.subtitle.clone(),
            content: note.content.clone(),
            subject: note.subject.clone(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum NoteFilter {
    #[default]
    All,
    Pinned,
    Unpinned,
}

impl NoteFilter {
    pub fn accepts(self, note: &Note) -> bool {
        match self {
            NoteFilter::All => true,
            NoteFilter::Pinned => note.is_pinned,
            NoteFilter::Unpinned => !note.is_pinned,
        }
    }
}

#[derive(Debug, Error)]
#[error("unknown filter \"{0}\", expected one of: all, pinned, unpinned")]
pub struct NoteFilterParseError(String);

impl FromStr for NoteFilter {
    type Err = NoteFilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(NoteFilter::All),
            "pinned" => Ok(NoteFilter::Pinned),
            "unpinned" => Ok(NoteFilter::Unpinned),
            _ => Err(NoteFilterParseError(s.to_owned())),
        }
    }
}
