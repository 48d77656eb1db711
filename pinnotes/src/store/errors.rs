use std::fmt;
use std::io::Error as IoError;
use thiserror::Error;
use time::error::{Format as FormatError, InvalidFormatDescription};
use crate::data::NoteId;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("{0} must not be empty")]
    Validation(RequiredField),

    #[error("note {0} not found")]
    NotFound(NoteId),

    #[error("cannot pin more than {limit} notes")]
    PinLimitExceeded {
        limit: usize,
    },

    #[error("no note ids left")]
    IdsExhausted,

    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    #[error("invalid timestamp format: {0}")]
    TimestampFormat(#[from] InvalidFormatDescription),

    #[error("cannot format timestamp: {0}")]
    Timestamp(#[from] FormatError),
}

#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("note slot io error: {0}")]
    Io(#[from] IoError),

    #[error("stored notes are malformed: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("stored notes contain id {0} more than once")]
    DuplicateId(NoteId),

    #[error("stored notes have {count} pinned notes, at most {limit} allowed")]
    TooManyPinned {
        count: usize,
        limit: usize,
    },
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RequiredField {
    Title,
    Content,
}

impl fmt::Display for RequiredField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(
            match self {
                RequiredField::Title => "title",
                RequiredField::Content => "content",
            }
        )
    }
}
