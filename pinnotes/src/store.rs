pub use errors::{PersistenceError, RequiredField, StoreError};
pub use internal::{NoteStore, NoteStoreImpl, NoteSlotIo, ProductionNoteSlotIo};
pub use crate::lib_constants::MAX_PINNED_NOTES;

mod errors;
mod internal;
