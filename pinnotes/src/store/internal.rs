use std::collections::HashSet;
use log::{debug, error, trace};
use time::format_description::{self, OwnedFormatItem};

use crate::config::app_config::{AppConfig, NewNotePosition};
use crate::data::{Note, NoteDraft, NoteFilter, NoteId};
use crate::id_generator::IdGenerator;
use crate::lib_constants::MAX_PINNED_NOTES;
use crate::seed::default_notes;
use crate::store::errors::{PersistenceError, RequiredField, StoreError};
use crate::util::StrExt;

pub use io_trait::{NoteSlotIo, ProductionNoteSlotIo};

mod io_trait;
mod query;

pub type NoteStore = NoteStoreImpl<ProductionNoteSlotIo>;

/// Owns the note list. Every successful mutation rewrites the whole list to
/// the persistence slot before returning.
#[derive(Debug)]
pub struct NoteStoreImpl<Io: NoteSlotIo> {
    io: Io,
    slot_key: String,
    timestamp_format: OwnedFormatItem,
    new_note_position: NewNotePosition,
    notes: Vec<Note>,
    ids: IdGenerator,
    save_failure: Option<PersistenceError>,
}

impl NoteStore {
    pub fn new(app_config: &AppConfig) -> Result<NoteStore, StoreError> {
        Self::with_io(
            app_config,
            ProductionNoteSlotIo::new(&app_config.data_directory),
        )
    }
}

impl<Io: NoteSlotIo> NoteStoreImpl<Io> {
    /// Hydrates the store from `io`, seeding it when the slot is empty.
    pub fn with_io(
        app_config: &AppConfig,
        io: Io,
    ) -> Result<NoteStoreImpl<Io>, StoreError> {
        let timestamp_format = format_description
            ::parse_owned::<2>(&app_config.timestamp_format)?;
        let slot_key = app_config.slot_key.clone();
        debug!("loading notes from slot \"{slot_key}\"");
        let stored = io.load(&slot_key)
            .map_err(PersistenceError::from)?;
        let (notes, is_seeded) = match stored {
            Some(data) => (parse_notes(&data)?, false),
            None if app_config.seed_defaults => {
                debug!("slot \"{slot_key}\" is empty, seeding example notes");
                (default_notes(), true)
            },
            None => {
                debug!("slot \"{slot_key}\" is empty, starting with no notes");
                (Vec::new(), true)
            },
        };
        debug!("hydrated {} notes", notes.len());
        let mut store = NoteStoreImpl {
            ids: IdGenerator::seeded(notes.iter().map(|note| &note.id)),
            io,
            slot_key,
            timestamp_format,
            new_note_position: app_config.new_note_position,
            notes,
            save_failure: None,
        };
        if is_seeded {
            store.persist();
        }
        Ok(store)
    }

    pub fn create(&mut self, draft: NoteDraft) -> Result<Note, StoreError> {
        let draft = validate_draft(draft)?;
        let now = self.io.now();
        let timestamp = now.format(&self.timestamp_format)?;
        let id = self.ids.next_id(now).ok_or(StoreError::IdsExhausted)?;
        let note = Note {
            id,
            title: draft.title,
            subtitle: draft.subtitle,
            content: draft.content,
            subject: draft.subject,
            created_at: timestamp.clone(),
            last_edited: timestamp,
            color: self.io.pick_color(),
            is_pinned: false,
        };
        debug!("creating note {}", note.id);
        trace!("created note: {note:?}");
        match self.new_note_position {
            NewNotePosition::Prepend => self.notes.insert(0, note.clone()),
            NewNotePosition::Append => self.notes.push(note.clone()),
        }
        self.persist();
        Ok(note)
    }

    pub fn update(
        &mut self,
        id: NoteId,
        draft: NoteDraft,
    ) -> Result<Note, StoreError> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        let draft = validate_draft(draft)?;
        let last_edited = self.io.now().format(&self.timestamp_format)?;
        debug!("updating note {id}");
        let note = &mut self.notes[index];
        note.title = draft.title;
        note.subtitle = draft.subtitle;
        note.content = draft.content;
        note.subject = draft.subject;
        note.last_edited = last_edited;
        let updated = note.clone();
        self.persist();
        Ok(updated)
    }

    /// Removing an unknown id is a no-op.
    pub fn delete(&mut self, id: NoteId) {
        let Some(index) = self.position(id) else {
            debug!("note {id} does not exist, nothing to delete");
            return
        };
        debug!("deleting note {id}");
        self.notes.remove(index);
        self.persist();
    }

    /// Returns the new pin state.
    pub fn toggle_pin(&mut self, id: NoteId) -> Result<bool, StoreError> {
        let index = self.position(id).ok_or(StoreError::NotFound(id))?;
        if !self.notes[index].is_pinned
            && self.pinned_count() >= MAX_PINNED_NOTES
        {
            debug!("refusing to pin note {id}: pin limit reached");
            return Err(StoreError::PinLimitExceeded { limit: MAX_PINNED_NOTES })
        }
        let note = &mut self.notes[index];
        note.is_pinned = !note.is_pinned;
        let is_pinned = note.is_pinned;
        debug!("note {id} is_pinned={is_pinned}");
        self.persist();
        Ok(is_pinned)
    }

    /// Notes containing `search` (ignoring case) in the title, subtitle or
    /// content, pinned first, newest first.
    pub fn query(&self, search: &str, filter: NoteFilter) -> Vec<&Note> {
        query::query_notes(&self.notes, search, filter)
    }

    pub fn get(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn pinned_count(&self) -> usize {
        self.notes.iter().filter(|note| note.is_pinned).count()
    }

    /// The most recent save failure since the last call, if any. Failed
    /// saves do not undo the mutation that triggered them.
    pub fn take_save_failure(&mut self) -> Option<PersistenceError> {
        self.save_failure.take()
    }

    fn position(&self, id: NoteId) -> Option<usize> {
        self.notes.iter().position(|note| note.id == id)
    }

    fn persist(&mut self) {
        match self.save_notes() {
            Ok(()) => trace!(
                "saved {} notes to slot \"{}\"",
                self.notes.len(),
                self.slot_key,
            ),
            Err(e) => {
                error!(
                    "failed to save notes to slot \"{}\": {e}",
                    self.slot_key,
                );
                self.save_failure = Some(e);
            },
        }
    }

    fn save_notes(&self) -> Result<(), PersistenceError> {
        let data = serde_json::to_string(&self.notes)?;
        self.io.save(&self.slot_key, &data)?;
        Ok(())
    }
}

fn validate_draft(draft: NoteDraft) -> Result<NoteDraft, StoreError> {
    let title = draft.title.trimmed();
    if title.is_empty() {
        return Err(StoreError::Validation(RequiredField::Title))
    }
    let content = draft.content.trimmed();
    if content.is_empty() {
        return Err(StoreError::Validation(RequiredField::Content))
    }
    Ok(
        NoteDraft {
            title,
            subtitle: draft.subtitle.trimmed(),
            content,
            subject: draft.subject.and_then(|s| s.nonblank_to_some()),
        }
    )
}

fn parse_notes(data: &str) -> Result<Vec<Note>, PersistenceError> {
    let notes = serde_json::from_str::<Vec<Note>>(data)?;
    let mut ids = HashSet::with_capacity(notes.len());
    if let Some(duplicate) = notes.iter().find(|note| !ids.insert(note.id)) {
        return Err(PersistenceError::DuplicateId(duplicate.id))
    }
    let pinned = notes.iter().filter(|note| note.is_pinned).count();
    if pinned > MAX_PINNED_NOTES {
        return Err(
            PersistenceError::TooManyPinned {
                count: pinned,
                limit: MAX_PINNED_NOTES,
            }
        )
    }
    Ok(notes)
}
