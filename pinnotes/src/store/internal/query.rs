use std::cmp::Ordering;
use crate::data::{Note, NoteFilter};

pub(super) fn query_notes<'a>(
    notes: &'a [Note],
    search: &str,
    filter: NoteFilter,
) -> Vec<&'a Note> {
    let term = search.to_lowercase();
    let mut ret = notes.iter()
        .filter(|note| term.is_empty() || note.matches(&term))
        .filter(|note| filter.accepts(note))
        .collect::<Vec<_>>();
    ret.sort_by(|a, b| display_order(a, b));
    ret
}

/// Pinned first, newest first within each group.
fn display_order(a: &Note, b: &Note) -> Ordering {
    b.is_pinned.cmp(&a.is_pinned)
        .then_with(|| b.id.cmp(&a.id))
}
