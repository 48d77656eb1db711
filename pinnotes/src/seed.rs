use crate::data::{Note, NoteId};

const SEED_TIMESTAMP: &str = "1/1/2024, 9:00:00 AM";

struct SeedNote {
    id: u64,
    title: &'static str,
    subtitle: &'static str,
    content: &'static str,
    subject: Option<&'static str>,
    color: &'static str,
    is_pinned: bool,
}

const SEED_NOTES: &[SeedNote] = &[
    SeedNote {
        id: 3,
        title: "Welcome to your notes",
        subtitle: "Start here",
        content: "Create a note with a title and some content. \
            Pin the ones you need to keep in sight.",
        subject: Some("Getting started"),
        color: "sky",
        is_pinned: true,
    },
    SeedNote {
        id: 2,
        title: "Searching",
        subtitle: "",
        content: "Search matches titles, subtitles and content, \
            ignoring case.",
        subject: Some("Getting started"),
        color: "emerald",
        is_pinned: false,
    },
    SeedNote {
        id: 1,
        title: "Pinning",
        subtitle: "Up to seven at a time",
        content: "Pinned notes are listed before everything else. \
            At most seven notes can be pinned.",
        subject: None,
        color: "amber",
        is_pinned: false,
    },
];

/// The example notes a store starts with when nothing has been saved yet.
pub fn default_notes() -> Vec<Note> {
    SEED_NOTES.iter()
        .map(|seed| Note {
            id: NoteId(seed.id),
            title: seed.title.to_owned(),
            subtitle: seed.subtitle.to_owned(),
            content: seed.content.to_owned(),
            subject: seed.subject.map(str::to_owned),
            created_at: SEED_TIMESTAMP.to_owned(),
            last_edited: SEED_TIMESTAMP.to_owned(),
            color: seed.color.to_owned(),
            is_pinned: seed.is_pinned,
        })
        .collect()
}
