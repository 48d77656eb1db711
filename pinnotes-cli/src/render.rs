use pinnotes::data::Note;

const PIN_MARKER: &str = "*";

pub fn list_line(note: &Note) -> String {
    let marker = if note.is_pinned { PIN_MARKER } else { " " };
    if note.subtitle.is_empty() {
        format!("{}\t{marker}\t{}", note.id, note.title)
    } else {
        format!("{}\t{marker}\t{} - {}", note.id, note.title, note.subtitle)
    }
}

pub fn details(note: &Note) -> String {
    let mut ret = format!("{}\n", note.title);
    if !note.subtitle.is_empty() {
        ret += &format!("{}\n", note.subtitle);
    }
    ret += &format!("\n{}\n\n", note.content);
    if let Some(subject) = &note.subject {
        ret += &format!("subject: {subject}\n");
    }
    ret += &format!(
        "id: {}\npinned: {}\ncolor: {}\ncreated: {}\nedited: {}",
        note.id,
        if note.is_pinned { "yes" } else { "no" },
        note.color,
        note.created_at,
        note.last_edited,
    );
    ret
}
