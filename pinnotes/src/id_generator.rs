use time::OffsetDateTime;

use crate::data::NoteId;

/// Hands out note ids derived from the wall clock, in unix milliseconds,
/// bumping past the previous id when the clock has not moved forward.
#[derive(Clone, Debug, Default)]
pub struct IdGenerator {
    last: Option<u64>,
}

impl IdGenerator {
    /// Continues after the largest of `ids`.
    pub fn seeded<'a>(ids: impl IntoIterator<Item = &'a NoteId>) -> Self {
        IdGenerator {
            last: ids.into_iter().map(|id| id.0).max(),
        }
    }

    /// `None` once the previous id was `u64::MAX`; the generator is left
    /// unchanged then.
    pub fn next_id(&mut self, now: OffsetDateTime) -> Option<NoteId> {
        let now = unix_millis(now);
        let next = match self.last {
            None => now,
            Some(last) => now.max(last.checked_add(1)?),
        };
        self.last = Some(next);
        Some(NoteId(next))
    }
}

fn unix_millis(time: OffsetDateTime) -> u64 {
    u64::try_from(time.unix_timestamp_nanos() / 1_000_000).unwrap_or(0)
}
