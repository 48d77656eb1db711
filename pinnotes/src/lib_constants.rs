pub const MAX_PINNED_NOTES: usize = 7;

pub const DEFAULT_DATA_DIR: &str = ".pinnotes";
pub const DEFAULT_SLOT_KEY: &str = "notes";

// en-US `toLocaleString()` shape, e.g. "3/7/2025, 4:05:09 PM"
pub const DEFAULT_TIMESTAMP_FORMAT: &str =
    "[month padding:none]/[day padding:none]/[year], \
        [hour repr:12 padding:none]:[minute]:[second] [period]";

pub const NOTE_COLORS: &[&str] = &[
    "amber",
    "blue",
    "emerald",
    "fuchsia",
    "indigo",
    "lime",
    "orange",
    "pink",
    "rose",
    "sky",
    "teal",
    "violet",
];

// slot files live directly in the data directory
pub const SLOT_FILE_EXTENSION: &str = "json";
pub const TMP_FILENAME_INFIX: &str = ".tmp.";
