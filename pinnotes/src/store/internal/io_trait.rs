use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};
use log::{error, trace};
use time::OffsetDateTime;

use crate::lib_constants::{SLOT_FILE_EXTENSION, TMP_FILENAME_INFIX};
use crate::rng::{make_uuid, pick_color};

/// Everything the note store needs from its surroundings: the key/value
/// persistence slot, the clock and a source of note colors.
pub trait NoteSlotIo {
    /// `Ok(None)` means nothing was ever saved under `key`.
    fn load(&self, key: &str) -> io::Result<Option<String>>;

    fn save(&self, key: &str, data: &str) -> io::Result<()>;

    fn now(&self) -> OffsetDateTime;

    fn pick_color(&self) -> String;
}

/// Keeps each slot in its own file under the data directory.
#[derive(Debug)]
pub struct ProductionNoteSlotIo {
    data_directory: PathBuf,
}

impl ProductionNoteSlotIo {
    pub fn new(data_directory: impl Into<PathBuf>) -> Self {
        ProductionNoteSlotIo {
            data_directory: data_directory.into(),
        }
    }

    fn slot_path(&self, key: &str) -> io::Result<PathBuf> {
        validate_key(key)?;
        Ok(self.data_directory.join(format!("{key}.{SLOT_FILE_EXTENSION}")))
    }

    fn tmp_path(&self, key: &str) -> PathBuf {
        self.data_directory.join(
            format!(
                "{key}{TMP_FILENAME_INFIX}{}",
                make_uuid(&mut rand::rng()),
            )
        )
    }
}

impl NoteSlotIo for ProductionNoteSlotIo {
    fn load(&self, key: &str) -> io::Result<Option<String>> {
        let path = self.slot_path(key)?;
        trace!("reading slot \"{key}\" from \"{}\"", path.display());
        match fs::read_to_string(&path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn save(&self, key: &str, data: &str) -> io::Result<()> {
        let path = self.slot_path(key)?;
        fs::create_dir_all(&self.data_directory)?;
        let tmp_path = self.tmp_path(key);
        trace!(
            "writing slot \"{key}\" through tmp file \"{}\"",
            tmp_path.display(),
        );
        replace_file(&tmp_path, &path, data)
    }

    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_local()
            .unwrap_or_else(|_| OffsetDateTime::now_utc())
    }

    fn pick_color(&self) -> String {
        pick_color(&mut rand::rng())
    }
}

/// Writes `data` to `tmp_path` and renames it over `path`. The tmp file is
/// removed when either step fails.
fn replace_file(tmp_path: &Path, path: &Path, data: &str) -> io::Result<()> {
    if let Err(e) = fs::write(tmp_path, data) {
        error!(
            "failed to write tmp file \"{}\": {e}",
            tmp_path.display(),
        );
        remove_tmp_file(tmp_path);
        return Err(e)
    }
    if let Err(e) = fs::rename(tmp_path, path) {
        error!(
            "failed to rename tmp file \"{}\" to \"{}\": {e}",
            tmp_path.display(),
            path.display(),
        );
        remove_tmp_file(tmp_path);
        return Err(e)
    }
    Ok(())
}

fn remove_tmp_file(tmp_path: &Path) {
    match fs::remove_file(tmp_path) {
        Ok(()) => {},
        // the write failed before creating it
        Err(e) if e.kind() == ErrorKind::NotFound => {},
        Err(e) => error!(
            "failed to remove tmp file \"{}\": {e}",
            tmp_path.display(),
        ),
    }
}

// slot keys become file names
fn validate_key(key: &str) -> io::Result<()> {
    if key.is_empty()
        || key.starts_with('.')
        || key.contains(['/', '\\'])
        || key.contains(TMP_FILENAME_INFIX)
    {
        return Err(
            io::Error::new(
                ErrorKind::InvalidInput,
                format!("invalid slot key \"{key}\""),
            )
        )
    }
    Ok(())
}
