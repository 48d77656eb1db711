use std::path::PathBuf;
use serde::{Deserialize, Serialize};
use crate::lib_constants::{DEFAULT_DATA_DIR, DEFAULT_SLOT_KEY, DEFAULT_TIMESTAMP_FORMAT};

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
pub struct AppConfig {
    #[serde(default = "app_config_default_data_dir")]
    pub data_directory: PathBuf,

    /// Name of the persistence slot holding the whole note list.
    #[serde(default = "app_config_default_slot_key")]
    pub slot_key: String,

    /// `time` crate format description for `createdAt`/`lastEdited`.
    #[serde(default = "app_config_default_timestamp_format")]
    pub timestamp_format: String,

    #[serde(default)]
    pub new_note_position: NewNotePosition,

    /// Start from the example notes when the slot is empty.
    #[serde(default = "app_config_default_seed_defaults")]
    pub seed_defaults: bool,
}

#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NewNotePosition {
    #[default]
    Prepend,
    Append,
}

pub fn app_config_default_data_dir() -> PathBuf {
    DEFAULT_DATA_DIR.into()
}

pub fn app_config_default_slot_key() -> String {
    DEFAULT_SLOT_KEY.into()
}

pub fn app_config_default_timestamp_format() -> String {
    DEFAULT_TIMESTAMP_FORMAT.into()
}

pub fn app_config_default_seed_defaults() -> bool {
    true
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            data_directory: app_config_default_data_dir(),
            slot_key: app_config_default_slot_key(),
            timestamp_format: app_config_default_timestamp_format(),
            new_note_position: NewNotePosition::default(),
            seed_defaults: app_config_default_seed_defaults(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn app_config_defaults_match() {
        assert_eq!(
            AppConfig::default(),
            serde_json::de::from_str("{}").unwrap(),
        )
    }

    #[test]
    fn new_note_position_is_lowercase() {
        assert_eq!(
            serde_json::from_str::<NewNotePosition>("\"append\"").unwrap(),
            NewNotePosition::Append,
        );
    }
}
