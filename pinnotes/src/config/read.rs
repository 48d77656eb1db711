use std::path::{Path, PathBuf};
use figment::Figment;
use log::debug;
use thiserror::Error;
use crate::config::app_config::AppConfig;
use crate::config::figment::FigmentExt;

pub struct ReadConfig {
    pub app_config: AppConfig,
    pub figment: Figment,
}

#[derive(Debug, Error)]
pub enum ReadConfigError {
    #[error("configuration file at {} does not exist", .0.display())]
    MissingFile(PathBuf),

    #[error(transparent)]
    Figment(#[from] Box<figment::Error>),
}

/// Layers the defaults, the optional TOML file and `PINNOTES_*` environment
/// variables over `figment`.
pub fn read_app_config(
    config_file: Option<&Path>,
    figment: Figment,
) -> Result<ReadConfig, ReadConfigError> {
    if let Some(config_file) = config_file
        && !config_file.is_file()
    {
        return Err(ReadConfigError::MissingFile(config_file.to_owned()));
    }
    let figment = figment.setup_app_config(config_file);
    let app_config = figment.extract::<AppConfig>()
        .map_err(Box::new)?;
    debug!("read app config: {app_config:?}");
    Ok(ReadConfig { app_config, figment })
}
