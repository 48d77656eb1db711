use std::path::Path;
use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use crate::bin_constants::APP_CONFIG_ENV_PREFIX;
use crate::config::app_config::AppConfig;

pub trait FigmentExt {
    fn setup_app_config(
        self,
        config_file: Option<&Path>,
    ) -> Figment;
}

impl FigmentExt for Figment {
    fn setup_app_config(self, config_file: Option<&Path>) -> Figment {
        let figment = self.merge(Serialized::defaults(AppConfig::default()));
        let figment = match config_file {
            Some(config_file) => figment.merge(Toml::file_exact(config_file)),
            None => figment,
        };
        figment.merge(Env::prefixed(APP_CONFIG_ENV_PREFIX).global())
    }
}
