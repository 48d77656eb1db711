pub const APP_CONFIG_ENV_PREFIX: &str = "PINNOTES_";
