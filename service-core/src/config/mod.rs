use crate::error::AppError;
use config::{Config as Cfg, File};
use serde::Deserialize;

/// Server settings shared by every service binary.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub port: u16,
}

impl Config {
    /// Load from an optional `configuration` file, `APP__*` variables and `PORT`.
    ///
    /// `PORT` wins over `APP__PORT`. There is no default port: a missing value
    /// is a startup error rather than a silent bind to an arbitrary address.
    pub fn load() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let config = Cfg::builder()
            .add_source(File::with_name("configuration").required(false))
            .add_source(config::Environment::with_prefix("APP").separator("__"))
            .set_override_option("port", std::env::var("PORT").ok())?
            .build()?;

        config.try_deserialize().map_err(|e| {
            AppError::ConfigError(anyhow::anyhow!(
                "PORT is required but not set or invalid: {}",
                e
            ))
        })
    }
}
