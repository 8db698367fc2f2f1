use std::{collections::HashMap, path::Path};

use ::config as config_rs;
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;

/// Layered loading: `.env` file, then `SOFTUNI_*` environment variables with
/// `__` separating nested keys (e.g. `SOFTUNI_DATABASE__URL`).
pub trait EnvConfig: Sized + DeserializeOwned {
    const PREFIX: &'static str = "SOFTUNI";
    const SEPARATOR: &'static str = "__";

    fn load_dotenv() {
        // Load .env from crate root (falls back to current dir if missing)
        let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
        let _ = dotenvy::from_filename(manifest_dir.join(".env")).or_else(|_| dotenvy::dotenv());
    }

    fn validate(&self) -> Result<()> {
        Ok(())
    }

    fn environment() -> config_rs::Environment {
        config_rs::Environment::with_prefix(Self::PREFIX)
            .prefix_separator("_")
            .separator(Self::SEPARATOR)
            .try_parsing(true)
    }

    fn from_env() -> Result<Self> {
        Self::load_dotenv();
        Self::build(Self::environment())
    }

    /// Same mapping as [`EnvConfig::from_env`] but over an explicit set of
    /// variables instead of the process environment.
    fn from_vars<I, K, V>(vars: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let source: HashMap<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();
        Self::build(Self::environment().source(Some(source)))
    }

    fn build(environment: config_rs::Environment) -> Result<Self> {
        let settings = config_rs::Config::builder()
            .add_source(environment)
            .build()
            .context("failed to read environment variables for config")?;

        let cfg = settings
            .try_deserialize::<Self>()
            .context("failed to deserialize environment into config")?;

        cfg.validate()?;
        Ok(cfg)
    }
}

#[cfg(test)]
mod tests {
    use super::EnvConfig;
    use crate::config::AppConfig;

    #[test]
    fn maps_prefixed_nested_variables() {
        let cfg = AppConfig::from_vars([
            ("SOFTUNI_DATABASE__URL", "postgres://localhost/softuni"),
            ("SOFTUNI_DATABASE__MAX_CONNECTIONS", "4"),
            ("SOFTUNI_LOGGING__RUST_LOG", "debug"),
        ])
        .expect("config should load");

        assert_eq!(cfg.database.url, "postgres://localhost/softuni");
        assert_eq!(cfg.database.max_connections, 4);
        assert_eq!(cfg.database.min_idle, 1);
        assert_eq!(cfg.logging.rust_log, "debug");
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let cfg = AppConfig::from_vars(Vec::<(String, String)>::new()).expect("config should load");
        assert_eq!(cfg.database.url, "sqlite://softuni.db?mode=rwc");
        assert_eq!(cfg.logging.rust_log, "info");
    }

    #[test]
    fn validation_runs_after_deserializing() {
        let err = AppConfig::from_vars([
            ("SOFTUNI_DATABASE__URL", "sqlite::memory:"),
            ("SOFTUNI_DATABASE__MAX_CONNECTIONS", "3"),
        ])
        .expect_err("pooled memory db should be rejected");
        assert!(err.to_string().contains("invalid app config"));
    }
}
