use anyhow::{Result, bail};

use super::AppConfig;

pub fn validate(cfg: &AppConfig) -> Result<()> {
    let mut errors: Vec<String> = Vec::new();

    if cfg.logging.rust_log.trim().is_empty() {
        errors.push("logging.rust_log must not be empty".to_string());
    }

    let database = &cfg.database;
    if database.url.trim().is_empty() {
        errors.push("database.url must not be empty".to_string());
    }

    if database.max_connections == 0 {
        errors.push("database.max_connections must be > 0".to_string());
    }

    if database.min_idle > database.max_connections {
        errors.push(format!(
            "database.min_idle ({}) must be <= database.max_connections ({})",
            database.min_idle, database.max_connections
        ));
    }

    // Every pooled connection to an in-memory SQLite URL opens its own database.
    if database.is_in_memory_sqlite() && database.max_connections > 1 {
        errors.push(format!(
            "database.max_connections must be 1 for in-memory sqlite (got {})",
            database.max_connections
        ));
    }

    if errors.is_empty() {
        return Ok(());
    }

    bail!("invalid app config:\n- {}", errors.join("\n- "))
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::config::{AppConfig, DatabaseConfig};

    #[test]
    fn defaults_are_valid() {
        validate(&AppConfig::default()).expect("default config should validate");
    }

    #[test]
    fn in_memory_sqlite_helper_is_valid() {
        let cfg = AppConfig {
            database: DatabaseConfig::in_memory_sqlite(),
            ..AppConfig::default()
        };
        validate(&cfg).expect("single-connection memory db should validate");
    }

    #[test]
    fn collects_every_problem_in_one_error() {
        let cfg = AppConfig {
            database: DatabaseConfig {
                url: " ".to_string(),
                max_connections: 0,
                min_idle: 2,
            },
            ..AppConfig::default()
        };

        let message = validate(&cfg).expect_err("config should be rejected").to_string();
        assert!(message.contains("database.url must not be empty"));
        assert!(message.contains("database.max_connections must be > 0"));
        assert!(message.contains("database.min_idle (2) must be <= database.max_connections (0)"));
    }

    #[test]
    fn rejects_pooled_in_memory_sqlite() {
        let cfg = AppConfig {
            database: DatabaseConfig {
                url: "sqlite::memory:".to_string(),
                max_connections: 4,
                min_idle: 1,
            },
            ..AppConfig::default()
        };

        let message = validate(&cfg).expect_err("config should be rejected").to_string();
        assert!(message.contains("must be 1 for in-memory sqlite (got 4)"));
    }
}
