//! Configuration validation.

use super::Config;
use crate::error::{MigrateError, Result};

/// Validate the configuration.
pub fn validate(config: &Config) -> Result<()> {
    // Source validation
    if config.source.host.is_empty() {
        return Err(MigrateError::Config("source.host is required".into()));
    }
    if config.source.database.is_empty() {
        return Err(MigrateError::Config("source.database is required".into()));
    }
    if config.source.user.is_empty() {
        return Err(MigrateError::Config("source.user is required".into()));
    }

    // Target validation
    if config.target.host.is_empty() {
        return Err(MigrateError::Config("target.host is required".into()));
    }
    if config.target.database.is_empty() {
        return Err(MigrateError::Config("target.database is required".into()));
    }
    if config.target.user.is_empty() {
        return Err(MigrateError::Config("target.user is required".into()));
    }

    // Cannot migrate into the source database
    if config.source.host == config.target.host
        && config.source.port == config.target.port
        && config.source.database == config.target.database
    {
        return Err(MigrateError::Config(
            "source and target cannot be the same database".into(),
        ));
    }

    // Migration config validation
    if config.migration.batch_size == 0 {
        return Err(MigrateError::Config(
            "migration.batch_size must be at least 1".into(),
        ));
    }
    if config.migration.blog_ids.is_empty() {
        return Err(MigrateError::Config(
            "migration.blog_ids must list at least one blog".into(),
        ));
    }
    if config.migration.timezone.parse::<chrono_tz::Tz>().is_err() {
        return Err(MigrateError::Config(format!(
            "migration.timezone '{}' is not a recognized IANA timezone",
            config.migration.timezone
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MigrationConfig, SourceConfig, TargetConfig};

    fn valid_config() -> Config {
        Config {
            source: SourceConfig {
                host: "localhost".to_string(),
                port: 3306,
                database: "example_mt".to_string(),
                user: "root".to_string(),
                password: "password".to_string(),
                charset: "latin1".to_string(),
            },
            target: TargetConfig {
                host: "localhost".to_string(),
                port: 3306,
                database: "example_wp".to_string(),
                user: "root".to_string(),
                password: "password".to_string(),
                charset: "utf8".to_string(),
                table_prefix: "wp_".to_string(),
            },
            migration: MigrationConfig::default(),
        }
    }

    #[test]
    fn test_valid_config() {
        let config = valid_config();
        assert!(validate(&config).is_ok());
    }

    #[test]
    fn test_missing_source_host() {
        let mut config = valid_config();
        config.source.host = "".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_same_database_rejected() {
        let mut config = valid_config();
        config.target.database = "example_mt".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_zero_batch_size() {
        let mut config = valid_config();
        config.migration.batch_size = 0;
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_empty_blog_ids() {
        let mut config = valid_config();
        config.migration.blog_ids.clear();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_bad_timezone() {
        let mut config = valid_config();
        config.migration.timezone = "Mars/Olympus_Mons".to_string();
        assert!(validate(&config).is_err());
    }

    #[test]
    fn test_source_config_debug_redacts_password() {
        let mut config = valid_config();
        config.source.password = "super_secret_password_123".to_string();
        let debug_output = format!("{:?}", config.source);
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_password_123"));
    }

    #[test]
    fn test_target_config_debug_redacts_password() {
        let mut config = valid_config();
        config.target.password = "super_secret_password_456".to_string();
        let debug_output = format!("{:?}", config.target);
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("super_secret_password_456"));
    }
}
