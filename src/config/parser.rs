//! Configuration file parsing (HOCON format).

use std::fs;
use std::path::Path;

use hocon::HoconLoader;
use tracing::info;

use crate::common::error::ConfigError;
use crate::config::types::Config;

/// Load configuration from a HOCON file.
pub fn load_config(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| ConfigError::IoError {
        path: path.display().to_string(),
        source,
    })?;
    load_config_str(&content)
}

/// Load configuration from a HOCON string.
pub fn load_config_str(content: &str) -> Result<Config, ConfigError> {
    HoconLoader::new()
        .load_str(content)
        .map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })?
        .resolve()
        .map_err(|e| ConfigError::ParseError {
            message: e.to_string(),
        })
}

/// Load configuration from `path` if it exists, otherwise use built-in defaults.
///
/// The bot is normally configured through environment variables alone, so a
/// missing file is not an error.
pub fn load_config_or_default(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
    let path = path.as_ref();
    if path.exists() {
        load_config(path)
    } else {
        info!("No config file at {}, using defaults", path.display());
        Ok(Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_partial_config_keeps_defaults() {
        let config = load_config_str(
            r#"
            discord { token = "abc" }
            display { show_affixes = true }
            "#,
        )
        .unwrap();

        assert_eq!(config.discord.token, "abc");
        assert!(config.display.show_affixes);
        assert_eq!(config.display.max_mythic_plus_runs, 3);
        assert_eq!(config.raiderio.regions, vec!["us", "eu", "kr", "tw"]);
    }

    #[test]
    fn test_load_region_list() {
        let config = load_config_str(r#"raiderio { regions = ["eu", "us"] }"#).unwrap();
        assert_eq!(config.raiderio.regions, vec!["eu", "us"]);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = load_config_or_default("definitely-not-here.conf").unwrap();
        assert!(config.discord.token.is_empty());
        assert_eq!(config.raiderio.api_url, "https://raider.io/api/v1");
    }

    #[test]
    fn test_load_config_reads_file() {
        let path = std::env::temp_dir().join(format!("raiderbot-{}.conf", std::process::id()));
        fs::write(&path, "display { max_mythic_plus_runs = 5 }").unwrap();

        let config = load_config(&path).unwrap();
        fs::remove_file(&path).ok();

        assert_eq!(config.display.max_mythic_plus_runs, 5);
    }

    #[test]
    fn test_unreadable_path_is_io_error() {
        let err = load_config(std::env::temp_dir()).unwrap_err();
        assert!(matches!(err, ConfigError::IoError { .. }));
    }
}
