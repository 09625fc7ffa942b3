//! Configuration validation.
//!
//! Validates configuration values and provides helpful error messages.

use fancy_regex::Regex;
use reqwest::Url;

use crate::common::error::ConfigError;
use crate::common::resources::KNOWN_REGIONS;
use crate::config::types::Config;

/// Discord snowflakes are 17-20 decimal digits.
const SNOWFLAKE_PATTERN: &str = r"^\d{17,20}$";

/// Validate a configuration and return detailed errors.
pub fn validate_config(config: &Config) -> Result<(), ConfigError> {
    let mut errors = Vec::new();

    // Validate Discord config
    if config.discord.token.is_empty() {
        errors.push("discord.token is required (set DISCORD_TOKEN)".to_string());
    }
    if config.discord.token == "YOUR_DISCORD_TOKEN_HERE" {
        errors.push("discord.token has not been configured (still using placeholder)".to_string());
    }

    // Validate Raider.io config
    match Url::parse(&config.raiderio.api_url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(format!(
            "raiderio.api_url must be http(s), got scheme '{}'",
            url.scheme()
        )),
        Err(e) => errors.push(format!(
            "raiderio.api_url '{}' is not a valid URL: {}",
            config.raiderio.api_url, e
        )),
    }
    if config.raiderio.regions.is_empty() {
        errors.push("raiderio.regions is empty - no region to search".to_string());
    }
    for (i, region) in config.raiderio.regions.iter().enumerate() {
        if !KNOWN_REGIONS.contains(&region.as_str()) {
            errors.push(format!(
                "raiderio.regions[{}] '{}' is not a known region (use: {})",
                i,
                region,
                KNOWN_REGIONS.join(", ")
            ));
        }
    }

    // Validate display config
    if config.display.max_mythic_plus_runs == 0 {
        errors.push("display.max_mythic_plus_runs must be at least 1".to_string());
    }

    // Validate emoji IDs
    let snowflake = Regex::new(SNOWFLAKE_PATTERN).map_err(|e| ConfigError::ParseError {
        message: e.to_string(),
    })?;
    for (name, id) in config.emojis.entries() {
        if !snowflake.is_match(id).unwrap_or(false) {
            errors.push(format!(
                "emojis.{} '{}' is not a Discord emoji ID",
                name, id
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError {
            message: errors.join("\n"),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::types::*;

    fn make_valid_config() -> Config {
        let mut config = Config::default();
        config.discord.token = "valid_token_here".to_string();
        config
    }

    #[test]
    fn test_valid_config_passes() {
        let config = make_valid_config();
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_empty_token_fails() {
        let mut config = make_valid_config();
        config.discord.token = String::new();

        let result = validate_config(&config);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("discord.token"));
    }

    #[test]
    fn test_placeholder_token_fails() {
        let mut config = make_valid_config();
        config.discord.token = "YOUR_DISCORD_TOKEN_HERE".to_string();

        let result = validate_config(&config);
        assert!(result.unwrap_err().to_string().contains("placeholder"));
    }

    #[test]
    fn test_bad_api_url_fails() {
        let mut config = make_valid_config();
        config.raiderio.api_url = "not a url".to_string();

        let result = validate_config(&config);
        assert!(result.unwrap_err().to_string().contains("raiderio.api_url"));
    }

    #[test]
    fn test_unknown_region_fails() {
        let mut config = make_valid_config();
        config.raiderio.regions = vec!["us".to_string(), "mars".to_string()];

        let result = validate_config(&config);
        assert!(result.unwrap_err().to_string().contains("'mars'"));
    }

    #[test]
    fn test_empty_regions_fails() {
        let mut config = make_valid_config();
        config.raiderio.regions.clear();

        let result = validate_config(&config);
        assert!(result.unwrap_err().to_string().contains("regions is empty"));
    }

    #[test]
    fn test_zero_runs_fails() {
        let mut config = make_valid_config();
        config.display = DisplayConfig {
            max_mythic_plus_runs: 0,
            show_affixes: false,
        };

        let result = validate_config(&config);
        assert!(result.unwrap_err().to_string().contains("max_mythic_plus_runs"));
    }

    #[test]
    fn test_non_numeric_emoji_id_fails() {
        let mut config = make_valid_config();
        config.emojis.rookery = "rookery".to_string();

        let result = validate_config(&config);
        assert!(result.unwrap_err().to_string().contains("emojis.rookery"));
    }
}
