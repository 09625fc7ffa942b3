//! Environment variable overrides for configuration.
//!
//! Supports overriding config values with environment variables:
//! - `DISCORD_TOKEN` - Discord bot token
//! - `RAIDERIO_API_URL` - Raider.io API base URL
//! - `RAIDERIO_API_KEY` - Raider.io API key (unused by requests)
//! - `RAIDERIO_REGIONS` - Comma-separated region list, e.g. `us,eu`
//! - `MAX_MYTHIC_PLUS_RUNS` - Number of best runs to list
//! - `SHOW_AFFIXES` - `true`/`false`
//! - `<NAME>_EMOJI_ID` - Custom emoji IDs (horde, alliance and one per dungeon)

use std::env;

use crate::common::error::ConfigError;
use crate::config::types::Config;

/// Environment variable holding the config file path.
const CONFIG_PATH_VAR: &str = "RAIDERBOT_CONFIG";

/// Apply overrides from the process environment.
pub fn apply_env_overrides(config: Config) -> Result<Config, ConfigError> {
    apply_overrides(config, |key| env::var(key).ok())
}

/// Apply overrides read through `lookup`.
///
/// Empty values are ignored so that a blank line in `.env` does not wipe a
/// default.
pub fn apply_overrides<F>(mut config: Config, lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

    if let Some(token) = get("DISCORD_TOKEN") {
        config.discord.token = token;
    }

    if let Some(url) = get("RAIDERIO_API_URL") {
        config.raiderio.api_url = url;
    }
    if let Some(key) = get("RAIDERIO_API_KEY") {
        config.raiderio.api_key = Some(key);
    }
    if let Some(regions) = get("RAIDERIO_REGIONS") {
        config.raiderio.regions = regions
            .split(',')
            .map(|r| r.trim().to_lowercase())
            .filter(|r| !r.is_empty())
            .collect();
    }

    if let Some(max_runs) = get("MAX_MYTHIC_PLUS_RUNS") {
        config.display.max_mythic_plus_runs =
            max_runs.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "MAX_MYTHIC_PLUS_RUNS".to_string(),
                message: format!("'{}' is not a number", max_runs),
            })?;
    }
    if let Some(show) = get("SHOW_AFFIXES") {
        config.display.show_affixes = parse_bool(&show).ok_or_else(|| ConfigError::InvalidValue {
            field: "SHOW_AFFIXES".to_string(),
            message: format!("'{}' is not a boolean", show),
        })?;
    }

    let emojis = &mut config.emojis;
    for (var, slot) in [
        ("HORDE_EMOJI_ID", &mut emojis.horde),
        ("ALLIANCE_EMOJI_ID", &mut emojis.alliance),
        ("MECHAGON_EMOJI_ID", &mut emojis.mechagon),
        ("CINDERBREW_EMOJI_ID", &mut emojis.cinderbrew),
        ("DARKFLAME_EMOJI_ID", &mut emojis.darkflame),
        ("FLOODGATE_EMOJI_ID", &mut emojis.floodgate),
        ("MOTHERLODE_EMOJI_ID", &mut emojis.motherlode),
        ("PRIORY_EMOJI_ID", &mut emojis.priory),
        ("ROOKERY_EMOJI_ID", &mut emojis.rookery),
        ("THEATER_EMOJI_ID", &mut emojis.theater),
    ] {
        if let Some(id) = get(var) {
            *slot = id.trim().to_string();
        }
    }

    Ok(config)
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Some(true),
        "false" | "0" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Get the config file path from environment or use default.
///
/// Checks `RAIDERBOT_CONFIG`, otherwise returns "raiderbot.conf".
pub fn get_config_path() -> String {
    env::var(CONFIG_PATH_VAR).unwrap_or_else(|_| "raiderbot.conf".to_string())
}
