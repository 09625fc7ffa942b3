//! Configuration type definitions.

use serde::Deserialize;

use crate::common::resources::DEFAULT_REGIONS;

/// Raider.io public API base URL.
pub const DEFAULT_API_URL: &str = "https://raider.io/api/v1";

/// User-Agent sent with every profile request.
pub const DEFAULT_USER_AGENT: &str = "RaiderBot Discord Bot";

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub discord: DiscordConfig,
    pub raiderio: RaiderIoConfig,
    pub display: DisplayConfig,
    pub emojis: EmojiConfig,
}

/// Discord bot configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    pub token: String,
}

/// Raider.io API access.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RaiderIoConfig {
    pub api_url: String,
    /// Accepted for completeness; requests are sent without it.
    pub api_key: Option<String>,
    pub user_agent: String,
    /// Regions to try, in order.
    pub regions: Vec<String>,
}

impl Default for RaiderIoConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            api_key: None,
            user_agent: DEFAULT_USER_AGENT.to_string(),
            regions: DEFAULT_REGIONS.iter().map(|r| r.to_string()).collect(),
        }
    }
}

/// Embed presentation settings.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Maximum number of M+ runs listed in the embed.
    pub max_mythic_plus_runs: usize,
    /// Whether to list affixes under each run.
    pub show_affixes: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            max_mythic_plus_runs: 3,
            show_affixes: false,
        }
    }
}

/// Discord emoji IDs used to build `<:name:id>` tags.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EmojiConfig {
    pub horde: String,
    pub alliance: String,
    pub mechagon: String,
    pub cinderbrew: String,
    pub darkflame: String,
    pub floodgate: String,
    pub motherlode: String,
    pub priory: String,
    pub rookery: String,
    pub theater: String,
}

impl Default for EmojiConfig {
    fn default() -> Self {
        Self {
            horde: "1366508841042444368".to_string(),
            alliance: "1366508892741308638".to_string(),
            mechagon: "1366478770353078344".to_string(),
            cinderbrew: "1366478766469156945".to_string(),
            darkflame: "1366478767400161391".to_string(),
            floodgate: "1366478768880746527".to_string(),
            motherlode: "1366478771359715508".to_string(),
            priory: "1366478772295041041".to_string(),
            rookery: "1366478773934886912".to_string(),
            theater: "1366478775184916480".to_string(),
        }
    }
}

impl EmojiConfig {
    /// All emoji IDs paired with their config key, for validation and logging.
    pub fn entries(&self) -> [(&'static str, &str); 10] {
        [
            ("horde", &self.horde),
            ("alliance", &self.alliance),
            ("mechagon", &self.mechagon),
            ("cinderbrew", &self.cinderbrew),
            ("darkflame", &self.darkflame),
            ("floodgate", &self.floodgate),
            ("motherlode", &self.motherlode),
            ("priory", &self.priory),
            ("rookery", &self.rookery),
            ("theater", &self.theater),
        ]
    }
}
