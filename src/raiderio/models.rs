//! Raider.io character profile response model.
//!
//! Every section except the identity strings is optional: the API omits
//! whatever was not requested or is unknown for the character.

use std::collections::HashMap;
use std::fmt;

use serde::de::{Deserializer, MapAccess, Visitor};
use serde::Deserialize;
use serde_json::Number;

/// Response body of `GET /characters/profile`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CharacterProfile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub realm: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub class: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub race: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub active_spec_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub profile_url: String,
    pub active_spec_role: Option<String>,
    pub faction: Option<String>,
    pub thumbnail_url: Option<String>,
    pub gear: Option<Gear>,
    pub guild: Option<Guild>,
    pub mythic_plus_scores_by_season: Option<Vec<SeasonScores>>,
    pub mythic_plus_ranks: Option<HashMap<String, RankEntry>>,
    pub mythic_plus_best_runs: Option<Vec<MythicPlusRun>>,
    pub raid_progression: Option<RaidProgression>,
    pub achievement_points: Option<u64>,
    pub last_crawled_at: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Gear {
    /// Kept as a JSON number so it prints exactly as the API sent it.
    pub item_level_equipped: Option<Number>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Guild {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    pub realm: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct SeasonScores {
    #[serde(default, deserialize_with = "null_as_default")]
    pub season: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub scores: Scores,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Scores {
    pub all: Option<Number>,
}

/// Realm placement for one ranking bracket.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RankEntry {
    pub realm: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MythicPlusRun {
    #[serde(default, deserialize_with = "null_as_default")]
    pub dungeon: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mythic_level: u32,
    pub score: Option<f64>,
    pub url: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub affixes: Vec<Affix>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Affix {
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RaidProgress {
    pub summary: Option<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub normal_bosses_killed: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub heroic_bosses_killed: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub mythic_bosses_killed: u32,
}

/// Treat an explicit `null` like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Raid progression keyed by raid slug, in the order the API listed them.
///
/// The first entry is the current tier.
#[derive(Debug, Clone, Default)]
pub struct RaidProgression(pub Vec<(String, RaidProgress)>);

impl RaidProgression {
    pub fn latest(&self) -> Option<&(String, RaidProgress)> {
        self.0.first()
    }

    pub fn iter(&self) -> impl Iterator<Item = &(String, RaidProgress)> {
        self.0.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<'de> Deserialize<'de> for RaidProgression {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct OrderedRaids;

        impl<'de> Visitor<'de> for OrderedRaids {
            type Value = RaidProgression;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of raid slug to progress")
            }

            fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
            where
                A: MapAccess<'de>,
            {
                let mut raids = Vec::with_capacity(map.size_hint().unwrap_or(0));
                while let Some((slug, progress)) = map.next_entry::<String, RaidProgress>()? {
                    raids.push((slug, progress));
                }
                Ok(RaidProgression(raids))
            }
        }

        deserializer.deserialize_map(OrderedRaids)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_profile_parses() {
        let profile: CharacterProfile = serde_json::from_str(r#"{"name": "Thrall"}"#).unwrap();
        assert_eq!(profile.name, "Thrall");
        assert!(profile.gear.is_none());
        assert!(profile.raid_progression.is_none());
    }

    #[test]
    fn test_raid_progression_keeps_api_order() {
        let json = r#"{
            "raid_progression": {
                "liberation-of-undermine": {"summary": "8/8 H", "normal_bosses_killed": 8, "heroic_bosses_killed": 8, "mythic_bosses_killed": 0},
                "blackrock-depths": {"summary": "", "normal_bosses_killed": 0, "heroic_bosses_killed": 0, "mythic_bosses_killed": 0},
                "nerubar-palace": {"summary": "8/8 M", "normal_bosses_killed": 8, "heroic_bosses_killed": 8, "mythic_bosses_killed": 8}
            }
        }"#;
        let profile: CharacterProfile = serde_json::from_str(json).unwrap();
        let raids = profile.raid_progression.unwrap();

        let slugs: Vec<&str> = raids.iter().map(|(slug, _)| slug.as_str()).collect();
        assert_eq!(
            slugs,
            vec!["liberation-of-undermine", "blackrock-depths", "nerubar-palace"]
        );
        assert_eq!(raids.latest().unwrap().1.summary.as_deref(), Some("8/8 H"));
    }

    #[test]
    fn test_numbers_keep_their_representation() {
        let json = r#"{
            "gear": {"item_level_equipped": 639},
            "mythic_plus_scores_by_season": [{"season": "season-tww-2", "scores": {"all": 2834.5}}]
        }"#;
        let profile: CharacterProfile = serde_json::from_str(json).unwrap();

        let ilvl = profile.gear.unwrap().item_level_equipped.unwrap();
        assert_eq!(ilvl.to_string(), "639");
        let score = profile.mythic_plus_scores_by_season.unwrap()[0]
            .scores
            .all
            .clone()
            .unwrap();
        assert_eq!(score.to_string(), "2834.5");
    }

    #[test]
    fn test_null_nested_values_fall_back_to_defaults() {
        let json = r#"{
            "name": "Thrall",
            "mythic_plus_best_runs": [
                {"dungeon": "The Rookery", "mythic_level": null, "score": null, "affixes": null}
            ],
            "raid_progression": {
                "nerubar-palace": {"summary": null, "normal_bosses_killed": null, "heroic_bosses_killed": 2, "mythic_bosses_killed": null}
            },
            "guild": {"name": null, "realm": null}
        }"#;
        let profile: CharacterProfile = serde_json::from_str(json).unwrap();

        let run = &profile.mythic_plus_best_runs.unwrap()[0];
        assert_eq!(run.dungeon, "The Rookery");
        assert_eq!(run.mythic_level, 0);
        assert!(run.score.is_none());
        assert!(run.affixes.is_empty());

        let raids = profile.raid_progression.unwrap();
        let (_, raid) = raids.latest().unwrap();
        assert_eq!(raid.normal_bosses_killed, 0);
        assert_eq!(raid.heroic_bosses_killed, 2);
        assert!(profile.guild.unwrap().name.is_empty());
    }
}
