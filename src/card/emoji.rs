//! Emoji lookup tables for dungeons and factions.
//!
//! Built once at startup from the configured custom emoji IDs and shared
//! read-only afterwards.

use std::collections::HashMap;

use crate::config::types::EmojiConfig;

/// Shown when no table knows the dungeon.
pub const DEFAULT_DUNGEON_EMOJI: &str = "🏰";

const HORDE_DEFAULT_EMOJI: &str = "🔴";
const ALLIANCE_DEFAULT_EMOJI: &str = "🔵";

/// Unicode stand-ins used when a custom emoji is not configured.
const FALLBACK_EMOJIS: [(&str, &str); 10] = [
    ("Cinderbrew Meadery", "🍺"),
    ("Darkflame Cleft", "🔥"),
    ("Operation: Floodgate", "💧"),
    ("Mechagon Workshop", "🤖"),
    ("The MOTHERLODE!!", "💰"),
    ("Priory of the Sacred Flame", "📜"),
    ("The Rookery", "🐦"),
    ("Theater of Pain", "🎭"),
    ("horde", HORDE_DEFAULT_EMOJI),
    ("alliance", ALLIANCE_DEFAULT_EMOJI),
];

/// Maps a dungeon name containing any of `fragments` to `canonical`.
struct DungeonRule {
    fragments: &'static [&'static str],
    canonical: &'static str,
}

impl DungeonRule {
    fn matches(&self, dungeon: &str) -> bool {
        self.fragments.iter().any(|fragment| dungeon.contains(fragment))
    }
}

/// Partial-name rules, evaluated in order; the first match wins.
const DUNGEON_RULES: [DungeonRule; 8] = [
    DungeonRule { fragments: &["Cinderbrew"], canonical: "Cinderbrew Meadery" },
    DungeonRule { fragments: &["Darkflame"], canonical: "Darkflame Cleft" },
    DungeonRule { fragments: &["Floodgate"], canonical: "Operation: Floodgate" },
    DungeonRule { fragments: &["Mechagon"], canonical: "Mechagon Workshop" },
    DungeonRule { fragments: &["MOTHERLODE"], canonical: "The MOTHERLODE!!" },
    DungeonRule { fragments: &["Priory"], canonical: "Priory of the Sacred Flame" },
    DungeonRule { fragments: &["Rookery"], canonical: "The Rookery" },
    DungeonRule { fragments: &["Theater", "Pain"], canonical: "Theater of Pain" },
];

/// Which step of the lookup chain produced an emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmojiSource {
    CustomExact,
    CustomRule,
    FallbackExact,
    FallbackRule,
    Default,
}

/// A resolved dungeon emoji and where it came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DungeonEmoji<'a> {
    pub emoji: &'a str,
    pub source: EmojiSource,
}

/// Immutable emoji tables.
#[derive(Debug, Clone)]
pub struct LookupTables {
    dungeon_emojis: HashMap<String, String>,
    faction_emojis: HashMap<String, String>,
    fallback_emojis: HashMap<String, String>,
}

impl LookupTables {
    /// Build the tables from configured emoji IDs.
    pub fn new(ids: &EmojiConfig) -> Self {
        let dungeon_emojis = [
            ("Cinderbrew Meadery", "cinderbrew", &ids.cinderbrew),
            ("Darkflame Cleft", "darkflamecleft", &ids.darkflame),
            ("Operation: Floodgate", "floodgate", &ids.floodgate),
            ("Mechagon Workshop", "mechagon", &ids.mechagon),
            ("The MOTHERLODE!!", "motherload", &ids.motherlode),
            ("Priory of the Sacred Flame", "priory", &ids.priory),
            ("The Rookery", "rookery", &ids.rookery),
            ("Theater of Pain", "theaterofpain", &ids.theater),
        ]
        .into_iter()
        .map(|(dungeon, name, id)| (dungeon.to_string(), custom_emoji_tag(name, id)))
        .collect();

        let faction_emojis = [("horde", &ids.horde), ("alliance", &ids.alliance)]
            .into_iter()
            .map(|(faction, id)| (faction.to_string(), custom_emoji_tag(faction, id)))
            .collect();

        Self::from_maps(dungeon_emojis, faction_emojis, default_fallbacks())
    }

    /// Build tables from explicit maps.
    pub fn from_maps(
        dungeon_emojis: HashMap<String, String>,
        faction_emojis: HashMap<String, String>,
        fallback_emojis: HashMap<String, String>,
    ) -> Self {
        Self {
            dungeon_emojis,
            faction_emojis,
            fallback_emojis,
        }
    }

    /// Resolve the emoji for a (title-cased) dungeon name.
    ///
    /// Order: custom exact, custom via rule, fallback exact, fallback via
    /// rule, then [`DEFAULT_DUNGEON_EMOJI`].
    pub fn dungeon_emoji(&self, dungeon: &str) -> DungeonEmoji<'_> {
        if let Some((emoji, exact)) = lookup_dungeon(&self.dungeon_emojis, dungeon) {
            let source = if exact { EmojiSource::CustomExact } else { EmojiSource::CustomRule };
            return DungeonEmoji { emoji, source };
        }
        if let Some((emoji, exact)) = lookup_dungeon(&self.fallback_emojis, dungeon) {
            let source = if exact { EmojiSource::FallbackExact } else { EmojiSource::FallbackRule };
            return DungeonEmoji { emoji, source };
        }
        DungeonEmoji {
            emoji: DEFAULT_DUNGEON_EMOJI,
            source: EmojiSource::Default,
        }
    }

    /// Resolve the emoji for a lowercased faction name.
    pub fn faction_emoji(&self, faction: &str) -> &str {
        self.faction_emojis
            .get(faction)
            .or_else(|| self.fallback_emojis.get(faction))
            .map(String::as_str)
            .unwrap_or(if faction == "horde" {
                HORDE_DEFAULT_EMOJI
            } else {
                ALLIANCE_DEFAULT_EMOJI
            })
    }
}

/// `<:name:id>` tag understood by Discord.
pub fn custom_emoji_tag(name: &str, id: &str) -> String {
    format!("<:{}:{}>", name, id)
}

fn default_fallbacks() -> HashMap<String, String> {
    FALLBACK_EMOJIS
        .iter()
        .map(|(key, emoji)| (key.to_string(), emoji.to_string()))
        .collect()
}

/// Exact lookup, then the first matching rule's canonical name.
/// Returns the emoji and whether it was an exact hit.
fn lookup_dungeon<'a>(table: &'a HashMap<String, String>, dungeon: &str) -> Option<(&'a str, bool)> {
    if let Some(emoji) = table.get(dungeon) {
        return Some((emoji.as_str(), true));
    }
    DUNGEON_RULES
        .iter()
        .find(|rule| rule.matches(dungeon))
        .and_then(|rule| table.get(rule.canonical))
        .map(|emoji| (emoji.as_str(), false))
}
