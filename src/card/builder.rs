//! Character card construction.
//!
//! Turns a Raider.io profile into a [`CharacterCard`]: an ordered, platform
//! neutral description of the embed. Every section is optional; a section
//! whose data is missing or malformed is skipped (and logged when it is
//! malformed) without affecting the rest of the card.

use chrono::{DateTime, NaiveDateTime, Utc};
use reqwest::Url;
use tracing::{debug, warn};

use crate::card::emoji::LookupTables;
use crate::card::text::{capitalize_lower, group_thousands, title_case, truncate_chars};
use crate::common::resources::class_colour;
use crate::common::LookupRequest;
use crate::config::types::DisplayConfig;
use crate::raiderio::models::{CharacterProfile, MythicPlusRun, RaidProgression};

/// Attribution shown in every footer.
pub const FOOTER_TEXT: &str = "Data provided by Raider.io";

/// Raider.io brand icon shown next to the footer.
pub const FOOTER_ICON_URL: &str = "https://cdnassets.raider.io/images/brand/Icon_Light_32.png";

const CLASS_ICON_URL_PREFIX: &str = "https://wow.zamimg.com/images/wow/icons/large/classicon_";

/// Discord rejects field values longer than this.
const FIELD_VALUE_LIMIT: usize = 1024;

/// Ordered description of a character embed.
#[derive(Debug, Clone, PartialEq)]
pub struct CharacterCard {
    pub title: String,
    pub url: Option<String>,
    pub colour: u32,
    pub author: Option<CardAuthor>,
    pub thumbnail: Option<String>,
    pub fields: Vec<CardField>,
    pub footer: CardFooter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardAuthor {
    pub name: String,
    pub icon_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardFooter {
    pub text: String,
    pub icon_url: Option<String>,
}

#[cfg(test)]
impl CharacterCard {
    /// Find a field by name.
    pub fn field(&self, name: &str) -> Option<&CardField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

/// Presentation switches.
#[derive(Debug, Clone, Copy)]
pub struct CardOptions {
    pub max_runs: usize,
    pub show_affixes: bool,
}

impl Default for CardOptions {
    fn default() -> Self {
        Self::from(&DisplayConfig::default())
    }
}

impl From<&DisplayConfig> for CardOptions {
    fn from(config: &DisplayConfig) -> Self {
        Self {
            max_runs: config.max_mythic_plus_runs,
            show_affixes: config.show_affixes,
        }
    }
}

/// Build the card for a found character.
pub fn build_card(
    profile: &CharacterProfile,
    tables: &LookupTables,
    options: &CardOptions,
) -> CharacterCard {
    let mut card = CharacterCard {
        title: format!(
            "{} - {} ({})",
            profile.name,
            profile.realm,
            profile.region.to_uppercase()
        ),
        url: checked_url("profile", &profile.profile_url),
        colour: class_colour(&profile.class),
        author: Some(CardAuthor {
            name: format!("{} {}", profile.active_spec_name, profile.class),
            icon_url: checked_url("class icon", &class_icon_url(&profile.class)),
        }),
        thumbnail: profile
            .thumbnail_url
            .as_deref()
            .and_then(|url| checked_url("thumbnail", url)),
        fields: Vec::new(),
        footer: footer(profile.last_crawled_at.as_deref()),
    };

    push_field(&mut card, "Class", &profile.class, true);
    push_field(&mut card, "Race", &profile.race, true);
    push_field(&mut card, "Spec", &profile.active_spec_name, true);

    if let Some(faction) = &profile.faction {
        let emoji = tables.faction_emoji(&faction.to_lowercase());
        push_field(
            &mut card,
            "Faction",
            &format!("{} {}", emoji, capitalize_lower(faction)),
            true,
        );
    }

    if let Some(ilvl) = profile.gear.as_ref().and_then(|g| g.item_level_equipped.as_ref()) {
        push_field(&mut card, "Item Level", &ilvl.to_string(), true);
    }

    if let Some(guild) = &profile.guild {
        let mut guild_text = guild.name.clone();
        if let Some(realm) = guild.realm.as_deref().filter(|r| *r != profile.realm) {
            guild_text.push_str(&format!(" ({})", realm));
        }
        push_field(&mut card, "Guild", &guild_text, true);
    }

    if let Some(season) = profile
        .mythic_plus_scores_by_season
        .as_ref()
        .and_then(|seasons| seasons.first())
    {
        if let Some(score) = &season.scores.all {
            push_field(
                &mut card,
                &format!("M+ Score ({})", season.season),
                &format!("[{}]({})", score, profile.profile_url),
                true,
            );
        }
    }

    if let Some(rank) = realm_rank(profile) {
        push_field(
            &mut card,
            &format!("{} {} Realm Rank", profile.active_spec_name, profile.class),
            &format!("#{} on {}", group_thousands(rank), profile.realm),
            true,
        );
    }

    if let Some(runs) = profile.mythic_plus_best_runs.as_ref().filter(|r| !r.is_empty()) {
        let text = best_runs_text(runs, tables, options);
        push_field(&mut card, "Best M+ Runs", &text, false);
    }

    if let Some(raids) = profile.raid_progression.as_ref().filter(|r| !r.is_empty()) {
        push_raid_fields(&mut card, raids);
    }

    if let Some(points) = profile.achievement_points {
        push_field(&mut card, "Achievement Points", &group_thousands(points), true);
    }

    card
}

/// Plain-text reply when no region knows the character.
pub fn not_found_message(request: &LookupRequest, regions: &[String]) -> String {
    let regions_tried = regions
        .iter()
        .map(|r| r.to_uppercase())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Character **{}** not found on **{}** in {} regions.",
        request.character_name,
        title_case(&request.realm),
        regions_tried
    )
}

/// Class icon URL: `Death Knight` -> `...classicon_deathknight.jpg`.
pub fn class_icon_url(class: &str) -> String {
    let slug: String = class
        .to_lowercase()
        .chars()
        .filter(|c| !matches!(c, ' ' | '\'' | '-'))
        .collect();
    format!("{}{}.jpg", CLASS_ICON_URL_PREFIX, slug)
}

fn checked_url(kind: &str, raw: &str) -> Option<String> {
    if raw.is_empty() {
        return None;
    }
    match Url::parse(raw) {
        Ok(_) => Some(raw.to_string()),
        Err(e) => {
            warn!("Failed to set {} URL '{}': {}", kind, raw, e);
            None
        }
    }
}

fn push_field(card: &mut CharacterCard, name: &str, value: &str, inline: bool) {
    if value.trim().is_empty() {
        debug!("Skipping empty field '{}'", name);
        return;
    }
    card.fields.push(CardField {
        name: name.to_string(),
        value: truncate_chars(value, FIELD_VALUE_LIMIT),
        inline,
    });
}

fn realm_rank(profile: &CharacterProfile) -> Option<u64> {
    let role = profile.active_spec_role.as_deref()?.to_lowercase();
    let ranks = profile.mythic_plus_ranks.as_ref()?;
    ranks.get(&format!("class_{}", role))?.realm
}

fn best_runs_text(runs: &[MythicPlusRun], tables: &LookupTables, options: &CardOptions) -> String {
    let mut top: Vec<&MythicPlusRun> = runs.iter().collect();
    top.sort_by(|a, b| b.score.unwrap_or(0.0).total_cmp(&a.score.unwrap_or(0.0)));
    top.truncate(options.max_runs);

    let mut text = String::new();
    for (index, run) in top.iter().enumerate() {
        let dungeon = title_case(&run.dungeon);
        let emoji = tables.dungeon_emoji(&dungeon);
        debug!("Using emoji for {}: {} ({:?})", dungeon, emoji.emoji, emoji.source);

        text.push_str(&format!("**#{}**\n{} ", index + 1, emoji.emoji));
        match &run.url {
            Some(url) => text.push_str(&format!("**+{}** [{}]({})", run.mythic_level, dungeon, url)),
            None => text.push_str(&format!("**+{}** {}", run.mythic_level, dungeon)),
        }
        if let Some(score) = run.score {
            text.push_str(&format!("\nScore: {:.1}", score));
        }
        if options.show_affixes && !run.affixes.is_empty() {
            let names: Vec<&str> = run.affixes.iter().map(|a| a.name.as_str()).collect();
            text.push_str(&format!("\nAffixes: {}", names.join(", ")));
        }
        text.push_str("\n\n");
    }

    text.trim_end().to_string()
}

fn push_raid_fields(card: &mut CharacterCard, raids: &RaidProgression) {
    if let Some((slug, latest)) = raids.latest() {
        if let Some(summary) = latest.summary.as_deref().filter(|s| !s.is_empty()) {
            push_field(
                card,
                &format!("Raid Progress ({})", title_case(slug)),
                summary,
                false,
            );
        }
    }

    let (normal, heroic, mythic) = raids.iter().fold((0u32, 0u32, 0u32), |acc, (_, raid)| {
        (
            acc.0 + raid.normal_bosses_killed,
            acc.1 + raid.heroic_bosses_killed,
            acc.2 + raid.mythic_bosses_killed,
        )
    });
    push_field(
        card,
        "Total Raid Progress",
        &format!("Normal: {} | Heroic: {} | Mythic: {}", normal, heroic, mythic),
        false,
    );
}

fn footer(last_crawled_at: Option<&str>) -> CardFooter {
    let mut text = FOOTER_TEXT.to_string();
    if let Some(raw) = last_crawled_at {
        match parse_timestamp(raw) {
            Ok(updated) => {
                text.push_str(&format!(
                    " • Last updated: {} UTC",
                    updated.format("%Y-%m-%d %H:%M")
                ));
            }
            Err(e) => warn!("Failed to parse last_crawled_at date '{}': {}", raw, e),
        }
    }
    CardFooter {
        text,
        icon_url: checked_url("footer icon", FOOTER_ICON_URL),
    }
}

/// RFC 3339, or a naive ISO-8601 timestamp taken as UTC.
fn parse_timestamp(raw: &str) -> Result<DateTime<Utc>, chrono::ParseError> {
    DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.with_timezone(&Utc))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f").map(|n| n.and_utc()))
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S").map(|n| n.and_utc()))
}
