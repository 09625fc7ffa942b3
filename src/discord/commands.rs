//! The `/raider` slash command and its lookup modal.

use std::sync::Arc;

use serenity::all::{
    ActionRow, ActionRowComponent, CommandInteraction, InputTextStyle, ModalInteraction,
};
use serenity::builder::{
    CreateActionRow, CreateCommand, CreateInputText, CreateInteractionResponse,
    CreateInteractionResponseFollowup, CreateInteractionResponseMessage, CreateModal,
};
use serenity::prelude::*;
use tracing::info;

use crate::card::{build_card, not_found_message, CardOptions, CharacterCard, LookupTables};
use crate::common::error::{DiscordError, DiscordResult};
use crate::common::LookupRequest;
use crate::discord::embed::card_embed;
use crate::raiderio::{resolve, ProfileSource, Resolution};

pub const RAIDER_COMMAND: &str = "raider";
pub const LOOKUP_MODAL_ID: &str = "raider_lookup";
pub const CHARACTER_INPUT_ID: &str = "character";

/// Everything a lookup needs, shared by every interaction.
pub struct LookupState {
    pub source: Arc<dyn ProfileSource>,
    pub tables: Arc<LookupTables>,
    pub regions: Vec<String>,
    pub options: CardOptions,
}

impl TypeMapKey for LookupState {
    type Value = Arc<LookupState>;
}

/// What to send back for one lookup.
#[derive(Debug)]
pub enum LookupReply {
    Card(Box<CharacterCard>),
    NotFound(String),
}

pub fn raider_command() -> CreateCommand {
    CreateCommand::new(RAIDER_COMMAND).description("Look up a character on Raider.io")
}

pub fn lookup_modal() -> CreateModal {
    let input = CreateInputText::new(
        InputTextStyle::Short,
        "Character Name-Server",
        CHARACTER_INPUT_ID,
    )
    .placeholder("Example: CharacterName-ServerName")
    .required(true)
    .min_length(3)
    .max_length(40);

    CreateModal::new(LOOKUP_MODAL_ID, "Character Lookup")
        .components(vec![CreateActionRow::InputText(input)])
}

/// Answer `/raider` with the lookup modal.
pub async fn handle_raider_command(ctx: &Context, command: &CommandInteraction) -> DiscordResult<()> {
    info!("/{} invoked by {}", RAIDER_COMMAND, command.user.name);
    command
        .create_response(&ctx.http, CreateInteractionResponse::Modal(lookup_modal()))
        .await?;
    Ok(())
}

/// Handle a submitted lookup modal.
pub async fn handle_lookup_modal(
    ctx: &Context,
    modal: &ModalInteraction,
    state: &LookupState,
) -> DiscordResult<()> {
    let raw = modal_input(&modal.data.components, CHARACTER_INPUT_ID)?;
    info!("Lookup requested by {}: {}", modal.user.name, raw);

    let request = match LookupRequest::parse(&raw) {
        Ok(request) => request,
        Err(e) => {
            let message = CreateInteractionResponseMessage::new()
                .content(e.to_string())
                .ephemeral(true);
            modal
                .create_response(&ctx.http, CreateInteractionResponse::Message(message))
                .await?;
            return Ok(());
        }
    };

    // Region scans can outlast the three second interaction deadline.
    modal
        .create_response(
            &ctx.http,
            CreateInteractionResponse::Defer(CreateInteractionResponseMessage::new()),
        )
        .await?;

    let followup = match lookup(state, &request).await {
        LookupReply::Card(card) => CreateInteractionResponseFollowup::new().embed(card_embed(&card)),
        LookupReply::NotFound(message) => CreateInteractionResponseFollowup::new()
            .content(message)
            .ephemeral(true),
    };
    modal.create_followup(&ctx.http, followup).await?;
    Ok(())
}

/// Resolve a parsed request and render the reply.
pub async fn lookup(state: &LookupState, request: &LookupRequest) -> LookupReply {
    match resolve(
        state.source.as_ref(),
        &request.character_name,
        &request.realm,
        &state.regions,
    )
    .await
    {
        Resolution::Found { profile, .. } => {
            LookupReply::Card(Box::new(build_card(&profile, &state.tables, &state.options)))
        }
        Resolution::NotFound { attempted } => {
            LookupReply::NotFound(not_found_message(request, &attempted))
        }
    }
}

/// Value of the text input `custom_id` in a modal submission.
pub fn modal_input(rows: &[ActionRow], custom_id: &str) -> DiscordResult<String> {
    rows.iter()
        .flat_map(|row| row.components.iter())
        .find_map(|component| match component {
            ActionRowComponent::InputText(input) if input.custom_id == custom_id => {
                Some(input.value.clone().unwrap_or_default())
            }
            _ => None,
        })
        .ok_or_else(|| DiscordError::MissingInput {
            custom_id: custom_id.to_string(),
        })
}
