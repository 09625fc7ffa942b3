//! Discord gateway event handling.
//!
//! Registers the slash command once the bot is ready and routes incoming
//! interactions to the command handlers.

use serenity::all::{Command, Interaction};
use serenity::async_trait;
use serenity::model::gateway::Ready;
use serenity::prelude::*;
use tracing::{debug, error, info, warn};

use crate::common::error::{DiscordError, DiscordResult};
use crate::discord::commands::{
    handle_lookup_modal, handle_raider_command, raider_command, LookupState, LOOKUP_MODAL_ID,
    RAIDER_COMMAND,
};

/// Discord event handler.
pub struct RaiderHandler;

impl RaiderHandler {
    async fn register_commands(&self, ctx: &Context) -> DiscordResult<()> {
        let command = Command::create_global_command(&ctx.http, raider_command())
            .await
            .map_err(|source| DiscordError::RegisterFailed {
                name: RAIDER_COMMAND.to_string(),
                source,
            })?;
        info!("Registered global command /{} ({})", command.name, command.id);
        Ok(())
    }

    async fn dispatch(&self, ctx: &Context, interaction: Interaction) -> DiscordResult<()> {
        match interaction {
            Interaction::Command(command) if command.data.name == RAIDER_COMMAND => {
                handle_raider_command(ctx, &command).await
            }
            Interaction::Modal(modal) if modal.data.custom_id == LOOKUP_MODAL_ID => {
                let state = {
                    let data = ctx.data.read().await;
                    data.get::<LookupState>().cloned()
                };
                match state {
                    Some(state) => handle_lookup_modal(ctx, &modal, &state).await,
                    None => {
                        error!("Lookup state missing from client data");
                        Ok(())
                    }
                }
            }
            other => {
                debug!("Ignoring interaction {:?}", other.kind());
                Ok(())
            }
        }
    }
}

#[async_trait]
impl EventHandler for RaiderHandler {
    async fn ready(&self, ctx: Context, ready: Ready) {
        info!("Discord bot connected as {}", ready.user.name);
        info!("Bot is in {} guilds", ready.guilds.len());

        if let Err(e) = self.register_commands(&ctx).await {
            error!("{}", e);
        }
    }

    async fn interaction_create(&self, ctx: Context, interaction: Interaction) {
        if let Err(e) = self.dispatch(&ctx, interaction).await {
            warn!("Failed to handle interaction: {}", e);
        }
    }
}
