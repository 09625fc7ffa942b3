//! Discord bot integration.
//!
//! This module exposes the `/raider` lookup command over the Discord gateway.

pub mod client;
pub mod commands;
pub mod embed;
pub mod handler;

// Re-export main types for external use
pub use client::DiscordBotBuilder;
pub use commands::LookupState;
