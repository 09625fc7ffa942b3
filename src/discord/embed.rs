//! Conversion of a `CharacterCard` into a serenity embed.

use serenity::builder::{CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter};

use crate::card::CharacterCard;

/// Build the Discord embed for a card, preserving field order.
pub fn card_embed(card: &CharacterCard) -> CreateEmbed {
    let mut embed = CreateEmbed::new().title(&card.title).colour(card.colour);

    if let Some(url) = &card.url {
        embed = embed.url(url);
    }
    if let Some(author) = &card.author {
        let mut builder = CreateEmbedAuthor::new(&author.name);
        if let Some(icon_url) = &author.icon_url {
            builder = builder.icon_url(icon_url);
        }
        embed = embed.author(builder);
    }
    if let Some(thumbnail) = &card.thumbnail {
        embed = embed.thumbnail(thumbnail);
    }

    embed = embed.fields(
        card.fields
            .iter()
            .map(|field| (field.name.as_str(), field.value.as_str(), field.inline)),
    );

    let mut footer = CreateEmbedFooter::new(&card.footer.text);
    if let Some(icon_url) = &card.footer.icon_url {
        footer = footer.icon_url(icon_url);
    }
    embed.footer(footer)
}
