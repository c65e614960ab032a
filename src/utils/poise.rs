use crate::framework::Data;

use poise::{serenity_prelude as serenity, CreateReply};

pub type Context<'a> = poise::Context<'a, Data, crate::errors::CommandError>;

pub type Error = crate::errors::CommandError;
pub type Command = poise::Command<Data, Error>;
pub type CommandResult = Result<(), Error>;

/// Author line shown above a command's embed.
#[derive(Debug, Clone, Copy)]
pub struct EmbedAuthor {
    pub name: &'static str,
    /// Falls back to the bot's own avatar.
    pub icon_url: Option<&'static str>,
}

pub trait ContextExt {
    /// Server nickname if there is one, otherwise the user's display name.
    async fn display_name(&self) -> String;

    async fn reply_embed(
        &self,
        author: EmbedAuthor,
        description: impl Into<String>,
    ) -> Result<poise::ReplyHandle<'_>, serenity::Error>;
}

impl ContextExt for Context<'_> {
    async fn display_name(&self) -> String {
        match self.author_member().await {
            Some(member) => member.display_name().to_owned(),
            None => self.author().display_name().to_owned(),
        }
    }

    async fn reply_embed(
        &self,
        author: EmbedAuthor,
        description: impl Into<String>,
    ) -> Result<poise::ReplyHandle<'_>, serenity::Error> {
        let icon_url = match author.icon_url {
            Some(url) => url.to_owned(),
            None => self.serenity_context().cache.current_user().face(),
        };

        let embed = serenity::CreateEmbed::new()
            .author(serenity::CreateEmbedAuthor::new(author.name).icon_url(icon_url))
            .description(description);

        self.send(CreateReply::default().embed(embed)).await
    }
}
