use poise::serenity_prelude as serenity;
use tracing::instrument;

use crate::utils::{
    poise::{CommandResult, ContextExt, EmbedAuthor},
    serenity::message::Permalink,
    Context,
};

mod core;
pub use self::core::Uwuifier;

const AUTHOR: EmbedAuthor = EmbedAuthor {
    name: "Wombot Uwuifier",
    icon_url: None,
};

#[instrument(skip_all)]
#[poise::command(
    context_menu_command = "Uwuify",
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn uwuify(ctx: Context<'_>, message: serenity::Message) -> CommandResult {
    let permalink = message.permalink(ctx.guild_id());
    let text = ctx
        .data()
        .uwuifier()
        .uwuify(message.as_target(&permalink))?;

    ctx.reply_embed(AUTHOR, text).await?;

    Ok(())
}
