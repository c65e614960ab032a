use tracing::instrument;

use crate::utils::{
    poise::{CommandResult, ContextExt, EmbedAuthor},
    Context,
};

mod core;
pub use self::core::{Batlibs, Error as LoadError, DEFAULT_CATEGORIES};

const AUTHOR: EmbedAuthor = EmbedAuthor {
    name: "Wombot Batlibs!",
    icon_url: None,
};

/// Replaces certain tokens with words
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn batlibs(
    ctx: Context<'_>,
    #[description = "Message with the tokens you want to batlib"] msg: String,
) -> CommandResult {
    let text = ctx.data().batlibs().substitute(&msg)?;

    ctx.reply_embed(AUTHOR, text).await?;

    Ok(())
}
