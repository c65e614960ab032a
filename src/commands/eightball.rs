use tracing::instrument;

use crate::utils::{
    poise::{CommandResult, ContextExt, EmbedAuthor},
    Context,
};

mod core;
pub use self::core::EightBall;

const AUTHOR: EmbedAuthor = EmbedAuthor {
    name: "Wombot Magic 8-Ball",
    icon_url: Some("https://wombot-files.mozoa.nl/icons/8-ball.png"),
};

/// Shake a magic 8-ball
#[instrument(skip_all)]
#[poise::command(
    slash_command,
    rename = "8ball",
    required_bot_permissions = "SEND_MESSAGES | VIEW_CHANNEL"
)]
pub async fn eightball(
    ctx: Context<'_>,
    #[description = "Optional question for the 8-ball"] question: Option<String>,
) -> CommandResult {
    let shaker = ctx.display_name().await;
    let text = ctx.data().eightball().shake(&shaker, question.as_deref())?;

    ctx.reply_embed(AUTHOR, text).await?;

    Ok(())
}
