use poise::serenity_prelude as serenity;
use tracing::{info, trace, warn};

use crate::{
    commands::{self, LogCommands},
    errors::{self, CommandError},
};

use super::data::Data;

pub fn build(data: Data) -> poise::Framework<Data, CommandError> {
    poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: commands::list(),
            on_error: errors::handle_framework_error,
            pre_command: |ctx| Box::pin(async move { ctx.log_command().await }),
            ..Default::default()
        })
        .setup(|ctx, ready, framework| {
            Box::pin(async move {
                info!(
                    "wombot is running with the username '{}' and ID '{}'",
                    ready.user.name, ready.user.id
                );

                let commands = framework.options().commands.as_ref();
                register(&ctx.http, commands, &data).await?;

                trace!("finished setup, accepting commands");

                Ok(data)
            })
        })
        .build()
}

async fn register(
    http: &serenity::Http,
    commands: &[crate::utils::poise::Command],
    data: &Data,
) -> Result<(), serenity::Error> {
    info!("registering commands with the discord api");

    if let Some(guild_id) = data.config().testing_server() {
        poise::builtins::register_in_guild(http, commands, guild_id).await?;
        info!(%guild_id, count = commands.len(), "registered commands in testing server");
    } else {
        warn!("no testing server set in config, commands will be registered globally");
        poise::builtins::register_globally(http, commands).await?;
        info!(count = commands.len(), "registered commands globally");
    }

    Ok(())
}
