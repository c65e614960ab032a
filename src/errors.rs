use poise::{serenity_prelude as serenity, BoxFuture, FrameworkError};

use thiserror::Error as ThisError;
use tracing::{error, error_span, warn, Instrument};

use crate::{framework::Data, randomizer};

pub fn handle_framework_error(err: FrameworkError<'_, Data, CommandError>) -> BoxFuture<'_, ()> {
    Box::pin(async move {
        match err {
            FrameworkError::Command { error, ctx, .. } => {
                let command = ctx.invoked_command_name();
                let span = error_span!("", command);

                handle_error(error, ctx).instrument(span).await;
            }
            FrameworkError::MissingBotPermissions {
                missing_permissions,
                ctx,
                ..
            } => {
                let command = ctx.invoked_command_name();
                let span = error_span!("", command);
                let _enter = span.enter();

                error!(%missing_permissions, "bot is missing permissions");
            }
            _ => {
                if let Err(err) = poise::builtins::on_error(err).await {
                    error!(%err, "failed to handle framework error");
                }
            }
        };
    })
}

async fn handle_error(err: CommandError, ctx: poise::Context<'_, Data, CommandError>) {
    match &err {
        CommandError::Randomizer(_) => error!(%err, "command failed"),
        CommandError::Serenity(_) => warn!(%err, "command failed"),
    }

    if let Err(reply_err) = ctx.say(err.to_string()).await {
        error!(%reply_err, "couldn't send error message");
    }
}

#[derive(Debug, ThisError)]
pub enum CommandError {
    #[error("serenity error: {0}")]
    Serenity(#[from] serenity::Error),

    #[error("couldn't pick a word: {0}")]
    Randomizer(#[from] randomizer::Error),
}
