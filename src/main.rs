#![warn(clippy::perf)]
#![warn(clippy::unwrap_used)]

use clap::Parser;
use poise::serenity_prelude::{self as serenity, GatewayIntents};

use tracing::{debug, info};

mod cli;
use cli::Cli;

/// Commands and the text generators behind them.
mod commands;

mod errors;

mod framework;
use framework::{shutdown::Shutdown, Config, Data};

mod randomizer;

mod utils;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let dotenv = dotenvy::dotenv();

    let config = Config::load(cli.config.as_deref())?;
    framework::logging::init_tracing(config.debug());

    info!("starting wombot {}", env!("CARGO_PKG_VERSION"));

    match dotenv {
        Ok(path) => debug!(path = %path.display(), "loaded .env file"),
        Err(_) => debug!("couldn't load .env, this is probably fine"),
    }

    let data = Data::new(config.clone())?;
    let framework = framework::poise::build(data);

    let intents = GatewayIntents::GUILD_MESSAGES | GatewayIntents::DIRECT_MESSAGES;
    let mut client = serenity::Client::builder(config.token(), intents)
        .framework(framework)
        .await?;

    Shutdown {
        http: client.http.clone(),
        shard_manager: client.shard_manager.clone(),
        unregister: cli.unregister || config.unregister(),
        testing_server: config.testing_server(),
    }
    .spawn();

    client.start().await?;

    info!("disconnected");

    Ok(())
}
