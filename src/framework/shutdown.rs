use std::sync::Arc;

use poise::serenity_prelude::{Command, GuildId, Http, ShardManager};
use tracing::{error, info, warn};

/// Closes the gateway connection on Ctrl-C or SIGTERM, deleting registered commands first if asked.
#[derive(Clone)]
pub struct Shutdown {
    pub http: Arc<Http>,
    pub shard_manager: Arc<ShardManager>,
    pub unregister: bool,
    pub testing_server: Option<GuildId>,
}

impl Shutdown {
    pub fn spawn(self) {
        tokio::spawn(self.run());
    }

    async fn run(self) {
        signal().await;

        if self.unregister {
            unregister_commands(&self.http, self.testing_server).await;
        }

        info!("gracefully shutting down");
        self.shard_manager.shutdown_all().await;
    }
}

#[cfg(unix)]
async fn signal() {
    use tokio::signal::unix::{signal, SignalKind};

    let mut terminate = match signal(SignalKind::terminate()) {
        Ok(terminate) => terminate,
        Err(err) => {
            warn!(%err, "couldn't listen for SIGTERM, only Ctrl-C will shut down");
            return ctrl_c().await;
        }
    };

    tokio::select! {
        () = ctrl_c() => {}
        _ = terminate.recv() => {}
    }
}

#[cfg(not(unix))]
async fn signal() {
    ctrl_c().await
}

async fn ctrl_c() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        error!(%err, "couldn't listen for Ctrl-C");
        std::future::pending::<()>().await;
    }
}

async fn unregister_commands(http: &Http, testing_server: Option<GuildId>) {
    info!("unregistering commands...");

    match Command::get_global_commands(http).await {
        Ok(commands) => {
            for command in commands {
                if let Err(err) = Command::delete_global_command(http, command.id).await {
                    error!(%err, "cannot delete '{}' command", command.name);
                }
            }
        }
        Err(err) => error!(%err, "could not get registered commands"),
    }

    if let Some(guild_id) = testing_server {
        if let Err(err) = guild_id.set_commands(http, Vec::new()).await {
            error!(%err, %guild_id, "could not clear testing server commands");
        }
    }
}
