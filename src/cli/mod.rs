use std::path::PathBuf;

#[derive(clap::Parser, Debug)]
#[command(version, about = "a discord bot with a magic 8-ball, batlibs and uwu")]
pub struct Cli {
    /// config file to read instead of `wombot.toml`
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// unregister all bot commands on shutdown
    #[arg(long)]
    pub unregister: bool,
}
