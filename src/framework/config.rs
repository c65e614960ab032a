use std::{
    collections::HashMap,
    fmt,
    num::NonZeroU64,
    path::{Path, PathBuf},
};

use ::config::{builder::DefaultState, ConfigBuilder, Environment, File, FileFormat};
use poise::serenity_prelude::GuildId;
use serde::Deserialize;

use crate::commands::batlibs::DEFAULT_CATEGORIES;

pub const DEFAULT_CONFIG_FILE: &str = "wombot.toml";
const ENV_PREFIX: &str = "WB";

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("file read error: {0}")]
    Read(::config::ConfigError),

    #[error("parsing error: {0}")]
    Parse(::config::ConfigError),
}

#[derive(Deserialize, Debug, Clone)]
pub struct Config {
    #[serde(rename = "dc_token")]
    token: Token,
    #[serde(default)]
    debug: bool,
    #[serde(default)]
    unregister: bool,
    testing_server: Option<NonZeroU64>,
    #[serde(default)]
    data: DataConfig,
}

impl Config {
    /// Reads the config file, then `WB_`-prefixed environment variables on top.
    ///
    /// An explicit `path` (or `WB_CONFIG`) has to exist; the default file is optional.
    pub fn load(path: Option<&Path>) -> Result<Self, Error> {
        let explicit = path
            .map(Path::to_path_buf)
            .or_else(|| std::env::var_os("WB_CONFIG").map(PathBuf::from));
        let required = explicit.is_some();
        let path = explicit.unwrap_or_else(|| PathBuf::from(DEFAULT_CONFIG_FILE));

        let builder = ::config::Config::builder()
            .add_source(
                File::new(&path.to_string_lossy(), FileFormat::Toml).required(required),
            )
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        Self::build(builder)
    }

    fn build(builder: ConfigBuilder<DefaultState>) -> Result<Self, Error> {
        builder
            .build()
            .map_err(Error::Read)?
            .try_deserialize()
            .map_err(Error::Parse)
    }

    #[cfg(test)]
    pub(crate) fn from_toml(toml: &str) -> Result<Self, Error> {
        Self::build(::config::Config::builder().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    pub fn token(&self) -> &str {
        &self.token.0
    }

    pub const fn debug(&self) -> bool {
        self.debug
    }

    pub const fn unregister(&self) -> bool {
        self.unregister
    }

    pub fn testing_server(&self) -> Option<GuildId> {
        self.testing_server.map(GuildId::from)
    }

    pub fn data(&self) -> &DataConfig {
        &self.data
    }
}

#[derive(Deserialize, Clone)]
#[serde(transparent)]
struct Token(String);

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Token([redacted])")
    }
}

/// Where the wordlists live. Relative paths are resolved against `dir`.
#[derive(Deserialize, Debug, Clone)]
pub struct DataConfig {
    #[serde(default = "DataConfig::default_dir")]
    dir: PathBuf,
    #[serde(default = "DataConfig::default_eightball")]
    eightball: PathBuf,
    #[serde(default)]
    batlibs: Option<HashMap<String, PathBuf>>,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: Self::default_dir(),
            eightball: Self::default_eightball(),
            batlibs: None,
        }
    }
}

impl DataConfig {
    fn default_dir() -> PathBuf {
        PathBuf::from("data")
    }

    fn default_eightball() -> PathBuf {
        PathBuf::from("8ballresponses.txt")
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        self.dir.join(path)
    }

    pub fn eightball(&self) -> PathBuf {
        self.resolve(&self.eightball)
    }

    /// Placeholder name to wordlist path, falling back to the built-in categories.
    pub fn batlibs(&self) -> Vec<(String, PathBuf)> {
        match &self.batlibs {
            Some(categories) => categories
                .iter()
                .map(|(name, path)| (name.to_uppercase(), self.resolve(path)))
                .collect(),
            None => DEFAULT_CATEGORIES
                .iter()
                .map(|(name, path)| ((*name).to_owned(), self.resolve(Path::new(path))))
                .collect(),
        }
    }
}
