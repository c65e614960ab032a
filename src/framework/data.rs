use tracing::info;

use crate::commands::{batlibs::Batlibs, eightball::EightBall, uwuify::Uwuifier};

use super::config::Config;

pub mod error;
pub use error::Error as DataError;

pub type Result<T, E = DataError> = std::result::Result<T, E>;

/// Everything commands share. Built once before the framework starts and only read after.
#[derive(Debug, Clone)]
pub struct Data {
    pub(crate) config: Config,

    eightball: EightBall,
    batlibs: Batlibs,
    uwuifier: Uwuifier,
}

impl Data {
    pub fn new(config: Config) -> Result<Self> {
        let eightball = EightBall::load(config.data().eightball()).map_err(DataError::EightBall)?;
        info!(answers = eightball.answers().len(), "loaded 8-ball answers");

        let batlibs = Batlibs::load(config.data().batlibs()).map_err(DataError::Batlibs)?;
        info!("loaded batlibs words");

        let uwuifier = Uwuifier::default();

        Ok(Self {
            config,
            eightball,
            batlibs,
            uwuifier,
        })
    }

    pub const fn config(&self) -> &Config {
        &self.config
    }

    pub const fn eightball(&self) -> &EightBall {
        &self.eightball
    }

    pub const fn batlibs(&self) -> &Batlibs {
        &self.batlibs
    }

    pub const fn uwuifier(&self) -> &Uwuifier {
        &self.uwuifier
    }
}
