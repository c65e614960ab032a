use crate::{commands::batlibs, randomizer};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("error loading 8-ball answers: {0}")]
    EightBall(#[source] randomizer::Error),

    #[error("error loading batlibs words: {0}")]
    Batlibs(#[source] batlibs::LoadError),
}
