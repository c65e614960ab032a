use std::path::Path;

use rand::Rng;

use crate::randomizer::{self, Randomizer};

#[derive(Debug, Clone)]
pub struct EightBall {
    answers: Randomizer,
}

impl EightBall {
    pub fn new(answers: Randomizer) -> Self {
        Self { answers }
    }

    pub fn load(path: impl AsRef<Path>) -> randomizer::Result<Self> {
        Randomizer::from_path(path).map(Self::new)
    }

    pub fn shake(&self, shaker: &str, question: Option<&str>) -> randomizer::Result<String> {
        self.shake_with(&mut rand::thread_rng(), shaker, question)
    }

    /// Formats the ball's answer for `shaker`, quoting `question` when there is one.
    ///
    /// A blank question counts as no question.
    pub fn shake_with(
        &self,
        rng: &mut impl Rng,
        shaker: &str,
        question: Option<&str>,
    ) -> randomizer::Result<String> {
        let answer = self.answers.random_with(rng)?;

        let text = match question.map(str::trim).filter(|q| !q.is_empty()) {
            Some(question) => format!(
                "{shaker} asks the Magic 8-ball: \"{question}\"\n\n\
                *They give the ball a good shake*\n\n\
                The Magic 8-ball says:\n\
                **{answer}**"
            ),
            None => format!(
                "*{shaker} shakes the Magic 8-ball*\n\n\
                The Magic 8-ball says:\n\
                **{answer}**"
            ),
        };

        Ok(text)
    }

    pub fn answers(&self) -> &Randomizer {
        &self.answers
    }
}
