use rand::Rng;

use crate::{
    commands::target::TargetMessage,
    randomizer::{self, Randomizer},
};

pub const FLAVORS: &[&str] = &[
    "UwU",
    "OwO",
    "^_^",
    ":3",
    r"\*nuzzles u\*",
    "~",
    "nya~",
    "(・`ω´・)",
];

#[derive(Debug, Clone)]
pub struct Uwuifier {
    flavors: Randomizer,
}

impl Default for Uwuifier {
    fn default() -> Self {
        Self::new(FLAVORS.iter().copied().collect())
    }
}

impl Uwuifier {
    pub fn new(flavors: Randomizer) -> Self {
        Self { flavors }
    }

    pub fn uwuify(&self, message: TargetMessage<'_>) -> randomizer::Result<String> {
        self.uwuify_with(&mut rand::thread_rng(), message)
    }

    pub fn uwuify_with(
        &self,
        rng: &mut impl Rng,
        message: TargetMessage<'_>,
    ) -> randomizer::Result<String> {
        let text = match message.text() {
            Ok(text) => text,
            Err(reason) => return Ok(message.refusal(reason, "mock")),
        };

        let flavored = self.add_flavor_with(rng, &replace_letters(text))?;

        Ok(message.with_link(&flavored))
    }

    /// Swaps each `!` for a flavor, spaced away from neighbouring text.
    pub fn add_flavor_with(&self, rng: &mut impl Rng, text: &str) -> randomizer::Result<String> {
        let mut output = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();

        while let Some(c) = chars.next() {
            if c != '!' {
                output.push(c);
                continue;
            }

            if output.chars().last().is_some_and(|prev| !prev.is_whitespace()) {
                output.push(' ');
            }

            output.push_str(self.flavors.random_with(rng)?);

            if chars.peek().is_some_and(|next| !next.is_whitespace()) {
                output.push(' ');
            }
        }

        Ok(output)
    }
}

pub fn replace_letters(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            'r' | 'l' => 'w',
            'R' | 'L' => 'W',
            other => other,
        })
        .collect()
}
