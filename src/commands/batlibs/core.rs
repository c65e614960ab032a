use std::{collections::HashMap, path::Path};

use rand::Rng;
use regex::Regex;
use thiserror::Error as ThisError;
use tracing::{debug, trace};

use crate::randomizer::{self, Randomizer};

#[derive(Debug, ThisError)]
pub enum Error {
    #[error("'{0}' can't be a batlibs placeholder, names are an upper-case letter followed by upper-case letters, digits or underscores")]
    Name(String),

    #[error(transparent)]
    Randomizer(#[from] randomizer::Error),
}

/// Whether `$name` would be picked up as a placeholder.
fn is_token_name(name: &str) -> bool {
    let mut chars = name.chars();

    chars.next().is_some_and(|c| c.is_ascii_uppercase())
        && chars.all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
}

/// Placeholder names and the wordlists they draw from, relative to the data directory.
pub const DEFAULT_CATEGORIES: &[(&str, &str)] = &[
    ("ADJ", "batlibs/adjectives.txt"),
    ("ADV", "batlibs/adverbs.txt"),
    ("NOUN", "batlibs/nouns.txt"),
    ("NOUNS", "batlibs/plural_nouns.txt"),
    ("VERB", "batlibs/verbs.txt"),
];

#[derive(Debug, Clone)]
pub struct Batlibs {
    categories: HashMap<String, Randomizer>,
    token: Regex,
}

impl Batlibs {
    pub fn new(categories: HashMap<String, Randomizer>) -> Self {
        let token =
            Regex::new(r"\$([A-Z][A-Z0-9_]*)").expect("hard-coded regex should be valid");

        Self { categories, token }
    }

    /// Loads one wordlist per placeholder name.
    ///
    /// Fails on a name no `$TOKEN` could ever match.
    pub fn load<N, P>(categories: impl IntoIterator<Item = (N, P)>) -> Result<Self, Error>
    where
        N: Into<String>,
        P: AsRef<Path>,
    {
        let categories = categories
            .into_iter()
            .map(|(name, path)| {
                let name: String = name.into();
                if !is_token_name(&name) {
                    return Err(Error::Name(name));
                }

                let words = Randomizer::from_path(path)?;
                debug!(category = %name, words = words.len(), "loaded batlibs category");
                Ok((name, words))
            })
            .collect::<Result<_, Error>>()?;

        Ok(Self::new(categories))
    }

    pub fn substitute(&self, text: &str) -> randomizer::Result<String> {
        self.substitute_with(&mut rand::thread_rng(), text)
    }

    /// Replaces every known `$TOKEN` in `text` with a fresh word from its category.
    ///
    /// Unknown tokens are kept as written.
    pub fn substitute_with(&self, rng: &mut impl Rng, text: &str) -> randomizer::Result<String> {
        let mut output = String::with_capacity(text.len());
        let mut last = 0;

        for captures in self.token.captures_iter(text) {
            let (Some(whole), Some(name)) = (captures.get(0), captures.get(1)) else {
                continue;
            };

            let Some(words) = self.categories.get(name.as_str()) else {
                trace!(token = whole.as_str(), "unknown batlibs token");
                continue;
            };

            output.push_str(&text[last..whole.start()]);
            output.push_str(words.random_with(rng)?);
            last = whole.end();
        }

        output.push_str(&text[last..]);

        Ok(output)
    }

    #[cfg(test)]
    pub fn category(&self, name: &str) -> Option<&Randomizer> {
        self.categories.get(name)
    }
}
