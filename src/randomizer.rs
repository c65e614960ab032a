use std::{
    fs::File,
    io::{self, BufRead, BufReader},
    path::{Path, PathBuf},
};

use rand::{seq::SliceRandom, Rng};
use thiserror::Error;
use tracing::{debug, instrument};

#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot draw from an empty randomizer")]
    Empty,

    #[error("couldn't read wordlist '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// A bag of strings to draw from uniformly.
///
/// Duplicates are kept, so an item appended twice is twice as likely to come up.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Randomizer {
    items: Vec<String>,
}

impl Randomizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a randomizer from a wordlist file, one item per line.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let mut randomizer = Self::new();
        randomizer.fill(path, false)?;
        Ok(randomizer)
    }

    pub fn append<I, S>(&mut self, items: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.items.extend(items.into_iter().map(Into::into));
    }

    /// Loads every non-blank line of the file at `path`.
    ///
    /// With `clear` set, the current contents are dropped first. The bag is
    /// left untouched if the file can't be opened.
    #[instrument(skip_all)]
    pub fn fill(&mut self, path: impl AsRef<Path>, clear: bool) -> Result<()> {
        let path = path.as_ref();

        let read_error = |source| Error::Read {
            path: path.to_owned(),
            source,
        };

        let file = File::open(path).map_err(read_error)?;
        self.fill_from_reader(BufReader::new(file), clear)
            .map_err(read_error)?;

        debug!(path = %path.display(), items = self.len(), "filled randomizer");

        Ok(())
    }

    pub fn fill_from_reader(&mut self, reader: impl BufRead, clear: bool) -> io::Result<()> {
        let lines = reader.lines().collect::<io::Result<Vec<_>>>()?;

        if clear {
            self.clear();
        }

        self.append(
            lines
                .into_iter()
                .map(|line| line.trim_end_matches('\r').to_owned())
                .filter(|line| !line.trim().is_empty()),
        );

        Ok(())
    }

    #[allow(dead_code)] // no command merges wordlists yet
    pub fn combine<'a>(&mut self, others: impl IntoIterator<Item = &'a Randomizer>) {
        for other in others {
            self.items.extend_from_slice(&other.items);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    #[allow(dead_code)] // commands pass their own rng
    pub fn random(&self) -> Result<&str> {
        self.random_with(&mut rand::thread_rng())
    }

    pub fn random_with(&self, rng: &mut impl Rng) -> Result<&str> {
        self.items
            .choose(rng)
            .map(String::as_str)
            .ok_or(Error::Empty)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[allow(dead_code)] // here by convention
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[cfg(test)]
    pub fn contains(&self, item: &str) -> bool {
        self.items.iter().any(|i| i == item)
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Randomizer {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        let mut randomizer = Self::new();
        randomizer.append(iter);
        randomizer
    }
}

impl<S: Into<String>> Extend<S> for Randomizer {
    fn extend<T: IntoIterator<Item = S>>(&mut self, iter: T) {
        self.append(iter)
    }
}

#[cfg(test)]
mod tests {
    use std::{collections::HashSet, io::Cursor};

    use pretty_assertions::assert_eq;
    use rand::{rngs::StdRng, SeedableRng};

    use super::{Error, Randomizer};

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x8ba11)
    }

    #[test]
    fn random_returns_member() {
        let randomizer: Randomizer = ["bat", "wombat", "numbat"].into_iter().collect();
        let mut rng = rng();

        for _ in 0..1000 {
            let item = randomizer.random_with(&mut rng).expect("not empty");
            assert!(randomizer.contains(item), "{item} was never inserted");
        }
    }

    #[test]
    fn random_covers_every_item() {
        let randomizer: Randomizer = ["a", "b", "c", "d"].into_iter().collect();
        let mut rng = rng();

        let seen: HashSet<&str> = (0..1000)
            .map(|_| randomizer.random_with(&mut rng).expect("not empty"))
            .collect();

        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn empty_random_is_error() {
        let randomizer = Randomizer::new();
        assert!(matches!(randomizer.random(), Err(Error::Empty)));
    }

    #[test]
    fn cleared_random_is_error() {
        let mut randomizer: Randomizer = ["one"].into_iter().collect();
        randomizer.clear();
        assert!(matches!(randomizer.random(), Err(Error::Empty)));
    }

    #[test]
    fn append_keeps_order_and_duplicates() {
        let mut randomizer = Randomizer::new();
        randomizer.append(["x", "y"]);
        randomizer.append(["x"]);

        assert_eq!(randomizer.iter().collect::<Vec<_>>(), ["x", "y", "x"]);
    }

    #[test]
    fn fill_skips_blank_lines() {
        let mut randomizer = Randomizer::new();
        randomizer
            .fill_from_reader(Cursor::new("yes\r\n\nno\n   \nmaybe"), false)
            .expect("reading from memory");

        assert_eq!(randomizer.iter().collect::<Vec<_>>(), ["yes", "no", "maybe"]);
    }

    #[test]
    fn fill_appends_without_clear() {
        let mut randomizer: Randomizer = ["old"].into_iter().collect();
        randomizer
            .fill_from_reader(Cursor::new("new\n"), false)
            .expect("reading from memory");

        assert_eq!(randomizer.iter().collect::<Vec<_>>(), ["old", "new"]);
    }

    #[test]
    fn fill_with_clear_drops_previous() {
        let mut randomizer: Randomizer = ["stale", "old"].into_iter().collect();
        randomizer
            .fill_from_reader(Cursor::new("fresh\nnew\n"), true)
            .expect("reading from memory");

        let mut rng = rng();
        for _ in 0..1000 {
            let item = randomizer.random_with(&mut rng).expect("not empty");
            assert!(item == "fresh" || item == "new", "drew stale item {item}");
        }
    }

    #[test]
    fn fill_missing_file_is_error() {
        let mut randomizer: Randomizer = ["kept"].into_iter().collect();
        let result = randomizer.fill("this/wordlist/does/not/exist.txt", true);

        assert!(matches!(result, Err(Error::Read { .. })));
        assert_eq!(randomizer.len(), 1);
    }

    #[test]
    fn fill_from_shipped_file() {
        let path = concat!(env!("CARGO_MANIFEST_DIR"), "/data/8ballresponses.txt");
        let randomizer = Randomizer::from_path(path).expect("shipped wordlist");

        assert!(!randomizer.is_empty());
        assert!(randomizer.contains("It is certain"));
    }

    #[test]
    fn combine_concatenates() {
        let mut dest: Randomizer = ["a"].into_iter().collect();
        let first: Randomizer = ["b", "a"].into_iter().collect();
        let second: Randomizer = ["c"].into_iter().collect();

        dest.combine([&first, &second]);

        assert_eq!(dest.iter().collect::<Vec<_>>(), ["a", "b", "a", "c"]);
        assert_eq!(first.len(), 2);
    }
}
