/// Corpus store: the fixed, ordered collection of farewell templates.

use rand::Rng;
use rustc_hash::FxHashSet;

use crate::core::corpus_source::CorpusError;

mod generated {
    include!(concat!(env!("OUT_DIR"), "/corpus.rs"));
}

/// Number of templates compiled into the crate.
pub const EMBEDDED_CORPUS_SIZE: usize = generated::MESSAGE_COUNT;

/// A read-only view over a non-empty list of distinct, non-blank templates.
///
/// `Corpus::embedded()` is the corpus compiled in by the build script;
/// `Corpus::new` wraps any other slice after checking the same invariants.
#[derive(Debug, Clone, Copy)]
pub struct Corpus<'a> {
    messages: &'a [&'a str],
}

impl Corpus<'static> {
    pub fn embedded() -> Corpus<'static> {
        Corpus {
            messages: generated::MESSAGES,
        }
    }
}

impl<'a> Corpus<'a> {
    /// Wrap a slice of templates. Rejects an empty slice, blank entries and
    /// repeated entries.
    pub fn new(messages: &'a [&'a str]) -> Result<Corpus<'a>, CorpusError> {
        if messages.is_empty() {
            return Err(CorpusError::Empty);
        }

        let mut seen = FxHashSet::default();
        for (index, message) in messages.iter().enumerate() {
            if message.trim().is_empty() {
                return Err(CorpusError::BlankEntry(index));
            }
            if !seen.insert(*message) {
                return Err(CorpusError::DuplicateEntry(index));
            }
        }

        Ok(Corpus { messages })
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Always false for a constructed corpus.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&'a str> {
        self.messages.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a str> + 'a {
        let messages = self.messages;
        messages.iter().copied()
    }

    /// Pick a template uniformly at random.
    pub fn pick<R: Rng + ?Sized>(&self, rng: &mut R) -> &'a str {
        // Non-empty by construction.
        self.messages[rng.gen_range(0..self.messages.len())]
    }
}

impl Default for Corpus<'static> {
    fn default() -> Self {
        Corpus::embedded()
    }
}
