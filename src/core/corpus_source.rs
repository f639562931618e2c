//! Corpus source parsing: turns a plain-text corpus file into an ordered,
//! deduplicated list of message templates.
//!
//! Format: one template per line. Lines are trimmed; blank lines and lines
//! starting with `#` are skipped; a line identical to an earlier one is
//! dropped. The surviving lines keep their file order.
//!
//! This module is also compiled into the build script, so it must only
//! depend on `std`, `thiserror` and `rustc-hash`.

use rustc_hash::FxHashSet;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CorpusError {
    #[error("corpus contains no messages")]
    Empty,
    #[error("corpus entry {0} is blank")]
    BlankEntry(usize),
    #[error("corpus entry {0} duplicates an earlier entry")]
    DuplicateEntry(usize),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Line counts gathered while parsing a corpus source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CorpusStats {
    pub total_lines: usize,
    pub comments: usize,
    pub empty_lines: usize,
    pub duplicates: usize,
    pub unique_messages: usize,
}

/// A parsed corpus source: the surviving templates plus parse statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorpusSource {
    messages: Vec<String>,
    stats: CorpusStats,
}

impl CorpusSource {
    /// Read and parse a corpus file.
    pub fn load(path: &Path) -> Result<CorpusSource, CorpusError> {
        let text = std::fs::read_to_string(path)?;
        Self::parse(&text)
    }

    /// Parse corpus text. Fails with `CorpusError::Empty` when no line
    /// survives filtering.
    pub fn parse(text: &str) -> Result<CorpusSource, CorpusError> {
        let mut stats = CorpusStats::default();
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut messages = Vec::new();

        for line in text.lines() {
            stats.total_lines += 1;
            let trimmed = line.trim();

            if trimmed.is_empty() {
                stats.empty_lines += 1;
                continue;
            }
            if trimmed.starts_with('#') {
                stats.comments += 1;
                continue;
            }
            if !seen.insert(trimmed) {
                stats.duplicates += 1;
                continue;
            }
            messages.push(trimmed.to_string());
        }

        if messages.is_empty() {
            return Err(CorpusError::Empty);
        }
        stats.unique_messages = messages.len();

        Ok(CorpusSource { messages, stats })
    }

    pub fn messages(&self) -> &[String] {
        &self.messages
    }

    /// Borrowed views of the messages, in the shape `Corpus::new` expects.
    pub fn message_refs(&self) -> Vec<&str> {
        self.messages.iter().map(String::as_str).collect()
    }

    pub fn stats(&self) -> CorpusStats {
        self.stats
    }

    /// Render the corpus as a Rust module exposing `MESSAGES` and
    /// `MESSAGE_COUNT`. The output depends only on the parsed messages, so
    /// identical sources always render byte-identical modules.
    pub fn render_rust(&self, origin: &str) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "// Generated from {}. Do not edit.\n// Message count: {}\n\n",
            origin,
            self.messages.len()
        ));
        out.push_str("/// Farewell templates, in source order.\n");
        out.push_str("pub static MESSAGES: &[&str] = &[\n");
        for message in &self.messages {
            out.push_str(&format!("    {:?},\n", message));
        }
        out.push_str("];\n\n");
        out.push_str("/// Number of templates in `MESSAGES`.\n");
        out.push_str(&format!(
            "pub const MESSAGE_COUNT: usize = {};\n",
            self.messages.len()
        ));
        out
    }
}
