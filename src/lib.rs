//! Farewell Engine: randomized, templated goodbye messages.
//!
//! Picks a template from a corpus compiled into the crate, fills in the
//! `{name}`, `{location}`, `{date}` and `{time}` placeholders, optionally
//! strips emoji, and optionally hands the result to a caller-supplied
//! translator. Generation never fails: bad options are normalized with a
//! `tracing` warning and translation failures fall back to the original
//! message.
//!
//! ```no_run
//! use farewell_engine::{generate, GenerationOptions};
//!
//! let message = generate(&GenerationOptions::new().with_name("Alice"));
//! println!("{}", message);
//! ```

pub mod core;
pub mod schema;

#[cfg(test)]
mod test_support;

pub use crate::core::corpus::{Corpus, EMBEDDED_CORPUS_SIZE};
pub use crate::core::corpus_source::{CorpusError, CorpusSource, CorpusStats};
pub use crate::core::emoji::{has_emojis, is_emoji, strip_emojis};
pub use crate::core::generator::FarewellGenerator;
pub use crate::core::translate::Translator;
pub use crate::schema::args::TemplateArgs;
pub use crate::schema::options::{EffectiveOptions, GenerationOptions, OptionsError};

/// Generate a farewell message from the embedded corpus.
pub fn generate(options: &GenerationOptions) -> String {
    FarewellGenerator::embedded().generate(options)
}

/// Generate a farewell message from the embedded corpus, translating it
/// when `options` carries a translator and a language other than `en-GB`.
pub async fn generate_async(options: &GenerationOptions) -> String {
    FarewellGenerator::embedded().generate_async(options).await
}
