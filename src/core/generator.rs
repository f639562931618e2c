/// The farewell generator: corpus selection, substitution, emoji stripping
/// and the optional translation step.

use chrono::{DateTime, Utc};
use rand::Rng;
use tracing::debug;

use crate::core::corpus::Corpus;
use crate::core::emoji::strip_emojis;
use crate::core::template::{render, Bindings};
use crate::core::translate::translate_or_fallback;
use crate::schema::options::{EffectiveOptions, GenerationOptions};

/// Generates farewell messages from a corpus.
///
/// Holds nothing but a read-only corpus view, so one generator can serve any
/// number of concurrent callers. Generation never fails: invalid options are
/// normalized and translation failures fall back to the untranslated text.
#[derive(Debug, Clone, Copy)]
pub struct FarewellGenerator<'c> {
    corpus: Corpus<'c>,
}

impl FarewellGenerator<'static> {
    /// A generator over the corpus compiled into the crate.
    pub fn embedded() -> FarewellGenerator<'static> {
        FarewellGenerator {
            corpus: Corpus::embedded(),
        }
    }
}

impl Default for FarewellGenerator<'static> {
    fn default() -> Self {
        FarewellGenerator::embedded()
    }
}

impl<'c> FarewellGenerator<'c> {
    pub fn new(corpus: Corpus<'c>) -> FarewellGenerator<'c> {
        FarewellGenerator { corpus }
    }

    pub fn corpus(&self) -> Corpus<'c> {
        self.corpus
    }

    /// Generate a message using the thread-local RNG and the system clock.
    pub fn generate(&self, options: &GenerationOptions) -> String {
        self.generate_with_rng(options, &mut rand::thread_rng())
    }

    /// Generate a message with a caller-supplied RNG.
    pub fn generate_with_rng<R: Rng + ?Sized>(
        &self,
        options: &GenerationOptions,
        rng: &mut R,
    ) -> String {
        self.render(&options.resolve(), rng, Utc::now)
    }

    /// Generate a message as if the current instant were `now`.
    pub fn generate_at<R: Rng + ?Sized>(
        &self,
        options: &GenerationOptions,
        now: DateTime<Utc>,
        rng: &mut R,
    ) -> String {
        self.render(&options.resolve(), rng, || now)
    }

    /// Generate a message, then translate it when a translator is supplied
    /// and the language is not `en-GB`.
    ///
    /// Dropping the returned future abandons the pending translation.
    pub async fn generate_async(&self, options: &GenerationOptions) -> String {
        let effective = options.resolve();
        let message = self.render_now(&effective);

        match effective.active_translator() {
            Some(translator) => {
                translate_or_fallback(
                    translator,
                    &effective.language_code,
                    message,
                    effective.translation_timeout,
                )
                .await
            }
            None => message,
        }
    }

    fn render_now(&self, effective: &EffectiveOptions) -> String {
        self.render(effective, &mut rand::thread_rng(), Utc::now)
    }

    fn render<R: Rng + ?Sized>(
        &self,
        effective: &EffectiveOptions,
        rng: &mut R,
        clock: impl FnOnce() -> DateTime<Utc>,
    ) -> String {
        let template = self.corpus.pick(rng);
        debug!(template, "selected farewell template");

        let bindings = Bindings::resolve(
            template,
            &effective.template_args,
            &effective.timezone,
            clock,
        );
        let message = render(template, &bindings);

        if effective.strip_emojis {
            strip_emojis(&message)
        } else {
            message
        }
    }
}
