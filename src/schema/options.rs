/// Generation options: caller input, defaults, validation, and loading from
/// RON or JSON files.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::sync::{Arc, OnceLock};
use std::time::Duration;
use thiserror::Error;
use tracing::warn;

use crate::core::translate::{duration_millis, Translator};
use crate::schema::args::TemplateArgs;

/// Language that never triggers translation. Compared case-sensitively.
pub const DEFAULT_LANGUAGE: &str = "en-GB";
pub const DEFAULT_TIMEZONE: &str = "Europe/London";

#[derive(Debug, Error)]
pub enum OptionsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON deserialization error: {0}")]
    Ron(#[from] ron::error::SpannedError),
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Options for a single `generate` call, as supplied by the caller.
///
/// Every field is optional. `resolve` turns these into `EffectiveOptions`,
/// replacing invalid values with defaults rather than failing.
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GenerationOptions {
    #[serde(alias = "languageCode", skip_serializing_if = "Option::is_none")]
    pub language_code: Option<String>,
    #[serde(alias = "templateArgs")]
    pub template_args: TemplateArgs,
    #[serde(alias = "useEmojis")]
    pub use_emojis: bool,
    #[serde(alias = "stripEmojis")]
    pub strip_emojis: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(alias = "translationTimeoutMs", skip_serializing_if = "Option::is_none")]
    pub translation_timeout_ms: Option<u64>,
    #[serde(skip)]
    pub translator: Option<Arc<dyn Translator>>,
}

impl Default for GenerationOptions {
    fn default() -> Self {
        Self {
            language_code: None,
            template_args: TemplateArgs::default(),
            use_emojis: true,
            strip_emojis: false,
            timezone: None,
            translation_timeout_ms: None,
            translator: None,
        }
    }
}

impl fmt::Debug for GenerationOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GenerationOptions")
            .field("language_code", &self.language_code)
            .field("template_args", &self.template_args)
            .field("use_emojis", &self.use_emojis)
            .field("strip_emojis", &self.strip_emojis)
            .field("timezone", &self.timezone)
            .field("translation_timeout_ms", &self.translation_timeout_ms)
            .field("translator", &self.translator.as_ref().map(|_| "<translator>"))
            .finish()
    }
}

impl GenerationOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.template_args.name = Some(name.into());
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.template_args.location = Some(location.into());
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.template_args.date = Some(date.into());
        self
    }

    pub fn with_time(mut self, time: impl Into<String>) -> Self {
        self.template_args.time = Some(time.into());
        self
    }

    pub fn with_language(mut self, language_code: impl Into<String>) -> Self {
        self.language_code = Some(language_code.into());
        self
    }

    pub fn with_timezone(mut self, timezone: impl Into<String>) -> Self {
        self.timezone = Some(timezone.into());
        self
    }

    pub fn strip_emojis(mut self, strip: bool) -> Self {
        self.strip_emojis = strip;
        self
    }

    pub fn use_emojis(mut self, use_emojis: bool) -> Self {
        self.use_emojis = use_emojis;
        self
    }

    pub fn with_translator(mut self, translator: impl Translator + 'static) -> Self {
        self.translator = Some(Arc::new(translator));
        self
    }

    pub fn with_translation_timeout(mut self, timeout: Duration) -> Self {
        self.translation_timeout_ms = Some(duration_millis(timeout));
        self
    }

    /// Parse options from a RON string.
    pub fn from_ron(input: &str) -> Result<GenerationOptions, OptionsError> {
        Ok(ron::from_str(input)?)
    }

    /// Parse options from a JSON string. Accepts both snake_case and the
    /// camelCase field names (`templateArgs`, `stripEmojis`, ...).
    pub fn from_json(input: &str) -> Result<GenerationOptions, OptionsError> {
        Ok(serde_json::from_str(input)?)
    }

    /// Load options from a file; `.json` files are read as JSON, anything
    /// else as RON.
    pub fn load(path: &Path) -> Result<GenerationOptions, OptionsError> {
        let contents = std::fs::read_to_string(path)?;
        match path.extension().and_then(|s| s.to_str()) {
            Some("json") => Self::from_json(&contents),
            _ => Self::from_ron(&contents),
        }
    }

    /// Merge these options over the defaults and sanitize them.
    ///
    /// Invalid language codes and timezones are replaced by the defaults
    /// with a warning; template args are truncated to their limits. `self`
    /// is left untouched.
    pub fn resolve(&self) -> EffectiveOptions {
        let language_code = match self.language_code.as_deref() {
            None => DEFAULT_LANGUAGE.to_string(),
            Some(code) if is_valid_language_code(code) => code.to_string(),
            Some(code) => {
                warn!(
                    language_code = code,
                    fallback = DEFAULT_LANGUAGE,
                    "invalid language code, falling back to default"
                );
                DEFAULT_LANGUAGE.to_string()
            }
        };

        let timezone = match self.timezone.as_deref() {
            None => DEFAULT_TIMEZONE.to_string(),
            Some(tz) if is_valid_timezone(tz) => tz.to_string(),
            Some(tz) => {
                warn!(
                    timezone = tz,
                    fallback = DEFAULT_TIMEZONE,
                    "invalid timezone, falling back to default"
                );
                DEFAULT_TIMEZONE.to_string()
            }
        };

        EffectiveOptions {
            language_code,
            template_args: self.template_args.truncated(),
            strip_emojis: self.strip_emojis || !self.use_emojis,
            timezone,
            translator: self.translator.clone(),
            translation_timeout: self.translation_timeout_ms.map(Duration::from_millis),
        }
    }
}

/// Sanitized options actually used for generation.
#[derive(Clone)]
pub struct EffectiveOptions {
    pub language_code: String,
    pub template_args: TemplateArgs,
    pub strip_emojis: bool,
    pub timezone: String,
    pub translator: Option<Arc<dyn Translator>>,
    pub translation_timeout: Option<Duration>,
}

impl fmt::Debug for EffectiveOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EffectiveOptions")
            .field("language_code", &self.language_code)
            .field("template_args", &self.template_args)
            .field("strip_emojis", &self.strip_emojis)
            .field("timezone", &self.timezone)
            .field("translator", &self.translator.as_ref().map(|_| "<translator>"))
            .field("translation_timeout", &self.translation_timeout)
            .finish()
    }
}

impl EffectiveOptions {
    /// The translator to run, if one was supplied and the language is not
    /// the default.
    pub fn active_translator(&self) -> Option<&dyn Translator> {
        if self.language_code == DEFAULT_LANGUAGE {
            return None;
        }
        self.translator.as_deref()
    }
}

/// Two lowercase letters, optionally followed by `-` and two uppercase
/// letters: `en`, `fr-FR`.
pub fn is_valid_language_code(code: &str) -> bool {
    static PATTERN: OnceLock<Regex> = OnceLock::new();

    PATTERN
        .get_or_init(|| {
            Regex::new(r"^[a-z]{2}(?:-[A-Z]{2})?$").expect("language code pattern is valid")
        })
        .is_match(code)
}

/// Minimal IANA-style check: non-empty and contains a `/`. Whether the zone
/// actually exists is decided when formatting.
pub fn is_valid_timezone(timezone: &str) -> bool {
    !timezone.is_empty() && timezone.contains('/')
}
