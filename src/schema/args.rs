use serde::{Deserialize, Serialize};

/// Longest accepted `name`, in characters.
pub const NAME_LIMIT: usize = 50;
/// Longest accepted `location`, in characters.
pub const LOCATION_LIMIT: usize = 100;
/// Longest accepted `date`, in characters.
pub const DATE_LIMIT: usize = 20;
/// Longest accepted `time`, in characters.
pub const TIME_LIMIT: usize = 10;

/// Caller-supplied values for template placeholders.
///
/// A field that is `None` or empty falls back to its default at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateArgs {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
}

impl TemplateArgs {
    /// Copy of these args with every field cut to its limit.
    pub fn truncated(&self) -> TemplateArgs {
        TemplateArgs {
            name: truncate(self.name.as_deref(), NAME_LIMIT),
            location: truncate(self.location.as_deref(), LOCATION_LIMIT),
            date: truncate(self.date.as_deref(), DATE_LIMIT),
            time: truncate(self.time.as_deref(), TIME_LIMIT),
        }
    }

    pub fn name(&self) -> Option<&str> {
        non_empty(self.name.as_deref())
    }

    pub fn location(&self) -> Option<&str> {
        non_empty(self.location.as_deref())
    }

    pub fn date(&self) -> Option<&str> {
        non_empty(self.date.as_deref())
    }

    pub fn time(&self) -> Option<&str> {
        non_empty(self.time.as_deref())
    }
}

fn truncate(value: Option<&str>, limit: usize) -> Option<String> {
    let value = value?;
    match value.char_indices().nth(limit) {
        Some((cut, _)) => {
            tracing::debug!(
                limit,
                original_chars = value.chars().count(),
                "truncating template argument"
            );
            Some(value[..cut].to_string())
        }
        None => Some(value.to_string()),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
