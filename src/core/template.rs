/// Placeholder substitution for farewell templates.

use chrono::{DateTime, Utc};
use std::borrow::Cow;

use crate::core::datetime::ZonedInstant;
use crate::schema::args::TemplateArgs;

pub const DEFAULT_NAME: &str = "Good Soul";
pub const DEFAULT_LOCATION: &str = "The World";

/// A recognized template variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    Name,
    Location,
    Date,
    Time,
}

impl Placeholder {
    pub const ALL: [Placeholder; 4] = [
        Placeholder::Name,
        Placeholder::Location,
        Placeholder::Date,
        Placeholder::Time,
    ];

    /// The literal token, e.g. `{name}`.
    pub fn token(&self) -> &'static str {
        match self {
            Self::Name => "{name}",
            Self::Location => "{location}",
            Self::Date => "{date}",
            Self::Time => "{time}",
        }
    }

    /// True when `template` contains this placeholder's token.
    pub fn is_referenced_by(&self, template: &str) -> bool {
        template.contains(self.token())
    }
}

/// Resolved values for every placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bindings<'a> {
    pub name: Cow<'a, str>,
    pub location: Cow<'a, str>,
    pub date: Cow<'a, str>,
    pub time: Cow<'a, str>,
}

impl<'a> Bindings<'a> {
    /// Resolve bindings for `template`.
    ///
    /// Explicit args win over defaults. `clock` is called at most once, and
    /// only when the template needs a date or time that `args` does not
    /// supply. Unneeded date/time bindings are left empty.
    pub fn resolve(
        template: &str,
        args: &'a TemplateArgs,
        timezone: &str,
        clock: impl FnOnce() -> DateTime<Utc>,
    ) -> Bindings<'a> {
        let needs_date = args.date().is_none() && Placeholder::Date.is_referenced_by(template);
        let needs_time = args.time().is_none() && Placeholder::Time.is_referenced_by(template);

        let zoned = if needs_date || needs_time {
            Some(ZonedInstant::new(clock(), timezone))
        } else {
            None
        };

        let date = match (args.date(), &zoned) {
            (Some(date), _) => Cow::Borrowed(date),
            (None, Some(zoned)) if needs_date => Cow::Owned(zoned.date()),
            _ => Cow::Borrowed(""),
        };
        let time = match (args.time(), &zoned) {
            (Some(time), _) => Cow::Borrowed(time),
            (None, Some(zoned)) if needs_time => Cow::Owned(zoned.time()),
            _ => Cow::Borrowed(""),
        };

        Bindings {
            name: Cow::Borrowed(args.name().unwrap_or(DEFAULT_NAME)),
            location: Cow::Borrowed(args.location().unwrap_or(DEFAULT_LOCATION)),
            date,
            time,
        }
    }

    pub fn get(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::Name => &self.name,
            Placeholder::Location => &self.location,
            Placeholder::Date => &self.date,
            Placeholder::Time => &self.time,
        }
    }
}

/// Replace every recognized placeholder in `template` in a single pass.
///
/// Substituted values are never rescanned, so a value that itself looks like
/// a placeholder is emitted verbatim. Unrecognized `{...}` text is kept.
pub fn render(template: &str, bindings: &Bindings<'_>) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let tail = &rest[open..];

        match Placeholder::ALL.iter().find(|p| tail.starts_with(p.token())) {
            Some(placeholder) => {
                out.push_str(bindings.get(*placeholder));
                rest = &tail[placeholder.token().len()..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);

    out
}
