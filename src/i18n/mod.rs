//! Internationalization: localized strings for spoken responses.
//!
//! A two-level table (locale → message key → template) built once at
//! startup, plus a [`Translator`] bound to one request's locale.
//! Supported languages: English (fallback), Spanish.

mod format;
mod strings;

#[cfg(test)]
mod tests;

pub use format::format_positional;

use hoopfacts_core::{error::SkillError, locale::Locale};
use std::collections::HashMap;
use std::sync::Arc;

/// Keys of every message an action can speak.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Welcome,
    GetFact,
    Help,
    Goodbye,
    Fallback,
    Error,
    Reflector,
}

impl MessageKey {
    pub const ALL: [MessageKey; 7] = [
        MessageKey::Welcome,
        MessageKey::GetFact,
        MessageKey::Help,
        MessageKey::Goodbye,
        MessageKey::Fallback,
        MessageKey::Error,
        MessageKey::Reflector,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Welcome => "WELCOME_MSG",
            Self::GetFact => "GET_FACT_MSG",
            Self::Help => "HELP_MSG",
            Self::Goodbye => "GOODBYE_MSG",
            Self::Fallback => "FALLBACK_MSG",
            Self::Error => "ERROR_MSG",
            Self::Reflector => "REFLECTOR_MSG",
        }
    }
}

/// Immutable locale → key → template mapping.
#[derive(Debug, Default)]
pub struct LocalizationTable {
    entries: HashMap<Locale, HashMap<MessageKey, &'static str>>,
}

impl LocalizationTable {
    /// Build a table from literal `(locale, [(key, template)])` rows.
    pub fn from_entries(rows: &[(Locale, &[(MessageKey, &'static str)])]) -> Self {
        let mut entries: HashMap<Locale, HashMap<MessageKey, &'static str>> = HashMap::new();
        for (locale, messages) in rows {
            entries
                .entry(*locale)
                .or_default()
                .extend(messages.iter().copied());
        }
        Self { entries }
    }

    /// The skill's built-in English and Spanish strings.
    pub fn builtin() -> Self {
        Self::from_entries(strings::LANGUAGE_STRINGS)
    }

    /// Raw template for `key` in exactly `locale`, without fallback.
    pub fn get(&self, locale: Locale, key: MessageKey) -> Option<&'static str> {
        self.entries.get(&locale)?.get(&key).copied()
    }

    /// Check that every key exists for the fallback locale and that no
    /// template is blank.
    pub fn validate(&self, fallback: Locale) -> Result<(), SkillError> {
        for key in MessageKey::ALL {
            if self.get(fallback, key).is_none() {
                return Err(SkillError::MissingTranslation {
                    key: key.as_str().to_string(),
                    locale: fallback.to_string(),
                    fallback: fallback.to_string(),
                });
            }
        }
        for (locale, messages) in &self.entries {
            if let Some((key, _)) = messages.iter().find(|(_, v)| v.trim().is_empty()) {
                return Err(SkillError::Config(format!(
                    "blank template for {} in locale {locale}",
                    key.as_str()
                )));
            }
        }
        Ok(())
    }
}

/// Resolves message keys for one request's locale.
#[derive(Debug, Clone)]
pub struct Translator {
    table: Arc<LocalizationTable>,
    locale: Locale,
    fallback: Locale,
}

impl Translator {
    /// Bind a translator to a raw request tag (e.g. `"es-MX"`).
    pub fn new(table: Arc<LocalizationTable>, tag: Option<&str>, fallback: Locale) -> Self {
        Self {
            table,
            locale: Locale::resolve(tag, fallback),
            fallback,
        }
    }

    /// The locale this translator resolved to.
    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Localized text for `key` with positional `args` substituted.
    pub fn resolve(&self, key: MessageKey, args: &[&str]) -> Result<String, SkillError> {
        let template = self
            .table
            .get(self.locale, key)
            .or_else(|| self.table.get(self.fallback, key))
            .ok_or_else(|| SkillError::MissingTranslation {
                key: key.as_str().to_string(),
                locale: self.locale.to_string(),
                fallback: self.fallback.to_string(),
            })?;
        Ok(format_positional(template, args))
    }

    /// Shorthand for [`Translator::resolve`] without arguments.
    pub fn t(&self, key: MessageKey) -> Result<String, SkillError> {
        self.resolve(key, &[])
    }
}
