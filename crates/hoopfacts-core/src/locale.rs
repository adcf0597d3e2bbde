//! Supported skill locales and request-tag normalization.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A language the skill has content for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Es,
}

impl Locale {
    /// Every supported locale, in table order.
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    /// Short language code (e.g. `"es"`).
    pub fn code(&self) -> &'static str {
        match self {
            Self::En => "en",
            Self::Es => "es",
        }
    }

    /// Match a request tag such as `"es-MX"` by its language prefix.
    ///
    /// Comparison is ASCII case-insensitive. Returns `None` for tags that
    /// start with no supported code.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let tag = tag.trim();
        Self::ALL.into_iter().find(|l| {
            tag.get(..l.code().len())
                .is_some_and(|prefix| prefix.eq_ignore_ascii_case(l.code()))
        })
    }

    /// Like [`Locale::from_tag`], but unmatched or absent tags resolve to `default`.
    pub fn resolve(tag: Option<&str>, default: Locale) -> Self {
        tag.and_then(Self::from_tag).unwrap_or(default)
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_match() {
        assert_eq!(Locale::from_tag("en-US"), Some(Locale::En));
        assert_eq!(Locale::from_tag("en-GB"), Some(Locale::En));
        assert_eq!(Locale::from_tag("es-ES"), Some(Locale::Es));
        assert_eq!(Locale::from_tag("es-MX"), Some(Locale::Es));
        assert_eq!(Locale::from_tag("ES-us"), Some(Locale::Es));
        assert_eq!(Locale::from_tag("es"), Some(Locale::Es));
    }

    #[test]
    fn test_unsupported_tags() {
        assert_eq!(Locale::from_tag("fr-FR"), None);
        assert_eq!(Locale::from_tag("e"), None);
        assert_eq!(Locale::from_tag(""), None);
        // Multi-byte input must not panic on the prefix slice.
        assert_eq!(Locale::from_tag("ñ"), None);
    }

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(Locale::resolve(Some("de-DE"), Locale::En), Locale::En);
        assert_eq!(Locale::resolve(None, Locale::Es), Locale::Es);
        assert_eq!(Locale::resolve(Some("es-US"), Locale::En), Locale::Es);
    }
}
