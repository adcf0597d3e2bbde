use thiserror::Error;

/// Top-level error type for the skill.
#[derive(Debug, Error)]
pub enum SkillError {
    /// No handler predicate matched the event.
    #[error("no handler matched request type {request_type} (intent: {intent:?})")]
    UnmatchedRoute {
        request_type: String,
        intent: Option<String>,
    },

    /// A message key is absent for both the request locale and the fallback.
    #[error("missing translation for {key} (locale: {locale}, fallback: {fallback})")]
    MissingTranslation {
        key: String,
        locale: String,
        fallback: String,
    },

    /// No facts are configured for the resolved locale.
    #[error("no facts configured for locale {0}")]
    MissingFacts(String),

    /// The event lacks a field the matched handler needs.
    #[error("malformed event: {0}")]
    MalformedEvent(String),

    /// A request interceptor failed.
    #[error("interceptor '{name}' failed: {reason}")]
    Interceptor { name: String, reason: String },

    /// Configuration error.
    #[error("config error: {0}")]
    Config(String),

    /// I/O error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
