//! Default value functions used by serde for config deserialization.

pub fn default_name() -> String {
    "Basketball Curiosities".to_string()
}

pub fn default_locale() -> String {
    "en".to_string()
}

pub fn default_fact_intent() -> String {
    "FrasesIntent".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}

pub fn default_true() -> bool {
    true
}
