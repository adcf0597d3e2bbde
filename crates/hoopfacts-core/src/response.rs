//! Outbound speech payload and the wire envelope it is delivered in.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// What the skill says back for one invocation.
///
/// Serializes as `{ outputSpeech, reprompt?, shouldEndSession }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponsePayload {
    /// Spoken text. `None` only for the empty session-ended payload.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<String>,
    /// Text re-spoken if the user stays silent; keeps the session open.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<String>,
    #[serde(default)]
    pub should_end_session: bool,
}

impl ResponsePayload {
    /// Speak `text` and keep listening with the same text as reprompt.
    pub fn ask(text: impl Into<String>) -> Self {
        let text = text.into();
        ResponseBuilder::new().speak(&text).reprompt(text).build()
    }

    /// Speak `text` and close the session.
    pub fn tell(text: impl Into<String>) -> Self {
        ResponseBuilder::new().speak(text).end_session().build()
    }

    /// No speech at all; the session is already over.
    pub fn empty() -> Self {
        ResponseBuilder::new().end_session().build()
    }

    pub fn is_empty(&self) -> bool {
        self.output_speech.is_none() && self.reprompt.is_none()
    }
}

/// Accumulates the fields of a [`ResponsePayload`].
#[derive(Debug, Default)]
pub struct ResponseBuilder {
    speech: Option<String>,
    reprompt: Option<String>,
    end_session: Option<bool>,
}

impl ResponseBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn speak(mut self, text: impl Into<String>) -> Self {
        self.speech = Some(text.into());
        self
    }

    pub fn reprompt(mut self, text: impl Into<String>) -> Self {
        self.reprompt = Some(text.into());
        self
    }

    pub fn end_session(mut self) -> Self {
        self.end_session = Some(true);
        self
    }

    /// Finalize the payload.
    ///
    /// A reprompt always keeps the session open. Without one, the session
    /// stays open unless `end_session` was requested.
    pub fn build(self) -> ResponsePayload {
        let should_end_session = match (&self.reprompt, self.end_session) {
            (Some(_), _) => false,
            (None, Some(end)) => end,
            (None, None) => false,
        };
        ResponsePayload {
            output_speech: self.speech,
            reprompt: self.reprompt,
            should_end_session,
        }
    }
}

/// The full outbound envelope in the platform's wire format.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    #[serde(default)]
    pub session_attributes: Map<String, Value>,
    pub response: WireResponse,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WireResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    pub should_end_session: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub kind: String,
    pub ssml: String,
}

impl OutputSpeech {
    pub fn ssml(text: &str) -> Self {
        Self {
            kind: "SSML".to_string(),
            ssml: format!("<speak>{}</speak>", escape_ssml(text)),
        }
    }
}

impl From<&ResponsePayload> for ResponseEnvelope {
    fn from(payload: &ResponsePayload) -> Self {
        Self {
            version: "1.0".to_string(),
            session_attributes: Map::new(),
            response: WireResponse {
                output_speech: payload.output_speech.as_deref().map(OutputSpeech::ssml),
                reprompt: payload.reprompt.as_deref().map(|text| Reprompt {
                    output_speech: OutputSpeech::ssml(text),
                }),
                should_end_session: payload.should_end_session,
            },
        }
    }
}

/// Escape the characters SSML treats as markup.
pub fn escape_ssml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_ask_keeps_session_open() {
        let p = ResponsePayload::ask("Hello");
        assert_eq!(p.output_speech.as_deref(), Some("Hello"));
        assert_eq!(p.reprompt.as_deref(), Some("Hello"));
        assert!(!p.should_end_session);
    }

    #[test]
    fn test_tell_ends_session_without_reprompt() {
        let p = ResponsePayload::tell("Goodbye!");
        assert_eq!(p.output_speech.as_deref(), Some("Goodbye!"));
        assert!(p.reprompt.is_none());
        assert!(p.should_end_session);
    }

    #[test]
    fn test_empty_payload() {
        let p = ResponsePayload::empty();
        assert!(p.is_empty());
        assert!(p.should_end_session);
    }

    #[test]
    fn test_reprompt_overrides_end_session() {
        let p = ResponseBuilder::new()
            .speak("a")
            .reprompt("b")
            .end_session()
            .build();
        assert!(!p.should_end_session);
    }

    #[test]
    fn test_payload_serialization_shape() {
        let v = serde_json::to_value(ResponsePayload::tell("Bye")).unwrap();
        assert_eq!(v, json!({ "outputSpeech": "Bye", "shouldEndSession": true }));

        let v = serde_json::to_value(ResponsePayload::ask("Hi")).unwrap();
        assert_eq!(
            v,
            json!({ "outputSpeech": "Hi", "reprompt": "Hi", "shouldEndSession": false })
        );
    }

    #[test]
    fn test_envelope_wraps_ssml() {
        let env = ResponseEnvelope::from(&ResponsePayload::ask("Tom & Jerry <3"));
        let v = serde_json::to_value(&env).unwrap();
        assert_eq!(v["version"], "1.0");
        assert_eq!(v["response"]["outputSpeech"]["type"], "SSML");
        assert_eq!(
            v["response"]["outputSpeech"]["ssml"],
            "<speak>Tom &amp; Jerry &lt;3</speak>"
        );
        assert_eq!(
            v["response"]["reprompt"]["outputSpeech"]["ssml"],
            "<speak>Tom &amp; Jerry &lt;3</speak>"
        );
        assert_eq!(v["response"]["shouldEndSession"], false);
    }

    #[test]
    fn test_envelope_for_empty_payload_has_no_speech() {
        let v = serde_json::to_value(ResponseEnvelope::from(&ResponsePayload::empty())).unwrap();
        assert!(v["response"].get("outputSpeech").is_none());
        assert!(v["response"].get("reprompt").is_none());
    }

    #[test]
    fn test_escape_keeps_accents_and_quotes() {
        assert_eq!(
            escape_ssml("¿Sabías qué? 'slam dunk'"),
            "¿Sabías qué? 'slam dunk'"
        );
    }
}
