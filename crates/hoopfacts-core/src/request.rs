//! Inbound request envelope, as delivered by the voice platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::SkillError;

/// Built-in intent names defined by the voice platform.
pub mod intents {
    pub const HELP: &str = "AMAZON.HelpIntent";
    pub const CANCEL: &str = "AMAZON.CancelIntent";
    pub const STOP: &str = "AMAZON.StopIntent";
    pub const FALLBACK: &str = "AMAZON.FallbackIntent";
}

/// The full inbound envelope.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<Session>,
    pub request: Request,
}

/// Conversation session metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// Whether this is the first request of the session.
    #[serde(default)]
    pub new: bool,
    pub session_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<Application>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub attributes: Map<String, Value>,
}

/// The skill application the request is addressed to.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub application_id: String,
}

/// Request kinds the skill distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RequestType {
    LaunchRequest,
    IntentRequest,
    SessionEndedRequest,
    /// Any type the skill has no handler for (e.g. display events).
    #[serde(other)]
    Unknown,
}

impl RequestType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LaunchRequest => "LaunchRequest",
            Self::IntentRequest => "IntentRequest",
            Self::SessionEndedRequest => "SessionEndedRequest",
            Self::Unknown => "Unknown",
        }
    }
}

/// The request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Request {
    #[serde(rename = "type")]
    pub kind: RequestType,
    #[serde(default)]
    pub request_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Present on intent requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    /// Present on session-ended requests (e.g. `USER_INITIATED`, `ERROR`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    /// Platform error details attached to session-ended requests.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<Value>,
}

/// A recognized intent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confirmation_status: Option<String>,
    #[serde(default, skip_serializing_if = "Map::is_empty")]
    pub slots: Map<String, Value>,
}

impl RequestEnvelope {
    /// Parse an envelope from raw JSON.
    pub fn from_json(raw: &str) -> Result<Self, SkillError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn request_type(&self) -> RequestType {
        self.request.kind
    }

    /// Intent name, only for intent requests.
    pub fn intent_name(&self) -> Option<&str> {
        match self.request.kind {
            RequestType::IntentRequest => self.request.intent.as_ref().map(|i| i.name.as_str()),
            _ => None,
        }
    }

    /// Intent name, or `MalformedEvent` when an intent request carries none.
    pub fn require_intent_name(&self) -> Result<&str, SkillError> {
        self.intent_name().ok_or_else(|| {
            SkillError::MalformedEvent(format!(
                "{} {} has no intent name",
                self.request.kind.as_str(),
                self.request.request_id
            ))
        })
    }

    /// Whether this is an intent request for `name`.
    pub fn is_intent(&self, name: &str) -> bool {
        self.intent_name() == Some(name)
    }

    pub fn locale(&self) -> Option<&str> {
        self.request.locale.as_deref()
    }

    pub fn session_id(&self) -> Option<&str> {
        self.session.as_ref().map(|s| s.session_id.as_str())
    }
}
