//! Synthetic request envelopes for trying the skill from the command line.

use chrono::Utc;
use clap::Subcommand;
use hoopfacts_core::request::{
    intents, Application, Intent, Request, RequestEnvelope, RequestType, Session,
};
use serde_json::Map;
use uuid::Uuid;

/// Which kind of event to simulate.
#[derive(Debug, Clone, Subcommand)]
pub enum SimEvent {
    /// Open the skill.
    Launch,
    /// Ask for a fact (uses the configured fact intent).
    Fact,
    /// Built-in help intent.
    Help,
    /// Built-in stop intent.
    Stop,
    /// Built-in cancel intent.
    Cancel,
    /// Built-in fallback intent.
    Fallback,
    /// Any intent by name.
    Intent {
        /// Intent name, e.g. `AMAZON.NavigateHomeIntent`.
        name: String,
    },
    /// Session ended by the user.
    End,
}

/// Build a complete envelope for `event`, with fresh ids and timestamp.
pub fn build_event(event: &SimEvent, locale: &str, fact_intent: &str) -> RequestEnvelope {
    let (kind, intent_name, reason) = match event {
        SimEvent::Launch => (RequestType::LaunchRequest, None, None),
        SimEvent::Fact => (RequestType::IntentRequest, Some(fact_intent), None),
        SimEvent::Help => (RequestType::IntentRequest, Some(intents::HELP), None),
        SimEvent::Stop => (RequestType::IntentRequest, Some(intents::STOP), None),
        SimEvent::Cancel => (RequestType::IntentRequest, Some(intents::CANCEL), None),
        SimEvent::Fallback => (RequestType::IntentRequest, Some(intents::FALLBACK), None),
        SimEvent::Intent { name } => (RequestType::IntentRequest, Some(name.as_str()), None),
        SimEvent::End => (
            RequestType::SessionEndedRequest,
            None,
            Some("USER_INITIATED".to_string()),
        ),
    };

    RequestEnvelope {
        version: "1.0".to_string(),
        session: Some(Session {
            new: matches!(event, SimEvent::Launch),
            session_id: format!("amzn1.echo-api.session.{}", Uuid::new_v4()),
            application: Some(Application {
                application_id: "amzn1.ask.skill.hoopfacts-cli".to_string(),
            }),
            attributes: Map::new(),
        }),
        request: Request {
            kind,
            request_id: format!("amzn1.echo-api.request.{}", Uuid::new_v4()),
            timestamp: Some(Utc::now()),
            locale: Some(locale.to_string()),
            intent: intent_name.map(|name| Intent {
                name: name.to_string(),
                confirmation_status: Some("NONE".to_string()),
                slots: Map::new(),
            }),
            reason,
            error: None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fact_uses_configured_intent() {
        let ev = build_event(&SimEvent::Fact, "es-ES", "BasketFactIntent");
        assert_eq!(ev.request_type(), RequestType::IntentRequest);
        assert_eq!(ev.intent_name(), Some("BasketFactIntent"));
        assert_eq!(ev.locale(), Some("es-ES"));
    }

    #[test]
    fn test_launch_is_new_session() {
        let ev = build_event(&SimEvent::Launch, "en-US", "FrasesIntent");
        assert_eq!(ev.request_type(), RequestType::LaunchRequest);
        assert!(ev.session.as_ref().unwrap().new);
        assert!(ev.intent_name().is_none());
    }

    #[test]
    fn test_end_carries_reason() {
        let ev = build_event(&SimEvent::End, "en-US", "FrasesIntent");
        assert_eq!(ev.request_type(), RequestType::SessionEndedRequest);
        assert_eq!(ev.request.reason.as_deref(), Some("USER_INITIATED"));
    }

    #[test]
    fn test_ids_are_unique() {
        let a = build_event(&SimEvent::Help, "en-US", "FrasesIntent");
        let b = build_event(&SimEvent::Help, "en-US", "FrasesIntent");
        assert_ne!(a.request.request_id, b.request.request_id);
        assert_ne!(a.session_id(), b.session_id());
        assert!(a.session_id().unwrap().starts_with("amzn1.echo-api.session."));
    }

    #[test]
    fn test_envelope_round_trips_through_json() {
        let ev = build_event(&SimEvent::Intent { name: "X".into() }, "en-US", "F");
        let raw = serde_json::to_string(&ev).unwrap();
        let back = RequestEnvelope::from_json(&raw).unwrap();
        assert_eq!(back.intent_name(), Some("X"));
        assert_eq!(back.request.timestamp, ev.request.timestamp);
    }
}
