//! Built-in request handlers and the error handler.

use super::{Handler, RequestContext};
use crate::facts::FactTable;
use crate::i18n::{LocalizationTable, MessageKey, Translator};
use hoopfacts_core::{
    error::SkillError,
    locale::Locale,
    request::{intents, RequestEnvelope, RequestType},
    response::ResponsePayload,
};
use std::sync::Arc;
use tracing::{error, info};

/// Spoken when even the ERROR message cannot be resolved.
const LAST_RESORT_MSG: &str = "Sorry, I had trouble doing what you asked. Please try again.";

/// The standard handler chain, highest priority first.
pub fn defaults(fact_intent: &str, facts: Arc<FactTable>) -> Vec<Handler> {
    vec![
        launch(),
        fact(fact_intent, facts),
        help(),
        cancel_and_stop(),
        fallback(),
        session_ended(),
        intent_reflector(),
    ]
}

fn is_type(event: &RequestEnvelope, kind: RequestType) -> bool {
    event.request_type() == kind
}

/// Speak a localized message and keep the session open.
fn ask(ctx: &RequestContext, key: MessageKey) -> Result<ResponsePayload, SkillError> {
    Ok(ResponsePayload::ask(ctx.translator()?.t(key)?))
}

pub fn launch() -> Handler {
    Handler::new(
        "Launch",
        |event| is_type(event, RequestType::LaunchRequest),
        |_, ctx| ask(ctx, MessageKey::Welcome),
    )
}

pub fn fact(intent_name: &str, facts: Arc<FactTable>) -> Handler {
    let intent_name = intent_name.to_string();
    Handler::new(
        "Fact",
        move |event| event.is_intent(&intent_name),
        move |event, ctx| {
            let intro = ctx.translator()?.t(MessageKey::GetFact)?;
            let fact = facts.pick_fact(event.locale(), &mut *ctx.rng)?;
            Ok(ResponsePayload::ask(format!("{intro}{fact}")))
        },
    )
}

pub fn help() -> Handler {
    Handler::new(
        "Help",
        |event| event.is_intent(intents::HELP),
        |_, ctx| ask(ctx, MessageKey::Help),
    )
}

pub fn cancel_and_stop() -> Handler {
    Handler::new(
        "CancelAndStop",
        |event| event.is_intent(intents::CANCEL) || event.is_intent(intents::STOP),
        |_, ctx| Ok(ResponsePayload::tell(ctx.translator()?.t(MessageKey::Goodbye)?)),
    )
}

pub fn fallback() -> Handler {
    Handler::new(
        "Fallback",
        |event| event.is_intent(intents::FALLBACK),
        |_, ctx| ask(ctx, MessageKey::Fallback),
    )
}

pub fn session_ended() -> Handler {
    Handler::new(
        "SessionEnded",
        |event| is_type(event, RequestType::SessionEndedRequest),
        |event, _| {
            info!(
                session_id = event.session_id().unwrap_or("-"),
                reason = event.request.reason.as_deref().unwrap_or("-"),
                error = ?event.request.error,
                "session ended"
            );
            Ok(ResponsePayload::empty())
        },
    )
}

/// Catch-all for intent requests: repeats the intent name back. Useful when
/// testing the interaction model.
pub fn intent_reflector() -> Handler {
    Handler::new(
        "IntentReflector",
        |event| is_type(event, RequestType::IntentRequest),
        |event, ctx| {
            let intent = event.require_intent_name()?;
            let text = ctx.translator()?.resolve(MessageKey::Reflector, &[intent])?;
            Ok(ResponsePayload::ask(text))
        },
    )
}

type ErrorPredicate = Box<dyn Fn(&RequestEnvelope, &SkillError) -> bool + Send + Sync>;
type ErrorAction = Box<dyn Fn(&RequestEnvelope, &SkillError) -> ResponsePayload + Send + Sync>;

/// Converts a failed invocation into a payload.
pub struct ErrorHandler {
    name: &'static str,
    matches: ErrorPredicate,
    action: ErrorAction,
}

impl ErrorHandler {
    pub fn new<P, A>(name: &'static str, matches: P, action: A) -> Self
    where
        P: Fn(&RequestEnvelope, &SkillError) -> bool + Send + Sync + 'static,
        A: Fn(&RequestEnvelope, &SkillError) -> ResponsePayload + Send + Sync + 'static,
    {
        Self {
            name,
            matches: Box::new(matches),
            action: Box::new(action),
        }
    }

    /// Matches every error and speaks the localized ERROR message.
    ///
    /// Builds its own translator from the event locale, so it works even
    /// when the localization interceptor never ran.
    pub fn catch_all(table: Arc<LocalizationTable>, fallback: Locale) -> Self {
        Self::new(
            "CatchAll",
            |_, _| true,
            move |event, err| {
                log_error(event, err);
                let translator = Translator::new(table.clone(), event.locale(), fallback);
                match translator.t(MessageKey::Error) {
                    Ok(text) => ResponsePayload::ask(text),
                    Err(e) => {
                        error!("could not localize error message: {e}");
                        ResponsePayload::ask(LAST_RESORT_MSG)
                    }
                }
            },
        )
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn matches(&self, event: &RequestEnvelope, err: &SkillError) -> bool {
        (self.matches)(event, err)
    }

    pub fn handle(&self, event: &RequestEnvelope, err: &SkillError) -> ResponsePayload {
        (self.action)(event, err)
    }
}

/// Used only if no registered error handler matched.
pub fn last_resort(event: &RequestEnvelope, err: &SkillError) -> ResponsePayload {
    log_error(event, err);
    ResponsePayload::ask(LAST_RESORT_MSG)
}

fn log_error(event: &RequestEnvelope, err: &SkillError) {
    error!(
        request_type = event.request_type().as_str(),
        intent = event.intent_name().unwrap_or("-"),
        locale = event.locale().unwrap_or("-"),
        request_id = %event.request.request_id,
        "error handled: {err}"
    );
}
