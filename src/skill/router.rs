//! Ordered dispatch table: the first handler whose predicate matches wins.

use super::RequestContext;
use hoopfacts_core::{error::SkillError, request::RequestEnvelope, response::ResponsePayload};
use tracing::debug;

type Predicate = Box<dyn Fn(&RequestEnvelope) -> bool + Send + Sync>;
type Action = Box<
    dyn Fn(&RequestEnvelope, &mut RequestContext) -> Result<ResponsePayload, SkillError>
        + Send
        + Sync,
>;

/// A named (predicate, action) pair.
pub struct Handler {
    name: &'static str,
    matches: Predicate,
    action: Action,
}

impl Handler {
    /// `matches` must be a cheap, side-effect-free test over event fields.
    pub fn new<P, A>(name: &'static str, matches: P, action: A) -> Self
    where
        P: Fn(&RequestEnvelope) -> bool + Send + Sync + 'static,
        A: Fn(&RequestEnvelope, &mut RequestContext) -> Result<ResponsePayload, SkillError>
            + Send
            + Sync
            + 'static,
    {
        Self {
            name,
            matches: Box::new(matches),
            action: Box::new(action),
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn matches(&self, event: &RequestEnvelope) -> bool {
        (self.matches)(event)
    }
}

/// Immutable, ordered handler list.
pub struct Router {
    handlers: Vec<Handler>,
}

impl Router {
    pub fn new(handlers: Vec<Handler>) -> Self {
        Self { handlers }
    }

    pub fn handler_names(&self) -> Vec<&'static str> {
        self.handlers.iter().map(Handler::name).collect()
    }

    /// First handler matching `event`, in registration order.
    pub fn select(&self, event: &RequestEnvelope) -> Option<&Handler> {
        self.handlers.iter().find(|h| h.matches(event))
    }

    /// Run the first matching handler, or fail with `UnmatchedRoute`.
    pub fn route(
        &self,
        event: &RequestEnvelope,
        ctx: &mut RequestContext,
    ) -> Result<ResponsePayload, SkillError> {
        let handler = self
            .select(event)
            .ok_or_else(|| SkillError::UnmatchedRoute {
                request_type: event.request_type().as_str().to_string(),
                intent: event.intent_name().map(str::to_string),
            })?;
        debug!(
            "routing {} ({}) to {}",
            event.request_type().as_str(),
            event.intent_name().unwrap_or("-"),
            handler.name
        );
        (handler.action)(event, ctx)
    }
}
