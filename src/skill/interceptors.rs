//! Pre-routing and post-response interceptors.

use super::RequestContext;
use crate::i18n::{LocalizationTable, Translator};
use hoopfacts_core::{
    error::SkillError, locale::Locale, request::RequestEnvelope, response::ResponsePayload,
};
use std::sync::Arc;
use tracing::{debug, info};

/// Runs before routing. A failure aborts the invocation and goes to the
/// error handlers.
pub trait RequestInterceptor: Send + Sync {
    /// Human-readable interceptor name.
    fn name(&self) -> &str;

    fn process(&self, event: &RequestEnvelope, ctx: &mut RequestContext)
        -> Result<(), SkillError>;
}

/// Runs after the response is built. A failure is logged and the response
/// is delivered anyway.
pub trait ResponseInterceptor: Send + Sync {
    /// Human-readable interceptor name.
    fn name(&self) -> &str;

    fn process(&self, event: &RequestEnvelope, response: &ResponsePayload)
        -> Result<(), SkillError>;
}

/// Binds a [`Translator`] for the event's locale into the context.
pub struct LocalizationInterceptor {
    table: Arc<LocalizationTable>,
    fallback: Locale,
}

impl LocalizationInterceptor {
    pub fn new(table: Arc<LocalizationTable>, fallback: Locale) -> Self {
        Self { table, fallback }
    }
}

impl RequestInterceptor for LocalizationInterceptor {
    fn name(&self) -> &str {
        "localization"
    }

    fn process(
        &self,
        event: &RequestEnvelope,
        ctx: &mut RequestContext,
    ) -> Result<(), SkillError> {
        let translator = Translator::new(self.table.clone(), event.locale(), self.fallback);
        debug!(
            "locale {} resolved to {}",
            event.locale().unwrap_or("<none>"),
            translator.locale()
        );
        ctx.bind_translator(translator);
        Ok(())
    }
}

/// Logs every inbound request body.
pub struct LoggingRequestInterceptor;

impl RequestInterceptor for LoggingRequestInterceptor {
    fn name(&self) -> &str {
        "request-logging"
    }

    fn process(
        &self,
        event: &RequestEnvelope,
        _ctx: &mut RequestContext,
    ) -> Result<(), SkillError> {
        info!("Incoming request: {}", serde_json::to_string(&event.request)?);
        Ok(())
    }
}

/// Logs every outbound payload.
pub struct LoggingResponseInterceptor;

impl ResponseInterceptor for LoggingResponseInterceptor {
    fn name(&self) -> &str {
        "response-logging"
    }

    fn process(
        &self,
        _event: &RequestEnvelope,
        response: &ResponsePayload,
    ) -> Result<(), SkillError> {
        info!("Outgoing response: {}", serde_json::to_string(response)?);
        Ok(())
    }
}
