//! Skill: turns one inbound envelope into one spoken response.
//!
//! Flow: request interceptors (in order) → router picks the first matching
//! handler → response interceptors (in order). Any failure before the
//! response exists goes to the error handlers, so callers always get a
//! valid payload back.

mod handlers;
mod interceptors;
mod router;


pub use handlers::{defaults as default_handlers, ErrorHandler};
pub use interceptors::{
    LocalizationInterceptor, LoggingRequestInterceptor, LoggingResponseInterceptor,
    RequestInterceptor, ResponseInterceptor,
};
pub use router::{Handler, Router};

use crate::facts::FactTable;
use crate::i18n::{LocalizationTable, Translator};
use hoopfacts_core::{
    config::SkillConfig, error::SkillError, locale::Locale, request::RequestEnvelope,
    response::ResponsePayload,
};
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Produces the random source for one invocation.
pub type RngFactory = Arc<dyn Fn() -> Box<dyn RngCore + Send> + Send + Sync>;

/// Per-invocation scratch state, passed by `&mut` through interception and routing.
pub struct RequestContext {
    translator: Option<Translator>,
    /// Random source for this invocation only.
    pub rng: Box<dyn RngCore + Send>,
}

impl RequestContext {
    pub fn new(rng: Box<dyn RngCore + Send>) -> Self {
        Self {
            translator: None,
            rng,
        }
    }

    pub fn bind_translator(&mut self, translator: Translator) {
        self.translator = Some(translator);
    }

    /// The translator bound by the localization interceptor.
    pub fn translator(&self) -> Result<&Translator, SkillError> {
        self.translator.as_ref().ok_or_else(|| SkillError::Interceptor {
            name: "localization".to_string(),
            reason: "no translator bound to request context".to_string(),
        })
    }
}

/// A fully assembled skill. Immutable and shareable across threads.
pub struct Skill {
    name: String,
    table: Arc<LocalizationTable>,
    facts: Arc<FactTable>,
    fallback: Locale,
    router: Router,
    error_handlers: Vec<ErrorHandler>,
    request_interceptors: Vec<Box<dyn RequestInterceptor>>,
    response_interceptors: Vec<Box<dyn ResponseInterceptor>>,
    rng_factory: RngFactory,
}

impl Skill {
    /// The standard skill: built-in tables, handlers, and interceptors.
    pub fn from_config(cfg: &SkillConfig) -> Result<Self, SkillError> {
        let fallback = cfg.fallback_locale()?;
        let table = Arc::new(LocalizationTable::builtin());
        let facts = Arc::new(FactTable::builtin(fallback));

        let skill = SkillBuilder::new(fallback)
            .name(&cfg.name)
            .tables(table.clone(), facts.clone())
            .add_request_handlers(default_handlers(&cfg.fact_intent, facts))
            .add_request_interceptor(LocalizationInterceptor::new(table, fallback))
            .add_request_interceptor(LoggingRequestInterceptor)
            .add_response_interceptor(LoggingResponseInterceptor)
            .build();

        if cfg.validate_on_start {
            skill.validate()?;
        }
        info!(
            "skill '{}' ready | fallback: {} | handlers: {}",
            skill.name,
            skill.fallback,
            skill.router.handler_names().join(", ")
        );
        Ok(skill)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn facts(&self) -> &FactTable {
        &self.facts
    }

    /// Check both static tables against the fallback locale.
    pub fn validate(&self) -> Result<(), SkillError> {
        self.table.validate(self.fallback)?;
        self.facts.validate()
    }

    /// Handle one invocation. Never fails: errors become the ERROR payload.
    pub fn handle(&self, event: &RequestEnvelope) -> ResponsePayload {
        let mut ctx = RequestContext::new((self.rng_factory)());

        let payload = match self.dispatch(event, &mut ctx) {
            Ok(payload) => payload,
            Err(e) => self.handle_error(event, &e),
        };

        for interceptor in &self.response_interceptors {
            if let Err(e) = interceptor.process(event, &payload) {
                warn!(
                    "response interceptor '{}' failed, delivering anyway: {e}",
                    interceptor.name()
                );
            }
        }
        payload
    }

    fn dispatch(
        &self,
        event: &RequestEnvelope,
        ctx: &mut RequestContext,
    ) -> Result<ResponsePayload, SkillError> {
        for interceptor in &self.request_interceptors {
            interceptor.process(event, ctx)?;
        }
        self.router.route(event, ctx)
    }

    fn handle_error(&self, event: &RequestEnvelope, err: &SkillError) -> ResponsePayload {
        match self.error_handlers.iter().find(|h| h.matches(event, err)) {
            Some(handler) => {
                debug!("error handler {} took: {err}", handler.name());
                handler.handle(event, err)
            }
            None => handlers::last_resort(event, err),
        }
    }
}

/// Assembles a [`Skill`]. Registration order is evaluation order.
pub struct SkillBuilder {
    name: String,
    fallback: Locale,
    table: Option<Arc<LocalizationTable>>,
    facts: Option<Arc<FactTable>>,
    handlers: Vec<Handler>,
    error_handlers: Vec<ErrorHandler>,
    request_interceptors: Vec<Box<dyn RequestInterceptor>>,
    response_interceptors: Vec<Box<dyn ResponseInterceptor>>,
    rng_factory: Option<RngFactory>,
}

impl SkillBuilder {
    pub fn new(fallback: Locale) -> Self {
        Self {
            name: String::new(),
            fallback,
            table: None,
            facts: None,
            handlers: Vec::new(),
            error_handlers: Vec::new(),
            request_interceptors: Vec::new(),
            response_interceptors: Vec::new(),
            rng_factory: None,
        }
    }

    pub fn name(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn tables(mut self, table: Arc<LocalizationTable>, facts: Arc<FactTable>) -> Self {
        self.table = Some(table);
        self.facts = Some(facts);
        self
    }

    pub fn add_request_handler(mut self, handler: Handler) -> Self {
        self.handlers.push(handler);
        self
    }

    pub fn add_request_handlers(mut self, handlers: impl IntoIterator<Item = Handler>) -> Self {
        self.handlers.extend(handlers);
        self
    }

    /// Error handlers run before the built-in catch-all.
    pub fn add_error_handler(mut self, handler: ErrorHandler) -> Self {
        self.error_handlers.push(handler);
        self
    }

    pub fn add_request_interceptor(mut self, interceptor: impl RequestInterceptor + 'static) -> Self {
        self.request_interceptors.push(Box::new(interceptor));
        self
    }

    pub fn add_response_interceptor(
        mut self,
        interceptor: impl ResponseInterceptor + 'static,
    ) -> Self {
        self.response_interceptors.push(Box::new(interceptor));
        self
    }

    /// Replace the per-invocation random source (tests pin fact selection with this).
    pub fn rng_factory(mut self, factory: RngFactory) -> Self {
        self.rng_factory = Some(factory);
        self
    }

    pub fn build(self) -> Skill {
        let table = self
            .table
            .unwrap_or_else(|| Arc::new(LocalizationTable::builtin()));
        let facts = self
            .facts
            .unwrap_or_else(|| Arc::new(FactTable::builtin(self.fallback)));

        let mut error_handlers = self.error_handlers;
        error_handlers.push(ErrorHandler::catch_all(table.clone(), self.fallback));

        let rng_factory = self.rng_factory.unwrap_or_else(|| {
            Arc::new(|| Box::new(StdRng::from_entropy()) as Box<dyn RngCore + Send>)
        });

        Skill {
            name: self.name,
            table,
            facts,
            fallback: self.fallback,
            router: Router::new(self.handlers),
            error_handlers,
            request_interceptors: self.request_interceptors,
            response_interceptors: self.response_interceptors,
            rng_factory,
        }
    }
}
