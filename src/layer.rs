//! Bridge from [`tracing`] events to colotok providers.
//!
//! See [`ColotokLayer`] for more details.
use crate::level::Level;
use crate::logger::Logger;
use crate::record::{Attr, Record};
use std::fmt;
use tracing::field::{Field, Visit};
use tracing::{Event, Subscriber};
use tracing_subscriber::layer::{Context, Layered};
use tracing_subscriber::{Layer, Registry};

/// A [`Layer`] that writes every [`tracing`] event through a [`Logger`].
///
/// The event's target becomes the record name, its `message` field the
/// message, and every other field an attribute.
///
/// # Examples
/// ```
/// # use colotok::{ConsoleProvider, Logger};
/// # use colotok::layer::ColotokLayer;
/// let logger = Logger::builder("app").provider(ConsoleProvider::new()).build();
///
/// tracing::subscriber::with_default(ColotokLayer::new(logger).into_subscriber(), || {
///     tracing::info!(user = 42, "logged in");
/// });
/// ```
#[derive(Debug)]
pub struct ColotokLayer {
    logger: Logger,
}

impl ColotokLayer {
    pub fn new(logger: Logger) -> Self {
        ColotokLayer { logger }
    }

    pub fn logger(&self) -> &Logger {
        &self.logger
    }

    /// Compose the `ColotokLayer` onto a [`Registry`].
    pub fn into_subscriber(self) -> Layered<Self, Registry> {
        self.with_subscriber(Registry::default())
    }
}

impl From<Logger> for ColotokLayer {
    fn from(logger: Logger) -> Self {
        ColotokLayer::new(logger)
    }
}

struct Visitor {
    message: Option<String>,
    attrs: Vec<Attr>,
}

impl Visit for Visitor {
    fn record_str(&mut self, field: &Field, value: &str) {
        self.record_value(field, value.to_owned());
    }

    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        self.record_value(field, format!("{:?}", value));
    }
}

impl Visitor {
    fn record_value(&mut self, field: &Field, value: String) {
        match field.name() {
            "message" if self.message.is_none() => self.message = Some(value),
            key => self.attrs.push(Attr::new(key, value)),
        }
    }
}

impl<S> Layer<S> for ColotokLayer
where
    S: Subscriber,
{
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let level = Level::from(*metadata.level());
        if !self.logger.is_enabled(level) {
            return;
        }

        let mut visitor = Visitor {
            message: None,
            attrs: Vec::new(),
        };
        event.record(&mut visitor);

        let message = visitor.message.unwrap_or_default();
        let record = Record::new(metadata.target(), message, level).with_attrs(visitor.attrs);
        self.logger.log(record);
    }
}
