//! The [`Logger`] facade that fans records out to providers.
use crate::cfg_json;
use crate::error::Result;
use crate::level::Level;
use crate::provider::Provider;
use crate::record::{merge_attrs, Attr, AttrSet, Record};
use std::fmt;

cfg_json! {
    use serde::Serialize;
}

/// A named logger that writes every message to each of its providers.
///
/// Default attributes given to the builder are attached to every record. If a
/// call passes an attribute with the same key, the default wins.
///
/// # Examples
/// ```
/// # use colotok::{ConsoleProvider, FileProvider, Level, Logger};
/// # let path = std::env::temp_dir().join("colotok-doc-logger.log");
/// let logger = Logger::builder("server")
///     .provider(ConsoleProvider::new().level(Level::Info))
///     .provider(FileProvider::new(&path).level(Level::Trace))
///     .attr("service", "billing")
///     .build();
///
/// logger.info("started");
/// logger.debug_with("request", vec![("path", "/health")]);
/// logger.flush()?;
/// # Ok::<(), colotok::Error>(())
/// ```
pub struct Logger {
    name: String,
    providers: Vec<Box<dyn Provider>>,
    attrs: AttrSet,
}

/// Configures a [`Logger`].
///
/// Created with [`Logger::builder`].
pub struct LoggerBuilder {
    name: String,
    providers: Vec<Box<dyn Provider>>,
    attrs: AttrSet,
}

impl LoggerBuilder {
    /// Add a provider. Providers are written to in the order they were added.
    pub fn provider<P: Provider>(mut self, provider: P) -> Self {
        self.providers.push(Box::new(provider));
        self
    }

    /// Add a default attribute.
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        merge_attrs(&mut self.attrs, &[Attr::new(key, value)]);
        self
    }

    /// Add several default attributes.
    pub fn attrs<I, A>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Attr>,
    {
        let extra: Vec<Attr> = attrs.into_iter().map(Into::into).collect();
        merge_attrs(&mut self.attrs, &extra);
        self
    }

    pub fn build(self) -> Logger {
        Logger {
            name: self.name,
            providers: self.providers,
            attrs: self.attrs,
        }
    }
}

macro_rules! level_methods {
    ($( $level:ident: $plain:ident, $with:ident, $structure:ident, $structure_with:ident; )*) => {
        $(
            #[doc = concat!("Logs `message` at [`Level::", stringify!($level), "`].")]
            pub fn $plain(&self, message: &str) {
                self.at(Level::$level, message)
            }

            #[doc = concat!("Logs `message` with extra attributes at [`Level::", stringify!($level), "`].")]
            pub fn $with<I, A>(&self, message: &str, attrs: I)
            where
                I: IntoIterator<Item = A>,
                A: Into<Attr>,
            {
                self.at_with(Level::$level, message, attrs)
            }

            #[cfg(feature = "json")]
            #[doc = concat!("Logs a structured message at [`Level::", stringify!($level), "`].")]
            pub fn $structure<T: Serialize + ?Sized>(&self, value: &T) {
                self.at_structure(Level::$level, value)
            }

            #[cfg(feature = "json")]
            #[doc = concat!("Logs a structured message with extra attributes at [`Level::", stringify!($level), "`].")]
            pub fn $structure_with<T, I, A>(&self, value: &T, attrs: I)
            where
                T: Serialize + ?Sized,
                I: IntoIterator<Item = A>,
                A: Into<Attr>,
            {
                self.at_structure_with(Level::$level, value, attrs)
            }
        )*
    };
}

impl Logger {
    /// Start configuring a logger called `name`.
    pub fn builder(name: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder {
            name: name.into(),
            providers: Vec::new(),
            attrs: AttrSet::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The default attributes attached to every record.
    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    /// Returns `true` if at least one provider accepts `level`.
    pub fn is_enabled(&self, level: Level) -> bool {
        self.providers
            .iter()
            .any(|provider| provider.is_enabled(level))
    }

    /// Logs `message` at `level`.
    pub fn at(&self, level: Level, message: &str) {
        self.at_with(level, message, std::iter::empty::<Attr>())
    }

    /// Logs `message` with extra attributes at `level`.
    pub fn at_with<I, A>(&self, level: Level, message: &str, attrs: I)
    where
        I: IntoIterator<Item = A>,
        A: Into<Attr>,
    {
        if !self.is_enabled(level) {
            return;
        }

        self.log(Record::new(self.name.as_str(), message, level).with_attrs(attrs));
    }

    cfg_json! {
        /// Serializes `value` as JSON and logs it at `level`.
        ///
        /// A value that fails to serialize is dropped.
        pub fn at_structure<T: Serialize + ?Sized>(&self, level: Level, value: &T) {
            self.at_structure_with(level, value, std::iter::empty::<Attr>())
        }

        /// Serializes `value` as JSON and logs it with extra attributes at
        /// `level`.
        pub fn at_structure_with<T, I, A>(&self, level: Level, value: &T, attrs: I)
        where
            T: Serialize + ?Sized,
            I: IntoIterator<Item = A>,
            A: Into<Attr>,
        {
            if !self.is_enabled(level) {
                return;
            }

            if let Ok(record) = Record::structure(self.name.as_str(), value, level) {
                self.log(record.with_attrs(attrs));
            }
        }
    }

    level_methods! {
        Trace: trace, trace_with, trace_structure, trace_structure_with;
        Debug: debug, debug_with, debug_structure, debug_structure_with;
        Info: info, info_with, info_structure, info_structure_with;
        Warn: warn, warn_with, warn_structure, warn_structure_with;
        Error: error, error_with, error_structure, error_structure_with;
    }

    /// Runs `f` with a logger fixed to `level`.
    ///
    /// # Examples
    /// ```
    /// # use colotok::{Level, Logger};
    /// # let logger = Logger::builder("app").build();
    /// logger.at_scope(Level::Warn, |log| {
    ///     log.print("disk almost full");
    ///     log.print("retrying in 5s");
    /// });
    /// ```
    pub fn at_scope<R>(&self, level: Level, f: impl FnOnce(&LevelScopedLogger<'_>) -> R) -> R {
        f(&LevelScopedLogger {
            logger: self,
            level,
        })
    }

    /// Writes a prepared record to every provider, after attaching the
    /// logger's default attributes.
    pub fn log(&self, mut record: Record) {
        merge_attrs(&mut record.attrs, self.attrs.iter());

        for provider in self.providers.iter() {
            provider.write_record(&record);
        }
    }

    /// Flushes every provider.
    ///
    /// # Errors
    ///
    /// Every provider is flushed even if an earlier one fails; the first
    /// failure is returned.
    pub fn flush(&self) -> Result {
        self.providers
            .iter()
            .map(|provider| provider.flush())
            .fold(Ok(()), |first, next| first.and(next))
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name)
            .field("providers", &self.providers.len())
            .field("attrs", &self.attrs)
            .finish()
    }
}

/// A [`Logger`] view whose level is fixed.
///
/// Created by [`Logger::at_scope`].
#[derive(Debug)]
pub struct LevelScopedLogger<'a> {
    logger: &'a Logger,
    level: Level,
}

impl LevelScopedLogger<'_> {
    pub fn level(&self) -> Level {
        self.level
    }

    pub fn print(&self, message: &str) {
        self.logger.at(self.level, message)
    }

    pub fn print_with<I, A>(&self, message: &str, attrs: I)
    where
        I: IntoIterator<Item = A>,
        A: Into<Attr>,
    {
        self.logger.at_with(self.level, message, attrs)
    }

    cfg_json! {
        pub fn print_structure<T: Serialize + ?Sized>(&self, value: &T) {
            self.logger.at_structure(self.level, value)
        }
    }
}
