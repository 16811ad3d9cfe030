//! Leveled logging to pluggable console and file providers.
//!
//! # Overview
//!
//! A [`Logger`] has a name, a set of default attributes, and any number of
//! [`Provider`]s. Every message is turned into a [`Record`] and handed to each
//! provider, which filters it against its own minimum [`Level`], formats it
//! with its own [`Formatter`], and writes it to its destination.
//!
//! Two providers ship with the crate:
//!
//! * [`ConsoleProvider`] prints to stdout (or any [`MakeWriter`]), painting
//!   each line in a per-level ANSI color.
//! * [`FileProvider`] appends to a file, batching lines in memory until a
//!   byte threshold is crossed, and consults a [`Rotation`] policy after every
//!   write.
//!
//! Logging is best-effort. Writing a record never returns an error and never
//! panics: formatting, I/O and rotation failures are dropped. Only an explicit
//! [`Provider::flush`] reports them.
//!
//! # Getting started
//!
//! ```
//! use colotok::formatter::SimpleText;
//! use colotok::rotation::SizeBasedRotation;
//! use colotok::{ConsoleProvider, FileProvider, Level, Logger};
//!
//! # let path = std::env::temp_dir().join("colotok-doc-lib.log");
//! let logger = Logger::builder("app")
//!     .provider(ConsoleProvider::new().formatter(SimpleText).level(Level::Info))
//!     .provider(
//!         FileProvider::new(&path)
//!             .buffer_size(8 * 1024)
//!             .rotation(SizeBasedRotation::new(64 * 1024 * 1024)),
//!     )
//!     .build();
//!
//! logger.info("Hello, world!");
//! logger.warn_with("slow request", vec![("elapsed_ms", "1200")]);
//!
//! // write out whatever the file provider is still holding
//! logger.flush()?;
//! # Ok::<(), colotok::Error>(())
//! ```
//! ```log
//! 2023-12-31 12:34:56  [INFO] - Hello, world!
//! 2023-12-31 12:34:56  [WARN] - slow request
//! ```
//!
//! # Feature flags
//!
//! * `full`: Enables all features listed below.
//! * `json`: Enables structured messages and the JSON formatters.
//! * `smallvec`: Stores record attributes inline when there are few of them.
//! * `sync`: Enables the [`AsyncProvider`] type.
//!
//! [`Formatter`]: crate::formatter::Formatter
//! [`Rotation`]: crate::rotation::Rotation
//! [`MakeWriter`]: tracing_subscriber::fmt::MakeWriter
//! [`AsyncProvider`]: crate::provider::AsyncProvider

pub mod error;
pub mod formatter;
pub mod layer;
pub mod level;
pub mod logger;
pub mod provider;
pub mod record;
pub mod rotation;
#[doc(hidden)]
#[macro_use]
mod cfg;
#[cfg(feature = "json")]
mod ser;

pub use crate::error::Error;
pub use crate::level::Level;
pub use crate::logger::{LevelScopedLogger, Logger, LoggerBuilder};
pub use crate::provider::{
    ConsoleProvider, FileProvider, FileProviderConfig, MakeStderr, MakeStdout, Provider,
};
pub use crate::record::{Attr, Message, Record};
pub use yansi::Color;

cfg_sync! {
    pub use crate::provider::AsyncProvider;
}
