//! Destinations for log records.
//!
//! See [`Provider`] for more details.
use crate::cfg_sync;
use crate::error::Result;
use crate::level::Level;
use crate::record::Record;
use std::sync::Arc;

pub mod console;
pub use console::{ConsoleProvider, MakeStderr, MakeStdout};

pub mod file;
pub use file::{FileProvider, FileProviderConfig};

cfg_sync! {
    pub mod sync;
    pub use sync::AsyncProvider;
}

/// A sink that formats and writes [`Record`]s.
///
/// Every provider has its own minimum [`Level`]. Records below it are dropped
/// before any formatting or I/O happens.
///
/// Writing is best-effort: [`write_record`] has no error channel, and any
/// failure while formatting, writing, or rotating is discarded so that logging
/// never interrupts the caller. [`flush`] is the one place failures are
/// reported.
///
/// [`write_record`]: Provider::write_record
/// [`flush`]: Provider::flush
pub trait Provider: Send + Sync + 'static {
    /// The minimum level this provider emits.
    fn min_level(&self) -> Level;

    /// Returns `true` if records at `level` pass this provider's filter.
    fn is_enabled(&self, level: Level) -> bool {
        level.is_enabled_for(self.min_level())
    }

    /// Writes a record, silently dropping it if it is below the minimum
    /// level or if anything fails along the way.
    fn write_record(&self, record: &Record);

    /// Writes a plain text message on behalf of the logger `name`.
    fn write(&self, name: &str, message: &str, level: Level) {
        if self.is_enabled(level) {
            self.write_record(&Record::new(name, message, level));
        }
    }

    /// Forces any buffered output to its destination.
    ///
    /// # Errors
    ///
    /// Returns the formatting, I/O or rotation error that prevented the
    /// flush. Nothing is retried.
    fn flush(&self) -> Result {
        Ok(())
    }
}

impl<P: Provider + ?Sized> Provider for Box<P> {
    fn min_level(&self) -> Level {
        self.as_ref().min_level()
    }

    fn write_record(&self, record: &Record) {
        self.as_ref().write_record(record)
    }

    fn flush(&self) -> Result {
        self.as_ref().flush()
    }
}

impl<P: Provider + ?Sized> Provider for Arc<P> {
    fn min_level(&self) -> Level {
        self.as_ref().min_level()
    }

    fn write_record(&self, record: &Record) {
        self.as_ref().write_record(record)
    }

    fn flush(&self) -> Result {
        self.as_ref().flush()
    }
}
