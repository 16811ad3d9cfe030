//! Turning [`Record`]s into lines of text.
//!
//! See [`Formatter`] for more details.
use crate::cfg_json;
use crate::record::Record;
use std::error::Error;

mod text;
pub use text::{DetailText, Plain, SimpleText};

cfg_json! {
    mod structure;
    pub use structure::{DetailStructure, SimpleStructure};
}

pub(crate) const DATE: &str = "%Y-%m-%d";
pub(crate) const SIMPLE_DATE_TIME: &str = "%Y-%m-%d %H:%M:%S";
pub(crate) const DETAIL_DATE_TIME: &str = "%Y-%m-%dT%H:%M:%S";

/// Format a [`Record`] into a `String`.
///
/// Providers append the line terminator themselves, so the returned string
/// should not end in a newline.
///
/// # Examples
///
/// This trait is implemented for all `Fn(&Record) -> Result<String, E>` types,
/// where `E: Error + Send + Sync`.
/// ```
/// # use colotok::{Level, Record};
/// # use colotok::formatter::Formatter;
/// let shouting = |record: &Record| -> Result<String, std::fmt::Error> {
///     Ok(record.message().to_string().to_uppercase())
/// };
///
/// let line = shouting.fmt(&Record::new("app", "hello", Level::Info)).unwrap();
/// assert_eq!(line, "HELLO");
/// ```
pub trait Formatter {
    /// The error type if the `Record` cannot be stringified.
    type Error: Error + Send + Sync + 'static;

    /// Stringifies the `Record`, or returns an error.
    ///
    /// # Errors
    ///
    /// If the `Record` cannot be formatted to a string, an error is returned.
    fn fmt(&self, record: &Record) -> Result<String, Self::Error>;
}

impl<F, E> Formatter for F
where
    F: Fn(&Record) -> Result<String, E>,
    E: Error + Send + Sync + 'static,
{
    type Error = E;

    #[inline]
    fn fmt(&self, record: &Record) -> Result<String, E> {
        self(record)
    }
}
