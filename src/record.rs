//! The unit of data handed from a [`Logger`] to its providers.
//!
//! [`Logger`]: crate::logger::Logger
use crate::cfg_json;
use crate::level::Level;
use chrono::{DateTime, Local};
#[cfg(feature = "smallvec")]
use smallvec::SmallVec;
use std::fmt;
use std::thread;

cfg_json! {
    use crate::error::Error;
    use serde::Serialize;
    use serde_json::value::RawValue;
}

#[cfg(feature = "smallvec")]
pub(crate) type AttrSet = SmallVec<[Attr; 3]>;
#[cfg(not(feature = "smallvec"))]
pub(crate) type AttrSet = Vec<Attr>;

/// A key-value pair attached to a record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Attr {
    key: String,
    value: String,
}

impl Attr {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Attr {
            key: key.into(),
            value: value.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl<K: Into<String>, V: Into<String>> From<(K, V)> for Attr {
    fn from((key, value): (K, V)) -> Self {
        Attr::new(key, value)
    }
}

impl fmt::Display for Attr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// Appends `extra` to `attrs`. An entry whose key is already present
/// overwrites the existing value without moving it.
pub(crate) fn merge_attrs<'a, I>(attrs: &mut AttrSet, extra: I)
where
    I: IntoIterator<Item = &'a Attr>,
{
    for attr in extra {
        match attrs.iter_mut().find(|existing| existing.key == attr.key) {
            Some(existing) => existing.value.clone_from(&attr.value),
            None => attrs.push(attr.clone()),
        }
    }
}

/// The payload of a record.
#[derive(Clone, Debug)]
pub enum Message {
    /// A plain text message.
    Text(String),
    /// A structured message, already serialized to JSON.
    #[cfg(feature = "json")]
    Structure(Box<RawValue>),
}

impl Message {
    /// Returns the text if this is a [`Message::Text`].
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Message::Text(text) => Some(text),
            #[cfg(feature = "json")]
            Message::Structure(_) => None,
        }
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Message::Text(text) => f.write_str(text),
            #[cfg(feature = "json")]
            Message::Structure(raw) => f.write_str(raw.get()),
        }
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_owned())
    }
}

/// A single log entry.
#[derive(Clone, Debug)]
pub struct Record {
    pub(crate) name: String,
    pub(crate) message: Message,
    pub(crate) level: Level,
    pub(crate) attrs: AttrSet,
    pub(crate) timestamp: DateTime<Local>,
    pub(crate) thread: String,
}

impl Record {
    /// Creates a record stamped with the current local time and the name of
    /// the current thread.
    ///
    /// # Examples
    /// ```
    /// # use colotok::{Level, Record};
    /// let record = Record::new("app", "started", Level::Info).with_attr("port", "8080");
    /// assert_eq!(record.message().as_text(), Some("started"));
    /// assert_eq!(record.attrs()[0].value(), "8080");
    /// ```
    pub fn new(name: impl Into<String>, message: impl Into<Message>, level: Level) -> Self {
        Record {
            name: name.into(),
            message: message.into(),
            level,
            attrs: AttrSet::new(),
            timestamp: Local::now(),
            thread: current_thread_name(),
        }
    }

    cfg_json! {
        /// Creates a record whose message is `value` serialized as JSON.
        ///
        /// # Errors
        ///
        /// Returns [`Error::Format`] if `value` cannot be serialized.
        pub fn structure<T>(name: impl Into<String>, value: &T, level: Level) -> Result<Self, Error>
        where
            T: Serialize + ?Sized,
        {
            let raw = serde_json::value::to_raw_value(value)?;
            Ok(Record::new(name, Message::Structure(raw), level))
        }
    }

    /// Adds a single attribute, replacing the value of an existing key.
    pub fn with_attr(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.with_attrs(std::iter::once(Attr::new(key, value)))
    }

    /// Adds attributes, replacing the values of existing keys in place.
    pub fn with_attrs<I, A>(mut self, attrs: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Attr>,
    {
        let extra: Vec<Attr> = attrs.into_iter().map(Into::into).collect();
        merge_attrs(&mut self.attrs, &extra);
        self
    }

    /// Overrides the timestamp.
    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Overrides the thread name.
    pub fn with_thread(mut self, thread: impl Into<String>) -> Self {
        self.thread = thread.into();
        self
    }

    /// The name of the logger that produced the record.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn level(&self) -> Level {
        self.level
    }

    pub fn attrs(&self) -> &[Attr] {
        &self.attrs
    }

    pub fn timestamp(&self) -> &DateTime<Local> {
        &self.timestamp
    }

    pub fn thread(&self) -> &str {
        &self.thread
    }
}

fn current_thread_name() -> String {
    let current = thread::current();
    match current.name() {
        Some(name) => name.to_owned(),
        None => format!("{:?}", current.id()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_attrs_overwrite_in_place() {
        let record = Record::new("test", "msg", Level::Info)
            .with_attr("a", "1")
            .with_attr("b", "2")
            .with_attr("a", "3");

        let pairs: Vec<String> = record.attrs().iter().map(|attr| attr.to_string()).collect();
        assert_eq!(pairs, ["a=3", "b=2"]);
    }

    #[test]
    fn thread_name_is_captured() {
        let record = thread::Builder::new()
            .name("worker-1".into())
            .spawn(|| Record::new("test", "msg", Level::Info))
            .unwrap()
            .join()
            .unwrap();
        assert_eq!(record.thread(), "worker-1");
    }
}
