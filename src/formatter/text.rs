use crate::formatter::{Formatter, DETAIL_DATE_TIME, SIMPLE_DATE_TIME};
use crate::record::Record;
use std::fmt::{self, Write};

/// Writes the message and nothing else.
///
/// ```log
/// message
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct Plain;

impl Formatter for Plain {
    type Error = fmt::Error;

    fn fmt(&self, record: &Record) -> Result<String, fmt::Error> {
        Ok(record.message().to_string())
    }
}

/// Timestamp, level and message. Attributes are dropped.
///
/// ```log
/// 2023-12-31 12:34:56  [INFO] - message
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct SimpleText;

impl Formatter for SimpleText {
    type Error = fmt::Error;

    fn fmt(&self, record: &Record) -> Result<String, fmt::Error> {
        let mut writer = String::with_capacity(64);

        write!(
            writer,
            "{}  [{}] - {}",
            record.timestamp().format(SIMPLE_DATE_TIME),
            record.level(),
            record.message()
        )?;

        Ok(writer)
    }
}

/// Timestamp, thread, level, message and attributes.
///
/// ```log
/// 2023-12-31T12:34:56 (main)[INFO] - message, additional = {user=42, path=/}
/// ```
#[derive(Clone, Copy, Debug, Default)]
pub struct DetailText;

impl Formatter for DetailText {
    type Error = fmt::Error;

    fn fmt(&self, record: &Record) -> Result<String, fmt::Error> {
        let mut writer = String::with_capacity(128);

        write!(
            writer,
            "{} ({})[{}] - {}",
            record.timestamp().format(DETAIL_DATE_TIME),
            record.thread(),
            record.level(),
            record.message()
        )?;

        if let Some((first, rest)) = record.attrs().split_first() {
            write!(writer, ", additional = {{{}", first)?;
            for attr in rest {
                write!(writer, ", {}", attr)?;
            }
            writer.push('}');
        }

        Ok(writer)
    }
}
