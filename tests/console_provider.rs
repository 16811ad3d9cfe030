use chrono::{DateTime, Local, TimeZone};
use colotok::formatter::{DetailStructure, DetailText, Plain, SimpleStructure, SimpleText};
use colotok::{Color, ConsoleProvider, Level, Provider, Record};
use serde::Serialize;
use std::io;
use std::sync::{Arc, Mutex};
use yansi::{Condition, Paint};

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Vec<u8>>>);

impl Captured {
    fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }
}

impl io::Write for Captured {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

#[derive(Serialize)]
struct Log {
    name: String,
    #[serde(rename = "logDetail")]
    log_detail: String,
}

fn timestamp() -> DateTime<Local> {
    Local.with_ymd_and_hms(2023, 12, 31, 12, 34, 56).unwrap()
}

fn record(message: &str, level: Level) -> Record {
    Record::new("default logger", message, level)
        .with_timestamp(timestamp())
        .with_thread("main")
}

fn structured(level: Level) -> Record {
    let log = Log {
        name: "range error".to_string(),
        log_detail: "index out of range".to_string(),
    };
    Record::structure("default logger", &log, level)
        .unwrap()
        .with_timestamp(timestamp())
        .with_thread("main")
}

fn painted(text: &str, color: Color) -> String {
    format!("{}\n", text.fg(color).whenever(Condition::ALWAYS))
}

#[test]
fn below_minimum_level_prints_nothing() {
    let out = Captured::default();
    let provider = ConsoleProvider::new()
        .formatter(SimpleText)
        .writer({
            let out = out.clone();
            move || out.clone()
        })
        .level(Level::Debug);

    provider.write_record(&record("message", Level::Trace));
    provider.write_record(
        &record("message", Level::Trace).with_attr("additional", "additional param"),
    );

    assert_eq!(out.contents(), "");
}

#[test]
fn off_prints_nothing() {
    let out = Captured::default();
    let provider = ConsoleProvider::new()
        .writer({
            let out = out.clone();
            move || out.clone()
        })
        .level(Level::Off);

    for level in Level::ALL.iter().copied() {
        provider.write_record(&record("message", level));
    }

    assert!(!provider.is_enabled(Level::Error));
    assert_eq!(out.contents(), "");
}

#[test]
fn simple_text_without_color() {
    let out = Captured::default();
    let provider = ConsoleProvider::new()
        .formatter(SimpleText)
        .writer({
            let out = out.clone();
            move || out.clone()
        })
        .colorize(false);

    provider.write_record(&record("message", Level::Info));

    assert_eq!(out.contents(), "2023-12-31 12:34:56  [INFO] - message\n");
}

#[test]
fn simple_text_in_level_color() {
    let out = Captured::default();
    let provider = ConsoleProvider::new()
        .formatter(SimpleText)
        .writer({
            let out = out.clone();
            move || out.clone()
        });

    provider.write_record(&record("message", Level::Debug));

    let contents = out.contents();
    assert_eq!(
        contents,
        painted("2023-12-31 12:34:56  [DEBUG] - message", Color::Blue)
    );
    assert!(contents.starts_with('\u{1b}'));
    assert!(contents.ends_with("\u{1b}[0m\n"));
}

#[test]
fn detail_text_with_attributes() {
    let out = Captured::default();
    let provider = ConsoleProvider::new()
        .formatter(DetailText)
        .writer({
            let out = out.clone();
            move || out.clone()
        });

    provider.write_record(
        &record("message", Level::Info).with_attr("additional", "additional param"),
    );

    assert_eq!(
        out.contents(),
        painted(
            "2023-12-31T12:34:56 (main)[INFO] - message, additional = {additional=additional param}",
            Color::Green
        )
    );
}

#[test]
fn custom_level_color() {
    let out = Captured::default();
    let provider = ConsoleProvider::new()
        .formatter(Plain)
        .writer({
            let out = out.clone();
            move || out.clone()
        })
        .color(Level::Warn, Color::Magenta);

    provider.write_record(&record("careful", Level::Warn));
    provider.write_record(&record("fine", Level::Info));

    assert_eq!(
        out.contents(),
        format!(
            "{}{}",
            painted("careful", Color::Magenta),
            painted("fine", Color::Green)
        )
    );
}

#[test]
fn simple_structure_drops_attributes() {
    let out = Captured::default();
    let provider = ConsoleProvider::new()
        .formatter(SimpleStructure)
        .writer({
            let out = out.clone();
            move || out.clone()
        })
        .colorize(false);

    provider.write_record(&structured(Level::Info).with_attr("attr", "attributes"));
    provider.write_record(&record("message", Level::Error).with_attr("attr", "attributes"));

    assert_eq!(
        out.contents(),
        concat!(
            r#"{"message":{"name":"range error","logDetail":"index out of range"},"level":"INFO","date":"2023-12-31"}"#,
            "\n",
            r#"{"message":"message","level":"ERROR","date":"2023-12-31"}"#,
            "\n",
        )
    );
}

#[test]
fn detail_structure_with_attributes() {
    let out = Captured::default();
    let provider = ConsoleProvider::new()
        .formatter(DetailStructure)
        .writer({
            let out = out.clone();
            move || out.clone()
        })
        .colorize(false);

    provider.write_record(&structured(Level::Warn).with_attr("attr", "attributes"));

    assert_eq!(
        out.contents(),
        concat!(
            r#"{"message":{"name":"range error","logDetail":"index out of range"},"#,
            r#""level":"WARN","thread":"main","attr":"attributes","date":"2023-12-31T12:34:56"}"#,
            "\n",
        )
    );
}

#[test]
fn detail_structure_in_color() {
    let out = Captured::default();
    let provider = ConsoleProvider::new()
        .formatter(DetailStructure)
        .writer({
            let out = out.clone();
            move || out.clone()
        })
        .level(Level::Trace);

    provider.write_record(&record("message", Level::Trace));

    assert_eq!(
        out.contents(),
        painted(
            r#"{"message":"message","level":"TRACE","thread":"main","date":"2023-12-31T12:34:56"}"#,
            Color::White
        )
    );
}

#[test]
fn formatter_errors_are_dropped() {
    let out = Captured::default();
    let provider = ConsoleProvider::new()
        .formatter(|_: &Record| -> Result<String, std::fmt::Error> { Err(std::fmt::Error) })
        .writer({
            let out = out.clone();
            move || out.clone()
        });

    provider.write_record(&record("message", Level::Error));

    assert_eq!(out.contents(), "");
    assert!(provider.flush().is_ok());
}
