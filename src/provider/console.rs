//! A [`Provider`] that prints to the terminal, optionally in color.
//!
//! See [`ConsoleProvider`] for more details.
use crate::error::{Error, Result};
use crate::formatter::{DetailText, Formatter};
use crate::level::Level;
use crate::provider::Provider;
use crate::record::Record;
use std::io::{self, Write};
use tracing_subscriber::fmt::MakeWriter;
use yansi::{Color, Condition, Paint};

/// Sends console output to the process's standard output.
///
/// The default writer of [`ConsoleProvider`]. Naming it keeps the provider's
/// type spellable, e.g. `ConsoleProvider<SimpleText, MakeStdout>`.
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeStdout;

/// Sends console output to the process's standard error, leaving stdout free
/// for program output.
#[derive(Clone, Copy, Debug, Default)]
pub struct MakeStderr;

impl<'a> MakeWriter<'a> for MakeStdout {
    type Writer = io::Stdout;

    fn make_writer(&'a self) -> Self::Writer {
        io::stdout()
    }
}

impl<'a> MakeWriter<'a> for MakeStderr {
    type Writer = io::Stderr;

    fn make_writer(&'a self) -> Self::Writer {
        io::stderr()
    }
}

/// Foreground color for each level.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LevelColors {
    pub trace: Color,
    pub debug: Color,
    pub info: Color,
    pub warn: Color,
    pub error: Color,
}

impl LevelColors {
    /// The color used for `level`, or `None` for [`Level::Off`].
    pub fn get(&self, level: Level) -> Option<Color> {
        match level {
            Level::Trace => Some(self.trace),
            Level::Debug => Some(self.debug),
            Level::Info => Some(self.info),
            Level::Warn => Some(self.warn),
            Level::Error => Some(self.error),
            Level::Off => None,
        }
    }

    fn set(&mut self, level: Level, color: Color) {
        match level {
            Level::Trace => self.trace = color,
            Level::Debug => self.debug = color,
            Level::Info => self.info = color,
            Level::Warn => self.warn = color,
            Level::Error => self.error = color,
            Level::Off => {}
        }
    }
}

impl Default for LevelColors {
    fn default() -> Self {
        LevelColors {
            trace: Color::White,
            debug: Color::Blue,
            info: Color::Green,
            warn: Color::Yellow,
            error: Color::Red,
        }
    }
}

/// A [`Provider`] that writes one line per record to stdout or any other
/// [`MakeWriter`].
///
/// When `colorize` is on (the default), each line is painted with the
/// foreground color configured for its level.
///
/// # Examples
/// ```
/// # use colotok::{Color, ConsoleProvider, Level, MakeStderr, Provider};
/// # use colotok::formatter::SimpleText;
/// let provider = ConsoleProvider::new()
///     .formatter(SimpleText)
///     .writer(MakeStderr)
///     .level(Level::Info)
///     .color(Level::Info, Color::Cyan);
///
/// provider.write("app", "listening", Level::Info);
/// ```
#[derive(Clone, Debug)]
pub struct ConsoleProvider<F = DetailText, W = MakeStdout> {
    formatter: F,
    make_writer: W,
    colorize: bool,
    level: Level,
    colors: LevelColors,
}

impl ConsoleProvider {
    /// Returns a colorized [`ConsoleProvider`] writing detailed text to stdout.
    pub fn new() -> Self {
        ConsoleProvider {
            formatter: DetailText,
            make_writer: MakeStdout,
            colorize: true,
            level: Level::Debug,
            colors: LevelColors::default(),
        }
    }
}

impl Default for ConsoleProvider {
    fn default() -> Self {
        ConsoleProvider::new()
    }
}

impl<F, W> ConsoleProvider<F, W>
where
    F: 'static + Formatter + Send + Sync,
    W: 'static + for<'a> MakeWriter<'a> + Send + Sync,
{
    /// Set the formatter.
    ///
    /// See the [`Formatter`] trait for details on possible inputs.
    pub fn formatter<F2>(self, formatter: F2) -> ConsoleProvider<F2, W>
    where
        F2: 'static + Formatter + Send + Sync,
    {
        ConsoleProvider {
            formatter,
            make_writer: self.make_writer,
            colorize: self.colorize,
            level: self.level,
            colors: self.colors,
        }
    }

    /// Set the writer.
    pub fn writer<W2>(self, make_writer: W2) -> ConsoleProvider<F, W2>
    where
        W2: 'static + for<'a> MakeWriter<'a> + Send + Sync,
    {
        ConsoleProvider {
            formatter: self.formatter,
            make_writer,
            colorize: self.colorize,
            level: self.level,
            colors: self.colors,
        }
    }

    /// Turn ANSI coloring on or off.
    pub fn colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    /// Set the minimum level.
    pub fn level(mut self, level: Level) -> Self {
        self.level = level;
        self
    }

    /// Set the color of lines at `level`.
    pub fn color(mut self, level: Level, color: Color) -> Self {
        self.colors.set(level, color);
        self
    }

    /// Set the colors of every level at once.
    pub fn colors(mut self, colors: LevelColors) -> Self {
        self.colors = colors;
        self
    }

    fn try_write(&self, record: &Record) -> Result {
        let line = self.formatter.fmt(record).map_err(Error::format)?;

        let mut line = match self.colors.get(record.level()) {
            Some(color) if self.colorize => line
                .fg(color)
                .whenever(Condition::ALWAYS)
                .to_string(),
            _ => line,
        };
        line.push('\n');

        self.make_writer.make_writer().write_all(line.as_bytes())?;
        Ok(())
    }
}

impl<F, W> Provider for ConsoleProvider<F, W>
where
    F: 'static + Formatter + Send + Sync,
    W: 'static + for<'a> MakeWriter<'a> + Send + Sync,
{
    fn min_level(&self) -> Level {
        self.level
    }

    fn write_record(&self, record: &Record) {
        if !self.is_enabled(record.level()) {
            return;
        }

        let _ = self.try_write(record);
    }
}
