//! Errors raised while formatting, writing or rotating logs.
//!
//! Providers discard these from [`Provider::write`] and only hand them back
//! from explicit flushes.
//!
//! [`Provider::write`]: crate::provider::Provider::write
use std::error;
use std::fmt;
use std::io;
use std::path::PathBuf;

/// The result type of fallible provider operations.
pub type Result<T = ()> = std::result::Result<T, Error>;

/// An error produced by a formatter, the file system, or a rotation policy.
#[derive(Debug)]
pub enum Error {
    /// The record could not be formatted or serialized.
    Format(Box<dyn error::Error + Send + Sync>),
    /// Opening or writing the log file failed.
    Io(io::Error),
    /// A rotation policy failed to rotate the file at `path`.
    Rotation { path: PathBuf, source: io::Error },
}

impl Error {
    pub(crate) fn format<E>(err: E) -> Self
    where
        E: Into<Box<dyn error::Error + Send + Sync>>,
    {
        Error::Format(err.into())
    }

    /// Wraps an I/O failure that happened while rotating `path`.
    pub fn rotation(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Error::Rotation {
            path: path.into(),
            source,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Format(err) => write!(f, "formatting failed: {}", err),
            Error::Io(err) => write!(f, "writing log file failed: {}", err),
            Error::Rotation { path, source } => {
                write!(f, "rotating '{}' failed: {}", path.display(), source)
            }
        }
    }
}

impl error::Error for Error {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        match self {
            Error::Format(err) => Some(err.as_ref()),
            Error::Io(err) => Some(err),
            Error::Rotation { source, .. } => Some(source),
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<fmt::Error> for Error {
    fn from(err: fmt::Error) -> Self {
        Error::format(err)
    }
}

#[cfg(feature = "json")]
impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::format(err)
    }
}
