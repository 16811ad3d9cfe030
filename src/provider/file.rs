//! A [`Provider`] that appends to a file, with optional buffering and
//! rotation.
//!
//! See [`FileProvider`] for more details.
use crate::error::{Error, Result};
use crate::formatter::{DetailText, Formatter};
use crate::level::Level;
use crate::provider::Provider;
use crate::record::Record;
use crate::rotation::Rotation;
use std::fmt;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Construction-time settings of a [`FileProvider`].
#[derive(Clone)]
pub struct FileProviderConfig {
    /// Buffered bytes that trigger a write once exceeded.
    pub buffer_size: usize,
    /// If `false`, every record is written to the file as it arrives.
    pub enable_buffer: bool,
    /// Checked after every write and flush.
    pub rotation: Option<Arc<dyn Rotation>>,
    /// Minimum level to emit.
    pub level: Level,
}

impl Default for FileProviderConfig {
    fn default() -> Self {
        FileProviderConfig {
            buffer_size: 1024,
            enable_buffer: true,
            rotation: None,
            level: Level::Debug,
        }
    }
}

impl fmt::Debug for FileProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileProviderConfig")
            .field("buffer_size", &self.buffer_size)
            .field("enable_buffer", &self.enable_buffer)
            .field("rotation", &self.rotation.is_some())
            .field("level", &self.level)
            .finish()
    }
}

/// A [`Provider`] that appends formatted lines to a file.
///
/// With buffering enabled (the default), lines accumulate in memory until
/// their total byte length exceeds the buffer size, at which point the whole
/// buffer is written in one append. With buffering disabled, every line is
/// appended on arrival. The file is opened and closed for every append.
///
/// After each write, whether or not anything reached the disk, the rotation
/// policy is asked whether the file should be rotated.
///
/// Buffered lines that were never flushed are lost when the provider is
/// dropped, so call [`Provider::flush`] before shutting down.
///
/// # Examples
/// ```
/// # use colotok::{FileProvider, Level, Provider};
/// # use colotok::formatter::Plain;
/// # let path = std::env::temp_dir().join("colotok-doc-file-provider.log");
/// # let _ = std::fs::remove_file(&path);
/// let provider = FileProvider::new(&path)
///     .formatter(Plain)
///     .buffer_size(4096)
///     .level(Level::Info);
///
/// provider.write("app", "hello", Level::Info);
/// provider.flush()?;
///
/// assert_eq!(std::fs::read_to_string(&path)?, "hello\n");
/// # std::fs::remove_file(&path)?;
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
pub struct FileProvider<F = DetailText> {
    path: PathBuf,
    formatter: F,
    config: FileProviderConfig,
    buffer: Mutex<String>,
}

impl FileProvider<DetailText> {
    /// Creates a provider for `path` with the default configuration.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileProvider::with_config(path, FileProviderConfig::default())
    }

    /// Creates a provider for `path` with the given configuration.
    pub fn with_config(path: impl Into<PathBuf>, config: FileProviderConfig) -> Self {
        FileProvider {
            path: path.into(),
            formatter: DetailText,
            config,
            buffer: Mutex::new(String::new()),
        }
    }
}

impl<F> FileProvider<F>
where
    F: 'static + Formatter + Send + Sync,
{
    /// Set the formatter.
    pub fn formatter<F2>(self, formatter: F2) -> FileProvider<F2>
    where
        F2: 'static + Formatter + Send + Sync,
    {
        FileProvider {
            path: self.path,
            formatter,
            config: self.config,
            buffer: self.buffer,
        }
    }

    /// Set the number of buffered bytes that triggers a write.
    pub fn buffer_size(mut self, buffer_size: usize) -> Self {
        self.config.buffer_size = buffer_size;
        self
    }

    /// Enable or disable buffering.
    pub fn enable_buffer(mut self, enable_buffer: bool) -> Self {
        self.config.enable_buffer = enable_buffer;
        self
    }

    /// Set the rotation policy.
    pub fn rotation<R: Rotation>(self, rotation: R) -> Self {
        self.shared_rotation(Arc::new(rotation))
    }

    /// Set a rotation policy that is also held elsewhere.
    pub fn shared_rotation(mut self, rotation: Arc<dyn Rotation>) -> Self {
        self.config.rotation = Some(rotation);
        self
    }

    /// Set the minimum level.
    pub fn level(mut self, level: Level) -> Self {
        self.config.level = level;
        self
    }

    /// The file this provider appends to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The settings this provider was built with.
    pub fn config(&self) -> &FileProviderConfig {
        &self.config
    }

    /// The number of bytes currently waiting in the buffer.
    pub fn buffered_len(&self) -> usize {
        self.lock_buffer().len()
    }

    fn lock_buffer(&self) -> MutexGuard<'_, String> {
        self.buffer.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn try_write(&self, record: &Record) -> Result {
        let mut line = self.formatter.fmt(record).map_err(Error::format)?;
        line.push('\n');

        // Held until rotation is done so that appends and rotations from
        // different threads never interleave.
        let mut buffer = self.lock_buffer();

        if self.config.enable_buffer {
            buffer.push_str(&line);
            if buffer.len() > self.config.buffer_size {
                self.drain(&mut buffer)?;
            }
        } else {
            self.append(line.as_bytes())?;
        }

        self.rotate_if_needed()
    }

    fn drain(&self, buffer: &mut String) -> Result {
        self.append(buffer.as_bytes())?;
        buffer.clear();
        Ok(())
    }

    fn append(&self, bytes: &[u8]) -> io::Result<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(bytes)
    }

    fn rotate_if_needed(&self) -> Result {
        match &self.config.rotation {
            Some(rotation) if rotation.is_rotation_needed(&self.path) => {
                rotation.rotate(&self.path)
            }
            _ => Ok(()),
        }
    }
}

impl<F> Provider for FileProvider<F>
where
    F: 'static + Formatter + Send + Sync,
{
    fn min_level(&self) -> Level {
        self.config.level
    }

    fn write_record(&self, record: &Record) {
        if !self.is_enabled(record.level()) {
            return;
        }

        let _ = self.try_write(record);
    }

    /// Appends the whole buffer to the file, even if it is empty, then
    /// checks rotation.
    ///
    /// The buffer is only cleared once the append succeeded.
    fn flush(&self) -> Result {
        let mut buffer = self.lock_buffer();
        self.drain(&mut buffer)?;
        self.rotate_if_needed()
    }
}

impl<F> fmt::Debug for FileProvider<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FileProvider")
            .field("path", &self.path)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
