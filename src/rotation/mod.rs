//! Policies deciding when and how a growing log file is archived.
//!
//! See [`Rotation`] for more details.
use crate::error::Result;
use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

mod duration;
pub use duration::DurationBasedRotation;

mod size;
pub use size::SizeBasedRotation;

/// A rotation policy consulted by [`FileProvider`] after every write and
/// flush.
///
/// The provider treats the policy as opaque: it asks [`is_rotation_needed`]
/// and, if so, calls [`rotate`], which may rename, delete or otherwise
/// archive files around `path`.
///
/// # Examples
///
/// A policy that truncates the log instead of keeping archives:
/// ```
/// # use colotok::rotation::Rotation;
/// # use colotok::Error;
/// # use std::path::Path;
/// struct Truncate(u64);
///
/// impl Rotation for Truncate {
///     fn is_rotation_needed(&self, path: &Path) -> bool {
///         std::fs::metadata(path).map_or(false, |meta| meta.len() > self.0)
///     }
///
///     fn rotate(&self, path: &Path) -> Result<(), Error> {
///         std::fs::File::create(path)
///             .map(drop)
///             .map_err(|err| Error::rotation(path, err))
///     }
/// }
/// ```
///
/// [`FileProvider`]: crate::provider::FileProvider
/// [`is_rotation_needed`]: Rotation::is_rotation_needed
/// [`rotate`]: Rotation::rotate
pub trait Rotation: Send + Sync + 'static {
    /// Returns `true` if the file at `path` should be rotated now.
    fn is_rotation_needed(&self, path: &Path) -> bool;

    /// Rotates the file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Rotation`] if the file system refused.
    ///
    /// [`Error::Rotation`]: crate::Error::Rotation
    fn rotate(&self, path: &Path) -> Result;
}

/// `path` with `.suffix` appended to its file name.
pub(crate) fn archive_path(path: &Path, suffix: impl fmt::Display) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(suffix.to_string());
    PathBuf::from(name)
}
