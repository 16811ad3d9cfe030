use crate::error::{Error, Result};
use crate::rotation::{archive_path, Rotation};
use std::fs;
use std::io;
use std::path::Path;

/// Rotates once the file has grown to a size limit.
///
/// Rotating renames `app.log` to `app.log.N`, where `N` is one more than the
/// highest existing archive index, so higher indices are newer.
///
/// # Examples
/// ```
/// # use colotok::FileProvider;
/// # use colotok::rotation::SizeBasedRotation;
/// let provider = FileProvider::new("app.log")
///     .rotation(SizeBasedRotation::new(10 * 1024 * 1024).max_keep_files(5));
/// ```
#[derive(Clone, Debug)]
pub struct SizeBasedRotation {
    size: u64,
    max_keep_files: Option<usize>,
}

impl SizeBasedRotation {
    /// Rotate when the file is at least `size` bytes long.
    pub const fn new(size: u64) -> Self {
        SizeBasedRotation {
            size,
            max_keep_files: None,
        }
    }

    /// Keep at most `max_keep_files` archives, deleting the oldest first.
    pub const fn max_keep_files(mut self, max_keep_files: usize) -> Self {
        self.max_keep_files = Some(max_keep_files);
        self
    }

    pub const fn size(&self) -> u64 {
        self.size
    }
}

impl Rotation for SizeBasedRotation {
    fn is_rotation_needed(&self, path: &Path) -> bool {
        fs::metadata(path).map_or(false, |meta| meta.len() >= self.size)
    }

    fn rotate(&self, path: &Path) -> Result {
        let mut indices = archive_indices(path).map_err(|err| Error::rotation(path, err))?;
        let next = indices.last().map_or(1, |last| last + 1);

        fs::rename(path, archive_path(path, next)).map_err(|err| Error::rotation(path, err))?;
        indices.push(next);

        if let Some(keep) = self.max_keep_files {
            let excess = indices.len().saturating_sub(keep);
            for index in &indices[..excess] {
                fs::remove_file(archive_path(path, index))
                    .map_err(|err| Error::rotation(path, err))?;
            }
        }

        Ok(())
    }
}

/// Indices of the existing `<file>.N` archives next to `path`, ascending.
/// Only names this policy produces are counted.
fn archive_indices(path: &Path) -> io::Result<Vec<usize>> {
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let file_name = path
        .file_name()
        .ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "log path has no file name"))?;
    let prefix = format!("{}.", file_name.to_string_lossy());

    let mut indices: Vec<usize> = fs::read_dir(directory)?
        .flatten()
        .filter_map(|entry| {
            entry
                .file_name()
                .to_str()
                .and_then(|name| name.strip_prefix(prefix.as_str()))
                .and_then(canonical_index)
        })
        .collect();

    indices.sort_unstable();
    Ok(indices)
}

/// Parses `suffix` only if it is the exact decimal spelling of an index, so
/// `01` and `+3` are not mistaken for archives.
fn canonical_index(suffix: &str) -> Option<usize> {
    suffix
        .parse::<usize>()
        .ok()
        .filter(|index| index.to_string() == suffix)
}
