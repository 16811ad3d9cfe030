use crate::error::{Error, Result};
use crate::rotation::{archive_path, Rotation};
use chrono::{DateTime, Local};
use std::path::Path;
use std::sync::{Mutex, PoisonError};
use std::time::Duration;

const ARCHIVE_STAMP: &str = "%Y%m%d%H%M%S";

/// Rotates once a fixed period has passed.
///
/// The period starts when the policy first sees the file exist, and restarts
/// at every rotation. Rotating renames `app.log` to `app.log.20231231123456`,
/// adding `-1`, `-2`, ... if that archive already exists.
#[derive(Debug)]
pub struct DurationBasedRotation {
    period: Duration,
    since: Mutex<Option<DateTime<Local>>>,
}

impl DurationBasedRotation {
    pub fn new(period: Duration) -> Self {
        DurationBasedRotation {
            period,
            since: Mutex::new(None),
        }
    }

    pub fn daily() -> Self {
        DurationBasedRotation::new(Duration::from_secs(24 * 60 * 60))
    }

    pub fn hourly() -> Self {
        DurationBasedRotation::new(Duration::from_secs(60 * 60))
    }

    pub fn period(&self) -> Duration {
        self.period
    }
}

impl Rotation for DurationBasedRotation {
    fn is_rotation_needed(&self, path: &Path) -> bool {
        if !path.exists() {
            return false;
        }

        let now = Local::now();
        let mut since = self.since.lock().unwrap_or_else(PoisonError::into_inner);
        let start = *since.get_or_insert(now);

        (now - start)
            .to_std()
            .map_or(false, |elapsed| elapsed >= self.period)
    }

    fn rotate(&self, path: &Path) -> Result {
        let now = Local::now();
        let stamp = now.format(ARCHIVE_STAMP).to_string();

        let mut target = archive_path(path, &stamp);
        let mut attempt = 0;
        while target.exists() {
            attempt += 1;
            target = archive_path(path, format_args!("{}-{}", stamp, attempt));
        }

        std::fs::rename(path, &target).map_err(|err| Error::rotation(path, err))?;

        *self.since.lock().unwrap_or_else(PoisonError::into_inner) = Some(now);
        Ok(())
    }
}
