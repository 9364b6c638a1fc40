//! Ordering-timestamp extraction
//!
//! Files are ordered by a single filesystem timestamp: creation time on
//! Windows, modification time everywhere else. The strategy is picked
//! once at startup; the engine is agnostic to which one is active.

use crate::error::{Error, Result};
use chrono::NaiveDateTime;
use std::fs;
use std::path::Path;
use std::time::SystemTime;
use tracing::warn;

/// Which filesystem timestamp orders the files within a directory
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampSource {
    /// File creation time
    Creation,
    /// File modification time
    Modification,
}

impl TimestampSource {
    /// Strategy for the host platform.
    #[cfg(windows)]
    pub fn for_platform() -> Self {
        TimestampSource::Creation
    }

    /// Strategy for the host platform.
    #[cfg(not(windows))]
    pub fn for_platform() -> Self {
        TimestampSource::Modification
    }

    /// Read the ordering timestamp of `path` using the active strategy.
    ///
    /// If the filesystem cannot report a creation time, modification time
    /// is used for that file instead.
    pub fn ordering_timestamp(&self, path: &Path) -> Result<NaiveDateTime> {
        let wrap = |e: std::io::Error| Error::Timestamp {
            path: path.to_path_buf(),
            message: e.to_string(),
        };

        let metadata = fs::metadata(path).map_err(wrap)?;
        let timestamp = match self {
            TimestampSource::Creation => match metadata.created() {
                Ok(created) => created,
                Err(_) => {
                    warn!(?path, "Creation time unavailable, using modification time");
                    metadata.modified().map_err(wrap)?
                }
            },
            TimestampSource::Modification => metadata.modified().map_err(wrap)?,
        };

        Ok(to_naive(timestamp))
    }
}

fn to_naive(time: SystemTime) -> NaiveDateTime {
    let datetime: chrono::DateTime<chrono::Utc> = time.into();
    datetime.naive_utc()
}

#[cfg(test)]
mod tests {
    use super::*;
    use filetime::{FileTime, set_file_mtime};
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_platform_strategy() {
        #[cfg(windows)]
        assert_eq!(TimestampSource::for_platform(), TimestampSource::Creation);
        #[cfg(not(windows))]
        assert_eq!(
            TimestampSource::for_platform(),
            TimestampSource::Modification
        );
    }

    #[test]
    fn test_modification_time_ordering() {
        let dir = tempdir().unwrap();
        let older = dir.path().join("older.jpg");
        let newer = dir.path().join("newer.jpg");
        File::create(&older).unwrap();
        File::create(&newer).unwrap();
        set_file_mtime(&older, FileTime::from_unix_time(1_600_000_000, 0)).unwrap();
        set_file_mtime(&newer, FileTime::from_unix_time(1_700_000_000, 0)).unwrap();

        let source = TimestampSource::Modification;
        let older_ts = source.ordering_timestamp(&older).unwrap();
        let newer_ts = source.ordering_timestamp(&newer).unwrap();
        assert!(older_ts < newer_ts);
    }

    #[test]
    fn test_missing_file_reports_path() {
        let dir = tempdir().unwrap();
        let gone = dir.path().join("gone.jpg");
        let err = TimestampSource::Modification
            .ordering_timestamp(&gone)
            .unwrap_err();
        assert!(err.to_string().contains("gone.jpg"));
    }
}
