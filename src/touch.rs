//! Writing a resolved date-time back to the filesystem.

use chrono::{Local, NaiveDateTime, TimeZone};
use filetime::FileTime;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::trace;

#[derive(Error, Debug)]
pub enum TouchError {
    #[error("{datetime} does not exist in the local time zone")]
    NonexistentLocalTime { datetime: NaiveDateTime },

    #[error("Failed to set modification time of {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Interpret a naive date-time as local wall-clock time.
///
/// On a DST fold the earlier of the two instants is used; a time inside a DST gap is an error.
pub fn local_file_time(datetime: NaiveDateTime) -> Result<FileTime, TouchError> {
    let instant = Local
        .from_local_datetime(&datetime)
        .earliest()
        .ok_or(TouchError::NonexistentLocalTime { datetime })?;

    Ok(FileTime::from_unix_time(
        instant.timestamp(),
        instant.timestamp_subsec_nanos(),
    ))
}

/// Set the file's modification time to `datetime`; the access time becomes now.
pub fn set_modification_time(path: &Path, datetime: NaiveDateTime) -> Result<(), TouchError> {
    let mtime = local_file_time(datetime)?;
    trace!(path = ?path, mtime = ?mtime, "Setting modification time");

    filetime::set_file_times(path, FileTime::now(), mtime).map_err(|source| TouchError::Io {
        path: path.to_path_buf(),
        source,
    })
}
