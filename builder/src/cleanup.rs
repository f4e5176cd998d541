//! Removal of stale build outputs.
//!
//! Before a build step writes an output file, any previous file at that path
//! is removed. Callers sometimes point outputs at a discard sink such as
//! `/dev/null`, so only regular files are ever deleted.

use camino::Utf8Path;
use log::{debug, trace};
use std::fs;

/// The platform's discard sink, often passed as an output path.
#[cfg(windows)]
pub const NULL_DEVICE: &str = "NUL";
/// The platform's discard sink, often passed as an output path.
#[cfg(not(windows))]
pub const NULL_DEVICE: &str = "/dev/null";

/// What [`maybe_remove_file`] did with a path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Removal {
    /// A regular file was deleted.
    Removed,
    /// Nothing exists at the path, or it could not be inspected.
    Absent,
    /// The entry is not a regular file and was left alone.
    NotRegular,
    /// The entry is a regular file but deleting it failed.
    Failed,
}

/// Remove `path` if, and only if, it is a regular file.
///
/// Symbolic links are not followed: a link is left in place, as are
/// directories, devices, sockets and FIFOs. Errors are logged and swallowed;
/// a later write to the same path will surface any real problem.
///
/// The returned [`Removal`] reports what happened and can be ignored.
pub fn maybe_remove_file(path: &Utf8Path) -> Removal {
    let metadata = match fs::symlink_metadata(path) {
        Ok(metadata) => metadata,
        Err(e) => {
            trace!("not removing {path}: {e}");
            return Removal::Absent;
        }
    };

    if !metadata.file_type().is_file() {
        trace!("not removing {path}: not a regular file");
        return Removal::NotRegular;
    }

    match fs::remove_file(path) {
        Ok(()) => {
            debug!("removed stale output {path}");
            Removal::Removed
        }
        Err(e) => {
            debug!("failed to remove stale output {path}: {e}");
            Removal::Failed
        }
    }
}
