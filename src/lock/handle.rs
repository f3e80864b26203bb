//! Handle construction and path resolution.

use crate::error::{LockfileError, Result};
use std::ffi::{OsStr, OsString};
use std::fs;
use std::path::{Path, PathBuf};

/// Default lock file name, used when only a directory is supplied.
///
/// Intentionally obscure so it cannot collide with real files in the
/// directory. Unrelated callers pointing at the same directory without a
/// custom name contend on this one token ("one lock per directory").
pub const DEFAULT_LOCK_FILE_NAME: &str = ".lockfile-gthsf4563";

/// A handle binding a directory and a lock file name.
///
/// Construction resolves and validates the pair; it never touches the
/// filesystem beyond stat probes. The handle itself holds no lock state;
/// whether the lock is held lives entirely in the filesystem, so a handle
/// can outlive any number of lock/unlock cycles.
#[derive(Debug, Clone)]
pub struct Lockfile {
    /// Directory holding the lock token.
    directory: PathBuf,

    /// File name of the lock token within `directory`.
    file_name: OsString,
}

impl Lockfile {
    /// Create a handle from a directory or a full lock file path.
    ///
    /// * If `path` is an existing directory, the token is named
    ///   [`DEFAULT_LOCK_FILE_NAME`] inside it.
    /// * Otherwise (nonexistent path, or an existing non-directory) the
    ///   final component becomes the lock name and the parent directory
    ///   must already exist. The name is taken as-is, even if it equals the
    ///   default constant.
    ///
    /// The directory must be writable by every process sharing the lock;
    /// that is only checked when a lock is actually attempted.
    ///
    /// # Errors
    ///
    /// [`LockfileError::InvalidPath`] if the parent directory of the final
    /// path component does not exist or cannot be statted. A failed
    /// construction yields no handle; there is nothing to lock or unlock.
    pub fn new<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if let Ok(meta) = fs::metadata(path)
            && meta.is_dir()
        {
            return Ok(Self {
                directory: path.to_path_buf(),
                file_name: OsString::from(DEFAULT_LOCK_FILE_NAME),
            });
        }

        // Nonexistent path, or an existing regular file: split off the final
        // component as the lock name and require the parent to exist.
        let (parent, file_name) = match (path.parent(), path.file_name()) {
            (Some(parent), Some(name)) => (parent, name),
            _ => return Err(LockfileError::InvalidPath(path.display().to_string())),
        };

        if fs::metadata(parent).is_err() {
            return Err(LockfileError::InvalidPath(path.display().to_string()));
        }

        Ok(Self {
            directory: parent.to_path_buf(),
            file_name: file_name.to_os_string(),
        })
    }

    /// Directory holding the lock token.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    /// File name of the lock token within [`directory`](Self::directory).
    pub fn file_name(&self) -> &OsStr {
        &self.file_name
    }

    /// Full path of the lock token.
    pub fn lock_path(&self) -> PathBuf {
        self.directory.join(&self.file_name)
    }

    /// Whether the lock token currently exists.
    ///
    /// Point-in-time probe only. The answer can be stale by the time the
    /// caller acts on it, so never use it to decide whether to acquire;
    /// [`lock`](Self::lock) is already atomic and is the only race-free way
    /// to take the token.
    pub fn is_locked(&self) -> bool {
        self.lock_path().exists()
    }
}
