//! Lockfile: file-based mutual exclusion for cooperating processes.
//!
//! Processes that share nothing but a filesystem can serialize access to a
//! resource by racing to create a **lock token** - a zero-byte file created
//! with exclusive (`create_new`) semantics. The token's existence is the
//! entire lock state:
//! - Creating it atomically acquires the lock
//! - Deleting it releases the lock
//! - A bounded polling wait retries acquisition until a deadline
//!
//! Safety derives from the filesystem's exclusive-create atomicity, not from
//! any in-process synchronization. The intended unit of contention is the
//! process; two threads sharing one handle race exactly as two processes
//! would.
//!
//! # Example
//!
//! ```no_run
//! use lockfile::Lockfile;
//! use std::time::Duration;
//!
//! let lock = Lockfile::new("/var/tmp/myapp")?;
//! lock.lock_wait(Duration::from_secs(5))?;
//! // ... critical section ...
//! lock.unlock()?;
//! # Ok::<(), lockfile::LockfileError>(())
//! ```

pub mod error;
pub mod lock;

pub use error::{LockfileError, Result};
pub use lock::{DEFAULT_LOCK_FILE_NAME, LockGuard, Lockfile, MIN_WAIT_TIMEOUT, POLL_INTERVAL};
