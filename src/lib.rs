//! # dirseek
//!
//! Depth-first file search: one generic walker, four query modes.
//!
//! Everything is built on a single traversal routine, [`traverse`], which
//! walks a directory tree and hands every entry it encounters to a
//! [`Matcher`]. The four query functions are thin call sites that plug in a
//! built-in matcher:
//!
//! - [`find_all_files`]: every non-directory under the root
//! - [`find_all_directories`]: every directory under the root
//! - [`find_files_by_pattern`]: entries whose base name matches a `?`/`*`
//!   wildcard pattern
//! - [`find_files_by_last_change`]: entries modified after a local
//!   date-and-time
//!
//! # Quick Start
//!
//! ```rust
//! use std::fs;
//!
//! let dir = tempfile::tempdir()?;
//! fs::write(dir.path().join("notes.txt"), "n")?;
//! fs::create_dir(dir.path().join("archive"))?;
//!
//! let files = dirseek::find_all_files(dir.path())?;
//! assert_eq!(files.len(), 1);
//! assert!(files[0].ends_with("notes.txt"));
//!
//! let dirs = dirseek::find_all_directories(dir.path())?;
//! assert_eq!(dirs.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Wildcard Patterns
//!
//! [`find_files_by_pattern`] understands two metacharacters: `?` matches
//! exactly one character, `*` matches any run of characters including an
//! empty one. Everything else is literal, regex metacharacters included, so
//! `report(1).txt` means exactly that name. A pattern must cover the whole
//! base name: `file` does not match `file_001`, but `file*` does.
//!
//! # Custom Matchers
//!
//! Implement [`Matcher`] and hand it to [`traverse`] to search with your own
//! predicate:
//!
//! ```rust
//! use dirseek::{traverse, Entry, Matcher};
//!
//! struct Hidden;
//!
//! impl Matcher for Hidden {
//!     fn is_match(&self, entry: &Entry) -> bool {
//!         entry.name.starts_with('.')
//!     }
//! }
//!
//! let dir = tempfile::tempdir()?;
//! std::fs::write(dir.path().join(".env"), "")?;
//! std::fs::write(dir.path().join("visible.txt"), "")?;
//!
//! let hidden = traverse(dir.path(), &Hidden)?;
//! assert_eq!(hidden.len(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![forbid(unsafe_code)]

mod entry;
mod error;
mod matcher;
mod pattern;
mod walk;

// ── Public re-exports ─────────────────────────────────────────────────────────

pub use entry::{Entry, EntryKind};
pub use error::SearchError;
pub use matcher::{DirsOnly, FilesOnly, Matcher, ModifiedAfter, NameMatches};
pub use walk::traverse;

// ── Query functions ───────────────────────────────────────────────────────────

use std::path::{Path, PathBuf};

use chrono::NaiveDateTime;

/// Every non-directory entry anywhere under `root`, as absolute paths.
///
/// Symlinks count as non-directories even when they point at one.
///
/// # Errors
///
/// [`SearchError::DirectoryNotFound`] if `root` does not exist or is not a
/// directory.
pub fn find_all_files(root: impl AsRef<Path>) -> Result<Vec<PathBuf>, SearchError> {
    traverse(root.as_ref(), &FilesOnly)
}

/// Every directory anywhere under `root`, as absolute paths.
///
/// The root itself is not included; only its descendants are candidates.
///
/// # Errors
///
/// [`SearchError::DirectoryNotFound`] if `root` does not exist or is not a
/// directory.
pub fn find_all_directories(root: impl AsRef<Path>) -> Result<Vec<PathBuf>, SearchError> {
    traverse(root.as_ref(), &DirsOnly)
}

/// Every entry under `root` whose base name matches the wildcard `pattern`.
///
/// Files and directories both qualify. `?` matches exactly one character and
/// `*` matches any run of characters; every other character, regex
/// metacharacters included, is literal. The whole base name must match.
///
/// The pattern is compiled fresh on every call and discarded when the query
/// returns.
///
/// # Errors
///
/// [`SearchError::DirectoryNotFound`] if `root` does not exist or is not a
/// directory, [`SearchError::InvalidPattern`] if the regex engine rejects the
/// compiled pattern (not reachable with the escaping applied here).
pub fn find_files_by_pattern(
    pattern: &str,
    root: impl AsRef<Path>,
) -> Result<Vec<PathBuf>, SearchError> {
    let matcher = NameMatches::new(pattern)?;
    traverse(root.as_ref(), &matcher)
}

/// Every entry under `root` modified strictly after `after`, local time.
///
/// Files and directories both qualify. An entry modified at exactly `after`
/// is excluded, as is one whose modification time cannot be read.
///
/// # Errors
///
/// [`SearchError::DirectoryNotFound`] if `root` does not exist or is not a
/// directory.
pub fn find_files_by_last_change(
    after: NaiveDateTime,
    root: impl AsRef<Path>,
) -> Result<Vec<PathBuf>, SearchError> {
    traverse(root.as_ref(), &ModifiedAfter::new(after))
}
