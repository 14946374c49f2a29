use std::fs;
use std::path::{Path, PathBuf};

use log::warn;

use crate::entry::{Entry, EntryKind};
use crate::error::SearchError;
use crate::matcher::Matcher;

// ---------------------------------------------------------------------------
// traverse()
// ---------------------------------------------------------------------------

/// Walk the tree under `root` and collect every entry the matcher accepts.
///
/// This is the core engine, shared by all four query functions: a stack of
/// pending directories is seeded with the root, and each popped directory has
/// its children enumerated. Child directories are pushed for later expansion;
/// every child, file or directory, is tested against `matcher`, and accepted
/// children contribute their absolute path to the result. The root itself is
/// never tested; only its descendants are candidates.
///
/// Expansion is LIFO and sibling order is whatever the OS returns from the
/// directory listing, so result order is reproducible only up to set
/// equality.
///
/// Entries that cannot be read mid-walk (unlistable subdirectory, child whose
/// file type is unavailable) are logged and skipped; they never fail the
/// query. Symlinks are reported but not followed, so a symlinked directory is
/// never expanded.
///
/// # Errors
///
/// [`SearchError::DirectoryNotFound`] if `root` does not exist or is not a
/// directory. The check happens before the walk, so no partial results escape.
pub fn traverse(root: &Path, matcher: &dyn Matcher) -> Result<Vec<PathBuf>, SearchError> {
    let root = absolute_root(root)?;

    let mut matches = Vec::new();
    let mut pending = vec![root];

    while let Some(dir) = pending.pop() {
        let children = match fs::read_dir(&dir) {
            Ok(children) => children,
            Err(e) => {
                warn!("skipping unreadable directory {}: {e}", dir.display());
                continue;
            }
        };

        for child in children {
            let child = match child {
                Ok(child) => child,
                Err(e) => {
                    warn!("skipping unreadable entry in {}: {e}", dir.display());
                    continue;
                }
            };

            let entry = match classify(&child) {
                Some(entry) => entry,
                None => continue,
            };

            if entry.is_dir() {
                pending.push(entry.path.clone());
            }
            if matcher.is_match(&entry) {
                matches.push(entry.path);
            }
        }
    }

    Ok(matches)
}

/// Validate the root and make it absolute.
///
/// `is_dir` covers both failure cases at once: a path that does not exist and
/// a path that exists but is a regular file. Absolutizing up front means every
/// path collected under it is absolute too; symlinks are left unresolved.
fn absolute_root(root: &Path) -> Result<PathBuf, SearchError> {
    if !root.is_dir() {
        return Err(SearchError::DirectoryNotFound(root.to_path_buf()));
    }
    // absolute() only fails on an empty path, which is_dir already rejected
    std::path::absolute(root).map_err(|_| SearchError::DirectoryNotFound(root.to_path_buf()))
}

/// Build an [`Entry`] from a raw directory entry.
///
/// `file_type` comes straight from the directory listing (no follow, and on
/// most platforms no extra syscall). Children whose type cannot be read are
/// skipped with a warning.
fn classify(child: &fs::DirEntry) -> Option<Entry> {
    let file_type = match child.file_type() {
        Ok(ft) => ft,
        Err(e) => {
            warn!("skipping entry with unreadable type {}: {e}", child.path().display());
            return None;
        }
    };

    let kind = if file_type.is_dir() {
        EntryKind::Dir
    } else if file_type.is_file() {
        EntryKind::File
    } else if file_type.is_symlink() {
        EntryKind::Symlink
    } else {
        EntryKind::Other
    };

    Some(Entry {
        path: child.path(),
        name: child.file_name().to_string_lossy().into_owned(),
        kind,
    })
}
