use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

/// A single filesystem entry handed to a [`Matcher`](crate::Matcher) during
/// traversal.
///
/// The walker builds one of these per child it encounters: the absolute path,
/// the base name (final path component, no directories), and the entry kind.
/// Modification time is looked up lazily via [`Entry::modified`], so only
/// matchers that compare timestamps pay the extra metadata call.
pub struct Entry {
    /// Absolute path to the entry.
    pub path: PathBuf,

    /// The entry's base name.
    pub name: String,

    /// What kind of entry this is.
    pub kind: EntryKind,
}

impl Entry {
    /// Whether this entry is a directory.
    ///
    /// Symlinks are classified as [`EntryKind::Symlink`] even when they point
    /// at a directory, so this is `false` for them.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Dir
    }

    /// Last modification time, read from the filesystem on demand.
    ///
    /// `None` when the metadata cannot be read (entry vanished mid-walk,
    /// dangling symlink) or the platform doesn't record a timestamp.
    pub fn modified(&self) -> Option<SystemTime> {
        fs::metadata(&self.path).ok().and_then(|m| m.modified().ok())
    }
}

/// The kind of a traversed entry.
///
/// Mapped from the host file type without following symlinks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    /// A regular file.
    File,

    /// A directory.
    Dir,

    /// A symbolic link.
    Symlink,

    /// Anything else (device files, pipes, sockets, etc.).
    Other,
}
