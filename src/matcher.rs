use chrono::{DateTime, Local, NaiveDateTime};
use regex::Regex;

use crate::entry::Entry;
use crate::error::SearchError;
use crate::pattern;

/// Determines whether an entry belongs in the results.
///
/// The walk engine applies one matcher to every entry it encounters; the four
/// query functions each plug in one of the built-in matchers below. Implement
/// this to search with custom logic: extension filters, size thresholds,
/// content probes, anything that can answer yes or no for a single entry.
///
/// # Object Safety
///
/// `Matcher` is object-safe; [`traverse`](crate::traverse) takes
/// `&dyn Matcher`.
///
/// # Example
///
/// ```rust
/// use dirseek::{Entry, Matcher};
///
/// struct LogFiles;
///
/// impl Matcher for LogFiles {
///     fn is_match(&self, entry: &Entry) -> bool {
///         entry.name.ends_with(".log")
///     }
/// }
/// ```
pub trait Matcher {
    /// Returns `true` if this entry should be included in results.
    fn is_match(&self, entry: &Entry) -> bool;
}

// ---------------------------------------------------------------------------
// Built-in matchers, one per query mode
// ---------------------------------------------------------------------------

/// Matches every entry that is not a directory.
pub struct FilesOnly;

impl Matcher for FilesOnly {
    fn is_match(&self, entry: &Entry) -> bool {
        !entry.is_dir()
    }
}

/// Matches every directory.
pub struct DirsOnly;

impl Matcher for DirsOnly {
    fn is_match(&self, entry: &Entry) -> bool {
        entry.is_dir()
    }
}

/// Matches entries whose base name matches a `?`/`*` wildcard pattern.
///
/// Applies to files and directories alike. The pattern is compiled once at
/// construction; matching covers the whole name, never a substring.
pub struct NameMatches {
    regex: Regex,
}

impl NameMatches {
    /// Compile `pattern` under wildcard semantics (see
    /// [`find_files_by_pattern`](crate::find_files_by_pattern)).
    pub fn new(pattern: &str) -> Result<Self, SearchError> {
        Ok(Self {
            regex: pattern::compile(pattern)?,
        })
    }
}

impl Matcher for NameMatches {
    fn is_match(&self, entry: &Entry) -> bool {
        self.regex.is_match(&entry.name)
    }
}

/// Matches entries whose modification time is strictly after a threshold.
///
/// The entry's timestamp is interpreted in the local timezone before the
/// comparison. Strictly after: an entry modified at exactly the threshold is
/// excluded, and so is an entry whose timestamp cannot be read at all.
pub struct ModifiedAfter {
    threshold: NaiveDateTime,
}

impl ModifiedAfter {
    pub fn new(threshold: NaiveDateTime) -> Self {
        Self { threshold }
    }
}

impl Matcher for ModifiedAfter {
    fn is_match(&self, entry: &Entry) -> bool {
        match entry.modified() {
            Some(t) => DateTime::<Local>::from(t).naive_local() > self.threshold,
            None => false,
        }
    }
}
