use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SearchError {
    /// The root path handed to a query does not name an existing directory.
    ///
    /// Raised before any filesystem walk happens, so a query that fails with
    /// this never returns partial results.
    #[error("Given pathname doesn't match any directory!")]
    DirectoryNotFound(PathBuf),

    /// The wildcard pattern could not be compiled by the regex engine.
    ///
    /// Every literal character is escaped before compilation, so this is not
    /// reachable through the query functions in practice; the compile seam
    /// still reports it rather than panicking.
    #[error("invalid pattern")]
    InvalidPattern(String),
}
