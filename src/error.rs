//! Error handling for the Mason application.
//! Defines custom error types and results used throughout the application.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Custom error types for Mason operations.
///
/// Every engine operation either succeeds or raises one of these; there is
/// no local recovery, the error unwinds to `main` which prints and exits.
#[derive(Error, Debug)]
pub enum Error {
    /// Represents errors that occur during file system operations
    #[error("IO error: {0}.")]
    IoError(#[from] io::Error),

    /// The user-supplied application identifier is unusable
    #[error("Invalid identifier \"{identifier}\": {reason}.")]
    InvalidIdentifier { identifier: String, reason: String },

    /// The destination root already exists; generation never overwrites
    #[error("Destination already exists: {}.", path.display())]
    DestinationExists { path: PathBuf },

    /// A template tree expected on disk was not found
    #[error("Template source missing: {}.", path.display())]
    SourceMissing { path: PathBuf },

    /// A computed rename target already exists as a sibling
    #[error("Rename target already exists: {}.", path.display())]
    RenameConflict { path: PathBuf },

    /// The manifest patcher requires exactly one manifest file
    #[error("Expected exactly one .csproj in {}, found {found}.", dir.display())]
    ManifestCount { dir: PathBuf, found: usize },

    /// The service registration stub the patcher targets is absent
    #[error("Missing registration file: {}.", path.display())]
    StubMissing { path: PathBuf },

    /// A settings file exists but does not parse as JSON
    #[error("Malformed JSON in {}: {source}.", path.display())]
    JsonError {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Convenience type alias for Results with Mason's Error as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Default error handler that prints the error and exits the program.
///
/// # Behavior
/// Prints the error message to stderr and exits with status code 1
pub fn default_error_handler(err: Error) -> ! {
    eprintln!("{}", err);
    std::process::exit(1);
}
