//! Mason is a project scaffolding tool that stamps out a two-project
//! application (a mobile client and a backend web API) from local template
//! trees, applying literal token substitution, conditional feature overlays,
//! and marker-based patches to structured files.

/// Command-line interface module for the Mason application
pub mod cli;

/// Common constants: token vocabulary, text-file allow-lists,
/// template layout names
pub mod constants;

/// Recursive template tree copying with last-write-wins semantics
pub mod copier;

/// Error types and handling for the Mason application
pub mod error;

/// Orchestration of a full generation run
pub mod generator;

/// Identifier parsing and name-variant derivation
pub mod identifier;

/// Logger configuration
pub mod logger;

/// Conditional feature overlay application
pub mod overlay;

/// Marker-driven patching of manifest, settings and registration files
pub mod patcher;

/// Best-effort source-control initialization of the generated tree
pub mod scm;

/// Token substitution over file contents and filesystem entry names
pub mod substitute;

/// Post-generation summary document
pub mod summary;

/// Auth-mode entry-point variant selection
pub mod variants;
