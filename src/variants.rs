//! Auth-mode entry-point selection for the mobile template.
//!
//! The mobile template ships paired alternates named `<stem>.required.<ext>`
//! and `<stem>.optional.<ext>` (the entry point `App.required.tsx` /
//! `App.optional.tsx` among them). Exactly one of each pair survives
//! generation: the file matching the selected auth mode is promoted to
//! `<stem>.<ext>`, replacing any base stub, and both alternate-named files
//! end up absent.

use log::debug;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Whether the generated application forces sign-in or allows anonymous use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum AuthMode {
    Required,
    Optional,
}

impl AuthMode {
    /// The marker infix carried by files belonging to this mode.
    fn infix(&self) -> &'static str {
        match self {
            AuthMode::Required => ".required.",
            AuthMode::Optional => ".optional.",
        }
    }

    fn other(&self) -> AuthMode {
        match self {
            AuthMode::Required => AuthMode::Optional,
            AuthMode::Optional => AuthMode::Required,
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMode::Required => write!(f, "required"),
            AuthMode::Optional => write!(f, "optional"),
        }
    }
}

/// Resolves every `.required.` / `.optional.` alternate pair under `root`
/// in favor of the selected auth mode.
///
/// Candidates are collected before any mutation so the walk never observes
/// its own deletions.
pub fn select_variants<P: AsRef<Path>>(root: P, mode: AuthMode) -> Result<()> {
    let mut selected: Vec<(PathBuf, PathBuf)> = Vec::new();
    let mut rejected: Vec<PathBuf> = Vec::new();

    for entry in WalkDir::new(root.as_ref()) {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if !entry.file_type().is_file() {
            continue;
        }
        let Some(name) = entry.path().file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        if name.contains(mode.infix()) {
            let promoted = entry.path().with_file_name(name.replace(mode.infix(), "."));
            selected.push((entry.path().to_path_buf(), promoted));
        } else if name.contains(mode.other().infix()) {
            rejected.push(entry.path().to_path_buf());
        }
    }

    for path in rejected {
        debug!("Removing unselected variant: {}", path.display());
        fs::remove_file(&path)?;
    }

    for (path, promoted) in selected {
        if promoted.exists() {
            fs::remove_file(&promoted)?;
        }
        debug!("Promoting variant: {} -> {}", path.display(), promoted.display());
        fs::rename(&path, &promoted)?;
    }

    Ok(())
}
