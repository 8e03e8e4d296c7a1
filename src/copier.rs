//! Recursive template tree copying.
//! Copies preserve directory structure and intentionally overwrite existing
//! files at the destination (last write wins), which is what overlay
//! layering relies on.

use log::debug;
use std::fs;
use std::io;
use std::path::Path;
use walkdir::WalkDir;

use crate::error::{Error, Result};

/// Recursively copies every file and subdirectory from `source` into
/// `destination`, creating destination directories as needed.
///
/// Existing files at the destination are overwritten without complaint;
/// overlay application (see the `overlay` module) shadows base-template
/// files this way.
///
/// # Errors
/// * `Error::SourceMissing` if `source` does not exist
/// * `Error::IoError` for any filesystem failure during the copy
pub fn copy_tree<P: AsRef<Path>, Q: AsRef<Path>>(source: P, destination: Q) -> Result<()> {
    let source = source.as_ref();
    let destination = destination.as_ref();

    if !source.exists() {
        return Err(Error::SourceMissing { path: source.to_path_buf() });
    }

    for entry in WalkDir::new(source) {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| Error::IoError(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        let target = destination.join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target)?;
        } else {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            debug!("Copying file: {}", target.display());
            fs::copy(entry.path(), &target)?;
        }
    }

    Ok(())
}
