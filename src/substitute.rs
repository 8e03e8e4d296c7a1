//! Token substitution over a generated tree.
//! Two independent passes share one substitution map: content substitution
//! rewrites recognized text files in place, path renaming rewrites the
//! basenames of filesystem entries. Content substitution always runs first
//! so a mid-pass failure leaves files under their original, identifiable
//! names.

use indexmap::IndexMap;
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::constants::{
    TEXT_BASENAMES, TEXT_EXTENSIONS, TOKEN_APP_PASCAL, TOKEN_AUTH_MODE, TOKEN_BUNDLE_ID_BASE,
    TOKEN_DISPLAY_NAME, TOKEN_NAMESPACE_PREFIX, TOKEN_ORG_PASCAL, TOKEN_SLUG,
};
use crate::error::{Error, Result};
use crate::identifier::NameVariants;

/// Ordered mapping from literal placeholder token to its replacement value.
///
/// Tokens are applied as plain substring replacement (never regex). Entry
/// order is preserved but does not affect the result: every token is of the
/// form `__NAME__` while no replacement value can contain `__` (identifier
/// parsing rejects consecutive underscores, and the remaining values are
/// alphanumeric segments, dots and the auth mode), so no replacement
/// introduces a token.
#[derive(Debug, Clone)]
pub struct SubstitutionMap(IndexMap<String, String>);

impl SubstitutionMap {
    /// Builds the full token map for one generation run.
    pub fn build(names: &NameVariants, auth_mode: &str) -> Self {
        let mut map = IndexMap::new();
        map.insert(TOKEN_SLUG.to_string(), names.slug.clone());
        map.insert(TOKEN_ORG_PASCAL.to_string(), names.org_pascal.clone());
        map.insert(TOKEN_APP_PASCAL.to_string(), names.app_pascal.clone());
        map.insert(TOKEN_NAMESPACE_PREFIX.to_string(), names.namespace_prefix.clone());
        map.insert(TOKEN_DISPLAY_NAME.to_string(), names.display_name.clone());
        map.insert(TOKEN_AUTH_MODE.to_string(), auth_mode.to_string());
        map.insert(TOKEN_BUNDLE_ID_BASE.to_string(), names.bundle_id_base.clone());
        SubstitutionMap(map)
    }

    /// An empty map, useful for building custom vocabularies in tests.
    pub fn new() -> Self {
        SubstitutionMap(IndexMap::new())
    }

    pub fn insert(&mut self, token: impl Into<String>, value: impl Into<String>) {
        self.0.insert(token.into(), value.into());
    }

    /// Applies every entry to `input` as a literal replace-all.
    pub fn apply(&self, input: &str) -> String {
        let mut out = input.to_string();
        for (token, value) in &self.0 {
            if out.contains(token.as_str()) {
                out = out.replace(token.as_str(), value);
            }
        }
        out
    }
}

impl Default for SubstitutionMap {
    fn default() -> Self {
        Self::new()
    }
}

/// Returns true when the file is safe to rewrite as text.
///
/// Classification is by exact basename against a small allow-list of
/// build/ignore/env file names, or by extension against the text-extension
/// allow-list. Anything else is left untouched.
pub fn is_text_file<P: AsRef<Path>>(path: P) -> bool {
    let path = path.as_ref();
    if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
        if TEXT_BASENAMES.contains(&name) {
            return true;
        }
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) => TEXT_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str()),
        None => false,
    }
}

/// Rewrites the contents of every text file under `root` by applying the
/// substitution map. Files are written back only when the substitution
/// actually changed something, so a second pass with the same map is a
/// no-op.
pub fn substitute_contents<P: AsRef<Path>>(root: P, map: &SubstitutionMap) -> Result<()> {
    for entry in WalkDir::new(root.as_ref()) {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        if !entry.file_type().is_file() || !is_text_file(entry.path()) {
            continue;
        }

        let before = fs::read_to_string(entry.path())?;
        let after = map.apply(&before);
        if after != before {
            debug!("Substituting tokens in: {}", entry.path().display());
            fs::write(entry.path(), after)?;
        }
    }
    Ok(())
}

/// Renames every filesystem entry under `root` whose basename contains a
/// token.
///
/// Entries are processed sorted by full-path string length descending, so a
/// child is always renamed before its parent directory and no previously
/// computed path is invalidated mid-pass.
///
/// # Errors
/// * `Error::RenameConflict` when the substituted name already exists as a
///   sibling; nothing is silently clobbered
pub fn rename_paths<P: AsRef<Path>>(root: P, map: &SubstitutionMap) -> Result<()> {
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in WalkDir::new(root.as_ref()).min_depth(1) {
        let entry = entry.map_err(|e| Error::IoError(e.into()))?;
        paths.push(entry.path().to_path_buf());
    }

    // Deepest-first: longer full paths sort before their ancestors.
    paths.sort_by(|a, b| b.as_os_str().len().cmp(&a.as_os_str().len()));

    for path in paths {
        let Some(base) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let renamed = map.apply(base);
        if renamed == base {
            continue;
        }

        let next = path.with_file_name(&renamed);
        if next.exists() {
            return Err(Error::RenameConflict { path: next });
        }
        debug!("Renaming: {} -> {}", path.display(), next.display());
        fs::rename(&path, &next)?;
    }
    Ok(())
}
