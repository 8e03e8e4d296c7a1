//! Orchestration of a full generation run.
//! Sequencing is fixed: parse identifier, copy base trees, apply overlays,
//! select auth variants, substitute tokens, rename paths, patch structured
//! files, write the summary. Everything runs synchronously; the first error
//! unwinds to the caller and the partially-built destination is left for
//! the operator to discard.

use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::{MOBILE_SUFFIX, TEMPLATE_MOBILE, TEMPLATE_WEBAPI, WEBAPI_SUFFIX};
use crate::copier::copy_tree;
use crate::error::{Error, Result};
use crate::identifier::{self, NameVariants};
use crate::overlay::{apply_overlays, FeatureFlags};
use crate::patcher::{patch_manifest, patch_registrations, patch_settings};
use crate::scm::init_repository;
use crate::substitute::{rename_paths, substitute_contents, SubstitutionMap};
use crate::summary::write_summary;
use crate::variants::{select_variants, AuthMode};

/// Everything one generation run needs, independent of the CLI layer.
#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub app_id: String,
    pub auth_mode: AuthMode,
    /// Base directory for the destination root; relative paths resolve
    /// against the current working directory
    pub output_dir: PathBuf,
    /// Directory containing the `mobile`, `webapi` and `webapi-optional`
    /// template trees
    pub templates_root: PathBuf,
    pub flags: FeatureFlags,
    /// Skip the best-effort source-control initialization
    pub skip_scm: bool,
}

fn resolve_base_dir(output_dir: &Path) -> Result<PathBuf> {
    if output_dir.is_absolute() {
        return Ok(output_dir.to_path_buf());
    }
    let cwd = std::env::current_dir()?;
    Ok(cwd.join(output_dir))
}

/// Validates that both base template trees exist before any mutation.
fn check_templates(templates_root: &Path) -> Result<(PathBuf, PathBuf)> {
    let mobile = templates_root.join(TEMPLATE_MOBILE);
    let webapi = templates_root.join(TEMPLATE_WEBAPI);
    for path in [&mobile, &webapi] {
        if !path.is_dir() {
            return Err(Error::SourceMissing { path: path.clone() });
        }
    }
    Ok((mobile, webapi))
}

/// Runs a complete generation and returns the destination root.
///
/// The destination root is `<output>/<identifier>`; generation fails with
/// `Error::DestinationExists` when it is already present. On any later
/// failure the root may exist but be incomplete; the contract is discard
/// and retry, not resume.
pub fn generate(opts: &GenerateOptions) -> Result<PathBuf> {
    let names: NameVariants = identifier::parse(&opts.app_id)?;
    let (template_mobile, template_webapi) = check_templates(&opts.templates_root)?;

    let base_dir = resolve_base_dir(&opts.output_dir)?;
    let app_root = base_dir.join(&names.slug);
    if app_root.exists() {
        return Err(Error::DestinationExists { path: app_root });
    }
    fs::create_dir_all(&app_root)?;

    let mobile_root = app_root.join(format!("{}-{}", names.slug, MOBILE_SUFFIX));
    let webapi_root = app_root.join(format!("{}-{}", names.slug, WEBAPI_SUFFIX));

    debug!("Copying base templates into {}", app_root.display());
    copy_tree(&template_mobile, &mobile_root)?;
    copy_tree(&template_webapi, &webapi_root)?;

    apply_overlays(&opts.templates_root, &webapi_root, opts.flags)?;
    select_variants(&mobile_root, opts.auth_mode)?;

    let map = SubstitutionMap::build(&names, &opts.auth_mode.to_string());
    substitute_contents(&app_root, &map)?;
    rename_paths(&app_root, &map)?;

    let webapi_src = webapi_root.join("src");
    patch_manifest(&webapi_src, opts.flags)?;
    patch_settings(&webapi_src, opts.flags)?;
    patch_registrations(&webapi_src, opts.flags)?;

    write_summary(&app_root, &names, opts.flags)?;

    if !opts.skip_scm {
        init_repository(&app_root);
    }

    Ok(app_root)
}
