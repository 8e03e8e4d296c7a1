//! Marker-driven patching of structured files in the generated webapi tree.
//!
//! Three independent patchers, each gated on feature flags:
//! the manifest patcher swaps fixed marker comments in the single `.csproj`
//! for package-reference blocks, the settings patcher shallow-merges
//! placeholder sections into `appsettings*.json`, and the registration
//! patcher swaps marker lines in the service registration stub for mock
//! registrations. All three replace fixed marker tokens rather than
//! appending, so re-running them on patched output changes nothing.

use log::debug;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::constants::{REGISTRATION_FILE, SETTINGS_FILES};
use crate::error::{Error, Result};
use crate::overlay::FeatureFlags;

const MONGO_PACKAGES_MARKER: &str = "<!-- __MONGO_PACKAGE_REFERENCES__ -->";
const S3_PACKAGES_MARKER: &str = "<!-- __S3_PACKAGE_REFERENCES__ -->";

const MONGO_PACKAGE_REFS: &str = "    <PackageReference Include=\"MongoDB.Driver\" Version=\"2.24.0\" />\n    <PackageReference Include=\"MongoDB.Driver.GridFS\" Version=\"2.24.0\" />";

const S3_PACKAGE_REFS: &str = "    <PackageReference Include=\"AWSSDK.Core\" Version=\"3.7.400\" />\n    <PackageReference Include=\"AWSSDK.S3\" Version=\"3.7.400\" />";

const MONGO_SERVICES_MARKER: &str = "// __WITH_MONGO_SERVICES__";
const S3_SERVICES_MARKER: &str = "// __WITH_S3_SERVICES__";

const MONGO_SERVICES_BLOCK: &str = "        // MongoDB (mock by default; uncomment real implementation when configured)\n        services.AddSingleton<IMongoExampleService, MockMongoExampleService>();\n        // services.AddSingleton<IMongoExampleService, MongoExampleService>();";

const S3_SERVICES_BLOCK: &str = "        // S3 (mock by default; uncomment real implementation when configured)\n        services.AddSingleton<IS3ExampleService, MockS3ExampleService>();\n        // services.AddSingleton<IS3ExampleService, S3ExampleService>();";

/// Replaces the optional-package markers in the project manifest with
/// package-reference blocks for every enabled feature, or with nothing.
///
/// # Errors
/// * `Error::ManifestCount` unless `src_dir` contains exactly one `.csproj`
pub fn patch_manifest<P: AsRef<Path>>(src_dir: P, flags: FeatureFlags) -> Result<()> {
    let src_dir = src_dir.as_ref();

    let mut manifests = Vec::new();
    for entry in fs::read_dir(src_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) == Some("csproj") {
            manifests.push(path);
        }
    }
    if manifests.len() != 1 {
        return Err(Error::ManifestCount { dir: src_dir.to_path_buf(), found: manifests.len() });
    }

    let manifest = &manifests[0];
    debug!("Patching manifest: {}", manifest.display());

    let mongo_refs = if flags.with_mongo { MONGO_PACKAGE_REFS } else { "" };
    let s3_refs = if flags.with_s3 { S3_PACKAGE_REFS } else { "" };

    let xml = fs::read_to_string(manifest)?;
    let patched = xml
        .replace(MONGO_PACKAGES_MARKER, mongo_refs)
        .replace(S3_PACKAGES_MARKER, s3_refs);
    fs::write(manifest, patched)?;

    Ok(())
}

/// Shallow-merges `patch` into the JSON object at `path`, adding only keys
/// that are not already present, then writes back pretty-printed with a
/// trailing newline. The merge happens entirely in memory; a parse failure
/// leaves the file untouched.
fn merge_json_file(path: &Path, patch: &serde_json::Map<String, Value>) -> Result<()> {
    let raw = fs::read_to_string(path)?;
    let mut object: serde_json::Map<String, Value> = serde_json::from_str(&raw)
        .map_err(|source| Error::JsonError { path: path.to_path_buf(), source })?;

    let mut changed = false;
    for (key, value) in patch {
        if !object.contains_key(key) {
            object.insert(key.clone(), value.clone());
            changed = true;
        }
    }

    if changed {
        debug!("Patching settings: {}", path.display());
        let mut pretty = serde_json::to_string_pretty(&object)
            .map_err(|source| Error::JsonError { path: path.to_path_buf(), source })?;
        pretty.push('\n');
        fs::write(path, pretty)?;
    }
    Ok(())
}

fn mongo_settings() -> Value {
    serde_json::json!({
        "ConnectionString": "PLACEHOLDER_MONGO_CONNECTION_STRING",
        "DatabaseName": "PLACEHOLDER_MONGO_DATABASE_NAME"
    })
}

fn s3_settings() -> Value {
    serde_json::json!({
        "ServiceUrl": "PLACEHOLDER_S3_SERVICE_URL",
        "AccessKeyId": "PLACEHOLDER_S3_ACCESS_KEY_ID",
        "SecretAccessKey": "PLACEHOLDER_S3_SECRET_ACCESS_KEY",
        "BucketName": "PLACEHOLDER_S3_BUCKET_NAME",
        "PublicUrl": "PLACEHOLDER_S3_PUBLIC_URL"
    })
}

/// Adds flag-gated placeholder sections to every settings file that exists.
///
/// Keys already present in a settings file are never overwritten; the merge
/// is set-if-absent at top-level-key granularity. Candidate files that do
/// not exist are skipped silently.
///
/// # Errors
/// * `Error::JsonError` when an existing candidate file is not valid JSON
pub fn patch_settings<P: AsRef<Path>>(src_dir: P, flags: FeatureFlags) -> Result<()> {
    if !flags.any() {
        return Ok(());
    }

    let mut patch = serde_json::Map::new();
    if flags.with_mongo {
        patch.insert("Mongo".to_string(), mongo_settings());
    }
    if flags.with_s3 {
        patch.insert("S3".to_string(), s3_settings());
    }

    for name in SETTINGS_FILES {
        let path = src_dir.as_ref().join(name);
        if path.exists() {
            merge_json_file(&path, &patch)?;
        }
    }
    Ok(())
}

/// Replaces the service-registration markers in the registration stub with
/// mock registrations for every enabled feature, or with nothing.
///
/// # Errors
/// * `Error::StubMissing` when the registration stub is absent
pub fn patch_registrations<P: AsRef<Path>>(src_dir: P, flags: FeatureFlags) -> Result<()> {
    let path = src_dir.as_ref().join(REGISTRATION_FILE);
    if !path.exists() {
        return Err(Error::StubMissing { path });
    }
    debug!("Patching registrations: {}", path.display());

    let mongo_block = if flags.with_mongo { MONGO_SERVICES_BLOCK } else { "" };
    let s3_block = if flags.with_s3 { S3_SERVICES_BLOCK } else { "" };

    let before = fs::read_to_string(&path)?;
    let after = before
        .replace(MONGO_SERVICES_MARKER, mongo_block)
        .replace(S3_SERVICES_MARKER, s3_block);
    fs::write(&path, after)?;

    Ok(())
}
