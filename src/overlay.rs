//! Conditional feature overlays.
//! Each feature flag gates an optional template subtree that is copied on
//! top of the base webapi tree; files in an overlay shadow base files at
//! the same relative path. When several flags are set together, a
//! combination overlay carrying the cross-feature files is applied last.

use log::debug;
use std::path::Path;

use crate::constants::{OVERLAY_MONGO, OVERLAY_MONGO_S3, OVERLAY_S3, TEMPLATE_OPTIONAL};
use crate::copier::copy_tree;
use crate::error::Result;

/// Independent feature toggles supplied on the command line.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FeatureFlags {
    /// Include the MongoDB storage example
    pub with_mongo: bool,
    /// Include the S3 object-storage example
    pub with_s3: bool,
}

impl FeatureFlags {
    /// All features enabled; backs the combined `--with-examples` flag.
    pub fn all() -> Self {
        FeatureFlags { with_mongo: true, with_s3: true }
    }

    pub fn any(&self) -> bool {
        self.with_mongo || self.with_s3
    }
}

/// Copies each flagged overlay subtree onto the webapi root.
///
/// Order is fixed: mongo, then s3, then the mongo-s3 combination overlay
/// when both flags are set. Later copies win on path collisions. There is
/// no rollback on partial failure; the whole destination root is discarded
/// by the operator on any fatal error.
pub fn apply_overlays<P: AsRef<Path>, Q: AsRef<Path>>(
    templates_root: P,
    webapi_root: Q,
    flags: FeatureFlags,
) -> Result<()> {
    let optional_root = templates_root.as_ref().join(TEMPLATE_OPTIONAL);
    let webapi_root = webapi_root.as_ref();

    let mut overlays: Vec<&str> = Vec::new();
    if flags.with_mongo {
        overlays.push(OVERLAY_MONGO);
    }
    if flags.with_s3 {
        overlays.push(OVERLAY_S3);
    }
    if flags.with_mongo && flags.with_s3 {
        overlays.push(OVERLAY_MONGO_S3);
    }

    for name in overlays {
        let source = optional_root.join(name);
        debug!("Applying overlay: {}", source.display());
        copy_tree(&source, webapi_root)?;
    }
    Ok(())
}
