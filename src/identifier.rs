//! Identifier parsing for Mason.
//! Derives every naming variant used during generation from the single
//! user-supplied application identifier (e.g. `org-appname`).

use crate::error::{Error, Result};

/// Naming variants derived once from the application identifier.
///
/// Immutable after construction; the substitution map is built from these
/// fields, so every field is guaranteed non-empty (except `org_pascal`,
/// which is empty for single-segment identifiers).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameVariants {
    /// The trimmed identifier as supplied
    pub slug: String,
    /// Pascal form of the org segment; empty when the identifier has one segment
    pub org_pascal: String,
    /// Pascal form of the app portion (all segments after the org)
    pub app_pascal: String,
    /// `Org.App`, or just `App` when there is no org segment
    pub namespace_prefix: String,
    /// Human-facing application name
    pub display_name: String,
    /// Reverse-DNS bundle identifier base, e.g. `com.acme.demoapp`
    pub bundle_id_base: String,
}

/// Strips non-alphanumeric characters and upper-cases the first remaining
/// character. Returns an empty string when nothing survives the strip.
fn to_pascal_segment(segment: &str) -> String {
    let clean: String = segment.chars().filter(|c| c.is_ascii_alphanumeric()).collect();
    let mut chars = clean.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}

/// Lowercased, alphanumeric-only form used in bundle identifier segments.
fn to_bundle_segment(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

fn invalid(identifier: &str, reason: &str) -> Error {
    Error::InvalidIdentifier {
        identifier: identifier.to_string(),
        reason: reason.to_string(),
    }
}

/// Parses an application identifier into its derived name variants.
///
/// The identifier splits on `-`: the first segment is the organization,
/// the remainder is the application. Single-segment identifiers have no
/// organization part.
///
/// # Errors
/// Returns `Error::InvalidIdentifier` when the identifier is empty, contains
/// a path separator or consecutive underscores (reserved for template
/// placeholders; accepting them would let a replacement value contain a
/// token), has no non-empty dash segments, or when any derived Pascal form
/// ends up empty after stripping non-alphanumerics.
pub fn parse(identifier: &str) -> Result<NameVariants> {
    let normalized = identifier.trim();
    if normalized.is_empty() {
        return Err(invalid(identifier, "identifier is empty"));
    }
    if normalized.contains('/') || normalized.contains('\\') {
        return Err(invalid(
            identifier,
            "identifier must not contain path separators; use --output to control the destination",
        ));
    }
    if normalized.contains("__") {
        return Err(invalid(
            identifier,
            "identifier must not contain consecutive underscores; these are reserved for template placeholders",
        ));
    }

    let parts: Vec<&str> = normalized.split('-').filter(|p| !p.is_empty()).collect();
    if parts.is_empty() {
        return Err(invalid(identifier, "no usable segments"));
    }

    if parts.len() == 1 {
        let app_pascal = to_pascal_segment(parts[0]);
        if app_pascal.is_empty() {
            return Err(invalid(identifier, "application segment has no alphanumeric characters"));
        }

        let bundle_app = to_bundle_segment(parts[0]);
        let bundle_app = if bundle_app.is_empty() { "placeholder".to_string() } else { bundle_app };

        return Ok(NameVariants {
            slug: normalized.to_string(),
            org_pascal: String::new(),
            namespace_prefix: app_pascal.clone(),
            display_name: app_pascal.clone(),
            app_pascal,
            bundle_id_base: format!("com.{}", bundle_app),
        });
    }

    let org = parts[0];
    let app_parts = &parts[1..];

    let org_pascal = to_pascal_segment(org);
    let app_pascal: String = app_parts.iter().map(|p| to_pascal_segment(p)).collect();
    if org_pascal.is_empty() {
        return Err(invalid(identifier, "organization segment has no alphanumeric characters"));
    }
    if app_pascal.is_empty() {
        return Err(invalid(identifier, "application segment has no alphanumeric characters"));
    }

    let namespace_prefix = format!("{}.{}", org_pascal, app_pascal);
    let bundle_id_base = format!(
        "com.{}.{}",
        to_bundle_segment(org),
        to_bundle_segment(&app_parts.join(""))
    );

    Ok(NameVariants {
        slug: normalized.to_string(),
        org_pascal,
        display_name: app_pascal.clone(),
        app_pascal,
        namespace_prefix,
        bundle_id_base,
    })
}
