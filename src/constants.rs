//! Common constants used throughout the Mason application.

/// Tokens recognized by the substitution engine. Replacement values are
/// built from the identifier (which `parse` rejects when it contains
/// consecutive underscores), alphanumeric name segments, dots and the
/// literal auth mode, so no replacement can ever contain `__` and tokens
/// stay disjoint.
pub const TOKEN_SLUG: &str = "__SLUG__";
pub const TOKEN_ORG_PASCAL: &str = "__ORG_PASCAL__";
pub const TOKEN_APP_PASCAL: &str = "__APP_PASCAL__";
pub const TOKEN_NAMESPACE_PREFIX: &str = "__NAMESPACE_PREFIX__";
pub const TOKEN_DISPLAY_NAME: &str = "__APP_DISPLAY_NAME__";
pub const TOKEN_AUTH_MODE: &str = "__AUTH_MODE__";
pub const TOKEN_BUNDLE_ID_BASE: &str = "__BUNDLE_ID_BASE__";

/// Basenames always treated as text regardless of extension
pub const TEXT_BASENAMES: [&str; 5] =
    ["Dockerfile", ".dockerignore", ".gitignore", ".env", ".env.example"];

/// Extensions (lowercase, without dot) treated as text; everything else is
/// skipped by content substitution to avoid corrupting binary assets
pub const TEXT_EXTENSIONS: [&str; 15] = [
    "js", "jsx", "ts", "tsx", "sh", "json", "md", "txt", "cs", "csproj",
    "sln", "xml", "yml", "yaml", "example",
];

/// Template subtrees under the templates root
pub const TEMPLATE_MOBILE: &str = "mobile";
pub const TEMPLATE_WEBAPI: &str = "webapi";
pub const TEMPLATE_OPTIONAL: &str = "webapi-optional";
pub const OVERLAY_MONGO: &str = "mongo";
pub const OVERLAY_S3: &str = "s3";
pub const OVERLAY_MONGO_S3: &str = "mongo-s3";

/// Suffixes of the two generated subtrees
pub const MOBILE_SUFFIX: &str = "mobile";
pub const WEBAPI_SUFFIX: &str = "webapi";

/// Settings files the settings patcher considers, when present
pub const SETTINGS_FILES: [&str; 4] = [
    "appsettings.json",
    "appsettings.development.json",
    "appsettings.staging.json",
    "appsettings.production.json",
];

/// Fixed-named service registration stub targeted by the registration patcher
pub const REGISTRATION_FILE: &str = "WebApplicationBuilderExtensions.cs";
