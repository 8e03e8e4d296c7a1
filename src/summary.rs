//! Post-generation summary document.
//! Writes a README at the destination root enumerating the manual
//! configuration steps the scaffold cannot perform (placeholder values,
//! environment selection), with extra sections per enabled feature.

use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::identifier::NameVariants;
use crate::overlay::FeatureFlags;

/// Writes `README.md` at the destination root.
pub fn write_summary<P: AsRef<Path>>(
    app_root: P,
    names: &NameVariants,
    flags: FeatureFlags,
) -> Result<()> {
    let slug = &names.slug;
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!("# {}", slug));
    lines.push(String::new());
    lines.push("Project generated by `mason`.".to_string());
    lines.push(String::new());
    lines.push("## Required manual configuration".to_string());
    lines.push(String::new());
    lines.push("### Mobile (`*-mobile`)".to_string());
    lines.push("- Set `EXPO_PUBLIC_BUILD_ENVIRONMENT` to `development`, `staging`, or `production`.".to_string());
    lines.push("- Fill placeholders in `*-mobile/src/providers/ConfigurationProvider.tsx`:".to_string());
    lines.push("  - `PLACEHOLDER_WEBAPI_DEV_URL`, `PLACEHOLDER_WEBAPI_STG_URL`, `PLACEHOLDER_WEBAPI_PROD_URL`".to_string());
    lines.push("  - Google `PLACEHOLDER_GOOGLE_*_CLIENT_ID_*` values (web + iOS client IDs)".to_string());
    lines.push("- Fill placeholders in `*-mobile/app.config.ts`:".to_string());
    lines.push("  - `PLACEHOLDER_IOS_URL_SCHEME_*` (Google reverse client ID for iOS)".to_string());
    lines.push("  - `PLACEHOLDER_EAS_PROJECT_ID` (if using EAS)".to_string());
    lines.push("  - `PLACEHOLDER_SENTRY_ORG` / `PLACEHOLDER_SENTRY_PROJECT` (if using Sentry)".to_string());
    lines.push(String::new());
    lines.push("### WebApi (`*-webapi`)".to_string());
    lines.push("- Set `ASPNETCORE_ENVIRONMENT` to `development`, `staging`, or `production`.".to_string());
    lines.push("- Fill placeholders in `*-webapi/src/appsettings*.json`:".to_string());
    lines.push("  - `Auth.GoogleClientId` (should match the mobile Google *web* client ID used to mint idTokens)".to_string());
    lines.push("  - `Auth.JwtIssuer`, `Auth.JwtAudience`, `Auth.JwtSigningKey`".to_string());
    lines.push("  - `Sentry.Dsn` (used in staging/production)".to_string());
    lines.push("- `App.MobileAppBundleId` must match the iOS bundle id; the scaffold sets it from the identifier.".to_string());

    if flags.with_mongo {
        lines.push(String::new());
        lines.push("### Mongo (optional)".to_string());
        lines.push("- Config: fill `Mongo` placeholders in `*-webapi/src/appsettings*.json`.".to_string());
        lines.push("- Code: WebApi uses `MockMongoExampleService` by default. To enable real Mongo, uncomment `MongoExampleService` in `*-webapi/src/WebApplicationBuilderExtensions.cs`.".to_string());
    }
    if flags.with_s3 {
        lines.push(String::new());
        lines.push("### S3 (optional)".to_string());
        lines.push("- Config: fill `S3` placeholders in `*-webapi/src/appsettings*.json`.".to_string());
        lines.push("- Code: WebApi uses `MockS3ExampleService` by default. To enable real S3, uncomment `S3ExampleService` in `*-webapi/src/WebApplicationBuilderExtensions.cs`.".to_string());
    }

    lines.push(String::new());
    lines.push("## Run".to_string());
    lines.push(String::new());
    lines.push("### WebApi".to_string());
    lines.push("```bash".to_string());
    lines.push(format!("cd {}/{}-webapi", slug, slug));
    lines.push("dotnet restore".to_string());
    lines.push("dotnet build".to_string());
    lines.push("dotnet run --project src".to_string());
    lines.push("```".to_string());
    lines.push(String::new());
    lines.push("### WebApi (Docker)".to_string());
    lines.push("```bash".to_string());
    lines.push(format!("cd {}/{}-webapi", slug, slug));
    lines.push("docker build -t webapi:dev .".to_string());
    lines.push("docker run --rm -p 8080:8080 -e ASPNETCORE_ENVIRONMENT=development webapi:dev".to_string());
    lines.push("```".to_string());
    lines.push(String::new());
    lines.push("### Mobile".to_string());
    lines.push("```bash".to_string());
    lines.push(format!("cd {}/{}-mobile", slug, slug));
    lines.push("npm install".to_string());
    lines.push("npm run ios".to_string());
    lines.push("```".to_string());
    lines.push(String::new());
    lines.push("## Projects".to_string());
    lines.push(format!("- WebApi: {}.WebApi", names.namespace_prefix));
    lines.push(format!("- WebApi tests: {}.WebApi.Tests", names.namespace_prefix));
    lines.push(String::new());

    fs::write(app_root.as_ref().join("README.md"), lines.join("\n"))?;
    Ok(())
}
