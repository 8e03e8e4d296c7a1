use std::fs;
use std::path::{Path, PathBuf};

use mason::error::Error;
use mason::generator::{generate, GenerateOptions};
use mason::overlay::FeatureFlags;
use mason::variants::AuthMode;
use tempfile::TempDir;

fn write_file(path: &Path, content: &str) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

/// A miniature but complete templates root: base mobile and webapi trees
/// plus the three optional overlays.
fn templates_fixture(templates: &Path) {
    // Mobile: paired auth entry points plus token-bearing config
    write_file(&templates.join("mobile/App.required.tsx"), "// required entry\n");
    write_file(&templates.join("mobile/App.optional.tsx"), "// optional entry\n");
    write_file(
        &templates.join("mobile/app.config.ts"),
        "export default {\n  name: \"__APP_DISPLAY_NAME__\",\n  slug: \"__SLUG__\",\n  ios: { bundleIdentifier: \"__BUNDLE_ID_BASE__.__AUTH_MODE__\" }\n};\n",
    );

    // WebApi: token-named manifest with markers, settings, registration stub
    write_file(
        &templates.join("webapi/src/__NAMESPACE_PREFIX__.WebApi.csproj"),
        "<Project>\n  <ItemGroup>\n<!-- __MONGO_PACKAGE_REFERENCES__ -->\n<!-- __S3_PACKAGE_REFERENCES__ -->\n  </ItemGroup>\n</Project>\n",
    );
    write_file(
        &templates.join("webapi/src/appsettings.json"),
        "{\n  \"App\": {\n    \"MobileAppBundleId\": \"__BUNDLE_ID_BASE__\"\n  }\n}\n",
    );
    write_file(
        &templates.join("webapi/src/appsettings.development.json"),
        "{}\n",
    );
    write_file(
        &templates.join("webapi/src/WebApplicationBuilderExtensions.cs"),
        "namespace __NAMESPACE_PREFIX__.WebApi;\n// __WITH_MONGO_SERVICES__\n// __WITH_S3_SERVICES__\n",
    );

    // Optional overlays
    write_file(
        &templates.join("webapi-optional/mongo/src/Services/MongoExampleService.cs"),
        "namespace __NAMESPACE_PREFIX__.WebApi.Services;\n",
    );
    write_file(
        &templates.join("webapi-optional/s3/src/Services/S3ExampleService.cs"),
        "namespace __NAMESPACE_PREFIX__.WebApi.Services;\n",
    );
    write_file(
        &templates.join("webapi-optional/mongo-s3/src/Controllers/PostsWriteController.cs"),
        "namespace __NAMESPACE_PREFIX__.WebApi.Controllers;\n",
    );
}

fn options(temp_dir: &TempDir, flags: FeatureFlags, auth_mode: AuthMode) -> GenerateOptions {
    let templates = temp_dir.path().join("templates");
    templates_fixture(&templates);

    GenerateOptions {
        app_id: "acme-demoapp".to_string(),
        auth_mode,
        output_dir: temp_dir.path().join("out"),
        templates_root: templates,
        flags,
        skip_scm: true,
    }
}

fn webapi_src(app_root: &Path) -> PathBuf {
    app_root.join("acme-demoapp-webapi/src")
}

#[test]
fn test_generate_basic_required() {
    let temp_dir = TempDir::new().unwrap();
    let opts = options(&temp_dir, FeatureFlags::default(), AuthMode::Required);

    let app_root = generate(&opts).unwrap();
    assert_eq!(app_root, temp_dir.path().join("out/acme-demoapp"));

    // Exactly the two subtrees plus the summary document
    assert!(app_root.join("acme-demoapp-mobile").is_dir());
    assert!(app_root.join("acme-demoapp-webapi").is_dir());
    assert!(app_root.join("README.md").is_file());

    // Auth selection: required entry active, alternates gone
    let mobile = app_root.join("acme-demoapp-mobile");
    assert_eq!(fs::read_to_string(mobile.join("App.tsx")).unwrap(), "// required entry\n");
    assert!(!mobile.join("App.required.tsx").exists());
    assert!(!mobile.join("App.optional.tsx").exists());

    // Token substitution in contents
    let config = fs::read_to_string(mobile.join("app.config.ts")).unwrap();
    assert!(config.contains("name: \"Demoapp\""));
    assert!(config.contains("slug: \"acme-demoapp\""));
    assert!(config.contains("bundleIdentifier: \"com.acme.demoapp.required\""));

    // Token substitution in paths
    let src = webapi_src(&app_root);
    assert!(src.join("Acme.Demoapp.WebApi.csproj").is_file());
    assert!(!src.join("__NAMESPACE_PREFIX__.WebApi.csproj").exists());

    // No optional dependency blocks, markers gone
    let manifest = fs::read_to_string(src.join("Acme.Demoapp.WebApi.csproj")).unwrap();
    assert!(!manifest.contains("MongoDB.Driver"));
    assert!(!manifest.contains("AWSSDK"));
    assert!(!manifest.contains("__MONGO_PACKAGE_REFERENCES__"));

    // Settings substituted but not extended
    let settings = fs::read_to_string(src.join("appsettings.json")).unwrap();
    let json: serde_json::Value = serde_json::from_str(&settings).unwrap();
    assert_eq!(json["App"]["MobileAppBundleId"], "com.acme.demoapp");
    assert!(json.get("Mongo").is_none());
    assert!(json.get("S3").is_none());

    // No overlay files
    assert!(!src.join("Services/MongoExampleService.cs").exists());
    assert!(!src.join("Controllers/PostsWriteController.cs").exists());
}

#[test]
fn test_generate_with_all_features() {
    let temp_dir = TempDir::new().unwrap();
    let opts = options(&temp_dir, FeatureFlags::all(), AuthMode::Optional);

    let app_root = generate(&opts).unwrap();
    let src = webapi_src(&app_root);

    // Manifest carries both optional dependency blocks
    let manifest = fs::read_to_string(src.join("Acme.Demoapp.WebApi.csproj")).unwrap();
    assert!(manifest.contains("MongoDB.Driver"));
    assert!(manifest.contains("AWSSDK.S3"));

    // Settings carry both placeholder sections, in every existing file
    for name in ["appsettings.json", "appsettings.development.json"] {
        let raw = fs::read_to_string(src.join(name)).unwrap();
        let json: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert!(json.get("Mongo").is_some());
        assert!(json.get("S3").is_some());
    }

    // Registration stub got both mock registrations, namespace substituted
    let stub = fs::read_to_string(src.join("WebApplicationBuilderExtensions.cs")).unwrap();
    assert!(stub.contains("namespace Acme.Demoapp.WebApi;"));
    assert!(stub.contains("MockMongoExampleService"));
    assert!(stub.contains("MockS3ExampleService"));

    // Individual and combination overlay files present, tokens substituted
    assert!(src.join("Services/MongoExampleService.cs").is_file());
    assert!(src.join("Services/S3ExampleService.cs").is_file());
    let combined =
        fs::read_to_string(src.join("Controllers/PostsWriteController.cs")).unwrap();
    assert!(combined.contains("Acme.Demoapp.WebApi.Controllers"));

    // Optional entry point selected
    let mobile = app_root.join("acme-demoapp-mobile");
    assert_eq!(fs::read_to_string(mobile.join("App.tsx")).unwrap(), "// optional entry\n");

    // Summary lists the per-feature manual steps
    let readme = fs::read_to_string(app_root.join("README.md")).unwrap();
    assert!(readme.contains("# acme-demoapp"));
    assert!(readme.contains("### Mongo (optional)"));
    assert!(readme.contains("### S3 (optional)"));
    assert!(readme.contains("### WebApi (Docker)"));
    assert!(readme.contains("docker build -t webapi:dev ."));
    assert!(readme.contains("Acme.Demoapp.WebApi"));
}

#[test]
fn test_generate_fails_when_destination_exists() {
    let temp_dir = TempDir::new().unwrap();
    let opts = options(&temp_dir, FeatureFlags::default(), AuthMode::Required);

    fs::create_dir_all(temp_dir.path().join("out/acme-demoapp")).unwrap();

    let result = generate(&opts);
    assert!(matches!(result, Err(Error::DestinationExists { .. })));
}

#[test]
fn test_generate_fails_on_missing_templates() {
    let temp_dir = TempDir::new().unwrap();
    let opts = GenerateOptions {
        app_id: "acme-demoapp".to_string(),
        auth_mode: AuthMode::Required,
        output_dir: temp_dir.path().join("out"),
        templates_root: temp_dir.path().join("no-templates"),
        flags: FeatureFlags::default(),
        skip_scm: true,
    };

    let result = generate(&opts);
    assert!(matches!(result, Err(Error::SourceMissing { .. })));

    // Precondition failure: nothing was created
    assert!(!temp_dir.path().join("out").exists());
}

#[test]
fn test_generate_rejects_bad_identifier_before_any_output() {
    let temp_dir = TempDir::new().unwrap();
    let mut opts = options(&temp_dir, FeatureFlags::default(), AuthMode::Required);
    opts.app_id = "---".to_string();

    let result = generate(&opts);
    assert!(matches!(result, Err(Error::InvalidIdentifier { .. })));
    assert!(!temp_dir.path().join("out").exists());
}
