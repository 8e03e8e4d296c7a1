//! Command-line interface implementation for Mason.
//! Provides argument parsing and help text formatting using clap.

use clap::{error::ErrorKind, CommandFactory, Parser};
use std::path::PathBuf;

use crate::overlay::FeatureFlags;
use crate::variants::AuthMode;

/// Command-line arguments structure for Mason.
///
/// Unrecognized flags are rejected by clap with a fatal error naming the
/// offending flag.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Mason: mobile + webapi project scaffolding tool",
    long_about = None
)]
pub struct Args {
    /// Application identifier, e.g. "acme-demoapp". The first dash segment
    /// is the organization, the remainder the application name.
    #[arg(value_name = "APP_ID")]
    pub app_id: String,

    /// Whether sign-in is required or the app is usable anonymously
    #[arg(long, value_name = "MODE")]
    pub auth: AuthMode,

    /// Directory under which the destination root is created
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub output: PathBuf,

    /// Directory holding the template trees (mobile/, webapi/, webapi-optional/)
    #[arg(long, value_name = "PATH", default_value = "templates")]
    pub templates: PathBuf,

    /// Include the MongoDB storage example in the webapi
    #[arg(long)]
    pub with_mongo: bool,

    /// Include the S3 object-storage example in the webapi
    #[arg(long)]
    pub with_s3: bool,

    /// Include every optional example (implies --with-mongo and --with-s3)
    #[arg(long)]
    pub with_examples: bool,

    /// Skip the best-effort git init/commit of the generated tree
    #[arg(long)]
    pub no_scm: bool,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Resolves the individual feature switches and the combined
    /// `--with-examples` flag into one flag set.
    pub fn feature_flags(&self) -> FeatureFlags {
        if self.with_examples {
            FeatureFlags::all()
        } else {
            FeatureFlags { with_mongo: self.with_mongo, with_s3: self.with_s3 }
        }
    }
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With status code 0 for an explicit `--help`/`--version` request
/// * With status code 1 when required arguments are missing (usage printed)
/// * With clap's default error handling for other argument errors
pub fn get_args() -> Args {
    match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            if e.kind() == ErrorKind::MissingRequiredArgument {
                Args::command()
                    .help_template(
                        r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#,
                    )
                    .print_help()
                    .unwrap();
                std::process::exit(1);
            } else {
                e.exit();
            }
        }
    }
}
