//! Mason's main application entry point.
//! Parses arguments, configures logging, and hands off to the generator.

use mason::{
    cli::get_args,
    error::default_error_handler,
    generator::{generate, GenerateOptions},
    logger::init_logger,
};

fn main() {
    let args = get_args();

    init_logger(args.verbose);

    let opts = GenerateOptions {
        app_id: args.app_id.clone(),
        auth_mode: args.auth,
        output_dir: args.output.clone(),
        templates_root: args.templates.clone(),
        flags: args.feature_flags(),
        skip_scm: args.no_scm,
    };

    match generate(&opts) {
        Ok(app_root) => println!("Created {}", app_root.display()),
        Err(err) => default_error_handler(err),
    }
}
