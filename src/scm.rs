//! Best-effort source-control initialization.
//! The generated tree is staged and committed so the operator starts from a
//! clean baseline. Any failure here is reported as a warning and never
//! affects the exit code; the operator can run the same commands by hand.

use log::{debug, warn};
use std::path::Path;
use std::process::Command;

/// Runs `git init`, `git add -A` and an initial commit inside `app_root`.
///
/// Non-fatal by contract: on any failure (git missing, hooks rejecting the
/// commit, ...) a warning with a manual remediation hint is logged and the
/// function returns normally.
pub fn init_repository<P: AsRef<Path>>(app_root: P) {
    let app_root = app_root.as_ref();

    let steps: [&[&str]; 3] =
        [&["init"], &["add", "-A"], &["commit", "-m", "Initial scaffold"]];

    for args in steps {
        debug!("Running: git {}", args.join(" "));
        let status = Command::new("git").args(args).current_dir(app_root).status();
        match status {
            Ok(status) if status.success() => {}
            Ok(status) => {
                warn!(
                    "git {} exited with {}; initialize the repository manually with `git init && git add -A && git commit`",
                    args.join(" "),
                    status
                );
                return;
            }
            Err(e) => {
                warn!(
                    "could not run git ({}); initialize the repository manually with `git init && git add -A && git commit`",
                    e
                );
                return;
            }
        }
    }
}
