//! Startup banner.
//!
//! When `banner_command` is configured (e.g. "fastfetch"), run it once at
//! shell start with inherited stdio so its output appears verbatim.  A
//! missing or failing tool is silently ignored — the banner is garnish,
//! not plumbing.

use crate::config::PromptConfig;

/// Run the configured banner command, if any.  Always succeeds.
pub fn print(config: &PromptConfig, verbose: bool) {
    let Some(ref command) = config.banner_command else {
        return;
    };

    let mut parts = command.split_whitespace();
    let Some(program) = parts.next() else {
        return;
    };
    let args: Vec<&str> = parts.collect();

    match std::process::Command::new(program).args(&args).status() {
        Ok(_) => {}
        Err(e) => {
            if verbose {
                eprintln!("[promptf] banner: failed to run {program}: {e}");
            }
        }
    }
}
