//! Shell integration snippets.
//!
//! `promptf init <shell>` prints a snippet that registers the two host
//! hooks: a preexec hook feeding each command line to `promptf preexec`,
//! and a precmd hook that captures `$?` first, calls `promptf prompt`,
//! and clears the state variable so a measurement is consumed exactly
//! once.  The snippets are embedded at compile time.

use anyhow::Context;
use clap::ValueEnum;
use include_dir::{Dir, include_dir};

static ASSETS: Dir<'static> = include_dir!("$CARGO_MANIFEST_DIR/assets");

/// Shells with an embedded integration snippet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
}

impl Shell {
    const fn asset_name(self) -> &'static str {
        match self {
            Self::Bash => "bash.sh",
            Self::Zsh => "zsh.sh",
        }
    }
}

/// The embedded integration snippet for `shell`.
///
/// # Errors
///
/// Returns an error if the snippet asset is missing from the binary,
/// which would indicate a packaging defect.
pub fn snippet(shell: Shell) -> anyhow::Result<&'static str> {
    ASSETS
        .get_file(shell.asset_name())
        .and_then(|f| f.contents_utf8())
        .with_context(|| format!("embedded snippet missing: {}", shell.asset_name()))
}
