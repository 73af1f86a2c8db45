//! Silent external-tool probes.
//!
//! Prompt fragments come from short-lived subprocess queries (git status,
//! runtime versions).  A missing tool, a failed spawn, or a nonzero exit
//! must never surface as an error at prompt time — every failure mode
//! collapses to `None` and the fragment is simply omitted.

use std::path::Path;
use std::process::{Command, Stdio};

/// Run `program args…` in `dir`, returning trimmed stdout on success.
///
/// Any failure — spawn error, nonzero exit, non-UTF-8 output — yields
/// `None`.
pub fn capture(dir: &Path, program: &str, args: &[&str]) -> Option<String> {
    let output = Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stderr(Stdio::null())
        .output()
        .ok()?;

    if !output.status.success() {
        return None;
    }

    let stdout = String::from_utf8(output.stdout).ok()?;
    Some(stdout.trim_end().to_string())
}

/// Run `program args…` in `dir` for its exit status alone.
///
/// `Some(true)` when the process ran and exited zero, `Some(false)` when
/// it ran and exited nonzero, `None` when it could not be spawned.
pub fn succeeds(dir: &Path, program: &str, args: &[&str]) -> Option<bool> {
    Command::new(program)
        .args(args)
        .current_dir(dir)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .ok()
        .map(|status| status.success())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn cwd() -> PathBuf {
        std::env::current_dir().unwrap()
    }

    #[test]
    fn capture_trims_trailing_newline() {
        let out = capture(&cwd(), "echo", &["hello"]).unwrap();
        assert_eq!(out, "hello");
    }

    #[test]
    fn capture_missing_program_is_none() {
        assert!(capture(&cwd(), "promptf_no_such_tool_xyz", &[]).is_none());
    }

    #[test]
    fn capture_nonzero_exit_is_none() {
        assert!(capture(&cwd(), "false", &[]).is_none());
    }

    #[test]
    fn succeeds_true_and_false() {
        assert_eq!(succeeds(&cwd(), "true", &[]), Some(true));
        assert_eq!(succeeds(&cwd(), "false", &[]), Some(false));
    }

    #[test]
    fn succeeds_missing_program_is_none() {
        assert!(succeeds(&cwd(), "promptf_no_such_tool_xyz", &[]).is_none());
    }
}
