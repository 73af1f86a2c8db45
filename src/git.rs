//! Version-control prompt fragment.
//!
//! Branch name plus single-character dirty markers, all gathered through
//! the `git` CLI.  Outside a work tree, or with git missing entirely, the
//! fragment is empty — no error ever reaches the prompt.

use std::path::Path;
use std::sync::OnceLock;

use crate::probe;

/// Marker for changes staged in the index.
const STAGED_MARKER: char = '+';
/// Marker for unstaged work-tree modifications.
const UNSTAGED_MARKER: char = '!';
/// Marker for untracked files.
const UNTRACKED_MARKER: char = '?';
/// Shown instead of dirty markers when the tree is clean.
const CLEAN_MARKER: char = '\u{2713}'; // ✓

/// Whether a `git` binary is on PATH, checked once per process.
pub fn git_available() -> bool {
    static AVAILABLE: OnceLock<bool> = OnceLock::new();
    *AVAILABLE.get_or_init(|| which::which("git").is_ok())
}

/// Snapshot of the repository state relevant to the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GitSummary {
    /// Branch name, or an abbreviated revision id when detached.
    pub branch: String,
    pub staged: bool,
    pub unstaged: bool,
    pub untracked: bool,
}

impl GitSummary {
    pub const fn is_clean(&self) -> bool {
        !self.staged && !self.unstaged && !self.untracked
    }

    /// Dirty markers in fixed order: staged, unstaged, untracked.
    /// A clean tree renders the distinct clean marker instead.
    pub fn markers(&self) -> String {
        if self.is_clean() {
            return CLEAN_MARKER.to_string();
        }
        let mut out = String::new();
        if self.staged {
            out.push(STAGED_MARKER);
        }
        if self.unstaged {
            out.push(UNSTAGED_MARKER);
        }
        if self.untracked {
            out.push(UNTRACKED_MARKER);
        }
        out
    }

    /// Prompt rendering, e.g. `(main +?)` or `(main ✓)`.
    pub fn render(&self) -> String {
        format!("({} {})", self.branch, self.markers())
    }
}

/// Resolve the current branch: symbolic ref first, abbreviated revision
/// id when detached.  `None` in an empty repository with no HEAD yet.
fn branch_name(dir: &Path) -> Option<String> {
    if let Some(branch) = probe::capture(dir, "git", &["symbolic-ref", "--short", "HEAD"]) {
        return Some(branch);
    }
    probe::capture(dir, "git", &["rev-parse", "--short", "HEAD"])
}

/// Summarize the repository containing `dir`, or `None` when git is
/// unavailable or `dir` is not inside a work tree.
pub fn summarize(dir: &Path) -> Option<GitSummary> {
    if !git_available() {
        return None;
    }

    let inside = probe::capture(dir, "git", &["rev-parse", "--is-inside-work-tree"])?;
    if inside != "true" {
        return None;
    }

    let branch = branch_name(dir)?;

    // Each probe is independent; a failed spawn reads as "not dirty".
    let staged = probe::succeeds(dir, "git", &["diff", "--cached", "--quiet"]) == Some(false);
    let unstaged = probe::succeeds(dir, "git", &["diff", "--quiet"]) == Some(false);
    let untracked = probe::capture(dir, "git", &["ls-files", "--others", "--exclude-standard"])
        .is_some_and(|out| !out.is_empty());

    Some(GitSummary {
        branch,
        staged,
        unstaged,
        untracked,
    })
}

/// The version-control prompt fragment for `dir`, empty when absent.
pub fn fragment(dir: &Path) -> Option<String> {
    summarize(dir).map(|summary| summary.render())
}
