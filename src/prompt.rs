//! Prompt context assembly.
//!
//! Each fragment is computed independently and may be empty; the rendered
//! line joins the non-empty ones with single spaces in a fixed order:
//! exit status, elapsed time, version control, virtual environment,
//! runtime version.

use std::path::Path;

use crate::config::PromptConfig;
use crate::git;
use crate::runtime;
use crate::timer::TimerState;

/// Ephemeral per-render snapshot.  Recomputed from scratch every prompt;
/// nothing here persists.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PromptContext {
    pub status: Option<String>,
    pub elapsed: Option<String>,
    pub vcs: Option<String>,
    pub venv: Option<String>,
    pub runtime: Option<String>,
}

impl PromptContext {
    /// Join non-empty fragments with single spaces, fixed order.
    pub fn render(&self) -> String {
        [
            &self.status,
            &self.elapsed,
            &self.vcs,
            &self.venv,
            &self.runtime,
        ]
        .into_iter()
        .filter_map(|f| f.as_deref())
        .collect::<Vec<_>>()
        .join(" ")
    }
}

/// Exit-status fragment: non-empty only for a nonzero status that is not
/// in the exempt set (by default 141, the SIGPIPE convention — a pager
/// quitting early is not an alarm).
pub fn status_fragment(status: i32, config: &PromptConfig) -> Option<String> {
    if status == 0 || config.is_exempt_status(status) {
        return None;
    }
    Some(format!("\u{2718}{status}")) // ✘
}

/// Build the full context for one prompt render.
///
/// Consumes the timer state: the returned successor is always `Idle`, so
/// rendering twice in a row can never repeat an elapsed-time report.
pub fn build(
    config: &PromptConfig,
    status: i32,
    state: TimerState,
    now_ms: u64,
    dir: &Path,
) -> (PromptContext, TimerState) {
    let (elapsed, next_state) = state.render(now_ms, config.threshold_seconds);

    let context = PromptContext {
        status: status_fragment(status, config),
        elapsed,
        vcs: git::fragment(dir),
        venv: runtime::venv_fragment(),
        runtime: runtime::version_fragment(config, dir),
    };

    (context, next_state)
}
