//! Command timer lifecycle.
//!
//! The timer has no ambient state: callers thread a `TimerState` value
//! through the two shell hooks.  It serializes to a compact JSON string so
//! the shell can hold it in a variable between invocations.
//!
//! Each running period produces at most one report.  `render` always
//! returns `Idle`, so a consumed measurement can never leak into the next
//! command.

use serde::{Deserialize, Serialize};

use crate::classify::Classification;

/// Timer state threaded through the preexec and prompt hooks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum TimerState {
    #[default]
    Idle,
    Running {
        /// Start of the timed command, milliseconds since the Unix epoch.
        started_at_ms: u64,
    },
}

impl TimerState {
    /// Parse a state string coming back from the shell variable.
    ///
    /// An empty, missing, or mangled value degrades to `Idle` — a lost
    /// measurement is better than a broken prompt hook.
    pub fn from_shell(raw: &str) -> Self {
        if raw.trim().is_empty() {
            return Self::Idle;
        }
        serde_json::from_str(raw).unwrap_or_default()
    }

    /// Encode for storage in the shell variable.
    pub fn to_shell(self) -> String {
        serde_json::to_string(&self).unwrap_or_else(|_| r#"{"state":"idle"}"#.to_string())
    }

    /// Advance the state for a newly submitted command.
    ///
    /// Timed commands (re)start the clock; interactive and empty
    /// submissions discard any pending measurement without a report.
    pub fn on_command(self, class: Classification, now_ms: u64) -> Self {
        match class {
            Classification::Timed => Self::Running {
                started_at_ms: now_ms,
            },
            Classification::Interactive | Classification::Skip => Self::Idle,
        }
    }

    /// Consume the state at prompt time.
    ///
    /// Returns the formatted elapsed string when the command ran at least
    /// `threshold_seconds`, plus the successor state (always `Idle`).
    pub fn render(self, now_ms: u64, threshold_seconds: u64) -> (Option<String>, Self) {
        let Self::Running { started_at_ms } = self else {
            return (None, Self::Idle);
        };

        let elapsed_secs = now_ms.saturating_sub(started_at_ms) / 1000;
        if elapsed_secs >= threshold_seconds {
            (Some(format_elapsed(elapsed_secs)), Self::Idle)
        } else {
            (None, Self::Idle)
        }
    }
}

/// Milliseconds since the Unix epoch.
pub fn now_ms() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map_or(0, |d| u64::try_from(d.as_millis()).unwrap_or(u64::MAX))
}

/// Human elapsed-time formatting: `45s` under a minute, `2m5s` above.
pub fn format_elapsed(secs: u64) -> String {
    if secs < 60 {
        format!("{secs}s")
    } else {
        format!("{}m{}s", secs / 60, secs % 60)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    // --- format_elapsed ---

    #[test]
    fn formats_seconds_under_a_minute() {
        assert_eq!(format_elapsed(45), "45s");
        assert_eq!(format_elapsed(0), "0s");
        assert_eq!(format_elapsed(59), "59s");
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_elapsed(125), "2m5s");
        assert_eq!(format_elapsed(60), "1m0s");
        assert_eq!(format_elapsed(3601), "60m1s");
    }

    // --- on_command ---

    #[test]
    fn timed_command_starts_running() {
        let state = TimerState::Idle.on_command(Classification::Timed, 10_000);
        assert_eq!(state, TimerState::Running { started_at_ms: 10_000 });
    }

    #[test]
    fn interactive_command_discards_running_timer() {
        let running = TimerState::Running { started_at_ms: 10_000 };
        assert_eq!(
            running.on_command(Classification::Interactive, 20_000),
            TimerState::Idle
        );
    }

    #[test]
    fn skip_discards_running_timer() {
        let running = TimerState::Running { started_at_ms: 10_000 };
        assert_eq!(running.on_command(Classification::Skip, 20_000), TimerState::Idle);
    }

    #[test]
    fn timed_command_restarts_running_timer() {
        let running = TimerState::Running { started_at_ms: 10_000 };
        assert_eq!(
            running.on_command(Classification::Timed, 25_000),
            TimerState::Running { started_at_ms: 25_000 }
        );
    }

    // --- render ---

    #[test]
    fn render_at_threshold_reports() {
        let running = TimerState::Running { started_at_ms: 0 };
        let (report, next) = running.render(3_000, 3);
        assert_eq!(report.as_deref(), Some("3s"));
        assert_eq!(next, TimerState::Idle);
    }

    #[test]
    fn render_below_threshold_is_silent_and_clears() {
        let running = TimerState::Running { started_at_ms: 0 };
        let (report, next) = running.render(2_000, 3);
        assert!(report.is_none());
        assert_eq!(next, TimerState::Idle);
    }

    #[test]
    fn render_idle_is_empty() {
        let (report, next) = TimerState::Idle.render(99_000, 3);
        assert!(report.is_none());
        assert_eq!(next, TimerState::Idle);
    }

    #[test]
    fn render_never_double_reports() {
        let running = TimerState::Running { started_at_ms: 0 };
        let (first, next) = running.render(5_000, 3);
        assert!(first.is_some());
        let (second, _) = next.render(6_000, 3);
        assert!(second.is_none());
    }

    #[test]
    fn render_clock_skew_is_silent() {
        // started_at in the future: saturate to zero elapsed, no report.
        let running = TimerState::Running { started_at_ms: 10_000 };
        let (report, _) = running.render(5_000, 3);
        assert!(report.is_none());
    }

    #[test]
    fn render_long_elapsed_uses_minute_form() {
        let running = TimerState::Running { started_at_ms: 0 };
        let (report, _) = running.render(125_000, 3);
        assert_eq!(report.as_deref(), Some("2m5s"));
    }

    // --- shell round-trip ---

    #[test]
    fn shell_round_trip_running() {
        let state = TimerState::Running { started_at_ms: 1_234 };
        assert_eq!(TimerState::from_shell(&state.to_shell()), state);
    }

    #[test]
    fn shell_round_trip_idle() {
        assert_eq!(TimerState::from_shell(&TimerState::Idle.to_shell()), TimerState::Idle);
    }

    #[test]
    fn empty_shell_value_is_idle() {
        assert_eq!(TimerState::from_shell(""), TimerState::Idle);
        assert_eq!(TimerState::from_shell("   "), TimerState::Idle);
    }

    #[test]
    fn mangled_shell_value_is_idle() {
        assert_eq!(TimerState::from_shell("{garbage"), TimerState::Idle);
        assert_eq!(TimerState::from_shell("null"), TimerState::Idle);
    }
}
