use serde::{Deserialize, Serialize};

/// Top-level promptf configuration, deserialized from `config.toml` or a
/// repo-local `.promptf.toml`.
///
/// Every key is optional; missing keys take the compiled-in defaults, so a
/// two-line file overriding only `threshold_seconds` is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PromptConfig {
    /// Minimum elapsed seconds before a command's duration is reported.
    pub threshold_seconds: u64,

    /// Program names exempt from timing (editors, pagers, monitors).
    pub interactive_commands: Vec<String>,

    /// Launcher names unwrapped before classification (`sudo cmd` → `cmd`).
    pub wrapper_commands: Vec<String>,

    /// Exit statuses suppressed from the status fragment.  141 is the
    /// usual SIGPIPE convention: a pipe consumer quitting early is not an
    /// error worth flagging.
    pub exempt_exit_codes: Vec<i32>,

    /// System-info command run once at shell startup, output printed
    /// verbatim (e.g. "fastfetch").
    pub banner_command: Option<String>,

    /// Runtime-version probes, tried in order; first entry whose
    /// descriptor file exists and whose command resolves wins.
    #[serde(rename = "runtime")]
    pub runtimes: Vec<RuntimeProbe>,
}

/// One `[[runtime]]` table: which project files imply which runtime.
///
/// ```toml
/// [[runtime]]
/// files = ["pyproject.toml", "requirements.txt"]
/// command = "python3"
/// args = ["--version"]
/// label = "py"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuntimeProbe {
    /// Project descriptor files that activate this probe.
    pub files: Vec<String>,
    /// Executable to query for the version.
    pub command: String,
    /// Arguments for the version query (default `["--version"]`).
    #[serde(default = "default_version_args")]
    pub args: Vec<String>,
    /// Display label; defaults to the command name.
    pub label: Option<String>,
}

fn default_version_args() -> Vec<String> {
    vec!["--version".to_string()]
}

impl RuntimeProbe {
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(&self.command)
    }
}

fn string_vec(items: &[&str]) -> Vec<String> {
    items.iter().map(ToString::to_string).collect()
}

impl Default for PromptConfig {
    fn default() -> Self {
        Self {
            threshold_seconds: 3,
            interactive_commands: string_vec(&[
                "vim", "nvim", "vi", "nano", "emacs", "less", "more", "man", "top", "htop",
                "btop", "ssh", "tmux", "watch", "fzf", "lazygit", "tig",
            ]),
            wrapper_commands: string_vec(&[
                "sudo", "doas", "env", "nice", "ionice", "nohup", "time", "timeout", "command",
            ]),
            exempt_exit_codes: vec![141],
            banner_command: None,
            runtimes: vec![
                RuntimeProbe {
                    files: string_vec(&["pyproject.toml", "requirements.txt", "setup.py"]),
                    command: "python3".to_string(),
                    args: default_version_args(),
                    label: Some("py".to_string()),
                },
                RuntimeProbe {
                    files: string_vec(&["package.json"]),
                    command: "node".to_string(),
                    args: default_version_args(),
                    label: Some("node".to_string()),
                },
            ],
        }
    }
}

impl PromptConfig {
    pub fn is_interactive(&self, command: &str) -> bool {
        self.interactive_commands.iter().any(|c| c == command)
    }

    pub fn is_wrapper(&self, command: &str) -> bool {
        self.wrapper_commands.iter().any(|c| c == command)
    }

    pub fn is_exempt_status(&self, status: i32) -> bool {
        self.exempt_exit_codes.contains(&status)
    }
}
