//! Virtual-environment and language-runtime prompt fragments.

use std::path::Path;
use std::sync::OnceLock;

use regex::Regex;

use crate::config::PromptConfig;
use crate::probe;

/// Basename of `$VIRTUAL_ENV` when a virtual environment is active.
///
/// Rendered as `venv:{name}`; empty when the variable is unset or blank.
pub fn venv_fragment() -> Option<String> {
    let value = std::env::var("VIRTUAL_ENV").ok()?;
    if value.is_empty() {
        return None;
    }
    let name = Path::new(&value).file_name()?.to_string_lossy().to_string();
    Some(format!("venv:{name}"))
}

/// Pull the first version-looking token (digits and dots) out of a
/// `--version` style output line, e.g. `Python 3.12.4` → `3.12.4`,
/// `v22.1.0` → `22.1.0`.
pub fn extract_version(output: &str) -> Option<String> {
    static VERSION_RE: OnceLock<Option<Regex>> = OnceLock::new();
    let re = VERSION_RE
        .get_or_init(|| Regex::new(r"\d+(?:\.\d+)+").ok())
        .as_ref()?;
    Some(re.find(output)?.as_str().to_string())
}

/// Runtime-version fragment for `dir`.
///
/// The first configured probe whose descriptor file exists in `dir` and
/// whose command resolves on PATH wins; its output is reduced to the bare
/// version number and labelled, e.g. `py 3.12.4`.  Everything that can go
/// wrong — no descriptor, missing executable, unparseable output — yields
/// an empty fragment.
pub fn version_fragment(config: &PromptConfig, dir: &Path) -> Option<String> {
    for runtime in &config.runtimes {
        if !runtime.files.iter().any(|f| dir.join(f).exists()) {
            continue;
        }
        if which::which(&runtime.command).is_err() {
            continue;
        }

        let args: Vec<&str> = runtime.args.iter().map(String::as_str).collect();
        let output = probe::capture(dir, &runtime.command, &args)?;
        let version = extract_version(&output)?;
        return Some(format!("{} {version}", runtime.label()));
    }
    None
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::RuntimeProbe;

    // --- extract_version ---

    #[test]
    fn extracts_from_python_style_output() {
        assert_eq!(extract_version("Python 3.12.4").as_deref(), Some("3.12.4"));
    }

    #[test]
    fn extracts_from_node_style_output() {
        assert_eq!(extract_version("v22.1.0").as_deref(), Some("22.1.0"));
    }

    #[test]
    fn extracts_first_version_token() {
        assert_eq!(
            extract_version("go version go1.22.3 linux/amd64").as_deref(),
            Some("1.22.3")
        );
    }

    #[test]
    fn bare_integer_is_not_a_version() {
        assert!(extract_version("release 42").is_none());
    }

    #[test]
    fn no_version_token_is_none() {
        assert!(extract_version("no digits here").is_none());
    }

    // --- version_fragment ---

    #[test]
    fn no_descriptor_file_means_no_fragment() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = PromptConfig::default();
        assert!(version_fragment(&cfg, dir.path()).is_none());
    }

    #[test]
    fn missing_executable_means_no_fragment() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "").unwrap();
        let cfg = PromptConfig {
            runtimes: vec![RuntimeProbe {
                files: vec!["marker.txt".to_string()],
                command: "promptf_no_such_runtime_xyz".to_string(),
                args: vec!["--version".to_string()],
                label: None,
            }],
            ..PromptConfig::default()
        };
        assert!(version_fragment(&cfg, dir.path()).is_none());
    }

    #[test]
    fn descriptor_plus_resolvable_command_renders_labelled_version() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("marker.txt"), "").unwrap();
        // `echo` stands in for a runtime: resolvable everywhere, prints
        // its arguments.
        let cfg = PromptConfig {
            runtimes: vec![RuntimeProbe {
                files: vec!["marker.txt".to_string()],
                command: "echo".to_string(),
                args: vec!["fake 9.8.7".to_string()],
                label: Some("fake".to_string()),
            }],
            ..PromptConfig::default()
        };
        assert_eq!(
            version_fragment(&cfg, dir.path()).as_deref(),
            Some("fake 9.8.7")
        );
    }
}
