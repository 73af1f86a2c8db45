//! Configuration discovery and loading.
//!
//! Search order, first file found wins wholesale:
//!   1. `.promptf.toml` in the current directory (repo-local)
//!   2. `{config_dir}/promptf/config.toml` (user-level, platform-native)
//!
//! When `PROMPTF_HOME` is set and non-empty it replaces the user-level
//! directory, so tests and portable setups can pin the config location.

pub mod types;

use std::path::{Path, PathBuf};

use anyhow::Context;

pub use types::{PromptConfig, RuntimeProbe};

/// Returns the promptf user-level directory.
///
/// `PROMPTF_HOME` (if set and non-empty) wins over the platform config
/// dir.  This is the single source of truth for user-level paths.
pub fn user_dir() -> Option<PathBuf> {
    if let Ok(home) = std::env::var("PROMPTF_HOME")
        && !home.is_empty()
    {
        return Some(PathBuf::from(home));
    }
    dirs::config_dir().map(|d| d.join("promptf"))
}

/// Candidate config paths in priority order.
pub fn default_search_paths() -> Vec<PathBuf> {
    let mut paths = Vec::new();

    // Repo-local override, resolved to absolute so it survives any later
    // CWD change.
    if let Ok(cwd) = std::env::current_dir() {
        paths.push(cwd.join(".promptf.toml"));
    }

    if let Some(user) = user_dir() {
        paths.push(user.join("config.toml"));
    }

    paths
}

/// Try to load a config from `path`. Returns `Ok(Some(config))` on
/// success, `Ok(None)` if the file does not exist, or `Err` for other
/// I/O / parse errors.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read or contains
/// invalid TOML.
pub fn try_load(path: &Path) -> anyhow::Result<Option<PromptConfig>> {
    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(e) => {
            return Err(anyhow::Error::new(e)
                .context(format!("failed to read config file: {}", path.display())));
        }
    };
    let config: PromptConfig = toml::from_str(&content)
        .with_context(|| format!("failed to parse config file: {}", path.display()))?;
    Ok(Some(config))
}

/// Load the first config found on the search path, falling back to the
/// defaults.
///
/// An unreadable or invalid file is warned about on stderr and skipped:
/// the prompt hooks must keep working with defaults rather than break the
/// shell over a typo in a TOML file.
pub fn load_or_default(verbose: bool) -> PromptConfig {
    for path in default_search_paths() {
        match try_load(&path) {
            Ok(Some(config)) => {
                if verbose {
                    eprintln!("[promptf] config: {}", path.display());
                }
                return config;
            }
            Ok(None) => {}
            Err(e) => {
                eprintln!("[promptf] warning: {e:#}, using defaults");
            }
        }
    }

    if verbose {
        eprintln!("[promptf] config: built-in defaults");
    }
    PromptConfig::default()
}
