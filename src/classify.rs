//! Decides whether a command line should be timed.
//!
//! Interactive programs (editors, pagers, monitors) hold the terminal for
//! user input, so elapsed-time reports for them are noise.  Wrapper
//! launchers like `sudo` or `env` are unwrapped first so that
//! `sudo -n vim /etc/hosts` is recognised as `vim`, not `sudo`.

use crate::config::PromptConfig;

/// Outcome of classifying one submitted command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Empty or whitespace-only line: discard any pending timer, start
    /// nothing.
    Skip,
    /// The command holds the terminal; never time it, and discard any
    /// pending timer without a report.
    Interactive,
    /// Ordinary command: start the timer now.
    Timed,
}

/// Extract the basename from a word that might be a path.
/// `/usr/bin/vim` -> `vim`, `./htop` -> `htop`, `less` -> `less`.
fn extract_basename(word: &str) -> &str {
    word.rfind(['/', '\\']).map_or(word, |pos| &word[pos + 1..])
}

/// Split a command line into words, honouring single quotes, double
/// quotes, and backslash escapes.
///
/// Returns `None` when quoting is unbalanced (an unterminated quote or a
/// trailing backslash).  Callers treat that as "timed" — timing a weird
/// line is harmless, silently skipping a slow command is not.
pub fn tokenize(line: &str) -> Option<Vec<String>> {
    let mut words = Vec::new();
    let mut current = String::new();
    // Tracks whether the current word saw any characters at all, so that
    // `''` still produces an (empty) word.
    let mut in_word = false;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match c {
            '\'' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('\'') => break,
                        Some(inner) => current.push(inner),
                        None => return None, // unterminated single quote
                    }
                }
            }
            '"' => {
                in_word = true;
                loop {
                    match chars.next() {
                        Some('"') => break,
                        Some('\\') => match chars.next() {
                            Some(escaped) => current.push(escaped),
                            None => return None,
                        },
                        Some(inner) => current.push(inner),
                        None => return None, // unterminated double quote
                    }
                }
            }
            '\\' => match chars.next() {
                Some(escaped) => {
                    in_word = true;
                    current.push(escaped);
                }
                None => return None, // trailing backslash
            },
            c if c.is_whitespace() => {
                if in_word {
                    words.push(std::mem::take(&mut current));
                    in_word = false;
                }
            }
            c => {
                in_word = true;
                current.push(c);
            }
        }
    }

    if in_word {
        words.push(current);
    }
    Some(words)
}

/// A `NAME=value` environment assignment, as accepted by `env` and
/// `sudo`: identifier characters before the first `=`, not starting with
/// a digit.
fn is_env_assignment(word: &str) -> bool {
    word.split_once('=').is_some_and(|(name, _)| {
        !name.is_empty()
            && !name.starts_with(|c: char| c.is_ascii_digit())
            && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
    })
}

/// Resolve the effective command name from tokenized words.
///
/// When the first word is a wrapper (`sudo`, `env`, …), scan forward past
/// option flags, `NAME=value` assignments, and a literal `--`
/// end-of-options marker to the wrapped command.  A wrapper followed
/// only by flags resolves to the wrapper itself.
fn effective_command<'a>(words: &'a [String], config: &PromptConfig) -> Option<&'a str> {
    let first = extract_basename(words.first()?);
    if !config.is_wrapper(first) {
        return Some(first);
    }

    for word in &words[1..] {
        if word == "--" || word.starts_with('-') || is_env_assignment(word) {
            continue;
        }
        return Some(extract_basename(word));
    }

    // Only flags after the wrapper: the wrapper itself governs.
    Some(first)
}

/// Classify a raw command line against the configured interactive and
/// wrapper sets.
pub fn classify(line: &str, config: &PromptConfig) -> Classification {
    let Some(words) = tokenize(line) else {
        // Unbalanced quoting: never suppress timing on a parse failure.
        return Classification::Timed;
    };

    let Some(command) = effective_command(&words, config) else {
        return Classification::Skip;
    };

    if config.is_interactive(command) {
        Classification::Interactive
    } else {
        Classification::Timed
    }
}
