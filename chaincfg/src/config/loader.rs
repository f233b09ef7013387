//! Environment file discovery and loading.
//!
//! The toolchain reads a `.env` file from the project directory before
//! anything else. This module finds and parses that file; layering onto the
//! process environment happens in the builder.
//!
//! Values are taken literally: `$NAME` and `${NAME}` are not expanded, the
//! same as the toolchain's own dotenv loader.

use crate::error::{Error, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Conventional name of the environment file.
pub const ENV_FILE_NAME: &str = ".env";

/// Loads `KEY=value` environment files.
///
/// # Examples
///
/// ```no_run
/// use chaincfg::config::EnvFileLoader;
/// use std::path::Path;
///
/// if let Some(path) = EnvFileLoader::discover(Path::new(".")) {
///     let pairs = EnvFileLoader::load_file(&path).unwrap();
///     println!("Loaded {} variables from {}", pairs.len(), path.display());
/// }
/// ```
pub struct EnvFileLoader;

impl EnvFileLoader {
    /// Returns `<dir>/.env` if it exists.
    ///
    /// Only the given directory is checked; parent directories are not
    /// searched.
    #[must_use]
    pub fn discover(dir: &Path) -> Option<PathBuf> {
        let candidate = dir.join(ENV_FILE_NAME);
        candidate.is_file().then_some(candidate)
    }

    /// Parse an environment file into ordered pairs.
    ///
    /// Quoting, comments and `export` prefixes follow the usual dotenv
    /// rules. A `$` in a value is kept as-is.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or a line is malformed.
    pub fn load_file(path: &Path) -> Result<Vec<(String, String)>> {
        let contents = fs::read_to_string(path).map_err(|e| Error::EnvFile {
            path: path.to_path_buf(),
            reason: format!("Failed to read environment file: {e}"),
        })?;
        let literal = escape_substitutions(&contents);

        dotenvy::from_read_iter(literal.as_bytes())
            .map(|item| {
                item.map_err(|e| Error::EnvFile {
                    path: path.to_path_buf(),
                    reason: e.to_string(),
                })
            })
            .collect()
    }
}

/// Where the scanner is within a `KEY=value` line.
#[derive(Clone, Copy, PartialEq, Eq)]
enum Scan {
    Key,
    Comment,
    ValueStart,
    Bare,
    SingleQuoted,
    DoubleQuoted,
    Trailing,
}

/// Escape every `$` that dotenvy would treat as a substitution.
///
/// Single-quoted values are never substituted, so they pass through
/// untouched. An already escaped `\$` is left alone.
fn escape_substitutions(contents: &str) -> String {
    let mut out = String::with_capacity(contents.len());
    let mut state = Scan::Key;
    let mut escaped = false;

    for c in contents.chars() {
        if state == Scan::ValueStart {
            state = match c {
                ' ' | '\t' => Scan::ValueStart,
                '#' => Scan::Comment,
                '\n' => Scan::Key,
                _ => Scan::Bare,
            };
            if state != Scan::Bare {
                out.push(c);
                continue;
            }
        }

        match state {
            Scan::Key => match c {
                '#' => state = Scan::Comment,
                '=' => state = Scan::ValueStart,
                _ => {}
            },
            Scan::Comment | Scan::Trailing => {
                if c == '\n' {
                    state = Scan::Key;
                }
            }
            Scan::SingleQuoted => {
                if c == '\'' {
                    state = Scan::Bare;
                }
            }
            Scan::Bare | Scan::DoubleQuoted if escaped => escaped = false,
            Scan::Bare | Scan::DoubleQuoted if c == '$' => out.push('\\'),
            Scan::Bare | Scan::DoubleQuoted if c == '\\' => escaped = true,
            Scan::DoubleQuoted => {
                if c == '"' {
                    state = Scan::Bare;
                }
            }
            Scan::Bare => match c {
                '\'' => state = Scan::SingleQuoted,
                '"' => state = Scan::DoubleQuoted,
                ' ' | '\t' => state = Scan::Trailing,
                '\n' => state = Scan::Key,
                _ => {}
            },
            Scan::ValueStart => {}
        }

        out.push(c);
    }

    out
}
