//! Read-only view of environment variables.
//!
//! The assembler never touches the process environment directly. Callers
//! capture an [`EnvironmentSnapshot`] once at startup (from the process, a
//! `.env` file, or literal pairs in tests) and pass it in.

use std::collections::BTreeMap;
use std::env;

/// Immutable mapping from variable name to value.
///
/// # Examples
///
/// ```
/// use chaincfg::config::EnvironmentSnapshot;
///
/// let env = EnvironmentSnapshot::from_pairs([("PRIVATE_KEY", "abc")]);
/// assert_eq!(env.get("PRIVATE_KEY"), Some("abc"));
/// assert_eq!(env.get("BNB_MAINNET_URL"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvironmentSnapshot {
    vars: BTreeMap<String, String>,
}

impl EnvironmentSnapshot {
    /// Creates an empty snapshot.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Captures the current process environment.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    #[must_use]
    pub fn from_process() -> Self {
        let vars = env::vars_os()
            .filter_map(|(key, value)| Some((key.into_string().ok()?, value.into_string().ok()?)))
            .collect();
        Self { vars }
    }

    /// Builds a snapshot from literal pairs. Later pairs win on duplicates.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let vars = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();
        Self { vars }
    }

    /// Returns the value of `name`, if defined.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.vars.get(name).map(String::as_str)
    }

    /// Whether `name` is defined (possibly as an empty string).
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.vars.contains_key(name)
    }

    /// Returns a copy with `name` set to `value`, replacing any existing value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    /// Adds pairs for names not already defined.
    ///
    /// Existing values are never overwritten, so a `.env` file layered this
    /// way cannot shadow a variable exported by the shell.
    #[must_use]
    pub fn fill_missing<I>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        for (key, value) in pairs {
            self.vars.entry(key).or_insert(value);
        }
        self
    }

    /// Number of defined variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    /// Whether no variables are defined.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}
