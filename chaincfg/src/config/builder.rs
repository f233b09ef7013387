//! Builder wiring environment sources into the assembler.

use crate::config::assembler::{ConfigAssembler, StaticLiterals};
use crate::config::environment::EnvironmentSnapshot;
use crate::config::loader::EnvFileLoader;
use crate::config::schema::RootConfiguration;
use crate::config::validator::ConfigValidator;
use crate::error::Result;
use std::path::{Path, PathBuf};

/// Builder for assembling configuration from the usual sources.
///
/// Sources, highest precedence first:
///
/// 1. Variables set with [`ConfigBuilder::with_var`]
/// 2. The process environment
/// 3. The environment file (explicit path, or `.env` in the working dir)
///
/// # Examples
///
/// ```
/// use chaincfg::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .skip_env_file()
///     .skip_process_env()
///     .with_var("PRIVATE_KEY", "abc")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.networks["bnb"].account_keys, vec!["abc".to_string()]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    env_file: Option<PathBuf>,
    skip_env_file: bool,
    skip_process_env: bool,
    overrides: Vec<(String, String)>,
    literals: Option<StaticLiterals>,
}

impl ConfigBuilder {
    /// Create a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory searched for `.env`. Defaults to the current directory.
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Use this environment file instead of discovering one.
    ///
    /// Unlike a discovered file, an explicit file must exist.
    #[must_use]
    pub fn with_env_file(mut self, path: &Path) -> Self {
        self.env_file = Some(path.to_path_buf());
        self
    }

    /// Do not read any environment file.
    #[must_use]
    pub const fn skip_env_file(mut self) -> Self {
        self.skip_env_file = true;
        self
    }

    /// Do not read the process environment.
    #[must_use]
    pub const fn skip_process_env(mut self) -> Self {
        self.skip_process_env = true;
        self
    }

    /// Set a variable, overriding every other source.
    #[must_use]
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.overrides.push((name.into(), value.into()));
        self
    }

    /// Replace the static literals used for assembly.
    #[must_use]
    pub fn with_literals(mut self, literals: StaticLiterals) -> Self {
        self.literals = Some(literals);
        self
    }

    /// The static literals this builder assembles with.
    #[must_use]
    pub fn literals(&self) -> StaticLiterals {
        self.literals.clone().unwrap_or_default()
    }

    /// Capture the environment snapshot from all enabled sources.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment file cannot be read or parsed.
    pub fn snapshot(&self) -> Result<EnvironmentSnapshot> {
        let mut snapshot = if self.skip_process_env {
            EnvironmentSnapshot::new()
        } else {
            EnvironmentSnapshot::from_process()
        };

        if let Some(path) = self.resolve_env_file()? {
            log::debug!("loading environment file {}", path.display());
            let pairs = EnvFileLoader::load_file(&path)?;
            snapshot = snapshot.fill_missing(pairs);
        }

        for (name, value) in &self.overrides {
            snapshot = snapshot.with(name.clone(), value.clone());
        }

        Ok(snapshot)
    }

    /// Build the final configuration.
    ///
    /// Captures the snapshot, assembles, then validates the structure.
    /// Missing secrets are not an error here.
    ///
    /// # Errors
    ///
    /// Returns an error if the environment file is unreadable or the
    /// assembled configuration fails structural validation.
    pub fn build(&self) -> Result<RootConfiguration> {
        let snapshot = self.snapshot()?;
        let literals = self.literals();
        let config = ConfigAssembler::new(&snapshot, &literals).assemble();
        ConfigValidator::validate(&config)?;
        Ok(config)
    }

    fn resolve_env_file(&self) -> Result<Option<PathBuf>> {
        if self.skip_env_file {
            return Ok(None);
        }

        if let Some(ref path) = self.env_file {
            return Ok(Some(path.clone()));
        }

        let dir = match self.working_dir {
            Some(ref dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        Ok(EnvFileLoader::discover(&dir))
    }
}
