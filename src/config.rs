use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};

use crate::numeral_config::{CONFIG_FILE, NumeralToml};
use crate::scale::{BoundaryPolicy, Limits};
use crate::tables::{TableSource, Tables};

/// Settings taken from the command line. `None` leaves the lower layers alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub config_file: Option<PathBuf>,
    pub tables_dir: Option<PathBuf>,
    pub policy: Option<BoundaryPolicy>,
    pub no_capitalize: bool,
    pub verbose: bool,
}

/// Settings taken from `NUMERAL_*` environment variables.
#[derive(Debug, Clone, Default)]
pub struct EnvLayer {
    pub tables_dir: Option<PathBuf>,
    pub policy: Option<String>,
}

impl EnvLayer {
    pub fn from_env() -> Self {
        Self {
            tables_dir: std::env::var_os("NUMERAL_TABLES_DIR").map(PathBuf::from),
            policy: std::env::var("NUMERAL_POLICY").ok(),
        }
    }
}

/// Runtime configuration for numeral.
///
/// Resolved from `numeral.toml`, then the environment, then the command line,
/// each layer overriding the one before.
#[derive(Debug, Clone)]
pub struct Config {
    /// The file the settings were read from, if any
    pub config_file: Option<PathBuf>,
    pub table_source: TableSource,
    pub limits: Limits,
    pub capitalize: bool,
    pub verbose: bool,
}

impl Config {
    /// Resolve configuration for a process started in `working_dir`.
    pub fn new(working_dir: &Path, overrides: &Overrides) -> Result<Self> {
        let config_file = Self::find_config_file(working_dir, overrides.config_file.as_deref())?;
        let toml = match &config_file {
            Some(path) => NumeralToml::load(path)?,
            None => NumeralToml::default(),
        };
        Self::from_layers(config_file, toml, EnvLayer::from_env(), overrides)
    }

    /// Apply the environment and command-line layers on top of a parsed file.
    pub fn from_layers(
        config_file: Option<PathBuf>,
        toml: NumeralToml,
        env: EnvLayer,
        overrides: &Overrides,
    ) -> Result<Self> {
        let base_dir = config_file
            .as_deref()
            .and_then(Path::parent)
            .map(Path::to_path_buf)
            .unwrap_or_default();

        let tables_dir = overrides
            .tables_dir
            .clone()
            .or(env.tables_dir)
            .or_else(|| toml.tables.dir.map(|dir| base_dir.join(dir)));

        let mut limits = toml.limits.limits();
        if let Some(policy) = env.policy {
            limits.policy = policy
                .parse()
                .context("Invalid NUMERAL_POLICY environment variable")?;
        }
        if let Some(policy) = overrides.policy {
            limits.policy = policy;
        }

        Ok(Self {
            config_file,
            table_source: tables_dir.map_or(TableSource::Embedded, TableSource::Directory),
            limits,
            capitalize: toml.output.capitalize && !overrides.no_capitalize,
            verbose: overrides.verbose,
        })
    }

    /// Load the word tables this configuration points at.
    pub fn load_tables(&self) -> Result<Tables> {
        Tables::load(&self.table_source, self.limits)
            .with_context(|| format!("Failed to load word tables from {}", self.table_source))
    }

    /// Find the config file: an explicit path, then `./numeral.toml`, then
    /// `<user config dir>/numeral/numeral.toml`.
    fn find_config_file(working_dir: &Path, explicit: Option<&Path>) -> Result<Option<PathBuf>> {
        if let Some(path) = explicit {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            return Ok(Some(path.to_path_buf()));
        }

        let local = working_dir.join(CONFIG_FILE);
        if local.exists() {
            return Ok(Some(local));
        }

        Ok(user_config_path().filter(|path| path.exists()))
    }
}

/// `<user config dir>/numeral/numeral.toml`, where `config init` writes by default.
pub fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("numeral").join(CONFIG_FILE))
}
