//! The `numeral.toml` configuration file.
//!
//! Every section is optional; a missing file behaves like an empty one.
//!
//! # Configuration File Format
//!
//! ```toml
//! [tables]
//! dir = "tables"          # directory holding lexicon.toml and scales.toml
//!
//! [limits]
//! policy = "open"         # or "zero-width"
//! ceiling_exponent = 18   # open policy only
//!
//! [output]
//! capitalize = true
//! ```

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::scale::{BoundaryPolicy, Limits};

/// File name searched for in the working directory and the user config dir.
pub const CONFIG_FILE: &str = "numeral.toml";

/// Largest exponent whose power of ten fits in a `u64`.
pub const MAX_CEILING_EXPONENT: u32 = 19;

/// Where to read the word tables from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TablesSection {
    /// Directory with `lexicon.toml` and `scales.toml`; built-in tables when unset.
    /// Relative paths are resolved against the config file's directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dir: Option<PathBuf>,
}

/// Range of supported magnitudes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LimitsSection {
    #[serde(default)]
    pub policy: BoundaryPolicy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ceiling_exponent: Option<u32>,
}

impl LimitsSection {
    pub fn limits(&self) -> Limits {
        Limits {
            policy: self.policy,
            ceiling_exponent: self.ceiling_exponent,
        }
    }
}

/// Presentation of translated phrases.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    /// Upper-case the first letter of each phrase
    #[serde(default = "default_capitalize")]
    pub capitalize: bool,
}

fn default_capitalize() -> bool {
    true
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            capitalize: default_capitalize(),
        }
    }
}

/// The complete numeral.toml configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NumeralToml {
    #[serde(default)]
    pub tables: TablesSection,
    #[serde(default)]
    pub limits: LimitsSection,
    #[serde(default)]
    pub output: OutputSection,
}

impl NumeralToml {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::parse(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse numeral.toml")
    }

    /// Load `path`, or the defaults when it does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).context("Failed to serialize numeral.toml")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;
        Ok(())
    }

    /// Human-readable warnings about settings that will not behave as written.
    pub fn validate(&self) -> Vec<String> {
        let mut warnings = Vec::new();

        if let Some(exponent) = self.limits.ceiling_exponent {
            if self.limits.policy == BoundaryPolicy::ZeroWidth {
                warnings.push(format!(
                    "limits.ceiling_exponent = {} is ignored under the zero-width policy",
                    exponent
                ));
            }
            if exponent > MAX_CEILING_EXPONENT {
                warnings.push(format!(
                    "limits.ceiling_exponent = {} is too large (maximum {})",
                    exponent, MAX_CEILING_EXPONENT
                ));
            }
        }

        if let Some(dir) = &self.tables.dir {
            if dir.as_os_str().is_empty() {
                warnings.push("tables.dir is empty".to_string());
            }
        }

        warnings
    }
}
