//! Loading the lexicon and scale tables from TOML resources.
//!
//! The default English tables are embedded in the binary. A directory holding
//! `lexicon.toml` and `scales.toml` can replace them at startup:
//!
//! ```toml
//! # lexicon.toml
//! [digits]
//! "0" = "zero"
//! [teens]
//! "10" = "ten"
//! [tens]
//! "20" = "twenty"
//!
//! # scales.toml
//! [scales]
//! "2" = "hundred"
//! "3" = "thousand"
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use rust_embed::RustEmbed;
use serde::Deserialize;

use crate::decomposer::Decomposer;
use crate::errors::TableError;
use crate::lexicon::Lexicon;
use crate::scale::{Limits, ScaleProvider, ScaleTable};

pub const LEXICON_FILE: &str = "lexicon.toml";
pub const SCALES_FILE: &str = "scales.toml";

#[derive(RustEmbed)]
#[folder = "$CARGO_MANIFEST_DIR/tables/"]
struct EmbeddedTables;

#[derive(Debug, Default, Deserialize)]
struct LexiconFile {
    #[serde(default)]
    digits: BTreeMap<String, String>,
    #[serde(default)]
    teens: BTreeMap<String, String>,
    #[serde(default)]
    tens: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
struct ScalesFile {
    #[serde(default)]
    scales: BTreeMap<String, String>,
}

/// Where the word tables come from.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TableSource {
    #[default]
    Embedded,
    Directory(PathBuf),
}

impl fmt::Display for TableSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TableSource::Embedded => write!(f, "built-in English tables"),
            TableSource::Directory(dir) => write!(f, "{}", dir.display()),
        }
    }
}

impl TableSource {
    fn read(&self, name: &str) -> Result<String, TableError> {
        match self {
            TableSource::Embedded => {
                let file = EmbeddedTables::get(name).ok_or_else(|| TableError::ResourceNotFound {
                    name: name.to_string(),
                })?;
                Ok(String::from_utf8_lossy(&file.data).into_owned())
            }
            TableSource::Directory(dir) => {
                let path = dir.join(name);
                std::fs::read_to_string(&path)
                    .map_err(|source| TableError::ReadFailed { path, source })
            }
        }
    }
}

/// The loaded, immutable pair of word tables.
#[derive(Debug, Clone)]
pub struct Tables {
    lexicon: Lexicon,
    scales: ScaleTable,
}

impl Tables {
    pub fn new(lexicon: Lexicon, scales: ScaleTable) -> Self {
        Self { lexicon, scales }
    }

    /// Load both tables from `source`.
    pub fn load(source: &TableSource, limits: Limits) -> Result<Self, TableError> {
        let lexicon = parse_lexicon(LEXICON_FILE, &source.read(LEXICON_FILE)?)?;
        let scales = parse_scales(SCALES_FILE, &source.read(SCALES_FILE)?, limits)?;

        tracing::info!(
            "Loaded {} lexicon entries and {} scale tiers from {}",
            lexicon.len(),
            scales.tiers().len(),
            source
        );
        tracing::debug!("Ceiling {} ({} policy)", scales.ceiling(), scales.policy());

        Ok(Self::new(lexicon, scales))
    }

    /// The built-in English tables.
    pub fn embedded(limits: Limits) -> Result<Self, TableError> {
        Self::load(&TableSource::Embedded, limits)
    }

    /// Tables read from `dir/lexicon.toml` and `dir/scales.toml`.
    pub fn from_dir(dir: &Path, limits: Limits) -> Result<Self, TableError> {
        Self::load(&TableSource::Directory(dir.to_path_buf()), limits)
    }

    pub fn lexicon(&self) -> &Lexicon {
        &self.lexicon
    }

    pub fn scales(&self) -> &ScaleTable {
        &self.scales
    }

    pub fn decomposer(&self) -> Decomposer<'_> {
        Decomposer::new(&self.lexicon, &self.scales)
    }
}

/// Parse `lexicon.toml` content.
pub fn parse_lexicon(name: &str, content: &str) -> Result<Lexicon, TableError> {
    let file: LexiconFile = toml::from_str(content).map_err(|source| TableError::ParseFailed {
        name: name.to_string(),
        source,
    })?;

    let entries = file
        .digits
        .into_iter()
        .chain(file.teens)
        .chain(file.tens)
        .map(|(key, word)| Ok((parse_key::<u64>(name, &key)?, word)))
        .collect::<Result<Vec<_>, TableError>>()?;

    Lexicon::from_entries(entries)
}

/// Parse `scales.toml` content.
pub fn parse_scales(name: &str, content: &str, limits: Limits) -> Result<ScaleTable, TableError> {
    let file: ScalesFile = toml::from_str(content).map_err(|source| TableError::ParseFailed {
        name: name.to_string(),
        source,
    })?;

    let entries = file
        .scales
        .into_iter()
        .map(|(key, word)| Ok((parse_key::<u32>(name, &key)?, word)))
        .collect::<Result<Vec<_>, TableError>>()?;

    ScaleTable::from_entries(entries, limits)
}

fn parse_key<T: FromStr>(name: &str, key: &str) -> Result<T, TableError> {
    key.trim().parse().map_err(|_| TableError::InvalidKey {
        name: name.to_string(),
        key: key.to_string(),
    })
}
