//! Power-of-ten scale tiers and the ceiling of supported magnitudes.
//!
//! Each tier covers the half-open interval from its own power of ten up to
//! the next tier's. The final tier ends at the ceiling, which depends on the
//! boundary policy:
//!
//! | Policy      | Ceiling                                  |
//! |-------------|------------------------------------------|
//! | `open`      | `10^(e_last + 3)` or `10^ceiling_exponent` |
//! | `zero-width`| `10^e_last` (the final tier is never used) |
//!
//! All bounds are exact `u64` powers of ten.

use serde::{Deserialize, Serialize};

use crate::errors::TableError;

/// How far the final scale tier reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum BoundaryPolicy {
    /// The final tier spans three decimal orders, like every tier above hundreds.
    #[default]
    Open,
    /// The final tier has zero width; magnitudes from its start are rejected.
    ZeroWidth,
}

impl std::fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoundaryPolicy::Open => write!(f, "open"),
            BoundaryPolicy::ZeroWidth => write!(f, "zero-width"),
        }
    }
}

impl std::str::FromStr for BoundaryPolicy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "open" => Ok(BoundaryPolicy::Open),
            "zero-width" | "zero_width" | "zerowidth" => Ok(BoundaryPolicy::ZeroWidth),
            _ => anyhow::bail!(
                "Invalid boundary policy '{}'. Valid values: open, zero-width",
                s
            ),
        }
    }
}

/// Boundary settings applied when a scale table is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Limits {
    pub policy: BoundaryPolicy,
    /// Overrides the open-policy ceiling `10^(e_last + 3)`.
    pub ceiling_exponent: Option<u32>,
}

/// One scale tier: the exponent, its word and its exact lower bound.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleTier {
    exponent: u32,
    word: String,
    lower_bound: u64,
}

impl ScaleTier {
    pub fn new(exponent: u32, word: impl Into<String>) -> Result<Self, TableError> {
        let lower_bound = power_of_ten(exponent)?;
        let word = word.into().trim().to_string();
        if word.is_empty() {
            return Err(TableError::EmptyWord {
                key: u64::from(exponent),
            });
        }
        Ok(Self {
            exponent,
            word,
            lower_bound,
        })
    }

    pub fn exponent(&self) -> u32 {
        self.exponent
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// `10^exponent`.
    pub fn lower_bound(&self) -> u64 {
        self.lower_bound
    }
}

fn power_of_ten(exponent: u32) -> Result<u64, TableError> {
    10u64
        .checked_pow(exponent)
        .ok_or(TableError::ExponentTooLarge { exponent })
}

/// Ordered scale lookups for magnitudes of one hundred and above.
pub trait ScaleProvider: Send + Sync {
    /// Scale word for a tier exponent.
    fn lookup(&self, exponent: u32) -> Option<&str>;

    /// Tiers in ascending exponent order.
    fn tiers(&self) -> &[ScaleTier];

    /// Smallest unsupported magnitude.
    fn ceiling(&self) -> u64;

    /// Exponent of the tier whose interval contains `n`.
    ///
    /// `None` below the first tier and at or above the ceiling.
    fn tier_for(&self, n: u64) -> Option<u32> {
        if n >= self.ceiling() {
            return None;
        }
        let tiers = self.tiers();
        let above = tiers.partition_point(|t| t.lower_bound() <= n);
        above.checked_sub(1).map(|i| tiers[i].exponent())
    }
}

/// Validated scale table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleTable {
    tiers: Vec<ScaleTier>,
    policy: BoundaryPolicy,
    ceiling: u64,
}

impl ScaleTable {
    /// Build from tiers already in ascending order.
    pub fn new(tiers: Vec<ScaleTier>, limits: Limits) -> Result<Self, TableError> {
        let first = tiers.first().ok_or(TableError::NoTiers)?;
        if first.exponent() != 2 {
            return Err(TableError::MissingHundreds {
                found: first.exponent(),
            });
        }
        for pair in tiers.windows(2) {
            if pair[0].exponent() >= pair[1].exponent() {
                return Err(TableError::UnorderedTiers {
                    previous: pair[0].exponent(),
                    next: pair[1].exponent(),
                });
            }
        }

        let last = tiers.last().ok_or(TableError::NoTiers)?;
        let ceiling = match limits.policy {
            BoundaryPolicy::ZeroWidth => last.lower_bound(),
            BoundaryPolicy::Open => {
                let exponent = limits.ceiling_exponent.unwrap_or(last.exponent() + 3);
                if exponent <= last.exponent() {
                    return Err(TableError::CeilingBelowFinalTier {
                        ceiling: exponent,
                        last: last.exponent(),
                    });
                }
                power_of_ten(exponent)?
            }
        };

        Ok(Self {
            tiers,
            policy: limits.policy,
            ceiling,
        })
    }

    /// Build from `(exponent, word)` pairs in any order.
    pub fn from_entries<I, S>(entries: I, limits: Limits) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (u32, S)>,
        S: Into<String>,
    {
        let mut tiers = entries
            .into_iter()
            .map(|(exponent, word)| ScaleTier::new(exponent, word))
            .collect::<Result<Vec<_>, _>>()?;
        tiers.sort_by_key(ScaleTier::exponent);
        if let Some(pair) = tiers.windows(2).find(|p| p[0].exponent() == p[1].exponent()) {
            return Err(TableError::DuplicateKey {
                key: u64::from(pair[0].exponent()),
            });
        }
        Self::new(tiers, limits)
    }

    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }
}

impl ScaleProvider for ScaleTable {
    fn lookup(&self, exponent: u32) -> Option<&str> {
        self.tiers
            .binary_search_by_key(&exponent, ScaleTier::exponent)
            .ok()
            .map(|i| self.tiers[i].word())
    }

    fn tiers(&self) -> &[ScaleTier] {
        &self.tiers
    }

    fn ceiling(&self) -> u64 {
        self.ceiling
    }
}
