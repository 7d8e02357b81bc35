//! Typed error hierarchy for numeral.
//!
//! Three enums cover the three layers:
//! - `TranslateError` — failures raised while spelling a number
//! - `InputError` — user input rejected before it reaches the decomposer
//! - `TableError` — lexicon and scale table loading or validation failures

use thiserror::Error;

/// Errors from the decomposer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TranslateError {
    /// The number lies at or beyond the ceiling of the scale table.
    #[error("numbers from {limit} upward are not supported")]
    UnsupportedMagnitude { limit: u64 },

    /// The lexicon has no word for a value it is required to cover.
    #[error("lexicon has no word for {value}")]
    MissingWord { value: u64 },

    /// The scale table has no word for one of its own tiers.
    #[error("scale table has no word for exponent {exponent}")]
    MissingScaleWord { exponent: u32 },
}

/// Errors raised while parsing user input into a number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("empty input")]
    Empty,

    #[error("not a whole number: {0:?}")]
    NotANumber(String),

    #[error("negative numbers are not supported: {0}")]
    Negative(String),

    #[error("number too large: {0}")]
    TooLarge(String),
}

/// Errors from loading or validating the word tables.
#[derive(Debug, Error)]
pub enum TableError {
    #[error("table resource {name} not found")]
    ResourceNotFound { name: String },

    #[error("Failed to read table file at {path}: {source}")]
    ReadFailed {
        path: std::path::PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse table {name}: {source}")]
    ParseFailed {
        name: String,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid key '{key}' in {name}: expected a whole number")]
    InvalidKey { name: String, key: String },

    #[error("Duplicate entry for {key}")]
    DuplicateKey { key: u64 },

    #[error("Lexicon is missing a word for {key}")]
    MissingLexiconEntry { key: u64 },

    #[error("Lexicon entry {key} is neither a digit, a teen, nor a multiple of ten below 100")]
    UnexpectedLexiconEntry { key: u64 },

    #[error("Empty word for {key}")]
    EmptyWord { key: u64 },

    #[error("Scale table has no tiers")]
    NoTiers,

    #[error("Scale table must start at exponent 2 (hundreds), found {found}")]
    MissingHundreds { found: u32 },

    #[error("Scale exponents must be strictly ascending: {previous} then {next}")]
    UnorderedTiers { previous: u32, next: u32 },

    #[error("10^{exponent} does not fit in an unsigned 64-bit integer")]
    ExponentTooLarge { exponent: u32 },

    #[error("Ceiling exponent {ceiling} must be above the final tier exponent {last}")]
    CeilingBelowFinalTier { ceiling: u32, last: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unsupported_magnitude_names_the_limit() {
        let err = TranslateError::UnsupportedMagnitude {
            limit: 1_000_000_000_000_000_000,
        };
        assert_eq!(
            err.to_string(),
            "numbers from 1000000000000000000 upward are not supported"
        );
    }

    #[test]
    fn translate_error_variants_are_distinct() {
        let word = TranslateError::MissingWord { value: 40 };
        let scale = TranslateError::MissingScaleWord { exponent: 3 };
        assert!(matches!(word, TranslateError::MissingWord { value: 40 }));
        assert!(!matches!(scale, TranslateError::MissingWord { .. }));
        assert!(scale.to_string().contains('3'));
    }

    #[test]
    fn input_error_carries_offending_text() {
        let err = InputError::NotANumber("12a".to_string());
        assert!(err.to_string().contains("12a"));
        assert_eq!(
            InputError::Negative("-5".to_string()).to_string(),
            "negative numbers are not supported: -5"
        );
    }

    #[test]
    fn table_error_read_failed_carries_path() {
        use std::path::PathBuf;
        let path = PathBuf::from("/tables/lexicon.toml");
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = TableError::ReadFailed {
            path: path.clone(),
            source: io_err,
        };
        match &err {
            TableError::ReadFailed { path: p, source: s } => {
                assert_eq!(p, &path);
                assert_eq!(s.kind(), std::io::ErrorKind::NotFound);
            }
            _ => panic!("Expected ReadFailed"),
        }
        assert!(err.to_string().contains("/tables/lexicon.toml"));
    }

    #[test]
    fn all_error_types_implement_std_error_trait() {
        fn assert_std_error<E: std::error::Error + Send + Sync + 'static>(_: &E) {}
        assert_std_error(&TranslateError::MissingWord { value: 1 });
        assert_std_error(&InputError::Empty);
        assert_std_error(&TableError::NoTiers);
    }
}
