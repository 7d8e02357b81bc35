//! Words for the numbers below one hundred that need no composition.

use std::collections::BTreeMap;

use crate::errors::TableError;

/// Exact-match lookup of small numbers.
pub trait LexiconProvider: Send + Sync {
    /// Word for `n` if it is a digit, a teen or a multiple of ten in [20, 90].
    fn lookup(&self, n: u64) -> Option<&str>;
}

/// Validated table of digits, teens and tens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lexicon {
    words: BTreeMap<u64, String>,
}

/// Whether `n` may appear as a lexicon key.
pub fn is_lexicon_key(n: u64) -> bool {
    n < 20 || (n < 100 && n % 10 == 0)
}

fn required_keys() -> impl Iterator<Item = u64> {
    (0..20).chain((20..100).step_by(10))
}

impl Lexicon {
    /// Build a lexicon, rejecting tables that leave part of [0, 99] unreachable.
    pub fn from_entries<I, S>(entries: I) -> Result<Self, TableError>
    where
        I: IntoIterator<Item = (u64, S)>,
        S: Into<String>,
    {
        let mut words = BTreeMap::new();

        for (key, word) in entries {
            if !is_lexicon_key(key) {
                return Err(TableError::UnexpectedLexiconEntry { key });
            }
            let word: String = word.into();
            let word = word.trim();
            if word.is_empty() {
                return Err(TableError::EmptyWord { key });
            }
            if words.insert(key, word.to_string()).is_some() {
                return Err(TableError::DuplicateKey { key });
            }
        }

        if let Some(key) = required_keys().find(|k| !words.contains_key(k)) {
            return Err(TableError::MissingLexiconEntry { key });
        }

        Ok(Self { words })
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Entries in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = (u64, &str)> {
        self.words.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

impl LexiconProvider for Lexicon {
    fn lookup(&self, n: u64) -> Option<&str> {
        self.words.get(&n).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const WORDS: [(u64, &str); 28] = [
        (0, "zero"),
        (1, "one"),
        (2, "two"),
        (3, "three"),
        (4, "four"),
        (5, "five"),
        (6, "six"),
        (7, "seven"),
        (8, "eight"),
        (9, "nine"),
        (10, "ten"),
        (11, "eleven"),
        (12, "twelve"),
        (13, "thirteen"),
        (14, "fourteen"),
        (15, "fifteen"),
        (16, "sixteen"),
        (17, "seventeen"),
        (18, "eighteen"),
        (19, "nineteen"),
        (20, "twenty"),
        (30, "thirty"),
        (40, "forty"),
        (50, "fifty"),
        (60, "sixty"),
        (70, "seventy"),
        (80, "eighty"),
        (90, "ninety"),
    ];

    fn lexicon() -> Lexicon {
        Lexicon::from_entries(WORDS).unwrap()
    }

    #[test]
    fn test_lookup_direct_hits() {
        let lexicon = lexicon();
        assert_eq!(lexicon.lookup(0), Some("zero"));
        assert_eq!(lexicon.lookup(13), Some("thirteen"));
        assert_eq!(lexicon.lookup(70), Some("seventy"));
        assert_eq!(lexicon.len(), 28);
    }

    #[test]
    fn test_lookup_absent_for_composed_numbers() {
        let lexicon = lexicon();
        assert_eq!(lexicon.lookup(21), None);
        assert_eq!(lexicon.lookup(99), None);
        assert_eq!(lexicon.lookup(100), None);
    }

    #[test]
    fn test_is_lexicon_key() {
        assert!(is_lexicon_key(0));
        assert!(is_lexicon_key(19));
        assert!(is_lexicon_key(90));
        assert!(!is_lexicon_key(25));
        assert!(!is_lexicon_key(100));
    }

    #[test]
    fn test_missing_entry_rejected() {
        let entries = WORDS.iter().filter(|(k, _)| *k != 40).copied();
        let err = Lexicon::from_entries(entries).unwrap_err();
        assert!(matches!(err, TableError::MissingLexiconEntry { key: 40 }));
    }

    #[test]
    fn test_unexpected_entry_rejected() {
        let entries = WORDS.iter().copied().chain([(21, "twenty-one")]);
        let err = Lexicon::from_entries(entries).unwrap_err();
        assert!(matches!(err, TableError::UnexpectedLexiconEntry { key: 21 }));
    }

    #[test]
    fn test_duplicate_entry_rejected() {
        let entries = WORDS.iter().copied().chain([(7, "seven")]);
        let err = Lexicon::from_entries(entries).unwrap_err();
        assert!(matches!(err, TableError::DuplicateKey { key: 7 }));
    }

    #[test]
    fn test_blank_word_rejected() {
        let entries = WORDS
            .iter()
            .map(|&(k, w)| (k, if k == 3 { "  " } else { w }));
        let err = Lexicon::from_entries(entries).unwrap_err();
        assert!(matches!(err, TableError::EmptyWord { key: 3 }));
    }

    #[test]
    fn test_words_are_trimmed() {
        let entries = WORDS
            .iter()
            .map(|&(k, w)| (k, if k == 5 { " five " } else { w }));
        let lexicon = Lexicon::from_entries(entries).unwrap();
        assert_eq!(lexicon.lookup(5), Some("five"));
    }
}
