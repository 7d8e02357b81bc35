//! Spelled-out phrases and their display formatting.

use std::fmt;

/// An English numeral phrase, lower case as produced by the decomposer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Phrase(String);

impl Phrase {
    pub(crate) fn new(text: String) -> Self {
        Self(text)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// The phrase with its first letter upper-cased, ready for display.
    pub fn capitalized(&self) -> String {
        capitalize(&self.0)
    }
}

impl fmt::Display for Phrase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Phrase {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<Phrase> for String {
    fn from(phrase: Phrase) -> Self {
        phrase.0
    }
}

/// Upper-case the first character. Blank text is returned unchanged.
pub fn capitalize(text: &str) -> String {
    if text.trim().is_empty() {
        return text.to_string();
    }
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capitalize_first_letter_only() {
        assert_eq!(
            capitalize("four thousand two hundred and five"),
            "Four thousand two hundred and five"
        );
    }

    #[test]
    fn test_capitalize_blank_unchanged() {
        assert_eq!(capitalize(""), "");
        assert_eq!(capitalize("   "), "   ");
    }

    #[test]
    fn test_capitalize_already_upper() {
        assert_eq!(capitalize("Zero"), "Zero");
    }

    #[test]
    fn test_capitalize_non_ascii() {
        assert_eq!(capitalize("élan"), "Élan");
    }

    #[test]
    fn test_phrase_display_keeps_case() {
        let phrase = Phrase::new("fifty seven".to_string());
        assert_eq!(phrase.to_string(), "fifty seven");
        assert_eq!(phrase.capitalized(), "Fifty seven");
        assert_eq!(String::from(phrase), "fifty seven");
    }
}
