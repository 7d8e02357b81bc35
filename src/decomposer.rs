//! Recursive decomposition of a number into its English phrase.
//!
//! A number is spelled by one of three rules, tried in order:
//!
//! 1. a direct lexicon word (digits, teens, tens);
//! 2. below one hundred, the tens word followed by the units word;
//! 3. from one hundred up, the multiplier of its scale tier, the scale word,
//!    and the spelled remainder. Only the hundreds tier joins its remainder
//!    with "and", so "and" binds the final two digits of each group.
//!
//! Every recursive call returns a complete phrase, and any failure aborts the
//! whole translation.

use crate::errors::TranslateError;
use crate::lexicon::LexiconProvider;
use crate::phrase::Phrase;
use crate::scale::ScaleProvider;

const HUNDREDS_EXPONENT: u32 = 2;
const CONJUNCTION: &str = "and";

/// Spells numbers against borrowed, immutable word tables.
#[derive(Clone, Copy)]
pub struct Decomposer<'a> {
    lexicon: &'a dyn LexiconProvider,
    scales: &'a dyn ScaleProvider,
}

impl<'a> Decomposer<'a> {
    pub fn new(lexicon: &'a dyn LexiconProvider, scales: &'a dyn ScaleProvider) -> Self {
        Self { lexicon, scales }
    }

    /// Smallest number this decomposer refuses.
    pub fn ceiling(&self) -> u64 {
        self.scales.ceiling()
    }

    /// Spell `n` as a lower-case English phrase.
    pub fn translate(&self, n: u64) -> Result<Phrase, TranslateError> {
        self.spell(n).map(Phrase::new)
    }

    fn spell(&self, n: u64) -> Result<String, TranslateError> {
        if let Some(word) = self.lexicon.lookup(n) {
            return Ok(word.to_string());
        }
        if n < 100 {
            return self.spell_two_digits(n);
        }
        self.spell_scaled(n)
    }

    fn spell_two_digits(&self, n: u64) -> Result<String, TranslateError> {
        let units = n % 10;
        if units == 0 {
            // Multiples of ten are lexicon words; reaching here means the table is incomplete.
            return Err(TranslateError::MissingWord { value: n });
        }
        let tens = n - units;
        Ok(format!("{} {}", self.spell(tens)?, self.spell(units)?))
    }

    fn spell_scaled(&self, n: u64) -> Result<String, TranslateError> {
        let unsupported = TranslateError::UnsupportedMagnitude {
            limit: self.scales.ceiling(),
        };
        let exponent = self.scales.tier_for(n).ok_or(unsupported)?;
        let scale = 10u64
            .checked_pow(exponent)
            .ok_or(TranslateError::MissingScaleWord { exponent })?;
        let scale_word = self
            .scales
            .lookup(exponent)
            .ok_or(TranslateError::MissingScaleWord { exponent })?;

        let remainder = n % scale;
        let head = self.spell((n - remainder) / scale)?;

        if remainder == 0 {
            return Ok(format!("{head} {scale_word}"));
        }

        let tail = self.spell(remainder)?;
        if exponent == HUNDREDS_EXPONENT {
            Ok(format!("{head} {scale_word} {CONJUNCTION} {tail}"))
        } else {
            Ok(format!("{head} {scale_word} {tail}"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scale::{BoundaryPolicy, Limits};
    use crate::tables::Tables;

    fn tables(policy: BoundaryPolicy) -> Tables {
        Tables::embedded(Limits {
            policy,
            ceiling_exponent: None,
        })
        .unwrap()
    }

    fn spell(n: u64) -> String {
        let tables = tables(BoundaryPolicy::Open);
        tables.decomposer().translate(n).unwrap().into_string()
    }

    // =========================================
    // Direct lookups
    // =========================================

    #[test]
    fn test_direct_hits_match_lexicon() {
        let tables = tables(BoundaryPolicy::Open);
        let decomposer = tables.decomposer();
        for (n, word) in tables.lexicon().iter() {
            assert_eq!(decomposer.translate(n).unwrap().as_str(), word);
        }
    }

    #[test]
    fn test_zero() {
        assert_eq!(spell(0), "zero");
    }

    // =========================================
    // Two-digit composition
    // =========================================

    #[test]
    fn test_two_digit_composition() {
        assert_eq!(spell(57), "fifty seven");
        assert_eq!(spell(21), "twenty one");
        assert_eq!(spell(99), "ninety nine");
    }

    #[test]
    fn test_two_digit_composition_holds_for_every_compound() {
        let tables = tables(BoundaryPolicy::Open);
        let decomposer = tables.decomposer();
        for n in (21..100).filter(|n| n % 10 != 0) {
            let expected = format!(
                "{} {}",
                decomposer.translate(n - n % 10).unwrap(),
                decomposer.translate(n % 10).unwrap()
            );
            assert_eq!(decomposer.translate(n).unwrap().as_str(), expected);
        }
    }

    // =========================================
    // Scale tiers
    // =========================================

    #[test]
    fn test_hundreds_conjunction() {
        assert_eq!(spell(205), "two hundred and five");
        assert_eq!(spell(119), "one hundred and nineteen");
        assert_eq!(spell(999), "nine hundred and ninety nine");
    }

    #[test]
    fn test_round_hundreds_have_no_conjunction() {
        assert_eq!(spell(200), "two hundred");
        assert_eq!(spell(100), "one hundred");
    }

    #[test]
    fn test_conjunction_only_after_hundreds() {
        assert_eq!(spell(4205), "four thousand two hundred and five");
        assert_eq!(spell(1005), "one thousand five");
        assert_eq!(spell(2_000_017), "two million seventeen");
    }

    #[test]
    fn test_round_numbers_collapse() {
        assert_eq!(spell(3000), "three thousand");
        assert_eq!(spell(1_000_000), "one million");
        assert_eq!(spell(40_000_000_000), "forty billion");
    }

    #[test]
    fn test_multi_word_multiplier() {
        assert_eq!(
            spell(123_456),
            "one hundred and twenty three thousand four hundred and fifty six"
        );
        assert_eq!(spell(900_000), "nine hundred thousand");
    }

    #[test]
    fn test_skipped_groups() {
        assert_eq!(spell(1_000_001_000), "one billion one thousand");
        assert_eq!(spell(7_000_000_000_100), "seven trillion one hundred");
    }

    #[test]
    fn test_final_tier_usable_under_open_policy() {
        assert_eq!(spell(1_000_000_000_000_000), "one quadrillion");
        assert_eq!(
            spell(999_999_999_999_999_999),
            "nine hundred and ninety nine quadrillion \
             nine hundred and ninety nine trillion \
             nine hundred and ninety nine billion \
             nine hundred and ninety nine million \
             nine hundred and ninety nine thousand \
             nine hundred and ninety nine"
        );
    }

    // =========================================
    // Boundary
    // =========================================

    #[test]
    fn test_open_policy_boundary_is_crisp() {
        let tables = tables(BoundaryPolicy::Open);
        let decomposer = tables.decomposer();
        let ceiling = decomposer.ceiling();
        assert_eq!(ceiling, 1_000_000_000_000_000_000);

        assert!(decomposer.translate(ceiling - 1).is_ok());
        for n in [ceiling, ceiling + 1, u64::MAX] {
            assert_eq!(
                decomposer.translate(n),
                Err(TranslateError::UnsupportedMagnitude { limit: ceiling })
            );
        }
    }

    #[test]
    fn test_zero_width_policy_rejects_final_tier() {
        let tables = tables(BoundaryPolicy::ZeroWidth);
        let decomposer = tables.decomposer();
        let ceiling = decomposer.ceiling();
        assert_eq!(ceiling, 1_000_000_000_000_000);

        assert_eq!(
            decomposer.translate(ceiling - 1).unwrap().as_str(),
            "nine hundred and ninety nine trillion \
             nine hundred and ninety nine billion \
             nine hundred and ninety nine million \
             nine hundred and ninety nine thousand \
             nine hundred and ninety nine"
        );
        assert_eq!(
            decomposer.translate(ceiling),
            Err(TranslateError::UnsupportedMagnitude { limit: ceiling })
        );
    }

    // =========================================
    // Determinism
    // =========================================

    #[test]
    fn test_translation_is_repeatable() {
        let tables = tables(BoundaryPolicy::Open);
        let decomposer = tables.decomposer();
        let first = decomposer.translate(4205).unwrap();
        let second = decomposer.translate(4205).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_concurrent_translation_shares_tables() {
        let tables = tables(BoundaryPolicy::Open);
        let decomposer = tables.decomposer();
        let expected: Vec<String> = (0..2_000u64)
            .map(|n| decomposer.translate(n * 7919).unwrap().into_string())
            .collect();

        std::thread::scope(|scope| {
            let handles: Vec<_> = (0..4)
                .map(|_| {
                    scope.spawn(|| {
                        (0..2_000u64)
                            .map(|n| decomposer.translate(n * 7919).unwrap().into_string())
                            .collect::<Vec<_>>()
                    })
                })
                .collect();
            for handle in handles {
                assert_eq!(handle.join().unwrap(), expected);
            }
        });
    }

    // =========================================
    // Incomplete providers
    // =========================================

    struct Sparse;

    impl LexiconProvider for Sparse {
        fn lookup(&self, n: u64) -> Option<&str> {
            match n {
                1 => Some("one"),
                _ => None,
            }
        }
    }

    struct NoWords(Tables);

    impl ScaleProvider for NoWords {
        fn lookup(&self, _exponent: u32) -> Option<&str> {
            None
        }

        fn tiers(&self) -> &[crate::scale::ScaleTier] {
            self.0.scales().tiers()
        }

        fn ceiling(&self) -> u64 {
            self.0.scales().ceiling()
        }
    }

    #[test]
    fn test_missing_ten_multiple_is_reported() {
        let tables = tables(BoundaryPolicy::Open);
        let decomposer = Decomposer::new(&Sparse, tables.scales());
        assert_eq!(
            decomposer.translate(40),
            Err(TranslateError::MissingWord { value: 40 })
        );
    }

    #[test]
    fn test_missing_scale_word_is_reported() {
        let scales = NoWords(tables(BoundaryPolicy::Open));
        let decomposer = Decomposer::new(scales.0.lexicon(), &scales);
        assert_eq!(
            decomposer.translate(3000),
            Err(TranslateError::MissingScaleWord { exponent: 3 })
        );
        assert_eq!(decomposer.translate(42).unwrap().as_str(), "forty two");
    }
}
