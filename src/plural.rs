//! Plural rules
//!
//! Different languages have different numbers of grammatical plural
//! forms: English has 2, Russian and Polish 3, Arabic and Welsh 6, and
//! Japanese only 1. A [`PluralRule`] maps a quantity to the zero-based
//! index of the form to use; a dictionary stores the forms for each
//! message in that index order (index 0 is the singular / default form).
//!
//! Rules are injected: a [`PluralRuleResolver`] supplies the rule when a
//! dictionary is built, and the resolution engine only ever reads the
//! rule embedded in the dictionary. [`CommonRules`] covers the major
//! rule families; hosts with unusual locales supply their own resolver.

use crate::Culture;
use std::fmt;
use std::sync::Arc;

/// A pluralization rule: quantity → zero-based plural-form index.
///
/// Cheap to clone (shared function pointer).
///
/// # Examples
///
/// ```
/// use lingo::PluralRule;
///
/// let english = PluralRule::one_other();
/// assert_eq!(english.index(1), 0);
/// assert_eq!(english.index(5), 1);
/// ```
#[derive(Clone)]
pub struct PluralRule(Arc<dyn Fn(u64) -> usize + Send + Sync>);

impl PluralRule {
    /// Wrap an arbitrary count → index function.
    pub fn new(rule: impl Fn(u64) -> usize + Send + Sync + 'static) -> Self {
        Self(Arc::new(rule))
    }

    /// The form index for a quantity.
    pub fn index(&self, count: u64) -> usize {
        (self.0)(count)
    }

    /// The Germanic/English default: `1` is singular, everything else
    /// plural.
    pub fn one_other() -> Self {
        Self::new(|n| if n == 1 { 0 } else { 1 })
    }
}

impl fmt::Debug for PluralRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("PluralRule(..)")
    }
}

/// Maps a culture to its pluralization rule.
///
/// Returning `None` means no rule is known for that culture; pluralized
/// lookups against such a dictionary degrade to "not found" for that
/// fallback tier instead of failing.
pub trait PluralRuleResolver: Send + Sync {
    /// The rule for a culture, if one is known.
    fn rule_for(&self, culture: &Culture) -> Option<PluralRule>;
}

/// Built-in rules for the major plural-rule families.
///
/// Unlisted languages get the Germanic one/other default; the invariant
/// culture has no grammar and resolves to `None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CommonRules;

impl PluralRuleResolver for CommonRules {
    fn rule_for(&self, culture: &Culture) -> Option<PluralRule> {
        let rule = match culture.language.as_str() {
            // Invariant culture: no grammar, no rule
            "" => return None,

            // East Asian languages: a single form
            "ja" | "ko" | "zh" | "vi" | "th" | "id" | "ms" => PluralRule::new(|_| 0),

            // French-style: 0 and 1 are singular
            "fr" | "pt" | "tr" => PluralRule::new(|n| if n <= 1 { 0 } else { 1 }),

            // East Slavic: one / few / many
            "ru" | "uk" | "be" => PluralRule::new(|n| {
                let m10 = n % 10;
                let m100 = n % 100;
                if m10 == 1 && m100 != 11 {
                    0
                } else if (2..=4).contains(&m10) && !(12..=14).contains(&m100) {
                    1
                } else {
                    2
                }
            }),

            // Polish: one / few / many
            "pl" => PluralRule::new(|n| {
                let m10 = n % 10;
                let m100 = n % 100;
                if n == 1 {
                    0
                } else if (2..=4).contains(&m10) && !(12..=14).contains(&m100) {
                    1
                } else {
                    2
                }
            }),

            // Czech, Slovak: one / few / other
            "cs" | "sk" => PluralRule::new(|n| match n {
                1 => 0,
                2..=4 => 1,
                _ => 2,
            }),

            // Welsh: zero / one / two / few / many / other
            "cy" => PluralRule::new(|n| match n {
                0 => 0,
                1 => 1,
                2 => 2,
                3 => 3,
                6 => 4,
                _ => 5,
            }),

            // Arabic: zero / one / two / few / many / other
            "ar" => PluralRule::new(|n| {
                let m100 = n % 100;
                match n {
                    0 => 0,
                    1 => 1,
                    2 => 2,
                    _ if (3..=10).contains(&m100) => 3,
                    _ if (11..=99).contains(&m100) => 4,
                    _ => 5,
                }
            }),

            // Germanic, most Romance, and everything else
            _ => PluralRule::one_other(),
        };

        Some(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rule(tag: &str) -> PluralRule {
        CommonRules
            .rule_for(&Culture::parse(tag).unwrap())
            .unwrap()
    }

    #[test]
    fn test_english() {
        let en = rule("en");
        assert_eq!(en.index(0), 1);
        assert_eq!(en.index(1), 0);
        assert_eq!(en.index(2), 1);
        assert_eq!(en.index(100), 1);
    }

    #[test]
    fn test_french() {
        let fr = rule("fr");
        assert_eq!(fr.index(0), 0);
        assert_eq!(fr.index(1), 0);
        assert_eq!(fr.index(2), 1);
    }

    #[test]
    fn test_region_does_not_change_rule() {
        let fr_ca = rule("fr-CA");
        assert_eq!(fr_ca.index(0), 0);
        assert_eq!(fr_ca.index(2), 1);
    }

    #[test]
    fn test_japanese() {
        let ja = rule("ja");
        assert_eq!(ja.index(0), 0);
        assert_eq!(ja.index(1), 0);
        assert_eq!(ja.index(100), 0);
    }

    #[test]
    fn test_russian() {
        let ru = rule("ru");
        assert_eq!(ru.index(1), 0);
        assert_eq!(ru.index(21), 0);
        assert_eq!(ru.index(2), 1);
        assert_eq!(ru.index(22), 1);
        assert_eq!(ru.index(5), 2);
        assert_eq!(ru.index(11), 2);
        assert_eq!(ru.index(25), 2);
    }

    #[test]
    fn test_polish() {
        let pl = rule("pl");
        assert_eq!(pl.index(1), 0);
        assert_eq!(pl.index(2), 1);
        assert_eq!(pl.index(22), 1);
        assert_eq!(pl.index(5), 2);
        assert_eq!(pl.index(12), 2);
        assert_eq!(pl.index(21), 2);
    }

    #[test]
    fn test_arabic() {
        let ar = rule("ar");
        assert_eq!(ar.index(0), 0);
        assert_eq!(ar.index(1), 1);
        assert_eq!(ar.index(2), 2);
        assert_eq!(ar.index(5), 3);
        assert_eq!(ar.index(11), 4);
        assert_eq!(ar.index(100), 5);
    }

    #[test]
    fn test_invariant_has_no_rule() {
        assert!(CommonRules.rule_for(&Culture::invariant()).is_none());
    }
}
