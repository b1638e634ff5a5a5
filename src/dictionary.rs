//! Per-culture translation dictionaries
//!
//! A [`CultureDictionary`] is the complete translation table for exactly
//! one culture: composite key → ordered plural forms, plus the culture's
//! plural rule. Dictionaries are populated while exclusively owned (by a
//! provider or a loader) and shared read-only afterwards; the resolution
//! engine never mutates one.

use crate::plural::PluralRule;
use crate::{Culture, I18nError, Result, TranslationKey};
use std::collections::HashMap;

/// The translation table for a single culture.
///
/// # Examples
///
/// ```
/// use lingo::{Culture, CultureDictionary, PluralRule, TranslationKey};
///
/// let mut dict = CultureDictionary::new(Culture::en(), Some(PluralRule::one_other()));
/// dict.add("hello", None, vec!["Hello!".to_string()]);
///
/// let key = TranslationKey::new("hello", None);
/// assert_eq!(dict.get(&key), Some(&["Hello!".to_string()][..]));
/// ```
#[derive(Debug, Clone)]
pub struct CultureDictionary {
    culture: Culture,
    rule: Option<PluralRule>,
    entries: HashMap<TranslationKey, Vec<String>>,
}

impl CultureDictionary {
    /// Create an empty dictionary for a culture.
    pub fn new(culture: Culture, rule: Option<PluralRule>) -> Self {
        Self {
            culture,
            rule,
            entries: HashMap::new(),
        }
    }

    /// Parse a dictionary from a JSON object.
    ///
    /// Values may be:
    /// - a string — a single translation,
    /// - an array of strings — the plural forms in index order,
    /// - an object — a context block whose members are translations
    ///   disambiguated by that context.
    ///
    /// ```
    /// use lingo::{CommonRules, Culture, CultureDictionary, PluralRuleResolver, TranslationKey};
    ///
    /// let json = r#"{
    ///     "hello": "Hello!",
    ///     "cart.items": ["You have {0} item", "You have {0} items"],
    ///     "menu": { "open": "Open recent" }
    /// }"#;
    ///
    /// let culture = Culture::en();
    /// let rule = CommonRules.rule_for(&culture);
    /// let dict = CultureDictionary::from_json(culture, json, rule).unwrap();
    /// assert_eq!(dict.len(), 3);
    /// assert!(dict.get(&TranslationKey::new("open", Some("menu"))).is_some());
    /// ```
    pub fn from_json(culture: Culture, json: &str, rule: Option<PluralRule>) -> Result<Self> {
        let data: HashMap<String, serde_json::Value> = serde_json::from_str(json)?;
        let mut dict = Self::new(culture, rule);

        for (name, value) in data {
            match value {
                serde_json::Value::String(s) => {
                    dict.add(&name, None, vec![s]);
                }
                serde_json::Value::Array(items) => {
                    let forms = Self::string_forms(&name, items)?;
                    dict.add(&name, None, forms);
                }
                serde_json::Value::Object(block) => {
                    // Context block: entries disambiguated by `name`
                    for (inner, entry) in block {
                        match entry {
                            serde_json::Value::String(s) => {
                                dict.add(&inner, Some(&name), vec![s]);
                            }
                            serde_json::Value::Array(items) => {
                                let forms = Self::string_forms(&inner, items)?;
                                dict.add(&inner, Some(&name), forms);
                            }
                            other => {
                                return Err(I18nError::ParseError(format!(
                                    "entry '{}' in context '{}' must be a string or array, got {}",
                                    inner, name, other
                                )));
                            }
                        }
                    }
                }
                other => {
                    return Err(I18nError::ParseError(format!(
                        "entry '{}' must be a string, array, or context object, got {}",
                        name, other
                    )));
                }
            }
        }

        Ok(dict)
    }

    fn string_forms(name: &str, items: Vec<serde_json::Value>) -> Result<Vec<String>> {
        items
            .into_iter()
            .map(|v| match v {
                serde_json::Value::String(s) => Ok(s),
                other => Err(I18nError::ParseError(format!(
                    "plural form of '{}' must be a string, got {}",
                    name, other
                ))),
            })
            .collect()
    }

    /// Add an entry. An empty form list is ignored: every stored entry
    /// has at least one form.
    pub fn add(&mut self, name: &str, context: Option<&str>, forms: Vec<String>) {
        if forms.is_empty() {
            return;
        }
        self.entries.insert(TranslationKey::new(name, context), forms);
    }

    /// The plural forms for a key, in index order.
    pub fn get(&self, key: &TranslationKey) -> Option<&[String]> {
        self.entries.get(key).map(|forms| forms.as_slice())
    }

    /// The culture this dictionary belongs to.
    pub fn culture(&self) -> &Culture {
        &self.culture
    }

    /// The culture's plural rule, if one is known.
    pub fn rule(&self) -> Option<&PluralRule> {
        self.rule.as_ref()
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate all entries as (key, forms).
    pub fn entries(&self) -> impl Iterator<Item = (&TranslationKey, &[String])> {
        self.entries.iter().map(|(k, v)| (k, v.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plural::{CommonRules, PluralRuleResolver};

    #[test]
    fn test_add_and_get() {
        let mut dict = CultureDictionary::new(Culture::en(), Some(PluralRule::one_other()));
        dict.add("hello", None, vec!["Hello!".into()]);
        dict.add("hello", Some("formal"), vec!["Good day!".into()]);

        assert_eq!(
            dict.get(&TranslationKey::new("hello", None)),
            Some(&["Hello!".to_string()][..])
        );
        assert_eq!(
            dict.get(&TranslationKey::new("hello", Some("formal"))),
            Some(&["Good day!".to_string()][..])
        );
        assert!(dict.get(&TranslationKey::new("missing", None)).is_none());
    }

    #[test]
    fn test_empty_forms_ignored() {
        let mut dict = CultureDictionary::new(Culture::en(), None);
        dict.add("hollow", None, vec![]);
        assert!(dict.is_empty());
    }

    #[test]
    fn test_from_json() {
        let json = r#"{
            "hello": "Hallo!",
            "cart.items": ["{0} Artikel", "{0} Artikel"],
            "menu": {
                "open": "Zuletzt verwendet",
                "close": ["Schließen", "Alle schließen"]
            }
        }"#;

        let culture = Culture::de();
        let rule = CommonRules.rule_for(&culture);
        let dict = CultureDictionary::from_json(culture, json, rule).unwrap();

        assert_eq!(dict.len(), 4);
        assert_eq!(
            dict.get(&TranslationKey::new("hello", None)),
            Some(&["Hallo!".to_string()][..])
        );
        assert_eq!(
            dict.get(&TranslationKey::new("open", Some("menu"))),
            Some(&["Zuletzt verwendet".to_string()][..])
        );
        assert_eq!(
            dict.get(&TranslationKey::new("close", Some("menu")))
                .map(|f| f.len()),
            Some(2)
        );
    }

    #[test]
    fn test_from_json_rejects_bad_shapes() {
        assert!(CultureDictionary::from_json(Culture::en(), r#"{"n": 3}"#, None).is_err());
        assert!(CultureDictionary::from_json(Culture::en(), r#"{"n": ["a", 3]}"#, None).is_err());
        assert!(CultureDictionary::from_json(Culture::en(), r#"not json"#, None).is_err());
    }

    #[test]
    fn test_entries_iteration() {
        let mut dict = CultureDictionary::new(Culture::fr(), None);
        dict.add("a", None, vec!["un".into()]);
        dict.add("b", None, vec!["deux".into()]);

        let mut names: Vec<&str> = dict.entries().map(|(k, _)| k.name()).collect();
        names.sort_unstable();
        assert_eq!(names, ["a", "b"]);
    }
}
