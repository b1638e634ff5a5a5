//! Culture identifiers and the parent-culture hierarchy
//!
//! A [`Culture`] is a BCP 47-style locale tag (language + optional script
//! + optional region). Cultures form a rooted tree through
//! [`Culture::parent`]: `fr-CA` → `fr` → invariant, where the invariant
//! (empty-tag) culture is its own parent. That fixed point is what makes
//! every hierarchy walk terminate.

use crate::{I18nError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A culture: language plus optional script and region.
///
/// # Examples
///
/// ```
/// use lingo::Culture;
///
/// let fr_ca = Culture::parse("fr-CA").unwrap();
/// assert_eq!(fr_ca.tag(), "fr-CA");
/// assert_eq!(fr_ca.parent().tag(), "fr");
/// assert!(fr_ca.parent().parent().is_invariant());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Culture {
    /// Language code (ISO 639-1, e.g., "en", "fr", "de"); empty for the
    /// invariant culture
    pub language: String,
    /// Optional script (e.g., "Latn", "Hans")
    pub script: Option<String>,
    /// Optional region code (ISO 3166-1, e.g., "US", "CA")
    pub region: Option<String>,
}

impl Culture {
    /// Create a new culture from language and optional region.
    pub fn new(language: impl Into<String>, region: Option<impl Into<String>>) -> Self {
        Self {
            language: language.into().to_lowercase(),
            script: None,
            region: region.map(|r| r.into().to_uppercase()),
        }
    }

    /// Create a culture with a script subtag.
    pub fn with_script(
        language: impl Into<String>,
        script: Option<impl Into<String>>,
        region: Option<impl Into<String>>,
    ) -> Self {
        Self {
            language: language.into().to_lowercase(),
            region: region.map(|r| r.into().to_uppercase()),
            script: script.map(|s| {
                let s = s.into();
                // Title case for script
                let mut chars = s.chars();
                match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(|c| c.to_lowercase()))
                        .collect(),
                    None => String::new(),
                }
            }),
        }
    }

    /// The invariant culture: empty tag, root of every hierarchy.
    pub fn invariant() -> Self {
        Self {
            language: String::new(),
            script: None,
            region: None,
        }
    }

    /// Parse from a BCP 47 tag (e.g., "en-US", "zh-Hans-CN").
    ///
    /// Accepts `-` or `_` as subtag separators.
    pub fn parse(tag: &str) -> Result<Self> {
        let parts: Vec<&str> = tag.split(['-', '_']).collect();

        if parts.is_empty() || parts[0].is_empty() {
            return Err(I18nError::InvalidCulture(tag.to_string()));
        }

        let language = parts[0].to_lowercase();

        // Validate language code (2-3 letters)
        if language.len() < 2
            || language.len() > 3
            || !language.chars().all(|c| c.is_ascii_alphabetic())
        {
            return Err(I18nError::InvalidCulture(tag.to_string()));
        }

        let mut script = None;
        let mut region = None;

        for part in parts.iter().skip(1) {
            if part.len() == 4 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                // Script (4 letters, e.g., "Hans")
                let mut chars = part.chars();
                let titled: String = match chars.next() {
                    Some(first) => first
                        .to_uppercase()
                        .chain(chars.flat_map(|c| c.to_lowercase()))
                        .collect(),
                    None => String::new(),
                };
                script = Some(titled);
            } else if part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()) {
                // Region (2 letters, e.g., "US")
                region = Some(part.to_uppercase());
            } else if part.len() == 3 && part.chars().all(|c| c.is_ascii_digit()) {
                // UN M.49 code (3 digits)
                region = Some(part.to_string());
            }
        }

        Ok(Self {
            language,
            script,
            region,
        })
    }

    /// The culture tag (e.g., "en-US"); empty for the invariant culture.
    pub fn tag(&self) -> String {
        let mut tag = self.language.clone();
        if let Some(ref script) = self.script {
            tag.push('-');
            tag.push_str(script);
        }
        if let Some(ref region) = self.region {
            tag.push('-');
            tag.push_str(region);
        }
        tag
    }

    /// Whether this is the invariant (root) culture.
    pub fn is_invariant(&self) -> bool {
        self.language.is_empty()
    }

    /// The parent culture: the least-significant subtag is dropped.
    ///
    /// `zh-Hans-CN` → `zh-Hans` → `zh` → invariant. The invariant
    /// culture is its own parent, so repeated calls always reach a
    /// fixed point.
    pub fn parent(&self) -> Self {
        if self.region.is_some() {
            Self {
                language: self.language.clone(),
                script: self.script.clone(),
                region: None,
            }
        } else if self.script.is_some() {
            Self {
                language: self.language.clone(),
                script: None,
                region: None,
            }
        } else if !self.language.is_empty() {
            Self::invariant()
        } else {
            self.clone()
        }
    }

    /// Iterate from this culture up to and including the invariant root.
    ///
    /// ```
    /// use lingo::Culture;
    ///
    /// let tags: Vec<String> = Culture::parse("fr-CA")
    ///     .unwrap()
    ///     .ancestry()
    ///     .map(|c| c.tag())
    ///     .collect();
    /// assert_eq!(tags, ["fr-CA", "fr", ""]);
    /// ```
    pub fn ancestry(&self) -> impl Iterator<Item = Culture> + use<> {
        std::iter::successors(Some(self.clone()), |c| {
            if c.is_invariant() {
                None
            } else {
                Some(c.parent())
            }
        })
    }

    // Common cultures

    /// English (no region)
    pub fn en() -> Self {
        Self::new("en", None::<&str>)
    }

    /// English (US)
    pub fn en_us() -> Self {
        Self::new("en", Some("US"))
    }

    /// French (no region)
    pub fn fr() -> Self {
        Self::new("fr", None::<&str>)
    }

    /// French (Canada)
    pub fn fr_ca() -> Self {
        Self::new("fr", Some("CA"))
    }

    /// German (no region)
    pub fn de() -> Self {
        Self::new("de", None::<&str>)
    }

    /// Japanese
    pub fn ja() -> Self {
        Self::new("ja", None::<&str>)
    }
}

impl fmt::Display for Culture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Culture {
    type Err = I18nError;

    fn from_str(s: &str) -> Result<Self> {
        Culture::parse(s)
    }
}

impl Default for Culture {
    fn default() -> Self {
        Self::invariant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let en = Culture::parse("en").unwrap();
        assert_eq!(en.language, "en");
        assert!(en.region.is_none());

        let en_us = Culture::parse("en-US").unwrap();
        assert_eq!(en_us.language, "en");
        assert_eq!(en_us.region, Some("US".to_string()));

        let zh = Culture::parse("zh-Hans-CN").unwrap();
        assert_eq!(zh.language, "zh");
        assert_eq!(zh.script, Some("Hans".to_string()));
        assert_eq!(zh.region, Some("CN".to_string()));
    }

    #[test]
    fn test_parse_underscore_and_case() {
        let fr_ca = Culture::parse("FR_ca").unwrap();
        assert_eq!(fr_ca.tag(), "fr-CA");
    }

    #[test]
    fn test_parse_invalid() {
        assert!(Culture::parse("").is_err());
        assert!(Culture::parse("x").is_err());
        assert!(Culture::parse("1234").is_err());
    }

    #[test]
    fn test_parent_chain() {
        let zh = Culture::parse("zh-Hans-CN").unwrap();
        assert_eq!(zh.parent().tag(), "zh-Hans");
        assert_eq!(zh.parent().parent().tag(), "zh");
        assert!(zh.parent().parent().parent().is_invariant());
    }

    #[test]
    fn test_invariant_is_own_parent() {
        let root = Culture::invariant();
        assert_eq!(root.parent(), root);
        assert_eq!(root.tag(), "");
    }

    #[test]
    fn test_ancestry_terminates() {
        let chain: Vec<Culture> = Culture::fr_ca().ancestry().collect();
        assert_eq!(chain.len(), 3);
        assert_eq!(chain[0], Culture::fr_ca());
        assert_eq!(chain[1], Culture::fr());
        assert!(chain[2].is_invariant());

        let root_chain: Vec<Culture> = Culture::invariant().ancestry().collect();
        assert_eq!(root_chain.len(), 1);
    }

    #[test]
    fn test_display_roundtrip() {
        let c = Culture::with_script("zh", Some("hans"), Some("cn"));
        assert_eq!(c.to_string(), "zh-Hans-CN");
        assert_eq!("zh-Hans-CN".parse::<Culture>().unwrap(), c);
    }
}
