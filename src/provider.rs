//! Dictionary providers
//!
//! The [`DictionaryProvider`] trait is the engine's sole data-fetch
//! boundary: given a culture, hand back its dictionary (or `None`). The
//! engine calls it once per fallback tier, so implementations must be
//! cheap to call repeatedly; caching is the provider's concern, not the
//! engine's.
//!
//! [`MemoryProvider`] is the bundled implementation: a thread-safe
//! in-memory registry that can also be filled from a directory of
//! per-culture JSON files.

use crate::plural::PluralRuleResolver;
use crate::{Culture, CultureDictionary, I18nError, Result};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use std::sync::Arc;

/// Supplies the dictionary for a culture.
///
/// Each call returns one consistent, immutable snapshot; concurrent
/// updates behind the provider never mutate a dictionary the engine is
/// already holding.
pub trait DictionaryProvider: Send + Sync {
    /// The dictionary for `culture`, or `None` when no data exists.
    fn dictionary(&self, culture: &Culture) -> Option<Arc<CultureDictionary>>;
}

/// In-memory dictionary registry keyed by culture tag.
///
/// Dictionaries are frozen into `Arc`s on insert; replacing one swaps
/// the map entry without disturbing readers of the old snapshot.
#[derive(Debug, Default)]
pub struct MemoryProvider {
    dictionaries: RwLock<HashMap<String, Arc<CultureDictionary>>>,
}

impl MemoryProvider {
    /// Create an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a dictionary, replacing any previous one for its
    /// culture.
    pub fn insert(&self, dictionary: CultureDictionary) {
        let tag = dictionary.culture().tag();
        self.dictionaries.write().insert(tag, Arc::new(dictionary));
    }

    /// Load every `<culture-tag>.json` file in a directory.
    ///
    /// The file stem names the culture (`en.json`, `fr-CA.json`, ...);
    /// plural rules are attached from `rules`.
    pub fn load_from_dir(
        &self,
        dir: impl AsRef<Path>,
        rules: &dyn PluralRuleResolver,
    ) -> Result<()> {
        let dir = dir.as_ref();

        if !dir.exists() {
            return Err(I18nError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("directory not found: {:?}", dir),
            )));
        }

        for entry in fs::read_dir(dir)? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().is_some_and(|ext| ext == "json") {
                let stem = path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .ok_or_else(|| I18nError::ParseError("invalid file name".to_string()))?;

                let culture = Culture::parse(stem)?;
                let rule = rules.rule_for(&culture);
                let content = fs::read_to_string(&path)?;
                let dictionary = CultureDictionary::from_json(culture, &content, rule)?;

                self.insert(dictionary);
            }
        }

        Ok(())
    }

    /// Number of registered cultures.
    pub fn len(&self) -> usize {
        self.dictionaries.read().len()
    }

    /// Whether no dictionaries are registered.
    pub fn is_empty(&self) -> bool {
        self.dictionaries.read().is_empty()
    }
}

impl DictionaryProvider for MemoryProvider {
    fn dictionary(&self, culture: &Culture) -> Option<Arc<CultureDictionary>> {
        self.dictionaries.read().get(&culture.tag()).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plural::CommonRules;

    #[test]
    fn test_insert_and_fetch() {
        let provider = MemoryProvider::new();
        let mut dict = CultureDictionary::new(Culture::fr(), None);
        dict.add("hello", None, vec!["Bonjour!".into()]);
        provider.insert(dict);

        let fetched = provider.dictionary(&Culture::fr()).unwrap();
        assert_eq!(fetched.culture(), &Culture::fr());
        assert!(provider.dictionary(&Culture::de()).is_none());
    }

    #[test]
    fn test_insert_replaces_snapshot() {
        let provider = MemoryProvider::new();
        provider.insert(CultureDictionary::new(Culture::en(), None));

        let old = provider.dictionary(&Culture::en()).unwrap();

        let mut updated = CultureDictionary::new(Culture::en(), None);
        updated.add("hello", None, vec!["Hello!".into()]);
        provider.insert(updated);

        // The old snapshot is unchanged; the registry serves the new one.
        assert!(old.is_empty());
        assert_eq!(provider.dictionary(&Culture::en()).unwrap().len(), 1);
    }

    #[test]
    fn test_load_from_dir() {
        let dir = std::env::temp_dir().join("lingo-provider-test");
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("en.json"), r#"{"hello": "Hello!"}"#).unwrap();
        fs::write(dir.join("fr-CA.json"), r#"{"hello": "Allô!"}"#).unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let provider = MemoryProvider::new();
        provider.load_from_dir(&dir, &CommonRules).unwrap();

        assert_eq!(provider.len(), 2);
        assert!(provider.dictionary(&Culture::fr_ca()).is_some());
        assert!(provider.dictionary(&Culture::fr()).is_none());

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_from_missing_dir() {
        let provider = MemoryProvider::new();
        let err = provider
            .load_from_dir("/nonexistent/lingo-locales", &CommonRules)
            .unwrap_err();
        assert!(matches!(err, I18nError::IoError(_)));
    }
}
