//! Hierarchical Translation Resolution
//!
//! `lingo` resolves a message name — optionally disambiguated by a
//! context tag and optionally pluralized by a quantity — against
//! per-culture translation dictionaries:
//!
//! - **Deterministic fallback**: exact context before no context, each
//!   culture before its parent, always terminating at the invariant
//!   root. A missing translation is a flagged result that echoes the
//!   name, never an error or an empty string.
//! - **Plural-form selection**: a per-culture rule maps a count to a
//!   grammatical form index (2 forms for English, 3 for Russian, 6 for
//!   Arabic); an out-of-range index clamps to the last form.
//! - **Context disambiguation**: the same name can translate
//!   differently per usage site via composite keys.
//! - **Hierarchy enumeration**: every string visible from a culture,
//!   ancestors filling gaps, child values winning.
//!
//! # Quick Start
//!
//! ```
//! use lingo::{
//!     Culture, CultureDictionary, LookupRequest, MemoryProvider, PluralRule, Translator,
//! };
//! use std::sync::Arc;
//!
//! let provider = MemoryProvider::new();
//!
//! let mut en = CultureDictionary::new(Culture::en(), Some(PluralRule::one_other()));
//! en.add("hello", None, vec!["Hello!".to_string()]);
//! en.add(
//!     "cart.items",
//!     None,
//!     vec![
//!         "You have {0} item".to_string(),
//!         "You have {0} items".to_string(),
//!     ],
//! );
//! provider.insert(en);
//!
//! let translator = Translator::new(Arc::new(provider));
//!
//! // Simple lookup; en-US falls back to en.
//! let hello = translator.resolve("hello", None, &Culture::en_us()).unwrap();
//! assert_eq!(hello.text, "Hello!");
//!
//! // Pluralized lookup with the count spliced in as argument {0}.
//! let cart = translator
//!     .translate(&LookupRequest::plural("cart.items", 5, vec![]), &Culture::en())
//!     .unwrap();
//! assert_eq!(cart.text(), "You have 5 items");
//! ```
//!
//! # Loading dictionaries from JSON
//!
//! ```rust,ignore
//! use lingo::{CommonRules, MemoryProvider};
//!
//! // locales/en.json, locales/fr.json, locales/fr-CA.json, ...
//! let provider = MemoryProvider::new();
//! provider.load_from_dir("locales/", &CommonRules)?;
//! ```
//!
//! # Collaborators
//!
//! Dictionary storage and plural grammar are injected, not built in:
//! implement [`DictionaryProvider`] to serve dictionaries from any
//! source, and [`PluralRuleResolver`] to supply rules beyond the
//! [`CommonRules`] families. Diagnostics are likewise injected — the
//! engine defaults to a no-op sink and never touches global logging
//! state; install [`TracingDiagnostics`] to surface warnings through
//! `tracing`.

mod culture;
mod dictionary;
mod engine;
mod error;
mod format;
mod key;
mod plural;
mod provider;

pub use culture::Culture;
pub use dictionary::CultureDictionary;
pub use engine::{
    Diagnostics, LookupRequest, NoopDiagnostics, Resolution, TracingDiagnostics, Translation,
    Translator,
};
pub use error::I18nError;
pub use format::format_positional;
pub use key::{TranslationKey, CONTEXT_SEPARATOR};
pub use plural::{CommonRules, PluralRule, PluralRuleResolver};
pub use provider::{DictionaryProvider, MemoryProvider};

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, I18nError>;

/// Prelude for common imports
pub mod prelude {
    pub use crate::{
        CommonRules, Culture, CultureDictionary, DictionaryProvider, I18nError, LookupRequest,
        MemoryProvider, PluralRule, PluralRuleResolver, Resolution, Result, Translation,
        Translator,
    };
}
