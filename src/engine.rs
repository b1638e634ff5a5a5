//! The resolution engine
//!
//! [`Translator`] resolves a message name (optionally disambiguated by
//! context, optionally pluralized by a count) against the dictionaries a
//! [`DictionaryProvider`] serves, walking a fixed, bounded sequence of
//! fallback tiers:
//!
//! 1. exact context, requested culture
//! 2. exact context, each ancestor culture up to the invariant root
//! 3. no context, requested culture
//! 4. no context, each ancestor culture up to the invariant root
//!
//! The parent-culture tiers (2 and 4) are skipped when parent fallback
//! is disabled at construction. A miss on every tier is a normal,
//! representable outcome: the result carries `not_found = true` and
//! echoes the name as display text. The engine holds no mutable state
//! and is freely shareable across threads.

use crate::format::format_positional;
use crate::plural::PluralRule;
use crate::provider::DictionaryProvider;
use crate::{Culture, Result, TranslationKey};
use std::collections::HashSet;
use std::sync::Arc;

/// Receives the engine's diagnostic events.
///
/// Injected at construction so the engine never depends on global
/// logging state; the default sink ([`NoopDiagnostics`]) drops
/// everything. All methods default to no-ops.
pub trait Diagnostics: Send + Sync {
    /// A plural rule selected a form index beyond the supplied forms;
    /// the engine clamps to the last form.
    fn plural_form_overflow(&self, key: &str, index: usize, forms: &[String]) {
        let _ = (key, index, forms);
    }

    /// A pluralized lookup hit a dictionary whose culture has no known
    /// plural rule; that tier degrades to not-found.
    fn plural_rule_missing(&self, culture: &Culture) {
        let _ = culture;
    }
}

/// Discards all diagnostics. The default sink.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopDiagnostics;

impl Diagnostics for NoopDiagnostics {}

/// Forwards diagnostics to the `tracing` facade as warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn plural_form_overflow(&self, key: &str, index: usize, forms: &[String]) {
        tracing::warn!(
            key,
            index,
            forms = ?forms,
            "plural rule selected a form index beyond the supplied forms, clamping to last"
        );
    }

    fn plural_rule_missing(&self, culture: &Culture) {
        tracing::warn!(culture = %culture, "no plural rule known for culture");
    }
}

/// A translation lookup, tagged by shape at the call site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LookupRequest {
    /// Plain lookup; arguments pass through to formatting unchanged.
    Simple {
        /// Message name
        name: String,
        /// Optional disambiguation context
        context: Option<String>,
        /// Positional formatting arguments
        arguments: Vec<String>,
    },
    /// Pluralized lookup.
    Plural {
        /// Message name
        name: String,
        /// Optional disambiguation context
        context: Option<String>,
        /// Quantity driving plural-form selection
        count: u64,
        /// Caller-supplied literal plural forms, used as the last
        /// resort when every dictionary tier misses
        forms: Vec<String>,
        /// Positional arguments following the count
        extra_arguments: Vec<String>,
    },
}

impl LookupRequest {
    /// A plain lookup with no context or arguments.
    pub fn simple(name: impl Into<String>) -> Self {
        Self::Simple {
            name: name.into(),
            context: None,
            arguments: Vec::new(),
        }
    }

    /// A pluralized lookup. `forms` may be empty when the caller has no
    /// inline defaults.
    pub fn plural(name: impl Into<String>, count: u64, forms: Vec<String>) -> Self {
        Self::Plural {
            name: name.into(),
            context: None,
            count,
            forms,
            extra_arguments: Vec::new(),
        }
    }

    /// Set the disambiguation context.
    pub fn with_context(mut self, ctx: impl Into<String>) -> Self {
        match &mut self {
            Self::Simple { context, .. } | Self::Plural { context, .. } => {
                *context = Some(ctx.into());
            }
        }
        self
    }

    /// Set the positional arguments (for a pluralized lookup, the
    /// arguments following the count).
    pub fn with_arguments(mut self, args: Vec<String>) -> Self {
        match &mut self {
            Self::Simple { arguments, .. } => *arguments = args,
            Self::Plural {
                extra_arguments, ..
            } => *extra_arguments = args,
        }
        self
    }
}

/// The outcome of a lookup.
///
/// `text` is never empty for a non-empty name: a missing translation
/// echoes the name back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The requested message name
    pub name: String,
    /// The resolved text (the name itself when not found)
    pub text: String,
    /// Whether every fallback tier missed
    pub not_found: bool,
}

/// A formatted translation: the resolution plus the final positional
/// argument list that was substituted into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Translation {
    /// The underlying resolution, with `text` already formatted
    pub resolution: Resolution,
    /// The final arguments; for pluralized lookups the count is always
    /// the first entry
    pub arguments: Vec<String>,
}

impl Translation {
    /// The formatted display text.
    pub fn text(&self) -> &str {
        &self.resolution.text
    }
}

/// The resolution engine.
///
/// Stateless apart from its configuration; all mutable state lives
/// behind the provider. Safe for unlimited concurrent use.
///
/// # Examples
///
/// ```
/// use lingo::{Culture, CultureDictionary, MemoryProvider, PluralRule, Translator};
/// use std::sync::Arc;
///
/// let provider = MemoryProvider::new();
/// let mut en = CultureDictionary::new(Culture::en(), Some(PluralRule::one_other()));
/// en.add("greeting", None, vec!["Hello!".to_string()]);
/// provider.insert(en);
///
/// let translator = Translator::new(Arc::new(provider));
/// let resolved = translator
///     .resolve("greeting", None, &Culture::en_us())
///     .unwrap();
/// assert_eq!(resolved.text, "Hello!");
/// assert!(!resolved.not_found);
/// ```
pub struct Translator {
    provider: Arc<dyn DictionaryProvider>,
    diagnostics: Arc<dyn Diagnostics>,
    fallback_to_parent: bool,
}

impl Translator {
    /// Create an engine over a provider. Parent-culture fallback is on
    /// and diagnostics are discarded; see [`with_parent_fallback`] and
    /// [`with_diagnostics`].
    ///
    /// [`with_parent_fallback`]: Translator::with_parent_fallback
    /// [`with_diagnostics`]: Translator::with_diagnostics
    pub fn new(provider: Arc<dyn DictionaryProvider>) -> Self {
        Self {
            provider,
            diagnostics: Arc::new(NoopDiagnostics),
            fallback_to_parent: true,
        }
    }

    /// Enable or disable the parent-culture fallback tiers.
    pub fn with_parent_fallback(mut self, enabled: bool) -> Self {
        self.fallback_to_parent = enabled;
        self
    }

    /// Install a diagnostics sink.
    pub fn with_diagnostics(mut self, diagnostics: Arc<dyn Diagnostics>) -> Self {
        self.diagnostics = diagnostics;
        self
    }

    /// Resolve a message name without pluralization.
    ///
    /// Fails only for an empty/blank name; a missing translation is
    /// reported through [`Resolution::not_found`].
    pub fn resolve(
        &self,
        name: &str,
        context: Option<&str>,
        culture: &Culture,
    ) -> Result<Resolution> {
        self.resolve_counted(name, context, None, culture)
    }

    /// Resolve and format a [`LookupRequest`].
    ///
    /// For a pluralized request the returned argument list is always
    /// `[count, extra...]`, whichever tier supplied the template, and a
    /// miss on every dictionary tier falls back to the caller's literal
    /// forms (when given) before echoing the bare name.
    pub fn translate(&self, request: &LookupRequest, culture: &Culture) -> Result<Translation> {
        match request {
            LookupRequest::Simple {
                name,
                context,
                arguments,
            } => {
                let mut resolution = self.resolve(name, context.as_deref(), culture)?;
                resolution.text = format_positional(&resolution.text, arguments);
                Ok(Translation {
                    resolution,
                    arguments: arguments.clone(),
                })
            }
            LookupRequest::Plural {
                name,
                context,
                count,
                forms,
                extra_arguments,
            } => {
                let mut resolution =
                    self.resolve_counted(name, context.as_deref(), Some(*count), culture)?;

                // Literal forms are a culture-agnostic last resort: one
                // global tier, no hierarchy walk of its own.
                if resolution.not_found && !forms.is_empty() {
                    let rule = self
                        .first_rule(culture)
                        .unwrap_or_else(PluralRule::one_other);
                    resolution.text = self
                        .select_form(name, forms, Some(&rule), Some(*count), culture)
                        .unwrap_or_else(|| name.to_string());
                }

                let mut arguments = Vec::with_capacity(1 + extra_arguments.len());
                arguments.push(count.to_string());
                arguments.extend(extra_arguments.iter().cloned());

                resolution.text = format_positional(&resolution.text, &arguments);
                Ok(Translation {
                    resolution,
                    arguments,
                })
            }
        }
    }

    /// Every (name, text) pair visible from a culture.
    ///
    /// With `include_ancestors`, the walk continues up to the invariant
    /// root and an ancestor never overrides a key already seen in a
    /// more specific culture; without it, only the culture's own
    /// dictionary is enumerated. The text is each entry's first plural
    /// form. The sequence is computed fresh on every call.
    pub fn all_strings<'a>(
        &'a self,
        culture: &Culture,
        include_ancestors: bool,
    ) -> impl Iterator<Item = (String, String)> + use<'a> {
        let chain: Vec<Culture> = if include_ancestors {
            culture.ancestry().collect()
        } else {
            vec![culture.clone()]
        };

        let mut seen: HashSet<TranslationKey> = HashSet::new();

        chain
            .into_iter()
            .filter_map(move |c| self.provider.dictionary(&c))
            .flat_map(|dict| {
                dict.entries()
                    .map(|(key, forms)| {
                        let text = forms.first().cloned().unwrap_or_default();
                        (key.clone(), text)
                    })
                    .collect::<Vec<_>>()
            })
            .filter(move |(key, _)| seen.insert(key.clone()))
            .map(|(key, text)| (key.name().to_string(), text))
    }

    /// Walk the fallback tiers for a (name, context, count) lookup.
    fn resolve_counted(
        &self,
        name: &str,
        context: Option<&str>,
        count: Option<u64>,
        culture: &Culture,
    ) -> Result<Resolution> {
        if name.trim().is_empty() {
            return Err(crate::I18nError::EmptyName);
        }

        // (name, "") and (name, None) are the same lookup.
        let context = context.filter(|c| !c.is_empty());

        let chain: Vec<Culture> = if self.fallback_to_parent {
            culture.ancestry().collect()
        } else {
            vec![culture.clone()]
        };

        // Exact context through the whole hierarchy first, then the
        // context-less retry; never the other way around.
        let mut contexts = vec![context];
        if context.is_some() {
            contexts.push(None);
        }

        for ctx in contexts {
            let key = TranslationKey::new(name, ctx);
            for tier_culture in &chain {
                let Some(dict) = self.provider.dictionary(tier_culture) else {
                    continue;
                };
                let Some(forms) = dict.get(&key) else {
                    continue;
                };
                if let Some(text) =
                    self.select_form(key.as_str(), forms, dict.rule(), count, dict.culture())
                {
                    return Ok(Resolution {
                        name: name.to_string(),
                        text,
                        not_found: false,
                    });
                }
                // Rule missing for this tier; keep walking.
            }
        }

        Ok(Resolution {
            name: name.to_string(),
            text: name.to_string(),
            not_found: true,
        })
    }

    /// Pick a plural form from a form list.
    ///
    /// No count selects index 0. An index past the end of the list is a
    /// data inconsistency: clamp to the last form and report it, rather
    /// than failing. A counted lookup with no rule returns `None` so
    /// the tier degrades to not-found.
    fn select_form(
        &self,
        key: &str,
        forms: &[String],
        rule: Option<&PluralRule>,
        count: Option<u64>,
        culture: &Culture,
    ) -> Option<String> {
        let index = match count {
            None => 0,
            Some(n) => match rule {
                Some(r) => r.index(n),
                None => {
                    self.diagnostics.plural_rule_missing(culture);
                    return None;
                }
            },
        };

        if index < forms.len() {
            Some(forms[index].clone())
        } else {
            self.diagnostics.plural_form_overflow(key, index, forms);
            forms.last().cloned()
        }
    }

    /// The first plural rule found along the culture chain, for
    /// selecting among caller-supplied literal forms.
    fn first_rule(&self, culture: &Culture) -> Option<PluralRule> {
        let chain: Vec<Culture> = if self.fallback_to_parent {
            culture.ancestry().collect()
        } else {
            vec![culture.clone()]
        };

        chain
            .iter()
            .find_map(|c| self.provider.dictionary(c).and_then(|d| d.rule().cloned()))
    }
}
