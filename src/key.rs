//! Composite translation keys
//!
//! A dictionary entry is addressed by a [`TranslationKey`] composed from
//! a message name and an optional disambiguation context. Context and
//! name are joined with U+0004 (the gettext `msgctxt` separator), a
//! control character that never appears in real message names, so the
//! composition is injective and can be decomposed for display.

use std::borrow::Cow;
use std::fmt;

/// Separator between context and name inside a composite key.
///
/// Same convention as gettext message catalogs, where a contexted entry
/// is stored as `msgctxt\u{4}msgid`.
pub const CONTEXT_SEPARATOR: char = '\u{0004}';

/// A composite dictionary key.
///
/// `(name, None)` and `(name, Some(""))` produce the same key: the name
/// itself. A non-empty context is lowercased and prefixed, so context
/// matching is case-insensitive. Any separator character in the inputs
/// is stripped before composition, keeping the construction injective
/// even for adversarial names.
///
/// # Examples
///
/// ```
/// use lingo::TranslationKey;
///
/// let plain = TranslationKey::new("Close", None);
/// let menu = TranslationKey::new("Close", Some("Menu"));
/// assert_ne!(plain, menu);
/// assert_eq!(menu.name(), "Close");
/// assert_eq!(menu.context(), Some("menu"));
/// assert_eq!(plain, TranslationKey::new("Close", Some("")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TranslationKey(String);

impl TranslationKey {
    /// Compose a key from a name and an optional context.
    ///
    /// The separator may not occur in either component, or a contexted
    /// key could alias a different plain name; occurrences are removed.
    pub fn new(name: &str, context: Option<&str>) -> Self {
        let name = strip_separator(name);
        match context.map(strip_separator) {
            Some(c) if !c.is_empty() => Self(format!(
                "{}{}{}",
                c.to_lowercase(),
                CONTEXT_SEPARATOR,
                name
            )),
            _ => Self(name.into_owned()),
        }
    }

    /// The full composite key string.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The display name: the part after the context separator, or the
    /// whole key when no context is present.
    pub fn name(&self) -> &str {
        match self.0.find(CONTEXT_SEPARATOR) {
            Some(pos) => &self.0[pos + CONTEXT_SEPARATOR.len_utf8()..],
            None => &self.0,
        }
    }

    /// The context component, if any.
    pub fn context(&self) -> Option<&str> {
        self.0.find(CONTEXT_SEPARATOR).map(|pos| &self.0[..pos])
    }
}

impl fmt::Display for TranslationKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.context() {
            Some(ctx) => write!(f, "{}:{}", ctx, self.name()),
            None => write!(f, "{}", self.name()),
        }
    }
}

/// Remove separator characters so they cannot forge a context boundary.
fn strip_separator(s: &str) -> Cow<'_, str> {
    if s.contains(CONTEXT_SEPARATOR) {
        Cow::Owned(s.chars().filter(|c| *c != CONTEXT_SEPARATOR).collect())
    } else {
        Cow::Borrowed(s)
    }
}
