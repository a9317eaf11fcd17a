//! Localization seam.
//!
//! Labels are produced by handing an English template key and its
//! parameters to a `Translator`. Templates use `{{name}}` placeholders.

use rustc_hash::FxHashMap;

/// Resolves a template key to display text.
pub trait Translator: Send + Sync {
    /// Translate `key`, substituting `params` into its placeholders.
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String;
}

/// Replace every `{{name}}` in `template` with its value from `params`.
///
/// Unknown placeholders are left as written.
#[must_use]
pub fn interpolate(template: &str, params: &[(&str, &str)]) -> String {
    let mut out = template.to_string();
    for (name, value) in params {
        out = out.replace(&format!("{{{{{name}}}}}"), value);
    }
    out
}

/// Uses the template key itself as the translation.
#[derive(Clone, Copy, Debug, Default)]
pub struct IdentityTranslator;

impl Translator for IdentityTranslator {
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        interpolate(key, params)
    }
}

/// Looks templates up in a table, falling back to the key.
///
/// ## Example
///
/// ```
/// use ccg_grouping::labels::{TableTranslator, Translator};
///
/// let fr = TableTranslator::new().with_entry("Level {{level}}", "Niveau {{level}}");
/// assert_eq!(fr.translate("Level {{level}}", &[("level", "2")]), "Niveau 2");
/// assert_eq!(fr.translate("Permanent", &[]), "Permanent");
/// ```
#[derive(Clone, Debug, Default)]
pub struct TableTranslator {
    entries: FxHashMap<String, String>,
}

impl TableTranslator {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a translation (builder pattern).
    #[must_use]
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Add a translation.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), value.into());
    }

    /// Number of translations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Translator for TableTranslator {
    fn translate(&self, key: &str, params: &[(&str, &str)]) -> String {
        let template = self.entries.get(key).map_or(key, String::as_str);
        interpolate(template, params)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_interpolate() {
        assert_eq!(interpolate("Cost: {{cost}}", &[("cost", "3")]), "Cost: 3");
        assert_eq!(interpolate("{{a}}-{{a}}", &[("a", "x")]), "x-x");
        assert_eq!(interpolate("{{missing}}", &[]), "{{missing}}");
    }

    #[test]
    fn test_identity() {
        let t = IdentityTranslator;
        assert_eq!(t.translate("Level {{level}}", &[("level", "4")]), "Level 4");
    }

    #[test]
    fn test_table() {
        let mut t = TableTranslator::new();
        assert!(t.is_empty());
        t.insert("Weakness", "Faiblesse");
        assert_eq!(t.len(), 1);
        assert_eq!(t.translate("Weakness", &[]), "Faiblesse");
        assert_eq!(t.translate("Basic Weakness", &[]), "Basic Weakness");
    }
}
