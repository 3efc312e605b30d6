//! Fixed-label translation.
//!
//! The dashboard's string catalogue lives outside this crate. Services only
//! need `translate(key, locale)` for metric and category names; date
//! formatting never goes through here.

use std::collections::HashMap;

use crate::models::LocaleId;

/// Lookup of fixed label strings.
pub trait Translator {
    fn translate(&self, key: &str, locale: LocaleId) -> String;
}

impl<F> Translator for F
where
    F: Fn(&str, LocaleId) -> String,
{
    fn translate(&self, key: &str, locale: LocaleId) -> String {
        self(key, locale)
    }
}

/// In-memory translation catalogue. Unknown keys translate to themselves.
#[derive(Debug, Clone, Default)]
pub struct TranslationTable {
    entries: HashMap<(LocaleId, String), String>,
}

impl TranslationTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, locale: LocaleId, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert((locale, key.into()), value.into());
    }

    pub fn with(mut self, locale: LocaleId, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(locale, key, value);
        self
    }
}

impl Translator for TranslationTable {
    fn translate(&self, key: &str, locale: LocaleId) -> String {
        self.entries
            .get(&(locale, key.to_string()))
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }
}
