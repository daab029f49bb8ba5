// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Locale handling and the static, hand-authored text used to build pages:
//! per-locale phrase tables, the airport/airline directory and the
//! `{placeholder}` interpolator.

pub mod directory;
pub mod interpolate;
pub mod locale;
mod tables;

pub use directory::Directory;
pub use interpolate::{interpolate, interpolate_html, InterpolationError, Vars};
pub use locale::Locale;

use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

/// Key → text for one locale, ordered for stable serialization.
pub type PhraseMap = BTreeMap<String, String>;

/// Key namespaces handed to the presentation layer as-is.
pub const UI_PREFIXES: [&str; 2] = ["ui.", "heading."];

/// The complete phrase set for all locales.
///
/// English is the reference: `phrases_for` always returns every English key,
/// substituting the English text where a locale table lacks one.
#[derive(Debug, Clone)]
pub struct PhraseBook {
    tables: HashMap<Locale, HashMap<String, String>>,
}

impl Default for PhraseBook {
    fn default() -> Self {
        let tables = Locale::ALL
            .into_iter()
            .map(|locale| {
                let table = tables::raw_table(locale)
                    .iter()
                    .map(|(k, v)| (k.to_string(), v.to_string()))
                    .collect();
                (locale, table)
            })
            .collect();
        Self { tables }
    }
}

impl PhraseBook {
    /// Shared instance built from the compiled-in tables.
    pub fn builtin() -> &'static PhraseBook {
        static BUILTIN: OnceLock<PhraseBook> = OnceLock::new();
        BUILTIN.get_or_init(PhraseBook::default)
    }

    /// Returns a copy with one phrase replaced. Used to swap wording without
    /// touching the shared tables.
    pub fn with_override(&self, locale: Locale, key: &str, text: &str) -> PhraseBook {
        let mut book = self.clone();
        book.tables
            .entry(locale)
            .or_default()
            .insert(key.to_string(), text.to_string());
        book
    }

    /// Returns a copy with one phrase removed from one locale.
    pub fn without(&self, locale: Locale, key: &str) -> PhraseBook {
        let mut book = self.clone();
        if let Some(table) = book.tables.get_mut(&locale) {
            table.remove(key);
        }
        book
    }

    /// Looks up `key` for `locale`, falling back to the English text.
    /// Empty strings count as missing.
    pub fn get(&self, locale: Locale, key: &str) -> Option<&str> {
        if let Some(text) = self.lookup(locale, key) {
            return Some(text);
        }
        if locale != Locale::En {
            if let Some(text) = self.lookup(Locale::En, key) {
                log::debug!("phrase `{}` missing for {}, using English", key, locale);
                return Some(text);
            }
        }
        None
    }

    /// Like [`get`](Self::get) but never fails; an unknown key renders as itself.
    pub fn text<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        self.get(locale, key).unwrap_or(key)
    }

    pub fn contains(&self, locale: Locale, key: &str) -> bool {
        self.get(locale, key).is_some()
    }

    fn lookup(&self, locale: Locale, key: &str) -> Option<&str> {
        self.tables
            .get(&locale)
            .and_then(|t| t.get(key))
            .map(|s| s.as_str())
            .filter(|s| !s.is_empty())
    }

    /// All reference keys, sorted.
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self
            .tables
            .get(&Locale::En)
            .map(|t| t.keys().map(|k| k.as_str()).collect())
            .unwrap_or_default();
        keys.sort_unstable();
        keys
    }

    /// Full table for `locale`, every reference key present.
    pub fn phrases_for(&self, locale: Locale) -> PhraseMap {
        self.keys()
            .into_iter()
            .map(|key| (key.to_string(), self.text(locale, key).to_string()))
            .collect()
    }

    /// Presentation phrases only (`ui.*` and `heading.*`).
    pub fn ui_phrases(&self, locale: Locale) -> PhraseMap {
        self.keys()
            .into_iter()
            .filter(|key| UI_PREFIXES.iter().any(|p| key.starts_with(p)))
            .map(|key| (key.to_string(), self.text(locale, key).to_string()))
            .collect()
    }

    /// Reference keys the locale's own table does not define.
    pub fn missing_keys(&self, locale: Locale) -> Vec<String> {
        self.keys()
            .into_iter()
            .filter(|key| self.lookup(locale, key).is_none())
            .map(|key| key.to_string())
            .collect()
    }
}

/// Full phrase table for `locale` from the built-in book.
pub fn phrases_for(locale: Locale) -> PhraseMap {
    PhraseBook::builtin().phrases_for(locale)
}
