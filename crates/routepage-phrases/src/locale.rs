// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the four page languages.
///
/// The numeric id is what the upstream content API expects; it is a fixed
/// bijection and never derived from the enum discriminant at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    En,
    Es,
    Ru,
    Fr,
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}

impl Locale {
    pub const ALL: [Locale; 4] = [Locale::En, Locale::Es, Locale::Ru, Locale::Fr];

    pub fn tag(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
            Locale::Ru => "ru",
            Locale::Fr => "fr",
        }
    }

    /// Region-qualified tag used for hreflang alternates.
    pub fn region_tag(self) -> &'static str {
        match self {
            Locale::En => "en-US",
            Locale::Es => "es-ES",
            Locale::Ru => "ru-RU",
            Locale::Fr => "fr-FR",
        }
    }

    pub fn language_id(self) -> u8 {
        match self {
            Locale::En => 1,
            Locale::Es => 2,
            Locale::Ru => 3,
            Locale::Fr => 4,
        }
    }

    pub fn from_language_id(id: u8) -> Option<Locale> {
        match id {
            1 => Some(Locale::En),
            2 => Some(Locale::Es),
            3 => Some(Locale::Ru),
            4 => Some(Locale::Fr),
            _ => None,
        }
    }

    /// Exact match on a supported primary tag, case-insensitive.
    pub fn from_tag(tag: &str) -> Option<Locale> {
        Locale::ALL
            .into_iter()
            .find(|l| l.tag().eq_ignore_ascii_case(tag))
    }

    /// Maps any locale tag onto a supported locale. Never fails: unknown,
    /// empty or missing tags all become English.
    ///
    /// Region and encoding suffixes are ignored, so `fr-CA`, `es_MX.UTF-8`
    /// and `RU` resolve to their primary language. This is looser than an
    /// exact match on the four tags; use [`Locale::from_tag`] for that.
    pub fn normalize(tag: Option<&str>) -> Locale {
        let Some(raw) = tag else {
            return Locale::En;
        };
        let primary = raw
            .trim()
            .split(['-', '_', '.', '@'])
            .next()
            .unwrap_or_default();
        Locale::from_tag(primary).unwrap_or(Locale::En)
    }

    pub fn is_default(self) -> bool {
        self == Locale::En
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_supported_tags() {
        assert_eq!(Locale::normalize(Some("en")), Locale::En);
        assert_eq!(Locale::normalize(Some("es")), Locale::Es);
        assert_eq!(Locale::normalize(Some("ru")), Locale::Ru);
        assert_eq!(Locale::normalize(Some("fr")), Locale::Fr);
    }

    #[test]
    fn test_normalize_unknown_is_english() {
        assert_eq!(Locale::normalize(None), Locale::En);
        assert_eq!(Locale::normalize(Some("")), Locale::En);
        assert_eq!(Locale::normalize(Some("de")), Locale::En);
        assert_eq!(Locale::normalize(Some("zz-top")), Locale::En);
        assert_eq!(Locale::normalize(Some("   ")), Locale::En);
    }

    #[test]
    fn test_normalize_region_and_case() {
        assert_eq!(Locale::normalize(Some("FR")), Locale::Fr);
        assert_eq!(Locale::normalize(Some("es-MX")), Locale::Es);
        assert_eq!(Locale::normalize(Some("ru_RU.UTF-8")), Locale::Ru);
        assert_eq!(Locale::normalize(Some(" en-GB ")), Locale::En);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        for raw in ["fr-CA", "xx", "", "RU", "es_ES"] {
            let once = Locale::normalize(Some(raw));
            assert_eq!(Locale::normalize(Some(once.tag())), once);
        }
    }

    #[test]
    fn test_language_id_bijection() {
        for locale in Locale::ALL {
            assert_eq!(Locale::from_language_id(locale.language_id()), Some(locale));
        }
        assert_eq!(Locale::En.language_id(), 1);
        assert_eq!(Locale::Fr.language_id(), 4);
        assert_eq!(Locale::from_language_id(0), None);
        assert_eq!(Locale::from_language_id(5), None);
    }
}
