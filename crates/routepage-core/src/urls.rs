// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Canonical and alternate link computation. Pure string work.

use crate::config::SiteConfig;
use routepage_phrases::Locale;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlternateLink {
    pub hreflang: String,
    pub href: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlBuilder {
    base: String,
}

impl Default for UrlBuilder {
    fn default() -> Self {
        UrlBuilder::new(&SiteConfig::default())
    }
}

impl UrlBuilder {
    pub fn new(site: &SiteConfig) -> Self {
        Self {
            base: site.base_url(),
        }
    }

    /// Builder for a bare domain (`www.example.com`) or a full origin
    /// (`http://localhost:8080`).
    pub fn for_domain(domain: &str) -> Self {
        let domain = domain.trim().trim_end_matches('/');
        if domain.contains("://") {
            Self {
                base: domain.to_string(),
            }
        } else {
            Self::new(&SiteConfig {
                domain: domain.to_string(),
                ..SiteConfig::default()
            })
        }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    pub fn canonical_url(&self, path: &str, locale: Locale) -> String {
        format!("{}{}", self.base, localized_path(path, locale))
    }

    /// One link per locale, then one per region tag, all in `Locale::ALL`
    /// order.
    pub fn alternate_urls(&self, path: &str) -> Vec<AlternateLink> {
        let by_language = Locale::ALL.into_iter().map(|l| (l.tag(), l));
        let by_region = Locale::ALL.into_iter().map(|l| (l.region_tag(), l));
        by_language
            .chain(by_region)
            .map(|(hreflang, locale)| AlternateLink {
                hreflang: hreflang.to_string(),
                href: self.canonical_url(path, locale),
            })
            .collect()
    }
}

/// `canonical_url("www.example.com", "/flights/jfk-agp", Locale::Fr)` →
/// `https://www.example.com/fr/flights/jfk-agp`.
pub fn canonical_url(domain: &str, path: &str, locale: Locale) -> String {
    UrlBuilder::for_domain(domain).canonical_url(path, locale)
}

pub fn alternate_urls(domain: &str, path: &str) -> Vec<AlternateLink> {
    UrlBuilder::for_domain(domain).alternate_urls(path)
}

/// Leading `/`, no trailing `/` (except the root), no query or fragment,
/// no empty segments and no locale prefix.
pub fn normalize_path(path: &str) -> String {
    let path = path.split(['?', '#']).next().unwrap_or("");
    let mut segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
    if segments.first().is_some_and(|s| Locale::from_tag(s).is_some()) {
        segments.remove(0);
    }
    format!("/{}", segments.join("/"))
}

/// English stays at the root; every other locale is prefixed.
pub fn localized_path(path: &str, locale: Locale) -> String {
    let path = normalize_path(path);
    if locale.is_default() {
        path
    } else if path == "/" {
        format!("/{}", locale.tag())
    } else {
        format!("/{}{}", locale.tag(), path)
    }
}
