// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Fallback content resolution.
//!
//! Every field of a page goes through one chain, in strict priority order:
//!
//! 1. upstream plain value,
//! 2. upstream per-locale map (requested locale, then `en`, then the first
//!    non-empty entry),
//! 3. text generated from the locale's phrase table,
//! 4. an English hard default, only when step 3 cannot be interpolated.
//!
//! Each section passes through the chain exactly once and is stored under
//! its own [`SectionKey`], so a bundle can never hold a section twice.

mod context;
pub mod defaults;
mod generated;

use crate::bundle::{ContentBundle, SectionKey, Seo};
use crate::cache::{CacheKey, RenderCache};
use crate::config::CurrencyConfig;
use crate::metrics::DerivedMetrics;
use crate::slug::RouteDescriptor;
use crate::template::TemplateKind;
use crate::upstream::{Faq, FieldValue, Tier, UpstreamContent};
use context::PageContext;
use routepage_phrases::{
    interpolate, interpolate_html, Directory, InterpolationError, Locale, PhraseBook, Vars,
};
use std::collections::BTreeMap;

pub use context::format_price;

/// Maximum length of a generated `og:description`, ellipsis included.
pub const OG_DESCRIPTION_MAX_CHARS: usize = 160;

#[derive(Debug, Clone)]
pub struct ContentResolver<'a> {
    phrases: &'a PhraseBook,
    directory: &'a Directory,
    currency: CurrencyConfig,
    cache: Option<&'a RenderCache>,
}

impl Default for ContentResolver<'static> {
    fn default() -> Self {
        ContentResolver::new(PhraseBook::builtin())
    }
}

impl<'a> ContentResolver<'a> {
    pub fn new(phrases: &'a PhraseBook) -> Self {
        Self {
            phrases,
            directory: Directory::builtin(),
            currency: CurrencyConfig::default(),
            cache: None,
        }
    }

    pub fn with_directory(mut self, directory: &'a Directory) -> Self {
        self.directory = directory;
        self
    }

    pub fn with_currency(mut self, currency: CurrencyConfig) -> Self {
        self.currency = currency;
        self
    }

    /// Renders generated phrases through `cache`. Output is identical with
    /// or without it.
    pub fn with_cache(mut self, cache: &'a RenderCache) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Resolves a page without flight statistics.
    pub fn resolve(
        &self,
        route: &RouteDescriptor,
        locale: Locale,
        upstream: Option<&UpstreamContent>,
    ) -> Option<ContentBundle> {
        self.resolve_with_metrics(route, locale, upstream, &DerivedMetrics::default())
    }

    /// Builds the bundle for `route` in `locale`.
    ///
    /// `None` only when the route matches no template. A missing `upstream`
    /// is the same as one with every field absent.
    pub fn resolve_with_metrics(
        &self,
        route: &RouteDescriptor,
        locale: Locale,
        upstream: Option<&UpstreamContent>,
        metrics: &DerivedMetrics,
    ) -> Option<ContentBundle> {
        let Some(kind) = TemplateKind::select(route) else {
            log::debug!("[Resolver] No template for {}", route);
            return None;
        };

        let empty = UpstreamContent::default();
        let upstream = upstream.unwrap_or(&empty);
        let ctx = PageContext::build(self, route, kind, locale, upstream, metrics);

        let mut sources: BTreeMap<String, Tier> = ctx
            .name_sources
            .iter()
            .map(|(field, tier)| (field.to_string(), *tier))
            .collect();

        let mut field = |name: &str,
                         value: &FieldValue,
                         phrase_key: &str,
                         html: bool,
                         hard_default: &str| {
            let (text, tier) = self.chain(name, value, locale, hard_default, || {
                self.render(locale, phrase_key, &ctx.vars, html)
            });
            sources.insert(name.to_string(), tier);
            text
        };

        let title = field(
            "title",
            &upstream.title,
            &ctx.variant.key("title"),
            false,
            defaults::TITLE,
        );
        let description = field(
            "description",
            &upstream.description,
            &ctx.variant.key("description"),
            false,
            defaults::DESCRIPTION,
        );

        let mut sections = BTreeMap::new();
        for key in SectionKey::ALL {
            let text = field(
                key.as_str(),
                key.upstream_field(upstream),
                &generated::section_key(key, &ctx),
                true,
                defaults::section(key),
            );
            sections.insert(key, text);
        }

        let keywords = field(
            "keywords",
            &upstream.keywords,
            &ctx.variant.key("seo.keywords"),
            false,
            defaults::KEYWORDS,
        );

        let (faqs, faq_tier) = self.faqs(upstream, locale, &ctx);
        sources.insert("faqs".to_string(), faq_tier);

        let (og_title, og_title_tier) = match upstream.og_title.resolve(locale) {
            Some((text, tier)) => (text.to_string(), tier),
            None => (title.clone(), Tier::Generated),
        };
        sources.insert("og_title".to_string(), og_title_tier);

        let (og_description, og_description_tier) = match upstream.og_description.resolve(locale) {
            Some((text, tier)) => (text.to_string(), tier),
            None => (
                truncate_chars(&description, OG_DESCRIPTION_MAX_CHARS),
                Tier::Generated,
            ),
        };
        sources.insert("og_description".to_string(), og_description_tier);

        Some(ContentBundle {
            template: kind,
            locale,
            title,
            description,
            sections,
            faqs,
            ui: self.phrases.ui_phrases(locale),
            seo: Seo {
                keywords,
                og_title,
                og_description,
            },
            metrics: metrics.clone(),
            sources,
        })
    }

    /// Upstream → generated → hard default for one text field.
    fn chain(
        &self,
        name: &str,
        value: &FieldValue,
        locale: Locale,
        hard_default: &str,
        generate: impl FnOnce() -> Result<String, InterpolationError>,
    ) -> (String, Tier) {
        if let Some((text, tier)) = value.resolve(locale) {
            log::debug!("[Resolver] {} ({}) from {:?}", name, locale, tier);
            return (text.to_string(), tier);
        }
        match generate() {
            Ok(text) if !text.trim().is_empty() => {
                log::debug!("[Resolver] {} ({}) generated", name, locale);
                (text, Tier::Generated)
            }
            Ok(_) => {
                log::warn!("[Resolver] {} ({}) generated empty text, using hard default", name, locale);
                (hard_default.to_string(), Tier::HardDefault)
            }
            Err(e) => {
                log::warn!("[Resolver] {} ({}) using hard default: {}", name, locale, e);
                (hard_default.to_string(), Tier::HardDefault)
            }
        }
    }

    fn faqs(&self, upstream: &UpstreamContent, locale: Locale, ctx: &PageContext) -> (Vec<Faq>, Tier) {
        if let Some((faqs, tier)) = upstream.faqs.resolve(locale) {
            log::debug!("[Resolver] faqs ({}) from {:?}", locale, tier);
            return (faqs, tier);
        }

        let mut tier = Tier::Generated;
        let faqs = generated::faq_keys(ctx)
            .iter()
            .enumerate()
            .map(|(slot, (q_key, a_key))| {
                let q = self.render(locale, q_key, &ctx.vars, false);
                let a = self.render(locale, a_key, &ctx.vars, false);
                match (q, a) {
                    (Ok(q), Ok(a)) if !q.trim().is_empty() && !a.trim().is_empty() => Faq { q, a },
                    (q, a) => {
                        if let Some(e) = q.err().or(a.err()) {
                            log::warn!("[Resolver] faq {} ({}) using hard default: {}", slot, locale, e);
                        }
                        tier = Tier::HardDefault;
                        defaults::faq(slot)
                    }
                }
            })
            .collect();
        (faqs, tier)
    }

    /// Fills one phrase, through the cache when there is one.
    fn render(
        &self,
        locale: Locale,
        key: &str,
        vars: &Vars,
        html: bool,
    ) -> Result<String, InterpolationError> {
        let template = self
            .phrases
            .get(locale, key)
            .ok_or_else(|| InterpolationError::Missing(key.to_string()))?;
        let fill = || {
            if html {
                interpolate_html(template, vars)
            } else {
                interpolate(template, vars)
            }
        };
        match self.cache {
            Some(cache) => cache.get_or_render(CacheKey::new(locale, key, html, vars), fill),
            None => fill(),
        }
    }
}

/// Cuts `text` to at most `max` characters, ending with `…` when shortened.
pub fn truncate_chars(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(1)).collect();
    format!("{}…", kept.trim_end())
}
