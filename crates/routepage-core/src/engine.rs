// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::bundle::ContentBundle;
use crate::cache::RenderCache;
use crate::config::EngineConfig;
use crate::flights::{normalize_batch, FlightBatch};
use crate::metrics::{compute_metrics_with, DerivedMetrics};
use crate::resolver::ContentResolver;
use crate::slug::{RouteDescriptor, RoutePath};
use crate::source::ContentSource;
use crate::template::TemplateKind;
use crate::urls::{AlternateLink, UrlBuilder};
use rayon::prelude::*;
use routepage_phrases::{Locale, PhraseBook};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// One resolved page plus its SEO links.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderedPage {
    pub template_name: String,
    pub route: RouteDescriptor,
    pub bundle: ContentBundle,
    pub canonical_url: String,
    pub alternates: Vec<AlternateLink>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderRequest {
    pub path: String,
    #[serde(default)]
    pub locale: Option<String>,
}

impl RenderRequest {
    pub fn new(path: &str, locale: Option<&str>) -> Self {
        Self {
            path: path.to_string(),
            locale: locale.map(|l| l.to_string()),
        }
    }
}

/// Parses, classifies, fetches and resolves pages.
///
/// Holds no per-request state; the only shared piece is the optional
/// render cache.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    phrases: Arc<PhraseBook>,
    cache: Option<Arc<RenderCache>>,
    urls: UrlBuilder,
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new(EngineConfig::default())
    }
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        let urls = UrlBuilder::new(&config.site);
        Self {
            config,
            phrases: Arc::new(PhraseBook::builtin().clone()),
            cache: None,
            urls,
        }
    }

    pub fn with_phrases(mut self, phrases: PhraseBook) -> Self {
        self.phrases = Arc::new(phrases);
        // Cached renders belong to the previous phrase book.
        if let Some(cache) = &self.cache {
            cache.clear();
        }
        self
    }

    pub fn with_cache(mut self, cache: Arc<RenderCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn phrases(&self) -> &PhraseBook {
        &self.phrases
    }

    pub fn cache(&self) -> Option<&Arc<RenderCache>> {
        self.cache.as_ref()
    }

    pub fn urls(&self) -> &UrlBuilder {
        &self.urls
    }

    pub fn resolver(&self) -> ContentResolver<'_> {
        let resolver = ContentResolver::new(&self.phrases).with_currency(self.config.currency.clone());
        match &self.cache {
            Some(cache) => resolver.with_cache(cache),
            None => resolver,
        }
    }

    /// Locale for a request: explicit tag, then the path prefix, then the
    /// configured default.
    pub fn request_locale(&self, path: &RoutePath, locale_tag: Option<&str>) -> Locale {
        match locale_tag {
            Some(tag) => Locale::normalize(Some(tag)),
            None => path.locale.unwrap_or(self.config.default_locale),
        }
    }

    /// Renders one page. `None` when the path matches no template; that is
    /// a normal outcome and the caller renders nothing.
    pub fn render(
        &self,
        path: &str,
        locale_tag: Option<&str>,
        source: &dyn ContentSource,
    ) -> Option<RenderedPage> {
        let route_path = RoutePath::parse(path);
        let locale = self.request_locale(&route_path, locale_tag);
        let route = route_path.descriptor();

        let Some(kind) = TemplateKind::select(&route) else {
            log::info!("[Engine] No template for {:?}, rendering nothing", path);
            return None;
        };

        let ids = route.entity_ids();
        let upstream = source.fetch_content(&ids, locale.language_id());
        let metrics = metrics_for(source.fetch_flight_data(&ids).as_ref());

        let bundle = self
            .resolver()
            .resolve_with_metrics(&route, locale, upstream.as_ref(), &metrics)?;

        let canonical_path = route_path.canonical_path();
        Some(RenderedPage {
            template_name: kind.template_name().to_string(),
            canonical_url: self.urls.canonical_url(&canonical_path, locale),
            alternates: self.urls.alternate_urls(&canonical_path),
            route,
            bundle,
        })
    }

    /// Renders independent requests in parallel. Results keep request order
    /// and equal what [`render`](Self::render) returns for each one.
    pub fn render_batch(
        &self,
        requests: &[RenderRequest],
        source: &dyn ContentSource,
    ) -> Vec<Option<RenderedPage>> {
        requests
            .par_iter()
            .map(|req| self.render(&req.path, req.locale.as_deref(), source))
            .collect()
    }
}

/// Statistics for an optional batch. No batch means the empty record.
pub fn metrics_for(batch: Option<&FlightBatch>) -> DerivedMetrics {
    match batch {
        Some(batch) => compute_metrics_with(&normalize_batch(&batch.flights), batch.aggregates.as_ref()),
        None => DerivedMetrics::default(),
    }
}
