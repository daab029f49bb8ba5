// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use routepage_core::bundle::SectionKey;
use routepage_core::config::EngineConfig;
use routepage_core::{DirectorySource, Engine, RenderCache, RenderRequest, Tier};
use routepage_phrases::Locale;
use simplelog::{Config, LevelFilter, SimpleLogger};
use std::fs;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;

fn create_fixture_tree() -> TempDir {
    // Surfaces resolver warnings in `cargo test -- --nocapture`.
    let _ = SimpleLogger::init(LevelFilter::Warn, Config::default());

    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("content")).unwrap();
    fs::create_dir_all(root.join("flights")).unwrap();

    // Route content: plain title, per-locale description, upstream FAQs.
    fs::write(
        root.join("content/JFK-AGP.json"),
        r#"{
            "title": {"en": "New York to Malaga, hand picked", "es": "Nueva York a Málaga"},
            "description": {"en": "Sun, beaches and cheap fares."},
            "classes": "<p>Economy and business on every departure.</p>",
            "faqs": [
                {"question": "Is there a direct flight?", "answer": "Yes, daily in summer."},
                {"q": "Missing answer"},
                {"answer": "An answer with no question"}
            ]
        }"#,
    )
    .unwrap();
    // Russian editors wrote their own title only.
    fs::write(
        root.join("content/JFK-AGP.3.json"),
        r#"{"title": "Нью-Йорк – Малага"}"#,
    )
    .unwrap();

    fs::write(
        root.join("flights/JFK-AGP.csv"),
        "from,to,price,duration,airline,stops,departure_time\n\
         JFK,AGP,$420,8h 10m,Iberia,1,08:15\n\
         JFK,AGP,380,PT7H50M,Iberia,0,19:40\n\
         JFK,AGP,,7:55,Delta,0,\n",
    )
    .unwrap();

    fs::write(
        root.join("content/hotel_paris.json"),
        r#"{"cityName": {"fr": "Paris intra-muros", "en": "Central Paris"}}"#,
    )
    .unwrap();

    temp_dir
}

fn write_config(dir: &Path) -> std::path::PathBuf {
    let path = dir.join("config.json");
    fs::write(
        &path,
        r#"{
            "schema_version": 2,
            "site": {"scheme": "https", "domain": "www.travel.test"},
            "currency": {"code": "EUR", "symbol": "€"},
            "default_locale": "es"
        }"#,
    )
    .unwrap();
    path
}

#[test]
fn test_e2e_render_workflow() {
    let fixtures = create_fixture_tree();
    let config_path = write_config(fixtures.path());

    // 1. Config
    let config = EngineConfig::load(&config_path).expect("Failed to load config");
    assert_eq!(config.default_locale, Locale::Es);
    let engine = Engine::new(config);
    let source = DirectorySource::new(fixtures.path());

    // 2. Default locale from config, upstream per-locale title
    let page = engine.render("/flights/jfk-agp", None, &source).unwrap();
    assert_eq!(page.bundle.locale, Locale::Es);
    assert_eq!(page.bundle.title, "Nueva York a Málaga");
    assert_eq!(page.bundle.source("title"), Some(Tier::UpstreamLocale));
    assert_eq!(page.canonical_url, "https://www.travel.test/es/flights/jfk-agp");

    // 3. Description only exists in English and is used verbatim
    assert_eq!(page.bundle.description, "Sun, beaches and cheap fares.");
    assert_eq!(page.bundle.source("description"), Some(Tier::UpstreamEnglish));

    // 4. Plain upstream section, generated everything else
    assert_eq!(
        page.bundle.section(SectionKey::Classes),
        Some("<p>Economy and business on every departure.</p>")
    );
    assert_eq!(page.bundle.source("booking_steps"), Some(Tier::Generated));

    // 5. Incomplete FAQ entries are dropped without losing the record
    assert_eq!(page.bundle.faqs.len(), 1);
    assert_eq!(page.bundle.faqs[0].q, "Is there a direct flight?");

    // 6. Metrics from the CSV batch
    let m = &page.bundle.metrics;
    assert_eq!(m.total_flights, 3);
    assert_eq!(m.direct_flights, 2);
    assert_eq!(m.cheapest_price, 380.0);
    assert_eq!(m.avg_price, 400.0);
    assert_eq!(m.airlines, 2);
}

#[test]
fn test_e2e_language_specific_file_wins() {
    let fixtures = create_fixture_tree();
    let engine = Engine::default();
    let source = DirectorySource::new(fixtures.path());

    let page = engine.render("/ru/flights/jfk-agp", None, &source).unwrap();
    assert_eq!(page.bundle.title, "Нью-Йорк – Малага");
    assert_eq!(page.bundle.source("title"), Some(Tier::Upstream));
    // The per-language file replaces the shared one entirely.
    assert_eq!(page.bundle.source("description"), Some(Tier::Generated));
    assert_eq!(page.bundle.faqs.len(), 5);
}

#[test]
fn test_e2e_generated_price_uses_configured_currency() {
    let fixtures = create_fixture_tree();
    let config = EngineConfig::load(&write_config(fixtures.path())).unwrap();
    let engine = Engine::new(config);
    let source = DirectorySource::new(fixtures.path());

    // JFK-AGP has upstream FAQs; JFK-MAD has flights and no content.
    fs::copy(
        fixtures.path().join("flights/JFK-AGP.csv"),
        fixtures.path().join("flights/JFK-MAD.csv"),
    )
    .unwrap();
    let page = engine.render("/flights/jfk-mad", Some("en"), &source).unwrap();
    assert_eq!(page.bundle.source("faqs"), Some(Tier::Generated));
    assert!(page.bundle.faqs[0].a.contains("€380"), "{}", page.bundle.faqs[0].a);
}

#[test]
fn test_e2e_hotel_name_from_upstream() {
    let fixtures = create_fixture_tree();
    let engine = Engine::default();
    let source = DirectorySource::new(fixtures.path());

    let page = engine.render("/fr/hotels/paris", None, &source).unwrap();
    assert_eq!(page.template_name, "hotel");
    assert!(page.bundle.title.contains("Paris intra-muros"));
    assert_eq!(page.bundle.source("city_name"), Some(Tier::UpstreamLocale));

    let page = engine.render("/ru/hotels/paris", None, &source).unwrap();
    assert!(page.bundle.title.contains("Central Paris"));
}

#[test]
fn test_e2e_batch_with_shared_cache() {
    let fixtures = create_fixture_tree();
    let cache = Arc::new(RenderCache::new());
    let engine = Engine::default().with_cache(cache.clone());
    let source = DirectorySource::new(fixtures.path());

    let requests: Vec<RenderRequest> = ["/flights/jfk-agp", "/hotels/paris", "/airports/hyd", "/nowhere/x-y-z"]
        .iter()
        .flat_map(|p| Locale::ALL.map(|l| RenderRequest::new(p, Some(l.tag()))))
        .collect();

    let first = engine.render_batch(&requests, &source);
    let second = engine.render_batch(&requests, &source);
    assert_eq!(first, second);
    assert!(cache.stats().hits > 0);

    let uncached = Engine::default().render_batch(&requests, &source);
    assert_eq!(first, uncached);
}

#[test]
fn test_e2e_cache_persistence() {
    let fixtures = create_fixture_tree();
    let cache_path = fixtures.path().join("cache/render_cache.json");

    let cache = Arc::new(RenderCache::new());
    let engine = Engine::default().with_cache(cache.clone());
    engine.render("/flights/jfk-mad", Some("fr"), &routepage_core::NoUpstream);
    assert!(!cache.is_empty());
    cache.save(&cache_path).expect("Failed to save cache");

    let reloaded = RenderCache::load(&cache_path);
    assert_eq!(reloaded.len(), cache.len());

    // Garbage on disk is an empty cache, not an error.
    fs::write(&cache_path, "not json").unwrap();
    assert!(RenderCache::load(&cache_path).is_empty());
}

#[test]
fn test_e2e_v1_config_is_migrated() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.json");
    fs::write(&path, r#"{"schema_version": 1, "domain": "old.example.org"}"#).unwrap();

    let engine = Engine::new(EngineConfig::load(&path).unwrap());
    let page = engine
        .render("/hotels/paris", Some("es"), &routepage_core::NoUpstream)
        .unwrap();
    assert_eq!(page.canonical_url, "https://old.example.org/es/hotels/paris");

    let saved: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(saved["schema_version"], 2);
    assert_eq!(saved["site"]["domain"], "old.example.org");
}
