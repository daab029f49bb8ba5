// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz
//
// Properties every resolved bundle must hold regardless of route, locale or
// upstream shape.

use routepage_core::bundle::SectionKey;
use routepage_core::upstream::{Faq, FaqField, FieldValue, LocaleMap};
use routepage_core::{ContentResolver, RouteDescriptor, RoutePath, TemplateKind, Tier, UpstreamContent};
use routepage_phrases::{Locale, PhraseBook};

const PATHS: [&str; 6] = [
    "/flights/jfk-agp",
    "/flights/hyd",
    "/airports/lhr",
    "/airlines/emirates",
    "/airlines/emirates/jfk-dxb",
    "/hotels/paris",
];

fn route(path: &str) -> RouteDescriptor {
    RoutePath::parse(path).descriptor()
}

#[test]
fn test_every_route_and_locale_resolves() {
    let resolver = ContentResolver::default();
    for path in PATHS {
        for locale in Locale::ALL {
            let b = resolver
                .resolve(&route(path), locale, None)
                .unwrap_or_else(|| panic!("{} selects no template", path));
            assert_eq!(b.locale, locale);
            assert!(!b.title.trim().is_empty(), "{} {}", path, locale);
            assert!(!b.description.trim().is_empty(), "{} {}", path, locale);
            assert!(!b.seo.keywords.trim().is_empty(), "{} {}", path, locale);
            assert!(!b.title.contains('{'), "unfilled title for {} {}: {}", path, locale, b.title);
            assert!(b.hard_defaulted().is_empty(), "{} {}: {:?}", path, locale, b.hard_defaulted());
        }
    }
}

#[test]
fn test_sections_are_exactly_the_canonical_set() {
    let resolver = ContentResolver::default();
    for path in PATHS {
        for locale in Locale::ALL {
            let b = resolver.resolve(&route(path), locale, None).unwrap();
            let keys: Vec<SectionKey> = b.sections.keys().copied().collect();
            assert_eq!(keys, SectionKey::ALL.to_vec(), "{} {}", path, locale);
            for (key, text) in &b.sections {
                assert!(!text.trim().is_empty(), "{} {} {}", path, locale, key);
            }
        }
    }
}

#[test]
fn test_faq_list_always_has_five_entries() {
    let resolver = ContentResolver::default();
    for path in PATHS {
        for locale in Locale::ALL {
            let b = resolver.resolve(&route(path), locale, None).unwrap();
            assert_eq!(b.faqs.len(), 5, "{} {}", path, locale);
            assert!(b.faqs.iter().all(|f| !f.q.is_empty() && !f.a.is_empty()));
        }
    }
}

#[test]
fn test_resolution_is_deterministic() {
    let upstream = UpstreamContent {
        description: FieldValue::per_locale(&[("fr", "Description"), ("en", "Description en")]),
        ..Default::default()
    };
    let resolver = ContentResolver::default();
    for path in PATHS {
        for locale in Locale::ALL {
            let a = resolver.resolve(&route(path), locale, Some(&upstream));
            let b = resolver.resolve(&route(path), locale, Some(&upstream));
            assert_eq!(a, b);
        }
    }
}

#[test]
fn test_per_locale_priority() {
    let upstream = UpstreamContent {
        title: FieldValue::per_locale(&[("ru", ""), ("fr", "Titre"), ("en", "Title")]),
        ..Default::default()
    };
    let resolver = ContentResolver::default();
    let r = route("/flights/jfk-agp");

    let fr = resolver.resolve(&r, Locale::Fr, Some(&upstream)).unwrap();
    assert_eq!(fr.title, "Titre");
    assert_eq!(fr.source("title"), Some(Tier::UpstreamLocale));

    // A blank entry for the locale falls through to English, verbatim.
    let ru = resolver.resolve(&r, Locale::Ru, Some(&upstream)).unwrap();
    assert_eq!(ru.title, "Title");
    assert_eq!(ru.source("title"), Some(Tier::UpstreamEnglish));

    let only_fr = UpstreamContent {
        title: FieldValue::per_locale(&[("fr", "Titre")]),
        ..Default::default()
    };
    let es = resolver.resolve(&r, Locale::Es, Some(&only_fr)).unwrap();
    assert_eq!(es.title, "Titre");
    assert_eq!(es.source("title"), Some(Tier::UpstreamFirst));
}

#[test]
fn test_empty_upstream_equals_no_upstream() {
    let resolver = ContentResolver::default();
    let empty = UpstreamContent {
        title: FieldValue::plain("   "),
        faqs: FaqField::List(vec![]),
        ..Default::default()
    };
    for path in PATHS {
        let a = resolver.resolve(&route(path), Locale::Es, None);
        let b = resolver.resolve(&route(path), Locale::Es, Some(&empty));
        assert_eq!(a, b, "{}", path);
    }
}

#[test]
fn test_upstream_faqs_replace_generated_list() {
    let faqs = LocaleMap::new()
        .with("en", vec![Faq::new("Q?", "A.")])
        .with("es", vec![Faq::new("¿P?", "R.")]);
    let upstream = UpstreamContent {
        faqs: FaqField::PerLocale(faqs),
        ..Default::default()
    };
    let resolver = ContentResolver::default();
    let r = route("/hotels/paris");

    let es = resolver.resolve(&r, Locale::Es, Some(&upstream)).unwrap();
    assert_eq!(es.faqs, vec![Faq::new("¿P?", "R.")]);
    assert_eq!(es.source("faqs"), Some(Tier::UpstreamLocale));

    let fr = resolver.resolve(&r, Locale::Fr, Some(&upstream)).unwrap();
    assert_eq!(fr.faqs, vec![Faq::new("Q?", "A.")]);
    assert_eq!(fr.source("faqs"), Some(Tier::UpstreamEnglish));
}

#[test]
fn test_missing_phrase_falls_back_to_english_then_hard_default() {
    let book = PhraseBook::builtin().without(Locale::Ru, "section.classes");
    let b = ContentResolver::new(&book)
        .resolve(&route("/flights/jfk-agp"), Locale::Ru, None)
        .unwrap();
    assert_eq!(b.source("classes"), Some(Tier::Generated));
    assert!(b.section(SectionKey::Classes).unwrap().contains("<"));

    let book = book.without(Locale::En, "section.classes");
    let b = ContentResolver::new(&book)
        .resolve(&route("/flights/jfk-agp"), Locale::Ru, None)
        .unwrap();
    assert_eq!(b.source("classes"), Some(Tier::HardDefault));
    assert_eq!(
        b.section(SectionKey::Classes),
        Some(routepage_core::resolver::defaults::section(SectionKey::Classes))
    );
    assert_eq!(b.sections.len(), SectionKey::ALL.len());
}

#[test]
fn test_template_follows_route() {
    let resolver = ContentResolver::default();
    let expected = [
        TemplateKind::Flight,
        TemplateKind::Airport,
        TemplateKind::Airport,
        TemplateKind::Airline,
        TemplateKind::Airline,
        TemplateKind::Hotel,
    ];
    for (path, kind) in PATHS.iter().zip(expected) {
        let b = resolver.resolve(&route(path), Locale::En, None).unwrap();
        assert_eq!(b.template, kind, "{}", path);
    }
    assert!(resolver.resolve(&route("/hotels"), Locale::En, None).is_none());
}

#[test]
fn test_ui_phrases_only_ui_namespaces() {
    let b = ContentResolver::default()
        .resolve(&route("/flights/jfk-agp"), Locale::Fr, None)
        .unwrap();
    assert!(!b.ui.is_empty());
    assert!(b
        .ui
        .keys()
        .all(|k| k.starts_with("ui.") || k.starts_with("heading.")));
}
