// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use routepage_core::config::SiteConfig;
use routepage_core::{alternate_urls, canonical_url, RoutePath, UrlBuilder};
use routepage_phrases::Locale;

#[test]
fn test_regression_canonical_is_self_alternate() {
    let urls = UrlBuilder::for_domain("www.example.com");
    for path in ["/flights/jfk-agp", "/hotels/paris", "/airlines/emirates/jfk-dxb", "/"] {
        let alternates = urls.alternate_urls(path);
        for locale in Locale::ALL {
            let canonical = urls.canonical_url(path, locale);
            let by_tag = alternates.iter().find(|l| l.hreflang == locale.tag()).unwrap();
            let by_region = alternates
                .iter()
                .find(|l| l.hreflang == locale.region_tag())
                .unwrap();
            assert_eq!(by_tag.href, canonical);
            assert_eq!(by_region.href, canonical);
        }
    }
}

#[test]
fn test_regression_prefixed_request_gives_same_links() {
    // A page reached through any locale prefix advertises the same set.
    let reference = alternate_urls("www.example.com", "/flights/jfk-agp");
    for locale in Locale::ALL {
        let requested = format!("/{}/flights/JFK-AGP/", locale.tag());
        let canonical_path = RoutePath::parse(&requested).canonical_path();
        assert_eq!(alternate_urls("www.example.com", &canonical_path), reference);
    }
}

#[test]
fn test_regression_trailing_slash_and_scheme() {
    assert_eq!(
        canonical_url("www.example.com/", "flights/hyd/", Locale::Es),
        "https://www.example.com/es/flights/hyd"
    );
    let site = SiteConfig {
        scheme: "http://".to_string(),
        domain: "staging.example.com".to_string(),
    };
    assert_eq!(
        UrlBuilder::new(&site).canonical_url("/hotels/paris", Locale::En),
        "http://staging.example.com/hotels/paris"
    );
}

#[test]
fn test_regression_no_duplicate_hreflang() {
    let links = alternate_urls("www.example.com", "/flights/hyd");
    let mut langs: Vec<&str> = links.iter().map(|l| l.hreflang.as_str()).collect();
    langs.sort_unstable();
    langs.dedup();
    assert_eq!(langs.len(), links.len());
}
