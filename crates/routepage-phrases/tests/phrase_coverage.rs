// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz
//
// Every key of the reference table must resolve to a non-empty string in
// every locale, and every placeholder a template uses must be one the
// resolver supplies.

use routepage_phrases::interpolate::placeholders;
use routepage_phrases::{phrases_for, Locale, PhraseBook};

const KNOWN_VARS: &[&str] = &[
    "departureCity",
    "arrivalCity",
    "departureCode",
    "arrivalCode",
    "airlineName",
    "cityName",
    "placeName",
    "label",
    "price",
    "avgPrice",
    "totalFlights",
    "directFlights",
    "airlines",
    "destinations",
    "cheapestDay",
    "cheapestMonth",
    "symbol",
    "amount",
];

#[test]
fn test_every_key_non_empty_in_every_locale() {
    let book = PhraseBook::builtin();
    let keys = book.keys();
    assert!(!keys.is_empty());

    for locale in Locale::ALL {
        let table = phrases_for(locale);
        assert_eq!(table.len(), keys.len(), "{} table size differs", locale);
        for key in &keys {
            let text = table.get(*key).map(|s| s.as_str()).unwrap_or("");
            assert!(!text.is_empty(), "{} has empty `{}`", locale, key);
        }
    }
}

#[test]
fn test_no_locale_relies_on_english_fallback() {
    let book = PhraseBook::builtin();
    for locale in Locale::ALL {
        assert!(
            book.missing_keys(locale).is_empty(),
            "{} is missing {:?}",
            locale,
            book.missing_keys(locale)
        );
    }
}

#[test]
fn test_translations_differ_from_english_ui() {
    // Catch a table accidentally pasted from English.
    let en = phrases_for(Locale::En);
    for locale in [Locale::Es, Locale::Ru, Locale::Fr] {
        let table = phrases_for(locale);
        assert_ne!(en.get("ui.search"), table.get("ui.search"), "{}", locale);
        assert_ne!(en.get("heading.faq"), table.get("heading.faq"), "{}", locale);
    }
}

#[test]
fn test_placeholders_are_known() {
    for locale in Locale::ALL {
        for (key, text) in phrases_for(locale) {
            for name in placeholders(&text) {
                assert!(
                    KNOWN_VARS.contains(&name.as_str()),
                    "{}:{} uses unknown placeholder {{{}}}",
                    locale,
                    key,
                    name
                );
            }
        }
    }
}

#[test]
fn test_templates_use_same_placeholders_across_locales() {
    // A translation may reorder placeholders but must not drop or add one,
    // or the same vars would fail in one language only.
    let book = PhraseBook::builtin();
    for key in book.keys() {
        let mut reference = placeholders(book.text(Locale::En, key));
        reference.sort();
        for locale in [Locale::Es, Locale::Ru, Locale::Fr] {
            let mut found = placeholders(book.text(locale, key));
            found.sort();
            assert_eq!(reference, found, "{} differs for {}", key, locale);
        }
    }
}
