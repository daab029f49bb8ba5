// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use super::context::{PageContext, Variant};
use crate::bundle::SectionKey;
use crate::template::TemplateKind;

/// Phrase used to generate `section` for this page.
pub fn section_key(section: SectionKey, ctx: &PageContext) -> String {
    let base = format!("section.{}", section.as_str());
    let airline_only = ctx.variant == Variant::Airline;

    let suffix = match (section, ctx.kind) {
        (SectionKey::BookingSteps, TemplateKind::Hotel) => Some("hotel"),
        (SectionKey::BookingSteps, _) if airline_only => Some("airline"),
        (SectionKey::CancellationPolicy, TemplateKind::Hotel) => Some("hotel"),
        (SectionKey::Classes, TemplateKind::Hotel) => Some("hotel"),
        (SectionKey::Classes, TemplateKind::Airline) => Some("airline"),
        (SectionKey::DestinationsOverview, _) if airline_only => Some("airline"),
        (SectionKey::DestinationsOverview, _) if !ctx.has_flights => Some("none"),
        (SectionKey::PlacesToVisit | SectionKey::CityInfo | SectionKey::BestTimeToVisit, _)
            if airline_only =>
        {
            Some("airline")
        }
        _ => None,
    };

    match suffix {
        Some(suffix) => format!("{}.{}", base, suffix),
        None => base,
    }
}

/// Question and answer phrases for the five FAQ slots, in display order:
/// price, destinations served, cheapest day, best season, how to book.
pub fn faq_keys(ctx: &PageContext) -> [(&'static str, &'static str); 5] {
    [
        (
            "faq.price.q",
            if ctx.has_prices {
                "faq.price.a"
            } else {
                "faq.price.a_none"
            },
        ),
        (
            "faq.destinations.q",
            if ctx.has_flights {
                "faq.destinations.a"
            } else {
                "faq.destinations.a_none"
            },
        ),
        ("faq.cheapest_day.q", "faq.cheapest_day.a"),
        ("faq.best_season.q", "faq.best_season.a"),
        ("faq.booking.q", "faq.booking.a"),
    ]
}
