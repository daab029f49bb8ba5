// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::metrics::DerivedMetrics;
use crate::template::TemplateKind;
use crate::upstream::{Faq, FieldValue, Tier, UpstreamContent};
use routepage_phrases::{Locale, PhraseMap};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Body sections of a page, declared in canonical display order.
///
/// `Ord` follows declaration order, so a `BTreeMap<SectionKey, _>` iterates
/// in the order pages show them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionKey {
    BookingSteps,
    CancellationPolicy,
    Classes,
    DestinationsOverview,
    PopularDestinations,
    PlacesToVisit,
    CityInfo,
    BestTimeToVisit,
}

impl SectionKey {
    pub const ALL: [SectionKey; 8] = [
        SectionKey::BookingSteps,
        SectionKey::CancellationPolicy,
        SectionKey::Classes,
        SectionKey::DestinationsOverview,
        SectionKey::PopularDestinations,
        SectionKey::PlacesToVisit,
        SectionKey::CityInfo,
        SectionKey::BestTimeToVisit,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SectionKey::BookingSteps => "booking_steps",
            SectionKey::CancellationPolicy => "cancellation_policy",
            SectionKey::Classes => "classes",
            SectionKey::DestinationsOverview => "destinations_overview",
            SectionKey::PopularDestinations => "popular_destinations",
            SectionKey::PlacesToVisit => "places_to_visit",
            SectionKey::CityInfo => "city_info",
            SectionKey::BestTimeToVisit => "best_time_to_visit",
        }
    }

    /// `heading.*` phrase for the section title.
    pub fn heading_key(self) -> String {
        format!("heading.{}", self.as_str())
    }

    /// The upstream field carrying this section.
    pub fn upstream_field(self, upstream: &UpstreamContent) -> &FieldValue {
        match self {
            SectionKey::BookingSteps => &upstream.booking_steps,
            SectionKey::CancellationPolicy => &upstream.cancellation_policy,
            SectionKey::Classes => &upstream.classes,
            SectionKey::DestinationsOverview => &upstream.destinations_overview,
            SectionKey::PopularDestinations => &upstream.popular_destinations,
            SectionKey::PlacesToVisit => &upstream.places_to_visit,
            SectionKey::CityInfo => &upstream.city_info,
            SectionKey::BestTimeToVisit => &upstream.best_time_to_visit,
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Seo {
    pub keywords: String,
    pub og_title: String,
    pub og_description: String,
}

/// Everything a presentation template needs for one route and locale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentBundle {
    pub template: TemplateKind,
    pub locale: Locale,
    pub title: String,
    pub description: String,
    /// One entry per [`SectionKey`], HTML.
    pub sections: BTreeMap<SectionKey, String>,
    pub faqs: Vec<Faq>,
    /// `ui.*` and `heading.*` phrases for the locale.
    pub ui: PhraseMap,
    pub seo: Seo,
    pub metrics: DerivedMetrics,
    /// Which fallback tier produced each field.
    pub sources: BTreeMap<String, Tier>,
}

impl ContentBundle {
    pub fn section(&self, key: SectionKey) -> Option<&str> {
        self.sections.get(&key).map(|s| s.as_str())
    }

    /// Localized title for a section, from the bundle's `heading.*` phrases.
    pub fn section_heading(&self, key: SectionKey) -> Option<&str> {
        self.ui.get(&key.heading_key()).map(|s| s.as_str())
    }

    pub fn source(&self, field: &str) -> Option<Tier> {
        self.sources.get(field).copied()
    }

    /// Fields that had to use the English hard default.
    pub fn hard_defaulted(&self) -> Vec<&str> {
        self.sources
            .iter()
            .filter(|(_, tier)| **tier == Tier::HardDefault)
            .map(|(field, _)| field.as_str())
            .collect()
    }
}
