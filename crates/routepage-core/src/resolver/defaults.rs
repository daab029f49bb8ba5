// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Last-resort English text, used only when a generated phrase cannot be
//! interpolated. Nothing here takes placeholders.

use crate::bundle::SectionKey;
use crate::upstream::Faq;

pub const TITLE: &str = "Cheap flights, hotels and travel deals";
pub const DESCRIPTION: &str =
    "Compare prices from trusted travel providers and book your next trip with confidence.";
pub const KEYWORDS: &str = "cheap flights, hotels, travel deals";

pub fn section(key: SectionKey) -> &'static str {
    match key {
        SectionKey::BookingSteps => {
            "<p>Use the search form to compare fares and book your trip.</p>"
        }
        SectionKey::CancellationPolicy => {
            "<p>Cancellation rules depend on the fare. Check the conditions before you pay.</p>"
        }
        SectionKey::Classes => "<p>Several travel classes are usually available.</p>",
        SectionKey::DestinationsOverview => {
            "<p>Search with your dates to see every destination on sale.</p>"
        }
        SectionKey::PopularDestinations => {
            "<p>Compare fares to popular destinations with the search form.</p>"
        }
        SectionKey::PlacesToVisit => "<p>There is plenty to see and do at your destination.</p>",
        SectionKey::CityInfo => "<p>A popular destination with good transport links.</p>",
        SectionKey::BestTimeToVisit => {
            "<p>Spring and autumn usually bring mild weather and lower prices.</p>"
        }
    }
}

/// One entry per generated FAQ slot, in the same order.
pub const FAQS: [(&str, &str); 5] = [
    (
        "How much does it cost?",
        "Prices change daily. Search with your dates to see current fares.",
    ),
    (
        "Which destinations are served?",
        "Use the search form to see every destination on sale.",
    ),
    (
        "What is the cheapest day to book?",
        "Prices vary through the week. Compare several dates to find the lowest fare.",
    ),
    (
        "When is the best season to travel?",
        "Spring and autumn usually offer the best balance of weather and price.",
    ),
    (
        "How do I book?",
        "Enter your dates in the search form, compare the offers and complete the booking.",
    ),
];

pub fn faq(slot: usize) -> Faq {
    let (q, a) = FAQS[slot % FAQS.len()];
    Faq::new(q, a)
}
