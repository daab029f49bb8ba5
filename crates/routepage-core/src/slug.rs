// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! URL segment parsing.
//!
//! `RouteDescriptor::parse` never fails: anything that cannot be split into
//! a clean departure/arrival pair degrades to a single uppercased airport
//! code, so the page still renders with the raw code as its display name.

use routepage_phrases::Locale;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between the departure and arrival code in a flights slug.
pub const PAIR_SEPARATOR: char = '-';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityType {
    Flight,
    Airport,
    Hotel,
    Airline,
}

/// First path segment after an optional locale prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Flights,
    Airports,
    Airlines,
    Hotels,
}

impl Namespace {
    pub const ALL: [Namespace; 4] = [
        Namespace::Flights,
        Namespace::Airports,
        Namespace::Airlines,
        Namespace::Hotels,
    ];

    pub fn segment(self) -> &'static str {
        match self {
            Namespace::Flights => "flights",
            Namespace::Airports => "airports",
            Namespace::Airlines => "airlines",
            Namespace::Hotels => "hotels",
        }
    }

    pub fn from_segment(segment: &str) -> Option<Namespace> {
        let segment = segment.trim();
        Self::ALL
            .into_iter()
            .find(|ns| ns.segment().eq_ignore_ascii_case(segment))
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

/// Typed route key for one request. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteDescriptor {
    pub entity_type: EntityType,
    pub namespace: Namespace,
    pub departure_code: Option<String>,
    pub arrival_code: Option<String>,
    /// Airline slug or hotel city slug.
    pub entity_slug: Option<String>,
    /// The slug exactly as received, kept for diagnostics.
    pub raw_slug: String,
}

impl RouteDescriptor {
    /// Parses a flights-namespace slug such as `jfk-agp` or `hyd`.
    pub fn parse(slug: &str) -> Self {
        let (entity_type, departure_code, arrival_code) = split_codes(slug);
        Self {
            entity_type,
            namespace: Namespace::Flights,
            departure_code,
            arrival_code,
            entity_slug: None,
            raw_slug: slug.to_string(),
        }
    }

    /// Single-airport page (`/airports/<code>`). The code is never split.
    pub fn airport(code: &str) -> Self {
        let code = code.trim().to_uppercase();
        Self {
            entity_type: EntityType::Airport,
            namespace: Namespace::Airports,
            departure_code: (!code.is_empty()).then(|| code.clone()),
            arrival_code: None,
            entity_slug: None,
            raw_slug: code,
        }
    }

    /// Airline page, optionally narrowed to one route (`/airlines/emirates/jfk-dxb`).
    pub fn airline(airline_slug: &str, pair: Option<&str>) -> Self {
        let slug = airline_slug.trim().to_lowercase();
        let (departure_code, arrival_code) = match pair.filter(|p| !p.trim().is_empty()) {
            Some(p) => {
                let (_, dep, arr) = split_codes(p);
                (dep, arr)
            }
            None => (None, None),
        };
        let raw_slug = match pair {
            Some(p) if !p.trim().is_empty() => format!("{}/{}", airline_slug, p),
            _ => airline_slug.to_string(),
        };
        Self {
            entity_type: EntityType::Airline,
            namespace: Namespace::Airlines,
            departure_code,
            arrival_code,
            entity_slug: (!slug.is_empty()).then_some(slug),
            raw_slug,
        }
    }

    /// Hotel listing for a city (`/hotels/<city-slug>`).
    pub fn hotel(city_slug: &str) -> Self {
        let slug = city_slug.trim().to_lowercase();
        Self {
            entity_type: EntityType::Hotel,
            namespace: Namespace::Hotels,
            departure_code: None,
            arrival_code: None,
            entity_slug: (!slug.is_empty()).then_some(slug),
            raw_slug: city_slug.to_string(),
        }
    }

    pub fn departure_code_str(&self) -> &str {
        self.departure_code.as_deref().unwrap_or("")
    }

    /// Arrival code, or `""` for single-airport routes.
    pub fn arrival_code_str(&self) -> &str {
        self.arrival_code.as_deref().unwrap_or("")
    }

    pub fn has_pair(&self) -> bool {
        self.departure_code.is_some() && self.arrival_code.is_some()
    }

    /// Identifiers handed to the upstream collaborators.
    ///
    /// Codes are passed bare; slugs carry their namespace so an airline and a
    /// hotel city with the same slug never collide.
    pub fn entity_ids(&self) -> Vec<String> {
        let mut ids = Vec::new();
        match self.entity_type {
            EntityType::Airline => {
                if let Some(slug) = &self.entity_slug {
                    ids.push(format!("airline:{}", slug));
                }
            }
            EntityType::Hotel => {
                if let Some(slug) = &self.entity_slug {
                    ids.push(format!("hotel:{}", slug));
                }
                return ids;
            }
            EntityType::Flight | EntityType::Airport => {}
        }
        ids.extend(self.departure_code.iter().cloned());
        ids.extend(self.arrival_code.iter().cloned());
        ids
    }

    /// Joined form of [`entity_ids`](Self::entity_ids), e.g. `JFK-AGP`,
    /// `airline:emirates-JFK-DXB` or `hotel:paris`.
    pub fn entity_key(&self) -> String {
        key_for_ids(&self.entity_ids())
    }
}

impl fmt::Display for RouteDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.raw_slug)
    }
}

pub fn key_for_ids(ids: &[String]) -> String {
    ids.join("-")
}

/// Splits `dep-arr`. Empty sides or a third token make the slug malformed,
/// in which case the whole uppercased input becomes the departure code.
fn split_codes(slug: &str) -> (EntityType, Option<String>, Option<String>) {
    let trimmed = slug.trim();
    let whole = trimmed.to_uppercase();

    if trimmed.is_empty() {
        return (EntityType::Airport, None, None);
    }

    if !trimmed.contains(PAIR_SEPARATOR) {
        return (EntityType::Airport, Some(whole), None);
    }

    let mut parts = trimmed.splitn(2, PAIR_SEPARATOR);
    let departure = parts.next().unwrap_or("").trim();
    let arrival = parts.next().unwrap_or("").trim();

    if departure.is_empty() || arrival.is_empty() || arrival.contains(PAIR_SEPARATOR) {
        log::debug!("[Slug] Malformed pair slug {:?}, using raw code", slug);
        return (EntityType::Airport, Some(whole), None);
    }

    (
        EntityType::Flight,
        Some(departure.to_uppercase()),
        Some(arrival.to_uppercase()),
    )
}

/// A full request path split into locale prefix, namespace and slug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoutePath {
    pub locale: Option<Locale>,
    pub namespace: Namespace,
    /// Everything after the namespace, segments joined by `/`.
    pub slug: String,
}

impl RoutePath {
    /// Parses `/fr/flights/jfk-agp`, `/airlines/emirates/jfk-dxb`, `/hotels/paris`.
    ///
    /// Any supported locale tag is accepted as a prefix, although English
    /// pages are only ever linked at the unprefixed root. A path without a
    /// known namespace is read as a flights slug.
    pub fn parse(path: &str) -> Self {
        let path = path.split(['?', '#']).next().unwrap_or("");
        let mut segments: Vec<&str> = path
            .split('/')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect();

        let locale = segments.first().and_then(|s| Locale::from_tag(s));
        if locale.is_some() {
            segments.remove(0);
        }

        let namespace = match segments.first().and_then(|s| Namespace::from_segment(s)) {
            Some(ns) => {
                segments.remove(0);
                ns
            }
            None => Namespace::Flights,
        };

        Self {
            locale,
            namespace,
            slug: segments.join("/"),
        }
    }

    pub fn descriptor(&self) -> RouteDescriptor {
        let mut parts = self.slug.splitn(2, '/');
        let first = parts.next().unwrap_or("");
        let rest = parts.next();

        match self.namespace {
            Namespace::Flights => RouteDescriptor::parse(&self.slug),
            Namespace::Airports => RouteDescriptor::airport(&self.slug),
            Namespace::Airlines => RouteDescriptor::airline(first, rest),
            Namespace::Hotels => RouteDescriptor::hotel(&self.slug),
        }
    }

    /// Locale-free path used for canonical links, e.g. `/flights/jfk-agp`.
    pub fn canonical_path(&self) -> String {
        if self.slug.is_empty() {
            format!("/{}", self.namespace)
        } else {
            format!("/{}/{}", self.namespace, self.slug.to_lowercase())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_pair() {
        let route = RouteDescriptor::parse("jfk-agp");
        assert_eq!(route.entity_type, EntityType::Flight);
        assert_eq!(route.departure_code.as_deref(), Some("JFK"));
        assert_eq!(route.arrival_code.as_deref(), Some("AGP"));
        assert_eq!(route.raw_slug, "jfk-agp");
    }

    #[test]
    fn test_parse_single() {
        let route = RouteDescriptor::parse("hyd");
        assert_eq!(route.entity_type, EntityType::Airport);
        assert_eq!(route.departure_code.as_deref(), Some("HYD"));
        assert_eq!(route.arrival_code_str(), "");
    }

    #[test]
    fn test_parse_malformed_keeps_raw_input() {
        for slug in ["jfk-", "-agp", "jfk-agp-mad", " - "] {
            let route = RouteDescriptor::parse(slug);
            assert_eq!(route.entity_type, EntityType::Airport, "{}", slug);
            assert_eq!(
                route.departure_code.as_deref(),
                Some(slug.trim().to_uppercase().as_str())
            );
            assert_eq!(route.arrival_code, None);
            assert_eq!(route.raw_slug, slug);
        }
    }

    #[test]
    fn test_parse_empty() {
        let route = RouteDescriptor::parse("");
        assert_eq!(route.departure_code, None);
        assert_eq!(route.arrival_code, None);
    }

    #[test]
    fn test_entity_keys() {
        assert_eq!(RouteDescriptor::parse("jfk-agp").entity_key(), "JFK-AGP");
        assert_eq!(RouteDescriptor::parse("hyd").entity_key(), "HYD");
        assert_eq!(
            RouteDescriptor::airline("Emirates", Some("jfk-dxb")).entity_key(),
            "airline:emirates-JFK-DXB"
        );
        assert_eq!(
            RouteDescriptor::airline("emirates", None).entity_ids(),
            vec!["airline:emirates".to_string()]
        );
        assert_eq!(RouteDescriptor::hotel("paris").entity_key(), "hotel:paris");
    }

    #[test]
    fn test_route_path_prefix_and_namespace() {
        let p = RoutePath::parse("/fr/flights/jfk-agp");
        assert_eq!(p.locale, Some(Locale::Fr));
        assert_eq!(p.namespace, Namespace::Flights);
        assert_eq!(p.slug, "jfk-agp");

        let p = RoutePath::parse("/airlines/emirates/jfk-dxb/");
        assert_eq!(p.locale, None);
        assert_eq!(p.namespace, Namespace::Airlines);
        let d = p.descriptor();
        assert_eq!(d.entity_type, EntityType::Airline);
        assert_eq!(d.entity_slug.as_deref(), Some("emirates"));
        assert_eq!(d.departure_code.as_deref(), Some("JFK"));
        assert_eq!(d.arrival_code.as_deref(), Some("DXB"));
    }

    #[test]
    fn test_route_path_english_prefix() {
        let p = RoutePath::parse("/en/flights/jfk-agp");
        assert_eq!(p.locale, Some(Locale::En));
        assert_eq!(p.slug, "jfk-agp");
        assert_eq!(p.canonical_path(), "/flights/jfk-agp");
    }

    #[test]
    fn test_route_path_defaults_to_flights() {
        let p = RoutePath::parse("jfk-agp?utm=x");
        assert_eq!(p.namespace, Namespace::Flights);
        assert_eq!(p.slug, "jfk-agp");
        assert_eq!(p.canonical_path(), "/flights/jfk-agp");
    }

    #[test]
    fn test_hotel_and_airport_descriptors() {
        let d = RoutePath::parse("/es/hotels/new-york").descriptor();
        assert_eq!(d.entity_type, EntityType::Hotel);
        assert_eq!(d.entity_slug.as_deref(), Some("new-york"));

        let d = RoutePath::parse("/airports/lhr").descriptor();
        assert_eq!(d.entity_type, EntityType::Airport);
        assert_eq!(d.namespace, Namespace::Airports);
        assert_eq!(d.departure_code.as_deref(), Some("LHR"));
    }
}
