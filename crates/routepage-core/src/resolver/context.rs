// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Entity names and interpolation values shared by every generated field
//! of one page.

use super::ContentResolver;
use crate::metrics::DerivedMetrics;
use crate::slug::RouteDescriptor;
use crate::template::TemplateKind;
use crate::upstream::{FieldValue, Tier, UpstreamContent};
use routepage_phrases::{interpolate, Locale, Vars};

/// Which title/description/label wording a page uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    /// Two cities.
    Route,
    /// Departure city only.
    Single,
    AirlineRoute,
    Airline,
    Hotel,
}

impl Variant {
    pub fn for_page(kind: TemplateKind, route: &RouteDescriptor) -> Variant {
        match kind {
            TemplateKind::Flight => Variant::Route,
            TemplateKind::Airport => Variant::Single,
            TemplateKind::Airline if route.has_pair() => Variant::AirlineRoute,
            TemplateKind::Airline => Variant::Airline,
            TemplateKind::Hotel => Variant::Hotel,
        }
    }

    pub fn suffix(self) -> &'static str {
        match self {
            Variant::Route => "route",
            Variant::Single => "single",
            Variant::AirlineRoute => "airline_route",
            Variant::Airline => "airline",
            Variant::Hotel => "hotel",
        }
    }

    /// `title` → `title.route`.
    pub fn key(self, namespace: &str) -> String {
        format!("{}.{}", namespace, self.suffix())
    }
}

pub struct PageContext {
    pub kind: TemplateKind,
    pub variant: Variant,
    pub vars: Vars,
    /// Tier that produced each entity name.
    pub name_sources: Vec<(&'static str, Tier)>,
    pub has_flights: bool,
    pub has_prices: bool,
}

impl PageContext {
    pub fn build(
        resolver: &ContentResolver<'_>,
        route: &RouteDescriptor,
        kind: TemplateKind,
        locale: Locale,
        upstream: &UpstreamContent,
        metrics: &DerivedMetrics,
    ) -> PageContext {
        let directory = resolver.directory;
        let variant = Variant::for_page(kind, route);
        let mut vars = Vars::new();
        let mut name_sources = Vec::new();

        let mut name = |field: &'static str, value: &FieldValue, fallback: &dyn Fn() -> String| {
            let (text, tier) = match value.resolve(locale) {
                Some((text, tier)) => (text.trim().to_string(), tier),
                None => (fallback(), Tier::Generated),
            };
            name_sources.push((field, tier));
            text
        };

        let departure_city = route.departure_code.as_deref().map(|code| {
            name("departure_city", &upstream.departure_city, &|| {
                directory.city_name(code, locale)
            })
        });
        let arrival_city = route.arrival_code.as_deref().map(|code| {
            name("arrival_city", &upstream.arrival_city, &|| {
                directory.city_name(code, locale)
            })
        });
        let airline_name = match (kind, route.entity_slug.as_deref()) {
            (TemplateKind::Airline, Some(slug)) => Some(name(
                "airline_name",
                &upstream.airline_name,
                &|| directory.airline_name(slug),
            )),
            _ => None,
        };
        let city_name = match (kind, route.entity_slug.as_deref()) {
            (TemplateKind::Hotel, Some(slug)) => Some(name("city_name", &upstream.city_name, &|| {
                directory.city_name_for_slug(slug, locale)
            })),
            _ => None,
        };

        let place_name = match kind {
            TemplateKind::Flight => arrival_city.clone(),
            TemplateKind::Airport => departure_city.clone(),
            TemplateKind::Airline => arrival_city.clone().or_else(|| airline_name.clone()),
            TemplateKind::Hotel => city_name.clone(),
        };

        let mut set = |key: &str, value: Option<String>| {
            if let Some(value) = value {
                vars.insert(key.to_string(), value);
            }
        };
        set("departureCode", route.departure_code.clone());
        set("arrivalCode", route.arrival_code.clone());
        set("departureCity", departure_city);
        set("arrivalCity", arrival_city);
        set("airlineName", airline_name);
        set("cityName", city_name);
        set("placeName", place_name);
        set("totalFlights", Some(metrics.total_flights.to_string()));
        set("directFlights", Some(metrics.direct_flights.to_string()));
        set("airlines", Some(metrics.airlines.to_string()));
        set("destinations", Some(metrics.destinations.to_string()));
        set(
            "cheapestDay",
            Some(localized_name(resolver, locale, "weekday", &metrics.cheapest_weekday)),
        );
        set(
            "cheapestMonth",
            Some(localized_name(resolver, locale, "month", &metrics.cheapest_month)),
        );
        if metrics.has_prices() {
            set("price", format_price(resolver, locale, metrics.cheapest_price));
            set("avgPrice", format_price(resolver, locale, metrics.avg_price));
        }

        // The label is itself a phrase; if it cannot be filled, every
        // template using {label} falls through to its hard default.
        let label_key = variant.key("label");
        match resolver
            .phrases
            .get(locale, &label_key)
            .map(|template| interpolate(template, &vars))
        {
            Some(Ok(label)) => {
                vars.insert("label".to_string(), label);
            }
            Some(Err(e)) => log::warn!("[Resolver] {} for {}: {}", label_key, locale, e),
            None => log::warn!("[Resolver] No phrase {} for {}", label_key, locale),
        }

        PageContext {
            kind,
            variant,
            vars,
            name_sources,
            has_flights: metrics.has_flights(),
            has_prices: metrics.has_prices(),
        }
    }
}

/// `weekday` + `Tuesday` → the locale's `weekday.tuesday`, or the name as
/// given when no phrase exists for it.
fn localized_name(resolver: &ContentResolver<'_>, locale: Locale, namespace: &str, name: &str) -> String {
    let key = format!("{}.{}", namespace, name.trim().to_lowercase());
    resolver
        .phrases
        .get(locale, &key)
        .map(|s| s.to_string())
        .unwrap_or_else(|| name.trim().to_string())
}

/// Rounded amount placed into the locale's `price.format`.
pub fn format_price(resolver: &ContentResolver<'_>, locale: Locale, amount: f64) -> Option<String> {
    let template = resolver.phrases.get(locale, "price.format")?;
    let mut vars = Vars::new();
    vars.insert("amount".to_string(), format!("{:.0}", amount.round()));
    vars.insert("symbol".to_string(), resolver.currency.symbol.clone());
    match interpolate(template, &vars) {
        Ok(price) => Some(price),
        Err(e) => {
            log::warn!("[Resolver] price.format for {}: {}", locale, e);
            None
        }
    }
}
