// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

pub mod data;

use crate::locale::Locale;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::sync::OnceLock;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirportEntry {
    pub code: String,
    pub country: String,
    /// City name keyed by locale tag.
    pub names: BTreeMap<String, String>,
}

impl AirportEntry {
    pub fn city_name(&self, locale: Locale) -> Option<&str> {
        self.names
            .get(locale.tag())
            .or_else(|| self.names.get(Locale::En.tag()))
            .map(|s| s.as_str())
            .filter(|s| !s.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AirlineEntry {
    pub code: String,
    pub slug: String,
    pub name: String,
}

/// Built-in lookup of well-known airports and airlines.
///
/// Codes that are not listed are not an error; callers show the raw code
/// (or a title-cased slug) instead.
#[derive(Debug, Clone)]
pub struct Directory {
    airports: Vec<AirportEntry>,
    airlines: Vec<AirlineEntry>,
    by_code: HashMap<String, usize>,
    by_city_slug: HashMap<String, usize>,
    airline_by_key: HashMap<String, usize>,
}

impl Directory {
    pub fn new(airports: Vec<AirportEntry>, airlines: Vec<AirlineEntry>) -> Self {
        let mut by_code = HashMap::with_capacity(airports.len());
        let mut by_city_slug = HashMap::new();
        for (i, airport) in airports.iter().enumerate() {
            by_code.insert(airport.code.to_uppercase(), i);
            if let Some(en) = airport.names.get(Locale::En.tag()) {
                // First airport listed for a city wins (JFK before LGA).
                by_city_slug.entry(slugify(en)).or_insert(i);
            }
        }

        let mut airline_by_key = HashMap::with_capacity(airlines.len() * 2);
        for (i, airline) in airlines.iter().enumerate() {
            airline_by_key.insert(airline.code.to_lowercase(), i);
            airline_by_key.insert(airline.slug.to_lowercase(), i);
        }

        Self {
            airports,
            airlines,
            by_code,
            by_city_slug,
            airline_by_key,
        }
    }

    pub fn builtin() -> &'static Directory {
        static BUILTIN: OnceLock<Directory> = OnceLock::new();
        BUILTIN.get_or_init(|| Directory::new(data::get_all_airports(), data::get_all_airlines()))
    }

    /// O(1) lookup by IATA code (case-insensitive).
    pub fn airport(&self, code: &str) -> Option<&AirportEntry> {
        self.by_code
            .get(&code.trim().to_uppercase())
            .map(|&i| &self.airports[i])
    }

    /// City served by `code` in `locale`, else English, else the code itself.
    pub fn city_name(&self, code: &str, locale: Locale) -> String {
        self.airport(code)
            .and_then(|a| a.city_name(locale))
            .map(|s| s.to_string())
            .unwrap_or_else(|| code.trim().to_uppercase())
    }

    /// City for a URL slug such as `new-york`, localized when the city is
    /// known; otherwise the slug title-cased.
    pub fn city_name_for_slug(&self, slug: &str, locale: Locale) -> String {
        self.by_city_slug
            .get(&slugify(slug))
            .and_then(|&i| self.airports[i].city_name(locale))
            .map(|s| s.to_string())
            .unwrap_or_else(|| title_case_slug(slug))
    }

    /// Lookup by IATA code or URL slug (case-insensitive).
    pub fn airline(&self, key: &str) -> Option<&AirlineEntry> {
        self.airline_by_key
            .get(&key.trim().to_lowercase())
            .map(|&i| &self.airlines[i])
    }

    pub fn airline_name(&self, key: &str) -> String {
        self.airline(key)
            .map(|a| a.name.clone())
            .unwrap_or_else(|| title_case_slug(key))
    }

    pub fn airport_count(&self) -> usize {
        self.airports.len()
    }
}

/// Lowercase, ASCII-alphanumeric runs joined by single hyphens.
pub fn slugify(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut pending_dash = false;
    for c in s.chars() {
        if c.is_ascii_alphanumeric() {
            if pending_dash && !out.is_empty() {
                out.push('-');
            }
            pending_dash = false;
            out.push(c.to_ascii_lowercase());
        } else {
            pending_dash = true;
        }
    }
    out
}

/// `british-airways` → `British Airways`.
pub fn title_case_slug(slug: &str) -> String {
    slug.split(['-', '_', ' '])
        .filter(|w| !w.is_empty())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
