// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Typed view of upstream page content.
//!
//! Every field is either a plain string, a per-locale map or absent. The
//! fallback chain pattern-matches on these variants instead of probing the
//! shape of loosely-typed JSON.

use routepage_phrases::Locale;
use serde::de::{self, Deserializer, MapAccess, SeqAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which step of the fallback chain produced a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Tier {
    /// Upstream plain value for the exact field.
    Upstream,
    /// Upstream per-locale map, requested locale.
    UpstreamLocale,
    /// Upstream per-locale map, English entry.
    UpstreamEnglish,
    /// Upstream per-locale map, first non-empty entry.
    UpstreamFirst,
    /// Built from the locale's phrase table.
    Generated,
    /// English sentence used when generation failed.
    HardDefault,
}

impl Tier {
    pub fn is_upstream(self) -> bool {
        matches!(
            self,
            Tier::Upstream | Tier::UpstreamLocale | Tier::UpstreamEnglish | Tier::UpstreamFirst
        )
    }
}

/// `true` when the map key names `locale`, ignoring case and region
/// (`"fr"`, `"FR"`, `"fr-CA"`).
fn key_matches(key: &str, locale: Locale) -> bool {
    let primary = key.trim().split(['-', '_']).next().unwrap_or("");
    primary.eq_ignore_ascii_case(locale.tag())
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}

/// Per-locale values in the order upstream sent them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LocaleMap<T = String> {
    entries: Vec<(String, T)>,
}

impl<T> LocaleMap<T> {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn insert(&mut self, key: &str, value: T) {
        match self.entries.iter_mut().find(|(k, _)| k == key) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((key.to_string(), value)),
        }
    }

    pub fn with(mut self, key: &str, value: T) -> Self {
        self.insert(key, value);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Three-step lookup: requested locale, then English, then the first
    /// usable entry in insertion order.
    pub fn pick(&self, locale: Locale, usable: impl Fn(&T) -> bool) -> Option<(&T, Tier)> {
        let find = |l: Locale| {
            self.entries
                .iter()
                .find(|(k, v)| key_matches(k, l) && usable(v))
                .map(|(_, v)| v)
        };
        if let Some(v) = find(locale) {
            return Some((v, Tier::UpstreamLocale));
        }
        if locale != Locale::En {
            if let Some(v) = find(Locale::En) {
                return Some((v, Tier::UpstreamEnglish));
            }
        }
        self.entries
            .iter()
            .find(|(_, v)| usable(v))
            .map(|(_, v)| (v, Tier::UpstreamFirst))
    }
}

impl<T: Serialize> Serialize for LocaleMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (k, v) in &self.entries {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

struct LocaleMapVisitor<T>(std::marker::PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for LocaleMapVisitor<T> {
    type Value = LocaleMap<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a map of locale tags to values")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut map = LocaleMap::new();
        while let Some((key, value)) = access.next_entry::<String, Option<T>>()? {
            // Null entries carry nothing; dropping them keeps `pick` simple.
            if let Some(value) = value {
                map.insert(&key, value);
            }
        }
        Ok(map)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for LocaleMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(LocaleMapVisitor(std::marker::PhantomData))
    }
}

/// One upstream text field.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FieldValue {
    Plain(String),
    PerLocale(LocaleMap),
    #[default]
    Absent,
}

impl FieldValue {
    pub fn plain(s: &str) -> Self {
        FieldValue::Plain(s.to_string())
    }

    pub fn per_locale(pairs: &[(&str, &str)]) -> Self {
        let mut map = LocaleMap::new();
        for (k, v) in pairs {
            map.insert(k, v.to_string());
        }
        FieldValue::PerLocale(map)
    }

    /// First two steps of the fallback chain for this field. Values are
    /// returned verbatim; only blank strings are skipped.
    pub fn resolve(&self, locale: Locale) -> Option<(&str, Tier)> {
        match self {
            FieldValue::Plain(s) if !is_blank(s) => Some((s.as_str(), Tier::Upstream)),
            FieldValue::Plain(_) | FieldValue::Absent => None,
            FieldValue::PerLocale(map) => map
                .pick(locale, |v| !is_blank(v))
                .map(|(v, tier)| (v.as_str(), tier)),
        }
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Plain(s) => serializer.serialize_str(s),
            FieldValue::PerLocale(map) => map.serialize(serializer),
            FieldValue::Absent => serializer.serialize_none(),
        }
    }
}

struct FieldValueVisitor;

impl<'de> Visitor<'de> for FieldValueVisitor {
    type Value = FieldValue;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a string, a map of locale tags to strings, or null")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Ok(FieldValue::Plain(v.to_string()))
    }

    fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
        Ok(FieldValue::Plain(v))
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(FieldValue::Absent)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(FieldValue::Absent)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(FieldValueVisitor)
    }

    fn visit_map<A: MapAccess<'de>>(self, access: A) -> Result<Self::Value, A::Error> {
        LocaleMapVisitor::<String>(std::marker::PhantomData)
            .visit_map(access)
            .map(FieldValue::PerLocale)
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FieldValueVisitor)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Faq {
    #[serde(alias = "question", default, deserialize_with = "nullable_string")]
    pub q: String,
    #[serde(alias = "answer", default, deserialize_with = "nullable_string")]
    pub a: String,
}

/// Missing or null halves become empty and are dropped by `is_complete`.
fn nullable_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl Faq {
    pub fn new(q: &str, a: &str) -> Self {
        Self {
            q: q.to_string(),
            a: a.to_string(),
        }
    }

    fn is_complete(&self) -> bool {
        !is_blank(&self.q) && !is_blank(&self.a)
    }
}

/// Upstream FAQ list, plain or per locale.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum FaqField {
    List(Vec<Faq>),
    PerLocale(LocaleMap<Vec<Faq>>),
    #[default]
    Absent,
}

fn usable_faqs(list: &[Faq]) -> bool {
    list.iter().any(Faq::is_complete)
}

impl FaqField {
    /// Same chain as [`FieldValue::resolve`]. Entries missing a question
    /// or an answer are dropped; a list with none left counts as empty.
    pub fn resolve(&self, locale: Locale) -> Option<(Vec<Faq>, Tier)> {
        let (list, tier) = match self {
            FaqField::List(list) if usable_faqs(list) => (list, Tier::Upstream),
            FaqField::List(_) | FaqField::Absent => return None,
            FaqField::PerLocale(map) => map.pick(locale, |l| usable_faqs(l))?,
        };
        let faqs = list.iter().filter(|f| f.is_complete()).cloned().collect();
        Some((faqs, tier))
    }
}

impl Serialize for FaqField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FaqField::List(list) => list.serialize(serializer),
            FaqField::PerLocale(map) => map.serialize(serializer),
            FaqField::Absent => serializer.serialize_none(),
        }
    }
}

struct FaqFieldVisitor;

impl<'de> Visitor<'de> for FaqFieldVisitor {
    type Value = FaqField;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a list of {q, a} entries, a map of locale tags to such lists, or null")
    }

    fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(FaqField::Absent)
    }

    fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
        Ok(FaqField::Absent)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Self::Value, D::Error> {
        deserializer.deserialize_any(FaqFieldVisitor)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
        let mut list = Vec::new();
        while let Some(faq) = seq.next_element::<Faq>()? {
            list.push(faq);
        }
        Ok(FaqField::List(list))
    }

    fn visit_map<A: MapAccess<'de>>(self, access: A) -> Result<Self::Value, A::Error> {
        LocaleMapVisitor::<Vec<Faq>>(std::marker::PhantomData)
            .visit_map(access)
            .map(FaqField::PerLocale)
    }
}

impl<'de> Deserialize<'de> for FaqField {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(FaqFieldVisitor)
    }
}

/// Content returned by the upstream content API. Read-only input; missing
/// JSON fields are `Absent`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpstreamContent {
    pub title: FieldValue,
    pub description: FieldValue,
    pub booking_steps: FieldValue,
    pub cancellation_policy: FieldValue,
    pub classes: FieldValue,
    pub destinations_overview: FieldValue,
    pub popular_destinations: FieldValue,
    pub places_to_visit: FieldValue,
    pub city_info: FieldValue,
    pub best_time_to_visit: FieldValue,
    pub faqs: FaqField,
    pub airline_name: FieldValue,
    pub departure_city: FieldValue,
    pub arrival_city: FieldValue,
    pub city_name: FieldValue,
    pub keywords: FieldValue,
    pub og_title: FieldValue,
    pub og_description: FieldValue,
}

impl UpstreamContent {
    pub fn from_json(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }
}
