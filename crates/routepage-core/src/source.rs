// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Upstream collaborators.
//!
//! The engine never fetches anything itself. A [`ContentSource`] hands it
//! already-resolved upstream data; `None` is treated exactly like a record
//! with every field empty.

use crate::flights::FlightBatch;
use crate::slug::key_for_ids;
use crate::upstream::UpstreamContent;
use routepage_phrases::Locale;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

pub trait ContentSource: Send + Sync {
    /// Upstream content for an entity in one language (`en=1 … fr=4`).
    fn fetch_content(&self, ids: &[String], language_id: u8) -> Option<UpstreamContent>;

    fn fetch_flight_data(&self, ids: &[String]) -> Option<FlightBatch>;
}

/// A source with no data at all. Every page is fully generated.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoUpstream;

impl ContentSource for NoUpstream {
    fn fetch_content(&self, _ids: &[String], _language_id: u8) -> Option<UpstreamContent> {
        None
    }

    fn fetch_flight_data(&self, _ids: &[String]) -> Option<FlightBatch> {
        None
    }
}

/// In-memory source keyed by entity key. Content stored without a language
/// id is served for every language.
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    content: HashMap<(String, Option<u8>), UpstreamContent>,
    flights: HashMap<String, FlightBatch>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(mut self, key: &str, language_id: Option<u8>, content: UpstreamContent) -> Self {
        self.content.insert((key.to_string(), language_id), content);
        self
    }

    pub fn with_flights(mut self, key: &str, batch: FlightBatch) -> Self {
        self.flights.insert(key.to_string(), batch);
        self
    }
}

impl ContentSource for MemorySource {
    fn fetch_content(&self, ids: &[String], language_id: u8) -> Option<UpstreamContent> {
        let key = key_for_ids(ids);
        self.content
            .get(&(key.clone(), Some(language_id)))
            .or_else(|| self.content.get(&(key, None)))
            .cloned()
    }

    fn fetch_flight_data(&self, ids: &[String]) -> Option<FlightBatch> {
        self.flights.get(&key_for_ids(ids)).cloned()
    }
}

/// Fixture tree on disk:
///
/// ```text
/// <root>/content/<key>.<language_id>.json   per-language content
/// <root>/content/<key>.json                 content for every language
/// <root>/flights/<key>.json | <key>.csv     flight batch
/// ```
///
/// `:` in entity keys is written as `_` in file names. Unreadable or
/// malformed files are logged and treated as missing.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    root: PathBuf,
}

impl DirectorySource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn file_stem(ids: &[String]) -> String {
        key_for_ids(ids).replace(':', "_")
    }

    pub fn content_path(&self, ids: &[String], language_id: Option<u8>) -> PathBuf {
        let stem = Self::file_stem(ids);
        let name = match language_id {
            Some(id) => format!("{}.{}.json", stem, id),
            None => format!("{}.json", stem),
        };
        self.root.join("content").join(name)
    }

    fn read_content(path: &Path) -> Option<UpstreamContent> {
        let content = match std::fs::read_to_string(path) {
            Ok(c) => c,
            Err(e) => {
                log::warn!("[Source] Failed to read {:?}: {}", path, e);
                return None;
            }
        };
        match UpstreamContent::from_json(&content) {
            Ok(c) => Some(c),
            Err(e) => {
                log::warn!("[Source] Ignoring malformed content {:?}: {}", path, e);
                None
            }
        }
    }
}

impl ContentSource for DirectorySource {
    fn fetch_content(&self, ids: &[String], language_id: u8) -> Option<UpstreamContent> {
        if ids.is_empty() {
            return None;
        }
        // Unknown ids only ever see the shared file.
        let per_language = Locale::from_language_id(language_id).map(Locale::language_id);
        if per_language.is_none() {
            log::debug!("[Source] Unknown language id {} for {:?}", language_id, ids);
        }
        per_language
            .map(Some)
            .into_iter()
            .chain([None])
            .map(|id| self.content_path(ids, id))
            .find(|p| p.is_file())
            .and_then(|p| Self::read_content(&p))
    }

    fn fetch_flight_data(&self, ids: &[String]) -> Option<FlightBatch> {
        if ids.is_empty() {
            return None;
        }
        let stem = Self::file_stem(ids);
        let dir = self.root.join("flights");
        let path = ["json", "csv"]
            .iter()
            .map(|ext| dir.join(format!("{}.{}", stem, ext)))
            .find(|p| p.is_file())?;

        match FlightBatch::from_path(&path) {
            Ok(batch) => {
                log::debug!("[Source] {} flights from {:?}", batch.flights.len(), path);
                Some(batch)
            }
            Err(e) => {
                log::warn!("[Source] Ignoring flight data {:?}: {}", path, e);
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::upstream::FieldValue;
    use std::fs;
    use tempfile::tempdir;

    fn ids(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_no_upstream() {
        assert!(NoUpstream.fetch_content(&ids(&["JFK"]), 1).is_none());
        assert!(NoUpstream.fetch_flight_data(&ids(&["JFK"])).is_none());
    }

    #[test]
    fn test_memory_source_language_fallback() {
        let en = UpstreamContent {
            title: FieldValue::plain("any language"),
            ..Default::default()
        };
        let ru = UpstreamContent {
            title: FieldValue::plain("только русский"),
            ..Default::default()
        };
        let source = MemorySource::new()
            .with_content("JFK-AGP", None, en.clone())
            .with_content("JFK-AGP", Some(3), ru.clone());

        assert_eq!(source.fetch_content(&ids(&["JFK", "AGP"]), 3), Some(ru));
        assert_eq!(source.fetch_content(&ids(&["JFK", "AGP"]), 4), Some(en));
        assert_eq!(source.fetch_content(&ids(&["JFK"]), 4), None);
    }

    #[test]
    fn test_directory_source_layout() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("content")).unwrap();
        fs::create_dir_all(dir.path().join("flights")).unwrap();
        fs::write(
            dir.path().join("content").join("hotel_paris.4.json"),
            r#"{"title": "Hôtels parisiens"}"#,
        )
        .unwrap();
        fs::write(
            dir.path().join("flights").join("JFK-AGP.csv"),
            "from,to,price\nJFK,AGP,300\n",
        )
        .unwrap();

        let source = DirectorySource::new(dir.path());
        let content = source.fetch_content(&ids(&["hotel:paris"]), 4).unwrap();
        assert_eq!(content.title, FieldValue::plain("Hôtels parisiens"));
        assert!(source.fetch_content(&ids(&["hotel:paris"]), 1).is_none());

        let batch = source.fetch_flight_data(&ids(&["JFK", "AGP"])).unwrap();
        assert_eq!(batch.flights.len(), 1);
        assert!(source.fetch_flight_data(&ids(&["JFK", "MAD"])).is_none());
    }

    #[test]
    fn test_directory_source_malformed_is_none() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("content")).unwrap();
        fs::create_dir_all(dir.path().join("flights")).unwrap();
        fs::write(dir.path().join("content").join("HYD.json"), "{broken").unwrap();
        fs::write(dir.path().join("flights").join("HYD.json"), "[1, 2]").unwrap();

        let source = DirectorySource::new(dir.path());
        assert!(source.fetch_content(&ids(&["HYD"]), 1).is_none());
        assert!(source.fetch_flight_data(&ids(&["HYD"])).is_none());
    }

    #[test]
    fn test_unknown_language_id_reads_shared_file() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("content")).unwrap();
        fs::write(dir.path().join("content").join("LHR.json"), r#"{"title": "Shared"}"#).unwrap();
        fs::write(dir.path().join("content").join("LHR.9.json"), r#"{"title": "Stray"}"#).unwrap();

        let source = DirectorySource::new(dir.path());
        let content = source.fetch_content(&ids(&["LHR"]), 9).unwrap();
        assert_eq!(content.title, FieldValue::plain("Shared"));
    }
}
