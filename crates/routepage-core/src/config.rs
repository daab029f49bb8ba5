// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::EngineError;
use routepage_phrases::Locale;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Schema version for migration. Increment when the on-disk shape changes.
///
/// v1 kept the site domain as a top-level `domain` string.
/// v2 moved it into `site` and added the URL scheme.
pub const CURRENT_SCHEMA_VERSION: u32 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub scheme: String,
    pub domain: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scheme: "https".to_string(),
            domain: "www.example-flights.com".to_string(),
        }
    }
}

impl SiteConfig {
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}",
            self.scheme.trim().trim_end_matches("://"),
            self.domain.trim().trim_end_matches('/')
        )
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyConfig {
    pub code: String,
    pub symbol: String,
}

impl Default for CurrencyConfig {
    fn default() -> Self {
        Self {
            code: "USD".to_string(),
            symbol: "$".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default)]
    pub schema_version: u32,
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub currency: CurrencyConfig,
    /// Locale used when a request carries none.
    #[serde(default)]
    pub default_locale: Locale,
    /// Most rendered phrases a [`RenderCache`](crate::RenderCache) keeps.
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
    /// v1 field, folded into `site.domain` on load.
    #[serde(default, skip_serializing)]
    domain: Option<String>,
}

fn default_cache_capacity() -> usize {
    crate::cache::DEFAULT_CAPACITY
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            site: SiteConfig::default(),
            currency: CurrencyConfig::default(),
            default_locale: Locale::En,
            cache_capacity: crate::cache::DEFAULT_CAPACITY,
            domain: None,
        }
    }
}

impl EngineConfig {
    pub fn default_path() -> PathBuf {
        crate::get_config_root().join("config.json")
    }

    /// Loads the config at `path`, or defaults when there is no file.
    ///
    /// Older schema versions are migrated and written back in place.
    pub fn load(path: &Path) -> Result<EngineConfig, EngineError> {
        if !path.exists() {
            log::debug!(
                "[Config] No config file found at {:?}, using defaults",
                path
            );
            return Ok(EngineConfig::default());
        }

        let content = fs::read_to_string(path)?;
        let mut config: EngineConfig = serde_json::from_str(&content).map_err(|e| {
            log::error!("[Config] JSON parse error for {:?}: {}", path, e);
            e
        })?;

        if config.schema_version < CURRENT_SCHEMA_VERSION {
            log::info!(
                "[Config] Migrating {:?} from schema v{} to v{}",
                path,
                config.schema_version,
                CURRENT_SCHEMA_VERSION
            );
            config.migrate();
            if let Err(e) = config.save(path) {
                log::warn!("[Config] Could not write migrated config: {}", e);
            }
        }

        config.validate()?;
        log::info!("[Config] Loaded {:?} (site {})", path, config.site.base_url());
        Ok(config)
    }

    fn migrate(&mut self) {
        // v1→v2: top-level domain moved under `site`.
        if self.schema_version <= 1 {
            if let Some(domain) = self.domain.take().filter(|d| !d.trim().is_empty()) {
                self.site.domain = domain;
                log::info!("[Config] v1→v2: moved domain into site");
            }
        }
        self.domain = None;
        self.schema_version = CURRENT_SCHEMA_VERSION;
    }

    pub fn validate(&self) -> Result<(), EngineError> {
        if self.site.domain.trim().is_empty() {
            return Err(EngineError::Config("site.domain is empty".to_string()));
        }
        if self.site.scheme.trim().is_empty() {
            return Err(EngineError::Config("site.scheme is empty".to_string()));
        }
        if self.cache_capacity == 0 {
            return Err(EngineError::Config("cache_capacity must be positive".to_string()));
        }
        if self.currency.symbol.is_empty() && self.currency.code.is_empty() {
            return Err(EngineError::Config(
                "currency needs a symbol or a code".to_string(),
            ));
        }
        Ok(())
    }

    pub fn save(&self, path: &Path) -> Result<(), EngineError> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempdir().unwrap();
        let config = EngineConfig::load(&dir.path().join("config.json")).unwrap();
        assert_eq!(config, EngineConfig::default());
        assert_eq!(config.site.base_url(), "https://www.example-flights.com");
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("config.json");
        let mut config = EngineConfig::default();
        config.currency = CurrencyConfig {
            code: "EUR".to_string(),
            symbol: "€".to_string(),
        };
        config.default_locale = Locale::Fr;
        config.cache_capacity = 64;
        config.save(&path).unwrap();

        let loaded = EngineConfig::load(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_v1_migration_moves_domain() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"schema_version": 1, "domain": "flights.example.org"}"#,
        )
        .unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert_eq!(config.schema_version, CURRENT_SCHEMA_VERSION);
        assert_eq!(config.site.domain, "flights.example.org");
        assert_eq!(config.site.scheme, "https");

        // The migrated file is written back without the legacy field.
        let saved: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(saved["schema_version"], 2);
        assert!(saved.get("domain").is_none());
        assert_eq!(saved["site"]["domain"], "flights.example.org");
        let reloaded = EngineConfig::load(&path).unwrap();
        assert_eq!(reloaded, config);
    }

    #[test]
    fn test_parse_error_is_reported() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, "{ nope").unwrap();
        assert!(matches!(
            EngineConfig::load(&path),
            Err(EngineError::Json(_))
        ));
    }

    #[test]
    fn test_empty_domain_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(
            &path,
            r#"{"schema_version": 2, "site": {"scheme": "https", "domain": " "}}"#,
        )
        .unwrap();
        assert!(matches!(
            EngineConfig::load(&path),
            Err(EngineError::Config(_))
        ));
    }

    #[test]
    fn test_zero_cache_capacity_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{"schema_version": 2, "cache_capacity": 0}"#).unwrap();
        assert!(matches!(
            EngineConfig::load(&path),
            Err(EngineError::Config(_))
        ));
    }
}
