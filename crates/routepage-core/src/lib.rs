// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

//! Content resolution for multilingual travel pages.
//!
//! A request path is parsed into a [`RouteDescriptor`], matched to a
//! [`TemplateKind`], and resolved into a [`ContentBundle`] whose every field
//! comes from upstream content when present and from the locale's phrase
//! table otherwise. [`Engine`] ties the steps together.

pub mod bundle;
pub mod cache;
pub mod config;
pub mod engine;
pub mod flights;
pub mod metrics;
pub mod resolver;
pub mod slug;
pub mod source;
pub mod template;
pub mod upstream;
pub mod urls;

use directories::ProjectDirs;
use std::path::PathBuf;
use thiserror::Error;

pub use bundle::{ContentBundle, SectionKey, Seo};
pub use cache::RenderCache;
pub use config::EngineConfig;
pub use engine::{Engine, RenderRequest, RenderedPage};
pub use flights::{FlightBatch, FlightRecord, NormalizedFlight};
pub use metrics::{compute_metrics, compute_metrics_with, DerivedMetrics};
pub use resolver::ContentResolver;
pub use slug::{EntityType, Namespace, RouteDescriptor, RoutePath};
pub use source::{ContentSource, DirectorySource, MemorySource, NoUpstream};
pub use template::TemplateKind;
pub use upstream::{Tier, UpstreamContent};
pub use urls::{alternate_urls, canonical_url, AlternateLink, UrlBuilder};

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Directory holding `config.json`. Falls back to `.routepage` in the
/// working directory when the platform has no config location.
pub fn get_config_root() -> PathBuf {
    if let Some(proj_dirs) = ProjectDirs::from("com", "routepage", "routepage") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        PathBuf::from(".routepage")
    }
}
