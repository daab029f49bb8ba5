// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use routepage_core::config::EngineConfig;
use routepage_core::engine::metrics_for;
use routepage_core::{
    ContentSource, DirectorySource, Engine, FlightBatch, NoUpstream, RenderCache, RenderRequest,
    RenderedPage, RoutePath, SectionKey,
};
use routepage_phrases::{Locale, PhraseBook};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};
use std::path::{Path, PathBuf};
use std::sync::Arc;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to config.json
    #[arg(short, long, env = "ROUTEPAGE_CONFIG")]
    config: Option<PathBuf>,

    /// More log output (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve one page and print its content bundle as JSON
    Resolve {
        path: String,
        /// Locale tag; overrides any prefix in the path
        #[arg(short, long)]
        locale: Option<String>,
        /// Fixture directory with content/ and flights/
        #[arg(short, long)]
        fixtures: Option<PathBuf>,
        /// Print section headings and their sources instead of JSON
        #[arg(long)]
        outline: bool,
    },
    /// Resolve every path listed in a file (one per line) in parallel
    Batch {
        paths_file: PathBuf,
        /// Comma-separated locales to render each path in
        #[arg(short, long, value_delimiter = ',')]
        locales: Vec<String>,
        #[arg(short, long)]
        fixtures: Option<PathBuf>,
        /// Persist rendered phrases in this file between runs
        #[arg(long)]
        cache: Option<PathBuf>,
    },
    /// Print canonical and alternate links for a path
    Urls { path: String },
    /// Compute statistics for a flight file (.json or .csv)
    Metrics { file: PathBuf },
    /// Print the UI phrases for a locale
    Phrases {
        #[arg(short, long, default_value = "en")]
        locale: String,
        /// Print every phrase, not only `ui.*` and `heading.*`
        #[arg(long)]
        all: bool,
        /// Only list keys the locale's own table lacks
        #[arg(long, conflicts_with = "all")]
        missing: bool,
    },
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };
    // Logs go to stderr so JSON on stdout stays clean.
    let _ = TermLogger::init(
        level,
        Config::default(),
        TerminalMode::Stderr,
        ColorChoice::Auto,
    );
}

fn source_for(fixtures: Option<&Path>) -> Box<dyn ContentSource> {
    match fixtures {
        Some(dir) => Box::new(DirectorySource::new(dir)),
        None => Box::new(NoUpstream),
    }
}

fn read_paths(file: &Path) -> Result<Vec<String>> {
    let content = std::fs::read_to_string(file)
        .with_context(|| format!("Failed to read path list {:?}", file))?;
    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty() && !l.starts_with('#'))
        .map(str::to_string)
        .collect())
}

fn print_outline(page: &RenderedPage) {
    let bundle = &page.bundle;
    let tier = |field: &str| {
        bundle
            .source(field)
            .map(|t| format!("{:?}", t))
            .unwrap_or_default()
    };
    println!("{} [{}]", bundle.title, tier("title"));
    for key in SectionKey::ALL {
        println!(
            "  {:<28} [{}]",
            bundle.section_heading(key).unwrap_or(key.as_str()),
            tier(key.as_str())
        );
    }
    println!("  {} FAQs [{}]", bundle.faqs.len(), tier("faqs"));
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config_path = cli.config.unwrap_or_else(EngineConfig::default_path);
    let config = EngineConfig::load(&config_path)
        .with_context(|| format!("Failed to load config {:?}", config_path))?;

    match cli.command {
        Commands::Resolve {
            path,
            locale,
            fixtures,
            outline,
        } => {
            let engine = Engine::new(config);
            let source = source_for(fixtures.as_deref());
            let page = engine.render(&path, locale.as_deref(), source.as_ref());
            match &page {
                None => eprintln!("No template matches '{}'", path),
                Some(page) if outline => print_outline(page),
                Some(_) => {}
            }
            if !outline {
                println!("{}", serde_json::to_string_pretty(&page)?);
            }
        }
        Commands::Batch {
            paths_file,
            locales,
            fixtures,
            cache: cache_file,
        } => {
            let paths = read_paths(&paths_file)?;
            let locales: Vec<Option<String>> = if locales.is_empty() {
                vec![None]
            } else {
                locales.into_iter().map(Some).collect()
            };
            let requests: Vec<RenderRequest> = paths
                .iter()
                .flat_map(|p| locales.iter().map(|l| RenderRequest::new(p, l.as_deref())))
                .collect();

            let capacity = config.cache_capacity;
            let mut engine = Engine::new(config);
            if let Some(cache_path) = &cache_file {
                engine = engine.with_cache(Arc::new(RenderCache::load_with_capacity(
                    cache_path, capacity,
                )));
            }

            let source = source_for(fixtures.as_deref());
            let pages = engine.render_batch(&requests, source.as_ref());
            let rendered = pages.iter().filter(|p| p.is_some()).count();
            for page in &pages {
                println!("{}", serde_json::to_string(page)?);
            }
            log::info!(
                "[Batch] Rendered {} of {} requests",
                rendered,
                requests.len()
            );

            if let (Some(cache), Some(cache_path)) = (engine.cache(), &cache_file) {
                let stats = cache.stats();
                log::info!(
                    "[Batch] Cache: {}/{} entries, {} hits, {} misses",
                    stats.entries,
                    stats.capacity,
                    stats.hits,
                    stats.misses
                );
                cache.save(cache_path)?;
            }
        }
        Commands::Urls { path } => {
            let engine = Engine::new(config);
            let canonical_path = RoutePath::parse(&path).canonical_path();
            for locale in Locale::ALL {
                println!(
                    "{:<6} {}",
                    locale.tag(),
                    engine.urls().canonical_url(&canonical_path, locale)
                );
            }
            println!();
            for link in engine.urls().alternate_urls(&canonical_path) {
                println!(
                    "<link rel=\"alternate\" hreflang=\"{}\" href=\"{}\" />",
                    link.hreflang, link.href
                );
            }
        }
        Commands::Metrics { file } => {
            let batch = FlightBatch::from_path(&file)
                .with_context(|| format!("Failed to read flights from {:?}", file))?;
            println!("{}", serde_json::to_string_pretty(&metrics_for(Some(&batch)))?);
        }
        Commands::Phrases {
            locale,
            all,
            missing,
        } => {
            let locale = Locale::normalize(Some(&locale));
            let book = PhraseBook::builtin();
            if missing {
                for key in book.missing_keys(locale) {
                    println!("{}", key);
                }
            } else if all {
                println!("{}", serde_json::to_string_pretty(&book.phrases_for(locale))?);
            } else {
                println!("{}", serde_json::to_string_pretty(&book.ui_phrases(locale))?);
            }
        }
    }

    Ok(())
}
