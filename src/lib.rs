//! showcase-rs: hydrates a static showcase page from a remote JSON API
//!
//! This crate fetches named collections (titles, series, news posts) from
//! a configured HTTP API and renders them as HTML card fragments into
//! container elements of a page, leaving the page's static markup in
//! place for any collection that fails to load.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod hydrator;
pub mod page;
pub mod render;
pub mod server;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The main Showcase application
#[derive(Clone)]
pub struct Showcase {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
    /// Source directory (page + static assets)
    pub source_dir: PathBuf,
    /// Public (output) directory
    pub public_dir: PathBuf,
}

impl Showcase {
    /// Create a new Showcase instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        let source_dir = base_dir.join(&config.source_dir);
        let public_dir = base_dir.join(&config.public_dir);

        Ok(Self {
            config,
            base_dir,
            source_dir,
            public_dir,
        })
    }

    /// Path of the page to hydrate
    pub fn page_source(&self) -> PathBuf {
        self.source_dir.join(&self.config.page.source)
    }

    /// Path of the hydrated output page
    pub fn page_output(&self) -> PathBuf {
        self.public_dir.join(&self.config.page.output)
    }

    /// Run one hydrate cycle
    pub async fn hydrate(&self) -> Result<hydrator::HydrateSummary> {
        commands::hydrate::run(self).await
    }

    /// Clean the public directory
    pub fn clean(&self) -> Result<()> {
        commands::clean::run(self)
    }
}
