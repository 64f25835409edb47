//! Hydrator
//!
//! Orchestrates one load cycle: every configured collection is fetched
//! concurrently (all requests in flight before any result is consumed),
//! then each successful one is rendered into its container. A failed
//! collection leaves its container's static markup untouched; only
//! environment problems (unreadable page, unwritable output) abort the
//! run.

use anyhow::Result;
use std::fs;
use walkdir::WalkDir;

use crate::config::{CollectionConfig, TemplateKind};
use crate::content::remote::{CollectionClient, FetchError};
use crate::content::{NewsPost, Title};
use crate::helpers::api_url;
use crate::page::PageDocument;
use crate::render;
use crate::Showcase;

/// Observable state of one target container after a hydrate cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerState {
    /// Static fallback markup still in place
    Pending,
    /// Rendered from fetched items
    Populated,
}

/// Per-collection outcome of a hydrate run
#[derive(Debug, Clone)]
pub struct CollectionOutcome {
    pub name: String,
    pub container: String,
    pub state: ContainerState,
    pub items: usize,
}

/// What a hydrate run did, collection by collection
#[derive(Debug, Clone)]
pub struct HydrateSummary {
    pub outcomes: Vec<CollectionOutcome>,
}

impl HydrateSummary {
    /// Number of containers that ended the run populated
    pub fn populated(&self) -> usize {
        self.outcomes
            .iter()
            .filter(|o| o.state == ContainerState::Populated)
            .count()
    }
}

/// Rendered markup for one collection plus its item count
type Rendered = (String, usize);

/// Page hydrator
pub struct Hydrator {
    showcase: Showcase,
    client: CollectionClient,
}

impl Hydrator {
    /// Create a new hydrator
    pub fn new(showcase: &Showcase) -> Result<Self> {
        Ok(Self {
            showcase: showcase.clone(),
            client: CollectionClient::new()?,
        })
    }

    /// Run one hydrate cycle
    pub async fn run(&self) -> Result<HydrateSummary> {
        let mut page = PageDocument::load(self.showcase.page_source())?;

        let collections = &self.showcase.config.collections;
        let base_url = &self.showcase.config.api.base_url;

        // Fan-out: spawn every fetch before consuming any result
        let mut handles = Vec::with_capacity(collections.len());
        for collection in collections {
            let client = self.client.clone();
            let url = api_url(base_url, &collection.endpoint);
            let template = collection.template;
            handles.push(tokio::spawn(async move {
                fetch_fragments(client, url, template).await
            }));
        }

        // Consume per collection; no result gates another
        let mut outcomes = Vec::with_capacity(collections.len());
        for (collection, handle) in collections.iter().zip(handles) {
            let outcome = match handle.await? {
                Ok(Some(rendered)) => inject(&mut page, collection, rendered),
                Ok(None) => {
                    tracing::debug!(
                        "collection `{}` had nothing to render, leaving `{}` untouched",
                        collection.name,
                        collection.container
                    );
                    pending(collection)
                }
                Err(e) => {
                    tracing::warn!("failed to load collection `{}`: {}", collection.name, e);
                    pending(collection)
                }
            };
            outcomes.push(outcome);
        }

        self.copy_assets()?;
        page.save(self.showcase.page_output())?;

        Ok(HydrateSummary { outcomes })
    }

    /// Copy static assets (css, images, ...) from source to public
    ///
    /// The page itself is skipped; its hydrated form is written
    /// separately.
    fn copy_assets(&self) -> Result<()> {
        let source_dir = &self.showcase.source_dir;
        if !source_dir.exists() {
            return Ok(());
        }
        let page_source = self.showcase.page_source();

        for entry in WalkDir::new(source_dir)
            .follow_links(true)
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if path.is_file() && path != page_source {
                let relative = path.strip_prefix(source_dir)?;
                let dest = self.showcase.public_dir.join(relative);

                if let Some(parent) = dest.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(path, &dest)?;
            }
        }

        Ok(())
    }
}

/// Fetch one collection and render it to fragment markup
///
/// Runs inside the spawned fetch task; rendering is pure so doing it
/// off the consuming task is free concurrency.
async fn fetch_fragments(
    client: CollectionClient,
    url: String,
    template: TemplateKind,
) -> std::result::Result<Option<Rendered>, FetchError> {
    match template {
        TemplateKind::Cards => {
            let items: Option<Vec<Title>> = client.fetch(&url).await?;
            Ok(items.map(|items| {
                (
                    render::render_list(&items, render::title_card),
                    items.len(),
                )
            }))
        }
        TemplateKind::News => {
            let items: Option<Vec<NewsPost>> = client.fetch(&url).await?;
            Ok(items.map(|items| {
                (render::render_list(&items, render::news_card), items.len())
            }))
        }
    }
}

/// Swap rendered markup into the collection's container
fn inject(
    page: &mut PageDocument,
    collection: &CollectionConfig,
    (inner, count): Rendered,
) -> CollectionOutcome {
    match page.replace_container(&collection.container, &inner) {
        Ok(()) => {
            tracing::info!("rendered {} item(s) into `{}`", count, collection.container);
            CollectionOutcome {
                name: collection.name.clone(),
                container: collection.container.clone(),
                state: ContainerState::Populated,
                items: count,
            }
        }
        Err(e) => {
            tracing::warn!("skipping collection `{}`: {}", collection.name, e);
            pending(collection)
        }
    }
}

fn pending(collection: &CollectionConfig) -> CollectionOutcome {
    CollectionOutcome {
        name: collection.name.clone(),
        container: collection.container.clone(),
        state: ContainerState::Pending,
        items: 0,
    }
}
