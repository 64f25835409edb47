//! List configured collections

use anyhow::Result;

use crate::helpers::api_url;
use crate::page::PageDocument;
use crate::Showcase;

/// Print each collection with its endpoint, container, and whether the
/// container is present in the source page
pub fn run(showcase: &Showcase) -> Result<()> {
    let page_path = showcase.page_source();
    let page = if page_path.exists() {
        Some(PageDocument::load(&page_path)?)
    } else {
        None
    };

    println!("Collections ({}):", showcase.config.collections.len());
    for spec in &showcase.config.collections {
        let status = match &page {
            Some(doc) if doc.has_container(&spec.container) => "ok",
            Some(_) => "container missing",
            None => "page missing",
        };
        println!(
            "  {} - GET {} -> {} [{}] ({})",
            spec.name,
            api_url(&showcase.config.api.base_url, &spec.endpoint),
            spec.container,
            spec.template.as_str(),
            status
        );
    }

    Ok(())
}
