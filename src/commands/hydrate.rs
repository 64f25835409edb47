//! Hydrate the page from the remote API

use anyhow::Result;

use crate::hydrator::{HydrateSummary, Hydrator};
use crate::Showcase;

/// Run one hydrate cycle and log a summary
pub async fn run(showcase: &Showcase) -> Result<HydrateSummary> {
    let start = std::time::Instant::now();

    let hydrator = Hydrator::new(showcase)?;
    let summary = hydrator.run().await?;

    tracing::info!(
        "Hydrated {}/{} collections in {:.2}s",
        summary.populated(),
        summary.outcomes.len(),
        start.elapsed().as_secs_f64()
    );

    Ok(summary)
}
