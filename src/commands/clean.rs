//! Clean the public directory

use anyhow::Result;
use std::fs;

use crate::Showcase;

/// Remove the public directory
pub fn run(showcase: &Showcase) -> Result<()> {
    if showcase.public_dir.exists() {
        fs::remove_dir_all(&showcase.public_dir)?;
        tracing::info!("Deleted: {:?}", showcase.public_dir);
    }

    Ok(())
}
