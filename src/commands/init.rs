//! Initialize a new showcase workspace

use anyhow::Result;
use std::fs;
use std::path::Path;

/// Default configuration written by `init`
const CONFIG_TEMPLATE: &str = r#"# Showcase Configuration

# Site
title: Showcase

# Remote API
api:
  base_url: https://api.example.com

# Page
page:
  source: index.html
  output: index.html

# Directory
source_dir: source
public_dir: public

# Collections
collections:
  - name: dramas
    endpoint: /api/dramas
    container: dramas-container
    template: cards
  - name: ongoing
    endpoint: /api/ongoing
    container: ongoing-container
    template: cards
  - name: news
    endpoint: /api/news
    container: news-container
    template: news
"#;

/// Starter page with the three containers holding static fallback markup
///
/// Whatever is authored inside a container stays visible until its
/// collection loads; a failed load never clears it.
const PAGE_TEMPLATE: &str = r#"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <title>Showcase</title>
</head>
<body>
  <section>
    <h2>Dramas</h2>
    <div id="dramas-container" class="cards-grid">
      <div class="card" data-title="sample drama">
        <div class="poster">POSTER IMAGE</div>
        <div class="content">
          <h3 class="title">Sample Drama</h3>
          <a href="#" target="_blank" class="download-btn">download now</a>
        </div>
      </div>
    </div>
  </section>
  <section>
    <h2>Ongoing</h2>
    <div id="ongoing-container" class="cards-grid">
      <div class="card" data-title="sample series">
        <div class="poster">POSTER IMAGE</div>
        <div class="content">
          <h3 class="title">Sample Series</h3>
          <a href="#" target="_blank" class="download-btn">download now</a>
        </div>
      </div>
    </div>
  </section>
  <section>
    <h2>News</h2>
    <div id="news-container">
      <div class="news-card">
        <div class="news-image">NEWS IMAGE</div>
        <div class="news-content">
          <h3 class="news-title">Welcome</h3>
          <p class="news-excerpt">Nothing has been published yet.</p>
          <a href="#" class="read-more">read more →</a>
        </div>
      </div>
    </div>
  </section>
</body>
</html>
"#;

/// Initialize a new workspace in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("Workspace already initialized: {:?}", config_path);
    }

    fs::create_dir_all(target_dir)?;
    fs::create_dir_all(target_dir.join("source"))?;

    fs::write(&config_path, CONFIG_TEMPLATE)?;
    fs::write(target_dir.join("source/index.html"), PAGE_TEMPLATE)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::PageDocument;
    use crate::Showcase;
    use tempfile::TempDir;

    #[test]
    fn test_init_creates_loadable_workspace() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();

        let showcase = Showcase::new(dir.path()).unwrap();
        assert_eq!(showcase.config.collections.len(), 3);

        let page = PageDocument::load(showcase.page_source()).unwrap();
        for spec in &showcase.config.collections {
            assert!(page.has_container(&spec.container));
        }
    }

    #[test]
    fn test_init_refuses_existing_workspace() {
        let dir = TempDir::new().unwrap();
        init_site(dir.path()).unwrap();
        assert!(init_site(dir.path()).is_err());
    }
}
