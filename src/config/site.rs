//! Site configuration (_config.yml)

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,

    // Remote API
    pub api: ApiConfig,

    // Page
    pub page: PageConfig,

    // Directory
    pub source_dir: String,
    pub public_dir: String,

    // Collections
    pub collections: Vec<CollectionConfig>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Showcase".to_string(),
            api: ApiConfig::default(),
            page: PageConfig::default(),
            source_dir: "source".to_string(),
            public_dir: "public".to_string(),
            collections: vec![
                CollectionConfig {
                    name: "dramas".to_string(),
                    endpoint: "/api/dramas".to_string(),
                    container: "dramas-container".to_string(),
                    template: TemplateKind::Cards,
                },
                CollectionConfig {
                    name: "ongoing".to_string(),
                    endpoint: "/api/ongoing".to_string(),
                    container: "ongoing-container".to_string(),
                    template: TemplateKind::Cards,
                },
                CollectionConfig {
                    name: "news".to_string(),
                    endpoint: "/api/news".to_string(),
                    container: "news-container".to_string(),
                    template: TemplateKind::News,
                },
            ],
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}

/// Remote API configuration
///
/// An empty `base_url` means endpoint paths are used as-is (same-origin
/// relative deployments behind a reverse proxy).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub base_url: String,
}

/// Page locations, relative to `source_dir` and `public_dir`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub source: String,
    pub output: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            source: "index.html".to_string(),
            output: "index.html".to_string(),
        }
    }
}

/// One named collection: where to fetch it and where to render it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CollectionConfig {
    pub name: String,
    pub endpoint: String,
    pub container: String,
    pub template: TemplateKind,
}

/// Which fragment template a collection renders with
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateKind {
    Cards,
    News,
}

impl TemplateKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::Cards => "cards",
            TemplateKind::News => "news",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SiteConfig::default();
        assert_eq!(config.title, "Showcase");
        assert_eq!(config.source_dir, "source");
        assert_eq!(config.collections.len(), 3);
        assert_eq!(config.collections[0].container, "dramas-container");
        assert_eq!(config.collections[2].template, TemplateKind::News);
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
title: DramaWallah
api:
  base_url: https://dramawallah-bot.onrender.com
collections:
  - name: dramas
    endpoint: /api/dramas
    container: .cards-grid
    template: cards
"#;
        let config: SiteConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.title, "DramaWallah");
        assert_eq!(config.api.base_url, "https://dramawallah-bot.onrender.com");
        assert_eq!(config.collections.len(), 1);
        assert_eq!(config.collections[0].container, ".cards-grid");
        assert_eq!(config.collections[0].template, TemplateKind::Cards);
        // unspecified sections keep their defaults
        assert_eq!(config.page.source, "index.html");
        assert_eq!(config.public_dir, "public");
    }

    #[test]
    fn test_template_kind_round_trip() {
        let kind: TemplateKind = serde_yaml::from_str("news").unwrap();
        assert_eq!(kind, TemplateKind::News);
        assert_eq!(kind.as_str(), "news");
    }
}
