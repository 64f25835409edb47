//! Collection item models
//!
//! These are transient: re-fetched on every hydrate run and never
//! persisted. The API returns database documents, so unknown fields
//! (`type`, `created_at`, ...) are ignored.

use serde::{Deserialize, Serialize};

/// A drama or ongoing-series entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Title {
    /// Display name, also the source of the card's filter key
    pub name: String,

    /// Poster image URL; a textual placeholder is rendered when absent
    #[serde(default)]
    pub poster_image: Option<String>,

    /// Channel the download button links to
    pub channel_link: String,
}

impl Title {
    /// Lowercased name used as the card's `data-title` search key
    pub fn filter_key(&self) -> String {
        self.name.to_lowercase()
    }
}

/// A news post
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewsPost {
    pub title: String,

    #[serde(default)]
    pub image: Option<String>,

    /// Full body text; cards show a fixed-length excerpt of it
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_key_lowercases_unicode() {
        let title = Title {
            name: "Königin ÉLITE".to_string(),
            poster_image: None,
            channel_link: "http://t.me/x".to_string(),
        };
        assert_eq!(title.filter_key(), "königin élite");
    }

    #[test]
    fn test_item_parse_ignores_unknown_fields() {
        let title: Title = serde_json::from_str(
            r#"{"name":"Drama A","channel_link":"http://t.me/a","type":"drama","created_at":"2024-01-01"}"#,
        )
        .unwrap();
        assert_eq!(title.name, "Drama A");
        assert!(title.poster_image.is_none());
    }
}
