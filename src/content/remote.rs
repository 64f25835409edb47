//! Remote collection client
//!
//! The API is known to answer in two shapes: a bare item array, or a
//! `{success, data}` envelope. Both are accepted and normalized here so
//! the rest of the crate only ever sees an optional item list.

use anyhow::Result;
use reqwest::{Client, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

/// Ways a single collection fetch can fail
///
/// None of these is fatal to a hydrate run; the hydrator logs the error
/// and leaves the collection's container untouched.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("request to {url} failed: {source}")]
    Network {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: StatusCode },

    #[error("invalid response body from {url}: {source}")]
    Parse {
        url: String,
        #[source]
        source: reqwest::Error,
    },
}

/// The two response shapes the API produces
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiResponse<T> {
    Envelope {
        #[serde(default)]
        success: bool,
        #[serde(default)]
        data: Option<Vec<T>>,
    },
    Bare(Vec<T>),
}

impl<T> ApiResponse<T> {
    /// Normalize both shapes into an optional item list
    ///
    /// `None` means the server answered but provided nothing to render:
    /// a failed or flagless envelope, or `data: null`. The target
    /// container keeps its existing markup in that case.
    fn into_items(self) -> Option<Vec<T>> {
        match self {
            ApiResponse::Bare(items) => Some(items),
            ApiResponse::Envelope { success: true, data } => data,
            ApiResponse::Envelope { success: false, .. } => None,
        }
    }
}

/// Thin HTTP client for collection endpoints
#[derive(Clone)]
pub struct CollectionClient {
    http: Client,
}

impl CollectionClient {
    /// Build a client
    ///
    /// No request timeout is set; a hung request is bounded by host
    /// defaults only.
    pub fn new() -> Result<Self> {
        let http = Client::builder()
            .user_agent(concat!("showcase-rs/", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self { http })
    }

    /// Fetch one collection and normalize its response envelope
    ///
    /// `Ok(None)` means the server replied but there is nothing to
    /// render for this collection.
    pub async fn fetch<T: DeserializeOwned>(
        &self,
        url: &str,
    ) -> std::result::Result<Option<Vec<T>>, FetchError> {
        let response = self.http.get(url).send().await.map_err(|source| {
            FetchError::Network {
                url: url.to_string(),
                source,
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status,
            });
        }

        let body: ApiResponse<T> =
            response.json().await.map_err(|source| FetchError::Parse {
                url: url.to_string(),
                source,
            })?;

        Ok(body.into_items())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Title;

    fn parse(json: &str) -> Option<Vec<Title>> {
        serde_json::from_str::<ApiResponse<Title>>(json)
            .unwrap()
            .into_items()
    }

    #[test]
    fn test_bare_array() {
        let items = parse(r#"[{"name":"A","channel_link":"http://t.me/a"}]"#).unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "A");
    }

    #[test]
    fn test_envelope_success() {
        let items = parse(
            r#"{"success":true,"data":[{"name":"A","channel_link":"http://t.me/a"},{"name":"B","channel_link":"http://t.me/b"}]}"#,
        )
        .unwrap();
        assert_eq!(items.len(), 2);
    }

    #[test]
    fn test_envelope_failure_yields_nothing() {
        assert!(parse(r#"{"success":false,"error":"db down"}"#).is_none());
    }

    #[test]
    fn test_envelope_missing_flag_yields_nothing() {
        assert!(parse(r#"{"data":[{"name":"A","channel_link":"http://t.me/a"}]}"#).is_none());
    }

    #[test]
    fn test_envelope_null_data_yields_nothing() {
        assert!(parse(r#"{"success":true,"data":null}"#).is_none());
    }

    #[test]
    fn test_envelope_empty_array_is_renderable() {
        let items = parse(r#"{"success":true,"data":[]}"#).unwrap();
        assert!(items.is_empty());
    }

    #[test]
    fn test_malformed_body_is_an_error() {
        assert!(serde_json::from_str::<ApiResponse<Title>>("[{\"name\":42}]").is_err());
    }
}
