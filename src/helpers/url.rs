//! URL helper functions

/// Join the configured API base with a collection endpoint
///
/// An empty base yields the endpoint unchanged; otherwise exactly one
/// slash separates the two parts regardless of how they were written in
/// the config.
pub fn api_url(base: &str, endpoint: &str) -> String {
    if base.is_empty() {
        return endpoint.to_string();
    }
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        endpoint.trim_start_matches('/')
    )
}
