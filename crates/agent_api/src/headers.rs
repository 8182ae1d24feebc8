use std::collections::BTreeMap;

use crate::config::AgentConfig;

pub const HEADER_ACCEPT: &str = "accept";
pub const HEADER_AUTHORIZATION: &str = "authorization";
pub const HEADER_CONTENT_TYPE: &str = "content-type";

/// Build a deterministic header map for chat requests.
///
/// Streaming requests additionally accept `text/event-stream`; the bearer
/// credential is attached only when a non-blank key is configured.
pub fn build_headers(config: &AgentConfig, streaming: bool) -> BTreeMap<String, String> {
    let mut headers = BTreeMap::new();

    headers.insert(
        HEADER_CONTENT_TYPE.to_owned(),
        "application/json".to_owned(),
    );
    if streaming {
        headers.insert(HEADER_ACCEPT.to_owned(), "text/event-stream".to_owned());
    }
    if let Some(api_key) = config
        .api_key
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
    {
        headers.insert(HEADER_AUTHORIZATION.to_owned(), format!("Bearer {api_key}"));
    }

    headers
}
