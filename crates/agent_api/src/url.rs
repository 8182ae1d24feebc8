/// Join the configured base URL with the single-shot completion endpoint.
pub fn chat_url(base: &str) -> String {
    format!("{}/chat", trimmed_base(base))
}

/// Join the configured base URL with the SSE streaming endpoint.
pub fn chat_stream_url(base: &str) -> String {
    format!("{}/chat/stream", trimmed_base(base))
}

fn trimmed_base(base: &str) -> &str {
    base.trim().trim_end_matches('/')
}

#[cfg(test)]
mod tests {
    use super::{chat_stream_url, chat_url};

    #[test]
    fn chat_urls_join_without_duplicate_slashes() {
        assert_eq!(chat_url("http://localhost:8080"), "http://localhost:8080/chat");
        assert_eq!(
            chat_url("http://localhost:8080/"),
            "http://localhost:8080/chat"
        );
        assert_eq!(
            chat_stream_url("http://localhost:8080/"),
            "http://localhost:8080/chat/stream"
        );
    }
}
