use std::time::Duration;

use agent_api::{stub_stream, AgentClient, AgentConfig, ChatMessage, Role, STUB_FRAGMENTS};
use futures_util::StreamExt;

#[tokio::test(start_paused = true)]
async fn stub_generator_always_yields_the_same_sequence() {
    for _ in 0..3 {
        let fragments: Vec<String> = stub_stream().collect().await;
        assert_eq!(fragments, STUB_FRAGMENTS);
    }
}

#[tokio::test(start_paused = true)]
async fn unconfigured_transport_streams_the_stub_sequence() {
    let client = AgentClient::new(AgentConfig::default()).expect("client");
    let fragments: Vec<String> = client
        .stream(&[ChatMessage::new(Role::User, "hello")], None)
        .collect()
        .await;

    assert_eq!(fragments, STUB_FRAGMENTS);
    assert_eq!(fragments.concat(), "Analyzing your request...");
}

#[tokio::test]
async fn unreachable_backend_terminates_with_one_sentinel_fragment() {
    let config = AgentConfig::default()
        .with_base_url("http://127.0.0.1:1")
        .with_timeout(Duration::from_secs(2));
    let client = AgentClient::new(config).expect("client");

    let fragments: Vec<String> = client
        .stream(&[ChatMessage::new(Role::User, "hello")], None)
        .collect()
        .await;

    assert_eq!(fragments.len(), 1);
    assert!(fragments[0].starts_with("[stream-error] "));
}
