use agent_api::{ChatMessage, ChatRequest, ChatResponse, Role, ToolStatus};
use serde_json::json;

#[test]
fn request_body_matches_the_wire_contract() {
    let request = ChatRequest {
        model: "openai/gpt-4".to_string(),
        messages: vec![
            ChatMessage::new(Role::User, "list files"),
            ChatMessage::new(Role::Tool, "src/ Cargo.toml"),
        ],
        stream: true,
    };

    let value = serde_json::to_value(&request).expect("serialize request");
    assert_eq!(
        value,
        json!({
            "model": "openai/gpt-4",
            "messages": [
                {"role": "user", "content": "list files"},
                {"role": "tool", "content": "src/ Cargo.toml"},
            ],
            "stream": true,
        })
    );
}

#[test]
fn response_decodes_tool_calls_with_timestamps() {
    let body = json!({
        "content": "Running the requested command.",
        "toolCalls": [{
            "id": "call-9",
            "name": "bash",
            "arguments": {"command": "ls", "timeout": null},
            "status": "success",
            "result": "src/\nCargo.toml",
            "startedAt": "2026-08-28T10:15:00Z",
            "completedAt": "2026-08-28T10:15:01Z"
        }],
        "finishReason": "stop"
    });

    let response: ChatResponse = serde_json::from_value(body).expect("decode response");
    let call = &response.tool_calls[0];

    assert_eq!(call.status, ToolStatus::Success);
    assert_eq!(call.result.as_deref(), Some("src/\nCargo.toml"));
    assert!(call.started_at.is_some());
    assert!(call.completed_at.unwrap() > call.started_at.unwrap());
}

#[test]
fn malformed_response_bodies_fail_decoding() {
    let missing_finish = json!({"content": "hi", "toolCalls": []});
    assert!(serde_json::from_value::<ChatResponse>(missing_finish).is_err());

    let wrong_shape = json!({"content": 42, "finishReason": "stop"});
    assert!(serde_json::from_value::<ChatResponse>(wrong_shape).is_err());
}

#[test]
fn roles_expose_stable_string_names() {
    assert_eq!(Role::User.as_str(), "user");
    assert_eq!(Role::Assistant.as_str(), "assistant");
    assert_eq!(Role::Tool.as_str(), "tool");
}
