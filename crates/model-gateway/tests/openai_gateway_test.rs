//! Integration tests for [`model_gateway::OpenAiGateway`] against a mock OpenAI-compatible server.

use mockito::Matcher;
use model_gateway::{
    ChatOutcome, ConversationHistory, Gateway, GatewayError, ModelInput, OpenAiGateway, Turn,
};
use serde_json::json;

const MODEL: &str = "THUDM/chatglm-6b";

fn completion_body(content: &str) -> String {
    json!({
        "id": "chatcmpl-1",
        "object": "chat.completion",
        "created": 1706529600,
        "model": MODEL,
        "choices": [{
            "index": 0,
            "message": { "role": "assistant", "content": content },
            "finish_reason": "stop"
        }],
        "usage": { "prompt_tokens": 5, "completion_tokens": 7, "total_tokens": 12 }
    })
    .to_string()
}

fn gateway_for(server: &mockito::ServerGuard) -> OpenAiGateway {
    OpenAiGateway::new(&format!("{}/v1", server.url()), "EMPTY", MODEL)
}

/// **Test: a reply is returned and the new history is the old one plus this turn.**
#[tokio::test]
async fn test_chat_appends_turn_to_history() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::PartialJson(json!({ "model": MODEL })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Hello! How can I help?"))
        .create_async()
        .await;

    let gateway = gateway_for(&server);
    let history = ConversationHistory::new().with_turn(Turn::new("hi", "hey"));

    let ChatOutcome { response, history: updated } = gateway
        .chat(ModelInput::Text("hello".to_string()), &history)
        .await
        .expect("chat");

    mock.assert_async().await;
    assert_eq!(response, "Hello! How can I help?");
    assert_eq!(
        updated.turns(),
        &[Turn::new("hi", "hey"), Turn::new("hello", "Hello! How can I help?")]
    );
    // Input history is untouched; the caller decides whether to keep the new one.
    assert_eq!(history.len(), 1);
}

/// **Test: the history is sent as alternating user/assistant messages before the query.**
#[tokio::test]
async fn test_chat_sends_history_as_messages() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", "/v1/chat/completions")
        .match_body(Matcher::PartialJson(json!({
            "messages": [
                { "role": "user", "content": "my name is Ada" },
                { "role": "assistant", "content": "Nice to meet you, Ada." },
                { "role": "user", "content": "what is my name?" }
            ]
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("Ada."))
        .create_async()
        .await;

    let gateway = gateway_for(&server);
    let history =
        ConversationHistory::new().with_turn(Turn::new("my name is Ada", "Nice to meet you, Ada."));

    let outcome = gateway
        .chat(ModelInput::Text("what is my name?".to_string()), &history)
        .await
        .expect("chat");

    mock.assert_async().await;
    assert_eq!(outcome.response, "Ada.");
}

/// **Test: HISTORY_MAX_TURNS trims the oldest turns from the returned history.**
#[tokio::test]
async fn test_chat_keeps_recent_turns() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(completion_body("r3"))
        .create_async()
        .await;

    let gateway = gateway_for(&server).with_max_history_turns(Some(2));
    let history = ConversationHistory::new()
        .with_turn(Turn::new("q1", "r1"))
        .with_turn(Turn::new("q2", "r2"));

    let outcome = gateway
        .chat(ModelInput::Text("q3".to_string()), &history)
        .await
        .expect("chat");

    assert_eq!(
        outcome.history.turns(),
        &[Turn::new("q2", "r2"), Turn::new("q3", "r3")]
    );
}

/// **Test: a response without choices is EmptyResponse.**
#[tokio::test]
async fn test_chat_empty_choices() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "id": "chatcmpl-2",
                "object": "chat.completion",
                "created": 1706529600,
                "model": MODEL,
                "choices": []
            })
            .to_string(),
        )
        .create_async()
        .await;

    let result = gateway_for(&server)
        .chat(ModelInput::Text("hello".to_string()), &ConversationHistory::new())
        .await;

    assert!(matches!(result, Err(GatewayError::EmptyResponse)));
}

/// **Test: an API error becomes GatewayError::Request (not UnsupportedContentKind).**
#[tokio::test]
async fn test_chat_api_error() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", "/v1/chat/completions")
        .with_status(404)
        .with_header("content-type", "application/json")
        .with_body(
            json!({
                "error": {
                    "message": "The model `THUDM/chatglm-6b` does not exist.",
                    "type": "invalid_request_error",
                    "param": null,
                    "code": "model_not_found"
                }
            })
            .to_string(),
        )
        .create_async()
        .await;

    let result = gateway_for(&server)
        .chat(ModelInput::Text("hello".to_string()), &ConversationHistory::new())
        .await;

    match result {
        Err(GatewayError::Request(msg)) => assert!(msg.contains("does not exist"), "{}", msg),
        other => panic!("expected Request error, got {:?}", other),
    }
}
