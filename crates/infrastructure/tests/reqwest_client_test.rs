//! Adapter tests against a live HTTP mock server.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use modelmatch_application::ports::{ApiRequest, HttpClient};
use modelmatch_application::{PromptSync, SyncConfig};
use modelmatch_domain::{AuthSession, PromptDraft};
use modelmatch_infrastructure::ReqwestHttpClient;

const PROMPTS_PATH: &str = "/api/v1/model_match_app/prompts/";

fn client() -> ReqwestHttpClient {
    ReqwestHttpClient::new().unwrap()
}

#[tokio::test]
async fn test_get_carries_auth_and_content_type_headers() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PROMPTS_PATH))
        .and(header("Authorization", "Bearer tok-abc"))
        .and(header("Content-Type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .expect(1)
        .mount(&server)
        .await;

    let request = ApiRequest::get(
        format!("{}{PROMPTS_PATH}", server.uri()),
        Some("tok-abc".to_string()),
    );
    let response = client().execute(request).await.unwrap();

    assert_eq!(response.status, 200);
    assert_eq!(response.json::<Value>().unwrap(), json!([]));
}

#[tokio::test]
async fn test_post_sends_json_body() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(PROMPTS_PATH))
        .and(header("Authorization", "Bearer tok-abc"))
        .and(body_json(json!({"text": "hello", "user_id": 7})))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(json!({"id": 1, "user_id": 7, "text": "hello"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = ApiRequest::post(
        format!("{}{PROMPTS_PATH}", server.uri()),
        Some("tok-abc".to_string()),
        json!({"text": "hello", "user_id": 7}),
    );
    let response = client().execute(request).await.unwrap();

    assert_eq!(response.status, 201);
}

#[tokio::test]
async fn test_non_success_status_is_an_ordinary_response() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PROMPTS_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "expired"})))
        .mount(&server)
        .await;

    let request = ApiRequest::get(format!("{}{PROMPTS_PATH}", server.uri()), None);
    let response = client().execute(request).await.unwrap();

    assert_eq!(response.status, 401);
    assert_eq!(
        response.json::<Value>().unwrap(),
        json!({"detail": "expired"})
    );
}

#[tokio::test]
async fn test_missing_token_omits_authorization_header() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PROMPTS_PATH))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"detail": "no credentials"})))
        .mount(&server)
        .await;

    let request = ApiRequest::get(format!("{}{PROMPTS_PATH}", server.uri()), None);
    client().execute(request).await.unwrap();

    let received = server.received_requests().await.unwrap();
    assert_eq!(received.len(), 1);
    assert!(!received[0].headers.contains_key("Authorization"));
}

#[tokio::test]
async fn test_invalid_url_is_rejected_before_any_request() {
    let request = ApiRequest::get("not a url".to_string(), None);
    let result = client().execute(request).await;
    assert!(matches!(
        result,
        Err(modelmatch_application::ports::HttpClientError::InvalidUrl(_))
    ));
}

// Full create flow over the real adapter: Phase 1 POST, then Phase 2
// GET against the offset responses path, with the cache left untouched.
#[tokio::test]
async fn test_create_flow_end_to_end() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path(PROMPTS_PATH))
        .and(header("Authorization", "Bearer tok-abc"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!([{"id": 41, "user_id": 7, "text": "old"}])),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(PROMPTS_PATH))
        .and(body_json(json!({"text": "hello", "user_id": 7})))
        .respond_with(
            ResponseTemplate::new(201)
                .set_body_json(json!({"id": 42, "user_id": 7, "text": "hello"})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(format!("{PROMPTS_PATH}43/responses/")))
        .and(header("Authorization", "Bearer tok-abc"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([{"response": "generated text"}])),
        )
        .expect(1)
        .mount(&server)
        .await;

    let config = SyncConfig::new(server.uri());
    let sync = PromptSync::from_config(client(), &config).unwrap();
    let session = AuthSession::authenticated(7, "tok-abc");

    let before = sync.list(&session).await;
    assert_eq!(before.len(), 1);

    sync.create(&session, &PromptDraft::new().field("text", "hello"))
        .await;

    // No auto-revalidation: the collection GET ran exactly once and the
    // cached snapshot still shows the pre-create state.
    let after = sync.list(&session).await;
    assert_eq!(before, after);
    assert_eq!(sync.view(&session).await.error, None);
}
