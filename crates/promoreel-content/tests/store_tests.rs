//! Integration tests for the snippet store against a mocked content store.

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use promoreel_content::{fallback_snippets, ContentConfig, SnippetStore};
use promoreel_models::ThemeId;

#[tokio::test]
async fn remote_rows_are_mapped_to_snippets() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/snippets"))
        .and(query_param("section", "Evidence"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {
                "id": "ev-1",
                "name": "Trial A",
                "description": "Significant improvement vs placebo",
                "section": "Evidence"
            },
            {
                "id": "ev-2",
                "name": "Trial B",
                "description": "Confirmed in a second population",
                "section": "Evidence"
            }
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let store = SnippetStore::new(ContentConfig::with_base_url(server.uri()));
    let snippets = store.fetch_snippets(&ThemeId::from("efficacy")).await;

    assert_eq!(snippets.len(), 2);
    assert_eq!(snippets[0].id, "ev-1");
    assert_eq!(snippets[0].content, "Significant improvement vs placebo");
    assert_eq!(snippets[1].category, "Evidence");
}

#[tokio::test]
async fn server_error_falls_back_to_static_table() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/snippets"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .expect(1)
        .mount(&server)
        .await;

    let store = SnippetStore::new(ContentConfig::with_base_url(server.uri()));
    let snippets = store.fetch_snippets(&ThemeId::from("safety")).await;

    assert_eq!(snippets, fallback_snippets(&ThemeId::from("safety")));
    assert_eq!(snippets.len(), 5);
}

#[tokio::test]
async fn malformed_body_falls_back() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/snippets"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let store = SnippetStore::new(ContentConfig::with_base_url(server.uri()));
    let snippets = store.fetch_snippets(&ThemeId::from("brand")).await;

    assert_eq!(snippets, fallback_snippets(&ThemeId::from("brand")));
}

#[tokio::test]
async fn empty_rows_fall_back() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/snippets"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    let store = SnippetStore::new(ContentConfig::with_base_url(server.uri()));
    let snippets = store.fetch_snippets(&ThemeId::from("patient")).await;

    assert!(!snippets.is_empty());
}

#[tokio::test]
async fn offline_store_serves_fallback_and_unknown_theme_uses_default() {
    let store = SnippetStore::offline();

    let unknown = store.fetch_snippets(&ThemeId::from("no-such-theme")).await;
    let default = store.fetch_snippets(&ThemeId::from("safety")).await;
    assert_eq!(unknown, default);

    // Idempotence under the fallback path.
    let again = store.fetch_snippets(&ThemeId::from("no-such-theme")).await;
    assert_eq!(unknown, again);
}
