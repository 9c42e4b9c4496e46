//! Shared fixtures for HTTP-level tests.

#![allow(dead_code)]

use serde_json::{json, Value};
use tokensync::config::SyncConfig;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const TOKEN: &str = "test-token";

/// Configuration pointing at a mock server.
pub fn config_for(server: &MockServer) -> SyncConfig {
    SyncConfig {
        access_token: Some(TOKEN.to_string()),
        api_base: server.uri(),
        retry_delay_ms: 1,
        ..Default::default()
    }
}

/// One red rounded rectangle, one published component, one style.
pub fn button_file() -> Value {
    json!({
        "name": "Design System",
        "version": "42",
        "lastModified": "2024-05-01T12:00:00Z",
        "document": {
            "id": "0:0",
            "name": "Document",
            "type": "DOCUMENT",
            "children": [{
                "id": "0:1",
                "name": "Page 1",
                "type": "CANVAS",
                "children": [{
                    "id": "1:1",
                    "name": "Button",
                    "type": "RECTANGLE",
                    "cornerRadius": 12,
                    "fills": [{ "type": "SOLID", "color": { "r": 1, "g": 0, "b": 0, "a": 1 } }]
                }]
            }]
        },
        "components": {
            "1:1": { "key": "abc", "name": "Button", "description": "Primary action" }
        },
        "styles": {
            "S:1": { "key": "s1", "name": "Red", "styleType": "FILL", "description": "" }
        }
    })
}

/// A well-formed file with nothing in it.
pub fn empty_file() -> Value {
    json!({
        "name": "Blank",
        "version": "1",
        "lastModified": "2024-05-01T12:00:00Z",
        "document": { "id": "0:0", "name": "Document", "type": "DOCUMENT", "children": [] },
        "components": {},
        "styles": {}
    })
}

/// Serve `body` for `GET /files/{key}`.
pub async fn mount_file(server: &MockServer, key: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(format!("/files/{}", key)))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}
