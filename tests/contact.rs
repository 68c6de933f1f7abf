mod common;

use ivoryscroll::connectors::{ConnectorError, ContactConnector, InMemoryCatalog};
use ivoryscroll::models::{ContactMessage, ContactReceipt};
use serde_json::{json, Value};
use std::sync::Arc;

struct UnreachableMailer;

#[async_trait::async_trait]
impl ContactConnector for UnreachableMailer {
    async fn submit(&self, _message: &ContactMessage) -> Result<ContactReceipt, ConnectorError> {
        Err(ConnectorError::ServiceUnavailable("mailer down".to_string()))
    }
}

#[tokio::test]
async fn valid_message_is_accepted() {
    let app = common::spawn_app().await;

    let response = app
        .client
        .post(app.url("/api/contact"))
        .json(&json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "message": "Can the floral templates use our own palette?"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), 200);
    let body: Value = response.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().starts_with("Message sent!"));
    assert_eq!(body["id"], body["item"]["id"]);
}

#[tokio::test]
async fn invalid_fields_are_rejected() {
    let app = common::spawn_app().await;

    let cases = [
        json!({"name": "A", "email": "ada@example.com", "message": "Long enough message"}),
        json!({"name": "Ada", "email": "not-an-email", "message": "Long enough message"}),
        json!({"name": "Ada", "email": "ada@example.com", "message": "short"}),
    ];

    for case in cases {
        let response = app
            .client
            .post(app.url("/api/contact"))
            .json(&case)
            .send()
            .await
            .expect("Failed to execute request.");
        assert_eq!(response.status(), 400, "payload {} should fail", case);
    }
}

#[tokio::test]
async fn malformed_json_is_a_bad_request() {
    let app = common::spawn_app().await;

    let response = app
        .client
        .post(app.url("/api/contact"))
        .header("Content-Type", "application/json")
        .body("{\"name\": ")
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), 400);
    let body: Value = response.json().await.unwrap();
    assert!(body["message"].as_str().unwrap().starts_with("Invalid JSON"));
}

#[tokio::test]
async fn delivery_failure_is_reported() {
    let app = common::spawn_app_with(
        Arc::new(InMemoryCatalog::seeded()),
        Arc::new(UnreachableMailer),
    )
    .await;

    let response = app
        .client
        .post(app.url("/api/contact"))
        .json(&json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "message": "Can the floral templates use our own palette?"
        }))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(response.status(), 503);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["message"], "Something went wrong. Please try again.");
}
