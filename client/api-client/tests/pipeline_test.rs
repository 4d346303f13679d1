//! End-to-end tests of the response-classification pipeline: one
//! notification per error class, login redirect on auth failures, and the
//! error always propagating to the caller.
mod common;

use api_client::models::ContentForm;
use api_client::{ApiError, NotificationKind, Route};
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::client_for;

fn content_record_body(id: Uuid) -> serde_json::Value {
    json!({
        "id": id,
        "post_id": null,
        "title": "Holiday photos",
        "description": null,
        "image": null,
        "created_at": "2024-01-01T00:00:00Z",
        "updated_at": "2024-01-01T00:00:00Z"
    })
}

#[tokio::test]
async fn test_validation_errors_are_flattened_line_by_line() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/contents"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "The given data was invalid.",
            "errors": {"a": ["x"], "b": ["y", "z"]}
        })))
        .mount(&server)
        .await;

    let (http, _session, notifier) = client_for(&server.uri());
    let form = ContentForm {
        title: "anything".to_string(),
        ..ContentForm::default()
    };

    let err = api_client::services::store_content(&http, &form)
        .await
        .unwrap_err();

    match err {
        ApiError::Validation { errors, .. } => {
            assert_eq!(errors["a"], vec!["x"]);
            assert_eq!(errors["b"], vec!["y", "z"]);
        }
        other => panic!("expected validation error, got {:?}", other),
    }

    let notifications = notifier.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Validation Error");
    assert_eq!(notifications[0].kind, NotificationKind::Error);
    let lines: Vec<&str> = notifications[0]
        .text
        .lines()
        .filter(|l| !l.is_empty())
        .collect();
    assert_eq!(lines, vec!["x", "y", "z"]);
}

#[tokio::test]
async fn test_empty_validation_errors_use_fallback_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/contents"))
        .respond_with(ResponseTemplate::new(422).set_body_json(json!({
            "message": "The given data was invalid."
        })))
        .mount(&server)
        .await;

    let (http, _session, notifier) = client_for(&server.uri());
    let form = ContentForm {
        title: "anything".to_string(),
        ..ContentForm::default()
    };

    let err = api_client::services::store_content(&http, &form)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Validation { .. }));

    let notifications = notifier.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].text, "Please check your input.");
}

#[tokio::test]
async fn test_network_drop_notifies_and_rejects() {
    // Discard port: connection refused without any response
    let (http, _session, notifier) = client_for("http://127.0.0.1:9");

    let err = api_client::services::show_content(&http, Uuid::new_v4())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));

    let notifications = notifier.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Network Error");
    assert_eq!(notifications[0].text, "Could not connect to the server.");
    assert!(notifier.routes().is_empty());
}

#[tokio::test]
async fn test_unauthenticated_redirects_to_login() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/contents"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthenticated."})),
        )
        .mount(&server)
        .await;

    let (http, _session, notifier) = client_for(&server.uri());

    let err = api_client::services::get_contents(&http, "", &[])
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthenticated { status: 401 }));

    assert_eq!(notifier.routes(), vec![Route::Login]);
    let notifications = notifier.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Unauthenticated");
    assert_eq!(notifications[0].text, "You are not logged in");
}

#[tokio::test]
async fn test_session_expiry_status_also_counts_as_unauthenticated() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/contents"))
        .respond_with(ResponseTemplate::new(419))
        .mount(&server)
        .await;

    let (http, _session, notifier) = client_for(&server.uri());

    let err = api_client::services::get_contents(&http, "", &[])
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Unauthenticated { status: 419 }));
    assert_eq!(notifier.routes(), vec![Route::Login]);
}

#[tokio::test]
async fn test_bad_request_surfaces_server_message() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/v1/contents"))
        .respond_with(
            ResponseTemplate::new(400).set_body_json(json!({"message": "Malformed filter"})),
        )
        .mount(&server)
        .await;

    let (http, _session, notifier) = client_for(&server.uri());

    let err = api_client::services::get_contents(&http, "", &[])
        .await
        .unwrap_err();
    match err {
        ApiError::BadRequest { message } => assert_eq!(message, "Malformed filter"),
        other => panic!("expected bad request, got {:?}", other),
    }

    let notifications = notifier.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "");
    assert_eq!(notifications[0].text, "Malformed filter");
}

#[tokio::test]
async fn test_server_error_falls_back_when_body_has_no_message() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/v1/contents/00000000-0000-0000-0000-000000000000"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let (http, _session, notifier) = client_for(&server.uri());

    let err = api_client::services::delete_content(&http, Uuid::nil())
        .await
        .unwrap_err();
    match err {
        ApiError::Server { message } => assert_eq!(message, "An unexpected error occurred."),
        other => panic!("expected server error, got {:?}", other),
    }

    let notifications = notifier.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Server Error");
}

#[tokio::test]
async fn test_not_found_passes_through_without_notification() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/contents/{}", id)))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let (http, _session, notifier) = client_for(&server.uri());

    let err = api_client::services::show_content(&http, id)
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::NotFound));

    assert!(notifier.notifications().is_empty());
    assert!(notifier.routes().is_empty());
}

#[tokio::test]
async fn test_bearer_token_and_marker_headers_are_attached() {
    let server = MockServer::start().await;
    let id = Uuid::new_v4();
    Mock::given(method("GET"))
        .and(path(format!("/api/v1/contents/{}", id)))
        .and(header("Authorization", "Bearer sekrit-token"))
        .and(header("Accept", "application/json"))
        .and(header("X-Requested-With", "XMLHttpRequest"))
        .respond_with(ResponseTemplate::new(200).set_body_json(content_record_body(id)))
        .mount(&server)
        .await;

    let (http, session, notifier) = client_for(&server.uri());
    session.set_token("sekrit-token");

    let record = api_client::services::show_content(&http, id).await.unwrap();
    assert_eq!(record.id, id);
    assert!(notifier.notifications().is_empty());
}
