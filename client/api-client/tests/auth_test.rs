//! Auth service function tests: session side effects on success, error
//! propagation on failure.
mod common;

use api_client::models::{LoginForm, RegisterForm};
use api_client::{ApiError, Route};
use serde_json::json;
use uuid::Uuid;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use common::client_for;

fn user_body(id: Uuid) -> serde_json::Value {
    json!({
        "id": id,
        "firstname": "Ada",
        "lastname": "Lovelace",
        "email": "ada@example.com"
    })
}

fn login_form() -> LoginForm {
    LoginForm {
        email: "ada@example.com".to_string(),
        password: "correcthorse".to_string(),
    }
}

fn register_form() -> RegisterForm {
    RegisterForm {
        firstname: "Ada".to_string(),
        lastname: "Lovelace".to_string(),
        email: "ada@example.com".to_string(),
        password: "correcthorse".to_string(),
    }
}

#[tokio::test]
async fn test_login_success_persists_session() {
    let server = MockServer::start().await;
    let user_id = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path("/api/v1/login"))
        .and(body_json(json!({
            "email": "ada@example.com",
            "password": "correcthorse"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "user": user_body(user_id),
            "token": "token-abc"
        })))
        .mount(&server)
        .await;

    let (http, session, notifier) = client_for(&server.uri());

    let user = api_client::services::login(&http, &login_form())
        .await
        .unwrap();

    assert_eq!(user.id, user_id);
    assert_eq!(user.firstname, "Ada");
    assert_eq!(session.token().as_deref(), Some("token-abc"));
    assert_eq!(session.user().unwrap().id, user_id);
    assert!(session.is_logged_in());
    assert!(notifier.notifications().is_empty());
}

#[tokio::test]
async fn test_login_forbidden_leaves_session_untouched() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/login"))
        .respond_with(
            ResponseTemplate::new(403).set_body_json(json!({"message": "Account disabled"})),
        )
        .mount(&server)
        .await;

    let (http, session, notifier) = client_for(&server.uri());

    let err = api_client::services::login(&http, &login_form())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::Forbidden { .. }));

    assert!(session.token().is_none());
    assert!(session.user().is_none());
    assert!(!session.is_logged_in());

    let notifications = notifier.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Forbidden");
    assert_eq!(notifications[0].text, "Account disabled");
}

#[tokio::test]
async fn test_login_with_unexpected_success_status_is_an_error() {
    let server = MockServer::start().await;
    let user_id = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path("/api/v1/login"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "user": user_body(user_id),
            "token": "token-abc"
        })))
        .mount(&server)
        .await;

    let (http, session, _notifier) = client_for(&server.uri());

    let err = api_client::services::login(&http, &login_form())
        .await
        .unwrap_err();
    assert!(matches!(err, ApiError::UnexpectedStatus { status: 201 }));
    assert!(!session.is_logged_in());
}

#[tokio::test]
async fn test_register_success_persists_session_and_navigates_home() {
    let server = MockServer::start().await;
    let user_id = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path("/api/v1/register"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "user": user_body(user_id),
            "token": "token-new"
        })))
        .mount(&server)
        .await;

    let (http, session, notifier) = client_for(&server.uri());

    let user = api_client::services::register(&http, &register_form())
        .await
        .unwrap();

    assert_eq!(user.id, user_id);
    assert_eq!(session.token().as_deref(), Some("token-new"));
    assert!(session.is_logged_in());
    assert_eq!(notifier.routes(), vec![Route::Home]);
}

#[tokio::test]
async fn test_register_failure_is_propagated_not_swallowed() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/register"))
        .respond_with(
            ResponseTemplate::new(500).set_body_json(json!({"message": "Database down"})),
        )
        .mount(&server)
        .await;

    let (http, session, notifier) = client_for(&server.uri());

    let err = api_client::services::register(&http, &register_form())
        .await
        .unwrap_err();
    match err {
        ApiError::Server { message } => assert_eq!(message, "Database down"),
        other => panic!("expected server error, got {:?}", other),
    }

    assert!(session.token().is_none());
    assert!(!session.is_logged_in());

    let notifications = notifier.notifications();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0].title, "Server Error");
    assert!(notifier.routes().is_empty());
}

#[tokio::test]
async fn test_logout_clears_session_and_navigates_to_login() {
    let server = MockServer::start().await;
    let user_id = Uuid::new_v4();
    Mock::given(method("POST"))
        .and(path("/api/v1/logout"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"message": "Logged out successfully"})),
        )
        .mount(&server)
        .await;

    let (http, session, notifier) = client_for(&server.uri());
    session.set_user(serde_json::from_value(user_body(user_id)).unwrap());
    session.set_token("token-abc");
    session.set_logged_in(true);

    api_client::services::logout(&http).await.unwrap();

    assert!(session.token().is_none());
    assert!(session.user().is_none());
    assert!(!session.is_logged_in());
    assert_eq!(notifier.routes(), vec![Route::Login]);
}
