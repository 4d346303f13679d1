/// Wire-contract tests that need no database: authentication middleware
/// behavior and error body shapes.
use actix_web::body::to_bytes;
use actix_web::dev::Service;
use actix_web::http::StatusCode;
use actix_web::{test, web, App, HttpResponse};
use uuid::Uuid;
use validator::{ValidationError, ValidationErrors};

use content_service::error::AppError;
use content_service::middleware::{JwtAuthMiddleware, UserId};
use content_service::security::jwt;

async fn whoami(user_id: UserId) -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({ "user_id": user_id.0 }))
}

async fn fail_with_validation() -> Result<HttpResponse, AppError> {
    let mut errors = ValidationErrors::new();
    let mut text_error = ValidationError::new("length");
    text_error.message = Some("The text must be between 1 and 255 characters.".into());
    errors.add("text", text_error);
    let mut user_error = ValidationError::new("exists");
    user_error.message = Some("The selected user id is invalid.".into());
    errors.add("user_id", user_error);
    Err(AppError::Validation(errors))
}

async fn fail_with_not_found() -> Result<HttpResponse, AppError> {
    Err(AppError::NotFound("Post not found".to_string()))
}

async fn setup_test_app() -> impl Service<
    actix_http::Request,
    Response = actix_web::dev::ServiceResponse,
    Error = actix_web::Error,
> {
    test::init_service(
        App::new()
            .service(
                web::scope("/protected")
                    .wrap(JwtAuthMiddleware)
                    .route("/whoami", web::get().to(whoami)),
            )
            .route("/invalid", web::get().to(fail_with_validation))
            .route("/missing", web::get().to(fail_with_not_found)),
    )
    .await
}

/// Drive the app and normalize both success and error outcomes to
/// (status, parsed JSON body)
async fn call(
    app: &impl Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    >,
    req: actix_http::Request,
) -> (StatusCode, serde_json::Value) {
    match app.call(req).await {
        Ok(resp) => {
            let status = resp.status();
            let bytes = test::read_body(resp).await;
            let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
            (status, body)
        }
        Err(err) => {
            let resp = err.error_response();
            let status = resp.status();
            let bytes = to_bytes(resp.into_body()).await.unwrap();
            let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
            (status, body)
        }
    }
}

#[actix_web::test]
async fn test_protected_route_without_token_is_unauthorized() {
    jwt::initialize_keys("contract-test-secret", 1).unwrap();
    let app = setup_test_app().await;

    let req = test::TestRequest::get().uri("/protected/whoami").to_request();
    let (status, _) = call(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_protected_route_with_wrong_scheme_is_unauthorized() {
    jwt::initialize_keys("contract-test-secret", 1).unwrap();
    let app = setup_test_app().await;

    let req = test::TestRequest::get()
        .uri("/protected/whoami")
        .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
        .to_request();
    let (status, _) = call(&app, req).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_protected_route_with_valid_token_extracts_user() {
    jwt::initialize_keys("contract-test-secret", 1).unwrap();
    let app = setup_test_app().await;

    let user_id = Uuid::new_v4();
    let token = jwt::generate_token(user_id, "ada@example.com").unwrap();

    let req = test::TestRequest::get()
        .uri("/protected/whoami")
        .insert_header(("Authorization", format!("Bearer {}", token)))
        .to_request();
    let (status, body) = call(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], user_id.to_string());
}

#[actix_web::test]
async fn test_validation_error_renders_per_field_messages() {
    jwt::initialize_keys("contract-test-secret", 1).unwrap();
    let app = setup_test_app().await;

    let req = test::TestRequest::get().uri("/invalid").to_request();
    let (status, body) = call(&app, req).await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert_eq!(body["message"], "The given data was invalid.");
    assert_eq!(
        body["errors"]["text"],
        serde_json::json!(["The text must be between 1 and 255 characters."])
    );
    assert_eq!(
        body["errors"]["user_id"],
        serde_json::json!(["The selected user id is invalid."])
    );
}

#[actix_web::test]
async fn test_not_found_error_carries_message() {
    jwt::initialize_keys("contract-test-secret", 1).unwrap();
    let app = setup_test_app().await;

    let req = test::TestRequest::get().uri("/missing").to_request();
    let (status, body) = call(&app, req).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "NOT_FOUND");
    assert_eq!(body["message"], "Not found: Post not found");
}
