/// Authentication handlers
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::db::user_repo;
use crate::error::{AppError, Result};
use crate::middleware::UserId;
use crate::models::{AuthResponse, LoginRequest, MessageResponse, RegisterRequest};
use crate::security::{jwt, password};

/// Register endpoint handler
/// POST /api/v1/register
pub async fn register(
    pool: web::Data<PgPool>,
    payload: web::Json<RegisterRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;

    if user_repo::find_by_email(&pool, &payload.email).await?.is_some() {
        let mut errors = ValidationErrors::new();
        let mut error = ValidationError::new("unique");
        error.message = Some("The email has already been taken.".into());
        errors.add("email", error);
        return Err(AppError::Validation(errors));
    }

    let password_hash = password::hash_password(&payload.password)?;
    let user = user_repo::create_user(
        &pool,
        &payload.firstname,
        &payload.lastname,
        &payload.email,
        &password_hash,
    )
    .await?;

    let token = jwt::generate_token(user.id, &user.email)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    tracing::info!(user_id = %user.id, "user registered");

    Ok(HttpResponse::Created().json(AuthResponse {
        user: user.into(),
        token,
    }))
}

/// Login endpoint handler
/// POST /api/v1/login
pub async fn login(
    pool: web::Data<PgPool>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse> {
    payload.validate()?;

    let user = user_repo::find_by_email(&pool, &payload.email)
        .await?
        .ok_or_else(|| AppError::Authentication("Invalid credentials".to_string()))?;

    password::verify_password(&payload.password, &user.password_hash)?;

    let token = jwt::generate_token(user.id, &user.email)
        .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(HttpResponse::Ok().json(AuthResponse {
        user: user.into(),
        token,
    }))
}

/// Logout endpoint handler
/// POST /api/v1/logout
///
/// Tokens are stateless, so logout acknowledges and the client discards the
/// token.
pub async fn logout(user_id: UserId) -> Result<HttpResponse> {
    tracing::debug!(user_id = %user_id.0, "user logged out");

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Logged out successfully".to_string(),
    }))
}
