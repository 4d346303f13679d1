/// User handlers - read-only identity endpoints
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::user_repo;
use crate::error::{AppError, Result};
use crate::models::UserIdentity;

/// List all users
/// GET /api/v1/users
pub async fn index_users(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let users: Vec<UserIdentity> = user_repo::list_users(&pool)
        .await?
        .into_iter()
        .map(UserIdentity::from)
        .collect();

    Ok(HttpResponse::Ok().json(users))
}

/// Get a single user
/// GET /api/v1/users/{id}
pub async fn show_user(pool: web::Data<PgPool>, user_id: web::Path<Uuid>) -> Result<HttpResponse> {
    let user = user_repo::find_by_id(&pool, *user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    Ok(HttpResponse::Ok().json(UserIdentity::from(user)))
}
