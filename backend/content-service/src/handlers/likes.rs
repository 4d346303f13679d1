/// Like handlers - HTTP endpoints for like operations
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::Result;
use crate::middleware::UserId;
use crate::services::PostService;

/// Like a post
/// POST /api/v1/posts/{post_id}/likes
pub async fn store_like(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let like = service.like_post(*post_id, user_id.0).await?;

    Ok(HttpResponse::Created().json(like))
}

/// Unlike a post
/// DELETE /api/v1/posts/{post_id}/likes
pub async fn destroy_like(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    service.unlike_post(*post_id, user_id.0).await?;

    Ok(HttpResponse::NoContent().finish())
}
