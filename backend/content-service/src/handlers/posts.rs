/// Post handlers - HTTP endpoints for post operations
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::Result;
use crate::middleware::UserId;
use crate::models::{CreatePostRequest, PostIndexData, PostIndexResponse, UpdatePostRequest};
use crate::services::PostService;

/// List all posts with nested relations
/// GET /api/v1/posts
pub async fn index_posts(pool: web::Data<PgPool>) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let posts = service.list_posts().await?;

    Ok(HttpResponse::Ok().json(PostIndexResponse {
        status: 200,
        result: PostIndexData { data: posts },
    }))
}

/// Get a single post with nested relations
/// GET /api/v1/posts/{id}
pub async fn show_post(pool: web::Data<PgPool>, post_id: web::Path<Uuid>) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    let post = service.get_post(*post_id).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// Create a post
/// POST /api/v1/posts
pub async fn store_post(
    pool: web::Data<PgPool>,
    user_id: UserId,
    req: web::Json<CreatePostRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = PostService::new((**pool).clone());
    let post = service.create_post(user_id.0, &req.body).await?;

    Ok(HttpResponse::Created().json(post))
}

/// Update a post
/// PATCH /api/v1/posts/{id}
pub async fn update_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
    req: web::Json<UpdatePostRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = PostService::new((**pool).clone());
    let post = service.update_post(*post_id, user_id.0, &req.body).await?;

    Ok(HttpResponse::Ok().json(post))
}

/// Delete a post
/// DELETE /api/v1/posts/{id}
pub async fn destroy_post(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    user_id: UserId,
) -> Result<HttpResponse> {
    let service = PostService::new((**pool).clone());
    service.delete_post(*post_id, user_id.0).await?;

    Ok(HttpResponse::NoContent().finish())
}
