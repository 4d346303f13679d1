/// Comment handlers - HTTP endpoints for comment operations
use actix_web::{web, HttpResponse};
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::error::Result;
use crate::models::{CommentEnvelope, CreateCommentRequest};
use crate::services::PostService;

/// Create a comment on a post
/// POST /api/v1/posts/{post_id}/comments
///
/// The comment author is taken from the request body; both the author and
/// the text are validated before anything is written.
pub async fn store_comment(
    pool: web::Data<PgPool>,
    post_id: web::Path<Uuid>,
    req: web::Json<CreateCommentRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    // Both fields carry `required` rules, so they are present past this point
    let (user_id, text) = match (req.user_id, req.text.as_deref()) {
        (Some(user_id), Some(text)) => (user_id, text),
        _ => return Err(crate::error::AppError::BadRequest("Invalid comment payload".to_string())),
    };

    let service = PostService::new((**pool).clone());
    let comment = service.create_comment(*post_id, user_id, text).await?;

    Ok(HttpResponse::Created().json(CommentEnvelope { comment }))
}
