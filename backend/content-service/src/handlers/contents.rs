/// Content handlers - CRUD over content records, with multipart upload
use actix_multipart::Multipart;
use actix_web::{web, HttpResponse};
use futures::TryStreamExt;
use sqlx::PgPool;
use uuid::Uuid;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::error::{AppError, Result};
use crate::models::{ContentQuery, MessageResponse, UpdateContentRequest};
use crate::services::{ContentDraft, ContentService, MediaStorage, UploadedImage};

const MAX_TEXT_FIELD_BYTES: usize = 64 * 1024;
const MAX_IMAGE_BYTES: usize = 10 * 1024 * 1024;
const MAX_TITLE_CHARS: usize = 255;

/// List content records
/// GET /api/v1/contents?page=&per_page=&title=
pub async fn index_contents(
    pool: web::Data<PgPool>,
    storage: web::Data<MediaStorage>,
    query: web::Query<ContentQuery>,
) -> Result<HttpResponse> {
    let service = ContentService::new((**pool).clone(), (**storage).clone());
    let page = service.list(&query).await?;

    Ok(HttpResponse::Ok().json(page))
}

/// Get a single content record
/// GET /api/v1/contents/{id}
pub async fn show_content(
    pool: web::Data<PgPool>,
    storage: web::Data<MediaStorage>,
    content_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = ContentService::new((**pool).clone(), (**storage).clone());
    let content = service.get(*content_id).await?;

    Ok(HttpResponse::Ok().json(content))
}

/// Create a content record from a multipart form
/// POST /api/v1/contents
///
/// Accepts text fields `title` (required), `description`, `post_id`, and an
/// optional `image` file part.
pub async fn store_content(
    pool: web::Data<PgPool>,
    storage: web::Data<MediaStorage>,
    payload: Multipart,
) -> Result<HttpResponse> {
    let draft = parse_content_form(payload).await?;

    let service = ContentService::new((**pool).clone(), (**storage).clone());
    let content = service.store(draft).await?;

    Ok(HttpResponse::Created().json(content))
}

/// Update a content record
/// PATCH /api/v1/contents/{id}
pub async fn update_content(
    pool: web::Data<PgPool>,
    storage: web::Data<MediaStorage>,
    content_id: web::Path<Uuid>,
    req: web::Json<UpdateContentRequest>,
) -> Result<HttpResponse> {
    req.validate()?;

    let service = ContentService::new((**pool).clone(), (**storage).clone());
    let content = service.update(*content_id, &req).await?;

    Ok(HttpResponse::Ok().json(content))
}

/// Delete a content record
/// DELETE /api/v1/contents/{id}
pub async fn delete_content(
    pool: web::Data<PgPool>,
    storage: web::Data<MediaStorage>,
    content_id: web::Path<Uuid>,
) -> Result<HttpResponse> {
    let service = ContentService::new((**pool).clone(), (**storage).clone());
    service.delete(*content_id).await?;

    Ok(HttpResponse::Ok().json(MessageResponse {
        message: "Content deleted".to_string(),
    }))
}

/// Drain the multipart stream into a `ContentDraft`
async fn parse_content_form(mut payload: Multipart) -> Result<ContentDraft> {
    let mut title: Option<String> = None;
    let mut description: Option<String> = None;
    let mut post_id: Option<Uuid> = None;
    let mut image: Option<UploadedImage> = None;

    while let Some(mut field) = payload
        .try_next()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart payload: {}", e)))?
    {
        let disposition = field.content_disposition().clone();
        let name = disposition.get_name().unwrap_or_default().to_string();

        match name.as_str() {
            "image" => {
                let filename = disposition.get_filename().map(str::to_string);
                let content_type = field.content_type().map(|m| m.to_string());
                let bytes = read_field_bytes(&mut field, MAX_IMAGE_BYTES).await?;
                // Empty file inputs are submitted as zero-byte parts; ignore them
                if !bytes.is_empty() {
                    image = Some(UploadedImage {
                        filename,
                        content_type,
                        bytes,
                    });
                }
            }
            "title" => title = Some(read_field_string(&mut field).await?),
            "description" => description = Some(read_field_string(&mut field).await?),
            "post_id" => {
                let raw = read_field_string(&mut field).await?;
                if !raw.trim().is_empty() {
                    let parsed = Uuid::parse_str(raw.trim()).map_err(|_| {
                        AppError::BadRequest("Invalid post ID format".to_string())
                    })?;
                    post_id = Some(parsed);
                }
            }
            _ => {
                // Unknown field: drain it so the stream can continue
                read_field_bytes(&mut field, MAX_TEXT_FIELD_BYTES).await?;
            }
        }
    }

    let title = validate_title(title)?;

    Ok(ContentDraft {
        title,
        description: description.filter(|d| !d.is_empty()),
        post_id,
        image,
    })
}

async fn read_field_bytes(
    field: &mut actix_multipart::Field,
    limit: usize,
) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    while let Some(chunk) = field
        .try_next()
        .await
        .map_err(|e| AppError::BadRequest(format!("Malformed multipart payload: {}", e)))?
    {
        if buf.len() + chunk.len() > limit {
            return Err(AppError::BadRequest("Uploaded part is too large".to_string()));
        }
        buf.extend_from_slice(&chunk);
    }
    Ok(buf)
}

async fn read_field_string(field: &mut actix_multipart::Field) -> Result<String> {
    let bytes = read_field_bytes(field, MAX_TEXT_FIELD_BYTES).await?;
    String::from_utf8(bytes).map_err(|_| AppError::BadRequest("Field is not valid UTF-8".to_string()))
}

fn validate_title(title: Option<String>) -> Result<String> {
    let mut errors = ValidationErrors::new();

    match title {
        Some(t) if !t.trim().is_empty() && t.chars().count() <= MAX_TITLE_CHARS => return Ok(t),
        Some(t) if t.trim().is_empty() => {
            let mut error = ValidationError::new("required");
            error.message = Some("The title field is required.".into());
            errors.add("title", error);
        }
        Some(_) => {
            let mut error = ValidationError::new("length");
            error.message = Some("The title must be between 1 and 255 characters.".into());
            errors.add("title", error);
        }
        None => {
            let mut error = ValidationError::new("required");
            error.message = Some("The title field is required.".into());
            errors.add("title", error);
        }
    }

    Err(AppError::Validation(errors))
}
