/// Content service functions
use uuid::Uuid;

use crate::error::ApiError;
use crate::http::Http;
use crate::models::{ContentForm, ContentPage, ContentRecord, UpdateContentForm};

/// Fetch a content listing. `page_query` is appended to the path verbatim
/// (e.g. `"?page=2"`); `filters` become additional query parameters.
pub async fn get_contents(
    http: &Http,
    page_query: &str,
    filters: &[(&str, &str)],
) -> Result<ContentPage, ApiError> {
    let path = format!("contents{}", page_query);
    let response = if filters.is_empty() {
        http.get(&path).await?
    } else {
        http.get_with_query(&path, filters).await?
    };

    match response.status().as_u16() {
        200 => response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string())),
        status => Err(ApiError::from_unexpected_status(status)),
    }
}

pub async fn show_content(http: &Http, id: Uuid) -> Result<ContentRecord, ApiError> {
    let response = http.get(&format!("contents/{}", id)).await?;

    match response.status().as_u16() {
        200 => response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string())),
        status => Err(ApiError::from_unexpected_status(status)),
    }
}

pub async fn store_content(http: &Http, form: &ContentForm) -> Result<ContentRecord, ApiError> {
    let mut multipart = reqwest::multipart::Form::new().text("title", form.title.clone());

    if let Some(description) = &form.description {
        multipart = multipart.text("description", description.clone());
    }
    if let Some(post_id) = &form.post_id {
        multipart = multipart.text("post_id", post_id.to_string());
    }
    if let Some(image) = &form.image {
        let part = reqwest::multipart::Part::bytes(image.bytes.clone())
            .file_name(image.filename.clone())
            .mime_str(&image.content_type)
            .map_err(|e| ApiError::BadRequest {
                message: format!("Invalid image content type: {}", e),
            })?;
        multipart = multipart.part("image", part);
    }

    let response = http.post_multipart("contents", multipart).await?;

    match response.status().as_u16() {
        201 => response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string())),
        status => Err(ApiError::from_unexpected_status(status)),
    }
}

pub async fn update_content(
    http: &Http,
    form: &UpdateContentForm,
    id: Uuid,
) -> Result<ContentRecord, ApiError> {
    let response = http.patch_json(&format!("contents/{}", id), form).await?;

    match response.status().as_u16() {
        200 => response
            .json()
            .await
            .map_err(|e| ApiError::Decode(e.to_string())),
        status => Err(ApiError::from_unexpected_status(status)),
    }
}

pub async fn delete_content(http: &Http, id: Uuid) -> Result<(), ApiError> {
    let response = http.delete(&format!("contents/{}", id)).await?;

    match response.status().as_u16() {
        200 => Ok(()),
        status => Err(ApiError::from_unexpected_status(status)),
    }
}
