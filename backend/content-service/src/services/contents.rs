use sqlx::PgPool;
use uuid::Uuid;

use crate::db::content_repo;
use crate::error::{AppError, Result};
use crate::models::{Content, ContentPage, ContentQuery, UpdateContentRequest};
use crate::services::storage::{MediaStorage, UploadedImage};

const DEFAULT_PER_PAGE: i64 = 15;
const MAX_PER_PAGE: i64 = 100;

/// Parsed input for creating a content record
#[derive(Debug)]
pub struct ContentDraft {
    pub title: String,
    pub description: Option<String>,
    pub post_id: Option<Uuid>,
    pub image: Option<UploadedImage>,
}

/// Content operations.
///
/// `store` holds the one piece of logic in this layer: the uploaded file is
/// taken out of the payload, written to media storage, and its storage path
/// substituted as the `image` attribute before the record is created.
pub struct ContentService {
    pool: PgPool,
    storage: MediaStorage,
}

impl ContentService {
    pub fn new(pool: PgPool, storage: MediaStorage) -> Self {
        Self { pool, storage }
    }

    pub async fn store(&self, draft: ContentDraft) -> Result<Content> {
        let image_path = match &draft.image {
            Some(image) => Some(self.storage.save_image(image).await?),
            None => None,
        };

        let content = content_repo::create_content(
            &self.pool,
            draft.post_id,
            &draft.title,
            draft.description.as_deref(),
            image_path.as_deref(),
        )
        .await?;

        Ok(content)
    }

    pub async fn list(&self, query: &ContentQuery) -> Result<ContentPage> {
        let page = query.page.unwrap_or(1).max(1);
        let per_page = query
            .per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE);
        let offset = (page - 1) * per_page;
        let title_filter = query.title.as_deref().filter(|t| !t.trim().is_empty());

        let (data, total) = futures::try_join!(
            content_repo::list_contents(&self.pool, title_filter, per_page, offset),
            content_repo::count_contents(&self.pool, title_filter),
        )?;

        Ok(ContentPage {
            data,
            total,
            page,
            per_page,
        })
    }

    pub async fn get(&self, content_id: Uuid) -> Result<Content> {
        content_repo::find_content_by_id(&self.pool, content_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Content not found".to_string()))
    }

    pub async fn update(&self, content_id: Uuid, req: &UpdateContentRequest) -> Result<Content> {
        content_repo::find_content_by_id(&self.pool, content_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Content not found".to_string()))?;

        let content = content_repo::update_content(
            &self.pool,
            content_id,
            req.title.as_deref(),
            req.description.as_deref(),
        )
        .await?;

        Ok(content)
    }

    pub async fn delete(&self, content_id: Uuid) -> Result<()> {
        content_repo::find_content_by_id(&self.pool, content_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Content not found".to_string()))?;

        content_repo::delete_content(&self.pool, content_id).await?;
        Ok(())
    }
}
