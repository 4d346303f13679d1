use std::collections::HashMap;

use sqlx::PgPool;
use uuid::Uuid;
use validator::{ValidationError, ValidationErrors};

use crate::db::{comment_repo, content_repo, like_repo, post_repo, user_repo};
use crate::error::{AppError, Result};
use crate::models::{CommentWithUser, Like, Post, PostDetail, UserIdentity};

/// Post operations: listing and reading posts with every relation
/// materialized, plus comment and like writes.
pub struct PostService {
    pool: PgPool,
}

impl PostService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All posts with `user`, `comments` (with user), `likes` and `content`
    /// attached
    pub async fn list_posts(&self) -> Result<Vec<PostDetail>> {
        let posts = post_repo::list_posts(&self.pool).await?;

        let mut details = Vec::with_capacity(posts.len());
        for post in posts {
            details.push(self.assemble_detail(post).await?);
        }

        Ok(details)
    }

    /// One post with the same nested attachments, or NotFound
    pub async fn get_post(&self, post_id: Uuid) -> Result<PostDetail> {
        let post = post_repo::find_post_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        self.assemble_detail(post).await
    }

    pub async fn create_post(&self, user_id: Uuid, body: &str) -> Result<PostDetail> {
        let post = post_repo::create_post(&self.pool, user_id, body).await?;
        self.assemble_detail(post).await
    }

    /// Update a post body; only the owner may update
    pub async fn update_post(&self, post_id: Uuid, user_id: Uuid, body: &str) -> Result<PostDetail> {
        let post = post_repo::find_post_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        if post.user_id != user_id {
            return Err(AppError::Authorization(
                "You can only edit your own posts".to_string(),
            ));
        }

        let updated = post_repo::update_post(&self.pool, post_id, body).await?;
        self.assemble_detail(updated).await
    }

    /// Delete a post; only the owner may delete
    pub async fn delete_post(&self, post_id: Uuid, user_id: Uuid) -> Result<()> {
        let post = post_repo::find_post_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        if post.user_id != user_id {
            return Err(AppError::Authorization(
                "You can only delete your own posts".to_string(),
            ));
        }

        post_repo::delete_post(&self.pool, post_id).await?;
        Ok(())
    }

    /// Create a comment for the given author.
    ///
    /// The author comes from the request body, so its existence is part of
    /// input validation: an unknown `user_id` fails with a 422, not a 500
    /// from the foreign key.
    pub async fn create_comment(
        &self,
        post_id: Uuid,
        user_id: Uuid,
        text: &str,
    ) -> Result<CommentWithUser> {
        post_repo::find_post_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        let user = match user_repo::find_by_id(&self.pool, user_id).await? {
            Some(user) => user,
            None => {
                let mut errors = ValidationErrors::new();
                let mut error = ValidationError::new("exists");
                error.message = Some("The selected user id is invalid.".into());
                errors.add("user_id", error);
                return Err(AppError::Validation(errors));
            }
        };

        let comment = comment_repo::create_comment(&self.pool, post_id, user_id, text).await?;

        Ok(CommentWithUser {
            id: comment.id,
            post_id: comment.post_id,
            user_id: comment.user_id,
            text: comment.text,
            created_at: comment.created_at,
            updated_at: comment.updated_at,
            user: UserIdentity::from(user),
        })
    }

    /// Like a post for the authenticated user; liking twice is a no-op
    pub async fn like_post(&self, post_id: Uuid, user_id: Uuid) -> Result<Like> {
        post_repo::find_post_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        let like = like_repo::create_like(&self.pool, post_id, user_id).await?;
        Ok(like)
    }

    /// Remove the authenticated user's like from a post
    pub async fn unlike_post(&self, post_id: Uuid, user_id: Uuid) -> Result<()> {
        post_repo::find_post_by_id(&self.pool, post_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Post not found".to_string()))?;

        like_repo::delete_like(&self.pool, post_id, user_id).await?;
        Ok(())
    }

    async fn assemble_detail(&self, post: Post) -> Result<PostDetail> {
        let (user, comments, likes, content) = futures::try_join!(
            user_repo::find_by_id(&self.pool, post.user_id),
            comment_repo::get_comments_by_post(&self.pool, post.id),
            like_repo::get_likes_by_post(&self.pool, post.id),
            content_repo::find_content_by_post(&self.pool, post.id),
        )?;

        let user = user.ok_or_else(|| {
            AppError::Internal(format!("Post {} references a missing user", post.id))
        })?;

        let mut author_ids: Vec<Uuid> = comments.iter().map(|c| c.user_id).collect();
        author_ids.sort_unstable();
        author_ids.dedup();

        let authors: HashMap<Uuid, UserIdentity> =
            user_repo::find_by_ids(&self.pool, &author_ids)
                .await?
                .into_iter()
                .map(|u| (u.id, UserIdentity::from(u)))
                .collect();

        let comments: Vec<CommentWithUser> = comments
            .into_iter()
            .filter_map(|comment| {
                authors.get(&comment.user_id).cloned().map(|author| CommentWithUser {
                    id: comment.id,
                    post_id: comment.post_id,
                    user_id: comment.user_id,
                    text: comment.text,
                    created_at: comment.created_at,
                    updated_at: comment.updated_at,
                    user: author,
                })
            })
            .collect();

        Ok(PostDetail {
            id: post.id,
            user_id: post.user_id,
            body: post.body,
            created_at: post.created_at,
            updated_at: post.updated_at,
            user: UserIdentity::from(user),
            comments,
            likes,
            content,
        })
    }
}
