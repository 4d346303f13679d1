use crate::models::Post;
use sqlx::PgPool;
use uuid::Uuid;

/// Create a new post
pub async fn create_post(pool: &PgPool, user_id: Uuid, body: &str) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        INSERT INTO posts (user_id, body)
        VALUES ($1, $2)
        RETURNING id, user_id, body, created_at, updated_at
        "#,
    )
    .bind(user_id)
    .bind(body)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Get a single post by ID
pub async fn find_post_by_id(pool: &PgPool, post_id: Uuid) -> Result<Option<Post>, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, user_id, body, created_at, updated_at
        FROM posts
        WHERE id = $1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(post)
}

/// Get all posts, newest first
pub async fn list_posts(pool: &PgPool) -> Result<Vec<Post>, sqlx::Error> {
    let posts = sqlx::query_as::<_, Post>(
        r#"
        SELECT id, user_id, body, created_at, updated_at
        FROM posts
        ORDER BY created_at DESC
        "#,
    )
    .fetch_all(pool)
    .await?;

    Ok(posts)
}

/// Update a post body
pub async fn update_post(pool: &PgPool, post_id: Uuid, body: &str) -> Result<Post, sqlx::Error> {
    let post = sqlx::query_as::<_, Post>(
        r#"
        UPDATE posts
        SET body = $1, updated_at = NOW()
        WHERE id = $2
        RETURNING id, user_id, body, created_at, updated_at
        "#,
    )
    .bind(body)
    .bind(post_id)
    .fetch_one(pool)
    .await?;

    Ok(post)
}

/// Delete a post
pub async fn delete_post(pool: &PgPool, post_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM posts WHERE id = $1")
        .bind(post_id)
        .execute(pool)
        .await?;

    Ok(())
}
