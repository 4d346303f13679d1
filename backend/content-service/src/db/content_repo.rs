use crate::models::Content;
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// Create a content record
pub async fn create_content(
    pool: &PgPool,
    post_id: Option<Uuid>,
    title: &str,
    description: Option<&str>,
    image: Option<&str>,
) -> Result<Content, sqlx::Error> {
    let content = sqlx::query_as::<_, Content>(
        r#"
        INSERT INTO contents (post_id, title, description, image)
        VALUES ($1, $2, $3, $4)
        RETURNING id, post_id, title, description, image, created_at, updated_at
        "#,
    )
    .bind(post_id)
    .bind(title)
    .bind(description)
    .bind(image)
    .fetch_one(pool)
    .await?;

    Ok(content)
}

/// Get a single content record by ID
pub async fn find_content_by_id(
    pool: &PgPool,
    content_id: Uuid,
) -> Result<Option<Content>, sqlx::Error> {
    let content = sqlx::query_as::<_, Content>(
        r#"
        SELECT id, post_id, title, description, image, created_at, updated_at
        FROM contents
        WHERE id = $1
        "#,
    )
    .bind(content_id)
    .fetch_optional(pool)
    .await?;

    Ok(content)
}

/// Get the content attached to a post, if any
pub async fn find_content_by_post(
    pool: &PgPool,
    post_id: Uuid,
) -> Result<Option<Content>, sqlx::Error> {
    let content = sqlx::query_as::<_, Content>(
        r#"
        SELECT id, post_id, title, description, image, created_at, updated_at
        FROM contents
        WHERE post_id = $1
        ORDER BY created_at DESC
        LIMIT 1
        "#,
    )
    .bind(post_id)
    .fetch_optional(pool)
    .await?;

    Ok(content)
}

/// List content records with optional title filter, newest first
pub async fn list_contents(
    pool: &PgPool,
    title_filter: Option<&str>,
    limit: i64,
    offset: i64,
) -> Result<Vec<Content>, sqlx::Error> {
    let contents = sqlx::query_as::<_, Content>(
        r#"
        SELECT id, post_id, title, description, image, created_at, updated_at
        FROM contents
        WHERE ($1::text IS NULL OR title ILIKE '%' || $1 || '%')
        ORDER BY created_at DESC
        LIMIT $2 OFFSET $3
        "#,
    )
    .bind(title_filter)
    .bind(limit)
    .bind(offset)
    .fetch_all(pool)
    .await?;

    Ok(contents)
}

/// Count content records matching the optional title filter
pub async fn count_contents(pool: &PgPool, title_filter: Option<&str>) -> Result<i64, sqlx::Error> {
    let row = sqlx::query(
        r#"
        SELECT COUNT(*) as count
        FROM contents
        WHERE ($1::text IS NULL OR title ILIKE '%' || $1 || '%')
        "#,
    )
    .bind(title_filter)
    .fetch_one(pool)
    .await?;

    Ok(row.get::<i64, _>("count"))
}

/// Update the mutable fields of a content record
pub async fn update_content(
    pool: &PgPool,
    content_id: Uuid,
    title: Option<&str>,
    description: Option<&str>,
) -> Result<Content, sqlx::Error> {
    let content = sqlx::query_as::<_, Content>(
        r#"
        UPDATE contents
        SET title = COALESCE($1, title),
            description = COALESCE($2, description),
            updated_at = NOW()
        WHERE id = $3
        RETURNING id, post_id, title, description, image, created_at, updated_at
        "#,
    )
    .bind(title)
    .bind(description)
    .bind(content_id)
    .fetch_one(pool)
    .await?;

    Ok(content)
}

/// Delete a content record
pub async fn delete_content(pool: &PgPool, content_id: Uuid) -> Result<(), sqlx::Error> {
    sqlx::query("DELETE FROM contents WHERE id = $1")
        .bind(content_id)
        .execute(pool)
        .await?;

    Ok(())
}
