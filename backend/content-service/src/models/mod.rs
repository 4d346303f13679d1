/// Data models for content-service
///
/// Database entities (sqlx `FromRow`) and the request/response types exposed
/// on the wire. Entities are keyed by UUID; wire responses for posts always
/// carry the fully materialized `user`, `comments`, `likes` and `content`
/// relations.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

// ============================================
// Entities
// ============================================

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Post {
    pub id: Uuid,
    pub user_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Comment {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Like {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Content {
    pub id: Uuid,
    pub post_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    /// Storage-relative path, set only when the creating request uploaded a file
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// ============================================
// Wire DTOs
// ============================================

/// Public identity of a user; never exposes the password hash
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

impl From<User> for UserIdentity {
    fn from(user: User) -> Self {
        UserIdentity {
            id: user.id,
            firstname: user.firstname,
            lastname: user.lastname,
            email: user.email,
        }
    }
}

/// A comment with its author attached
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommentWithUser {
    pub id: Uuid,
    pub post_id: Uuid,
    pub user_id: Uuid,
    pub text: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: UserIdentity,
}

/// A post with every relation materialized
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PostDetail {
    pub id: Uuid,
    pub user_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub user: UserIdentity,
    pub comments: Vec<CommentWithUser>,
    pub likes: Vec<Like>,
    pub content: Option<Content>,
}

/// Envelope for the post index: `{status, result: {data: [...]}}`
#[derive(Debug, Serialize, Deserialize)]
pub struct PostIndexResponse {
    pub status: u16,
    pub result: PostIndexData,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PostIndexData {
    pub data: Vec<PostDetail>,
}

/// Envelope for a created comment
#[derive(Debug, Serialize, Deserialize)]
pub struct CommentEnvelope {
    pub comment: CommentWithUser,
}

/// Login/registration response
#[derive(Debug, Serialize, Deserialize)]
pub struct AuthResponse {
    pub user: UserIdentity,
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Paginated content listing
#[derive(Debug, Serialize, Deserialize)]
pub struct ContentPage {
    pub data: Vec<Content>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}

// ============================================
// Request payloads
// ============================================

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 100, message = "The firstname must be between 1 and 100 characters."))]
    pub firstname: String,

    #[validate(length(min = 1, max = 100, message = "The lastname must be between 1 and 100 characters."))]
    pub lastname: String,

    #[validate(email(message = "The email must be a valid email address."))]
    pub email: String,

    #[validate(length(min = 8, message = "The password must be at least 8 characters."))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "The email must be a valid email address."))]
    pub email: String,

    #[validate(length(min = 1, message = "The password field is required."))]
    pub password: String,
}

/// Body of `POST /posts/{post_id}/comments`
///
/// Both fields are optional at the deserialization layer so a missing field
/// surfaces as a 422 validation error rather than a 400 parse error.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[validate(required(message = "The user id field is required."))]
    pub user_id: Option<Uuid>,

    #[validate(
        required(message = "The text field is required."),
        length(min = 1, max = 255, message = "The text must be between 1 and 255 characters.")
    )]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreatePostRequest {
    #[validate(length(min = 1, max = 5000, message = "The body must be between 1 and 5000 characters."))]
    pub body: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdatePostRequest {
    #[validate(length(min = 1, max = 5000, message = "The body must be between 1 and 5000 characters."))]
    pub body: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateContentRequest {
    #[validate(length(min = 1, max = 255, message = "The title must be between 1 and 255 characters."))]
    pub title: Option<String>,

    pub description: Option<String>,
}

/// Query parameters for the content index
#[derive(Debug, Deserialize)]
pub struct ContentQuery {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
    pub title: Option<String>,
}
