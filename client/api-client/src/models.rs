/// Request forms and response payloads
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    pub id: Uuid,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
}

/// `{user, token}` returned by login and register
#[derive(Debug, Clone, Deserialize)]
pub struct AuthPayload {
    pub user: UserIdentity,
    pub token: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct RegisterForm {
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentRecord {
    pub id: Uuid,
    pub post_id: Option<Uuid>,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ContentPage {
    pub data: Vec<ContentRecord>,
    pub total: i64,
    pub page: i64,
    pub per_page: i64,
}

/// Multipart form for creating a content record
#[derive(Debug, Clone, Default)]
pub struct ContentForm {
    pub title: String,
    pub description: Option<String>,
    pub post_id: Option<Uuid>,
    pub image: Option<ImageFile>,
}

/// A file selected for upload
#[derive(Debug, Clone)]
pub struct ImageFile {
    pub filename: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct UpdateContentForm {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}
