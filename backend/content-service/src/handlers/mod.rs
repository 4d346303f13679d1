/// HTTP request handlers
pub mod auth;
pub mod comments;
pub mod contents;
pub mod health;
pub mod likes;
pub mod posts;
pub mod users;

pub use auth::{login, logout, register};
pub use comments::store_comment;
pub use contents::{delete_content, index_contents, show_content, store_content, update_content};
pub use health::{health_check, liveness_check};
pub use likes::{store_like, destroy_like};
pub use posts::{destroy_post, index_posts, show_post, store_post, update_post};
pub use users::{index_users, show_user};
