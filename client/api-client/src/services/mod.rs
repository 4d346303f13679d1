/// Per-resource service functions consumed by the UI layer
pub mod auth;
pub mod contents;

pub use auth::{login, logout, register};
pub use contents::{delete_content, get_contents, show_content, store_content, update_content};
