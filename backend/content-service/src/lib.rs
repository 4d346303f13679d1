/// Content Service Library
///
/// REST API for the Ripple content-sharing platform: account registration and
/// login, posts with comments and likes, and content records with optional
/// image attachments.
///
/// # Modules
///
/// - `handlers`: HTTP request handlers
/// - `models`: Data structures and request/response types
/// - `services`: Business logic layer
/// - `db`: Database access layer and repositories
/// - `middleware`: HTTP middleware for authentication
/// - `security`: Password hashing and token handling
/// - `error`: Error types and handling
/// - `config`: Configuration management
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod security;
pub mod services;

pub use config::Config;
pub use error::{AppError, Result};
