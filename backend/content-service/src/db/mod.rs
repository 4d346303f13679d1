/// Database access layer
///
/// One repository module per entity. Repositories are pure delegation over
/// the connection pool: no validation or error translation happens here.
pub mod comment_repo;
pub mod content_repo;
pub mod like_repo;
pub mod post_repo;
pub mod user_repo;
