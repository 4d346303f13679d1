/// Business logic layer
pub mod contents;
pub mod posts;
pub mod storage;

pub use contents::{ContentDraft, ContentService};
pub use posts::PostService;
pub use storage::{MediaStorage, UploadedImage};
