use std::path::PathBuf;

use tokio::fs;
use uuid::Uuid;

use crate::error::AppError;

/// An uploaded file as parsed out of a multipart request
#[derive(Debug, Clone)]
pub struct UploadedImage {
    pub filename: Option<String>,
    pub content_type: Option<String>,
    pub bytes: Vec<u8>,
}

/// Local media storage rooted at the configured media directory.
///
/// Stored paths are relative to the root so records stay valid when the
/// root moves between environments.
#[derive(Debug, Clone)]
pub struct MediaStorage {
    root: PathBuf,
}

impl MediaStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Persist an uploaded image under `content_images/` and return the
    /// storage-relative path.
    pub async fn save_image(&self, image: &UploadedImage) -> Result<String, AppError> {
        let relative = format!("content_images/{}.{}", Uuid::new_v4(), extension_for(image));
        let path = self.root.join(&relative);

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| AppError::Internal(format!("Failed to create media dir: {}", e)))?;
        }

        fs::write(&path, &image.bytes)
            .await
            .map_err(|e| AppError::Internal(format!("Failed to store image: {}", e)))?;

        Ok(relative)
    }
}

/// Pick a file extension from the original filename, falling back to the
/// declared content type
fn extension_for(image: &UploadedImage) -> String {
    if let Some(name) = &image.filename {
        if let Some(ext) = name.rsplit_once('.').map(|(_, ext)| ext) {
            if !ext.is_empty() && ext.len() <= 8 && ext.chars().all(|c| c.is_ascii_alphanumeric()) {
                return ext.to_ascii_lowercase();
            }
        }
    }

    if let Some(content_type) = &image.content_type {
        if let Ok(mime) = content_type.parse::<mime::Mime>() {
            if mime.type_() == mime::IMAGE {
                return mime.subtype().as_str().to_string();
            }
        }
    }

    "bin".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image(filename: Option<&str>, content_type: Option<&str>) -> UploadedImage {
        UploadedImage {
            filename: filename.map(str::to_string),
            content_type: content_type.map(str::to_string),
            bytes: vec![1, 2, 3, 4],
        }
    }

    #[test]
    fn test_extension_prefers_filename() {
        assert_eq!(extension_for(&image(Some("photo.PNG"), Some("image/jpeg"))), "png");
    }

    #[test]
    fn test_extension_falls_back_to_content_type() {
        assert_eq!(extension_for(&image(Some("photo"), Some("image/jpeg"))), "jpeg");
        assert_eq!(extension_for(&image(None, Some("image/png"))), "png");
    }

    #[test]
    fn test_extension_last_resort() {
        assert_eq!(extension_for(&image(None, None)), "bin");
        assert_eq!(extension_for(&image(Some("archive.tar.gz/../x"), None)), "bin");
    }

    #[tokio::test]
    async fn test_save_image_writes_under_content_images() {
        let dir = tempfile::tempdir().unwrap();
        let storage = MediaStorage::new(dir.path());

        let relative = storage
            .save_image(&image(Some("photo.png"), None))
            .await
            .unwrap();

        assert!(relative.starts_with("content_images/"));
        assert!(relative.ends_with(".png"));
        let stored = dir.path().join(&relative);
        assert_eq!(tokio::fs::read(stored).await.unwrap(), vec![1, 2, 3, 4]);
    }
}
