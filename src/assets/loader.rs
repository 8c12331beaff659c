/// Image loader
///
/// Decodes image files with the `image` crate on tokio's blocking pool
/// and hands back an RGBA handle iced can draw. Any failure (missing
/// file, unreadable or undecodable data) is the load-failure signal for
/// the slot that asked.

use iced::widget::image::Handle;
use image::imageops::FilterType;
use std::path::{Path, PathBuf};
use tokio::task;

use crate::error::{FolioError, Result};

/// Larger images are downscaled before upload
const MAX_DIMENSION: u32 = 1600;

/// Resolve an image reference against the asset root.
/// Leading slashes are web-style absolute references and are stripped.
pub fn resolve(root: &Path, src: &str) -> PathBuf {
    root.join(src.trim_start_matches('/'))
}

/// Load and decode an image
///
/// # Returns
/// * `Ok(handle)` - Decoded RGBA image
/// * `Err(String)` - Human-readable failure, already logged by the caller
pub async fn load_image(root: PathBuf, src: String) -> std::result::Result<Handle, String> {
    // Spawn blocking because decoding is CPU-intensive
    task::spawn_blocking(move || load_image_blocking(&root, &src))
        .await
        .map_err(|e| FolioError::Task(e.to_string()))
        .and_then(|result| result)
        .map_err(|e| e.to_string())
}

/// Blocking implementation of image loading
fn load_image_blocking(root: &Path, src: &str) -> Result<Handle> {
    let path = resolve(root, src);

    if !path.is_file() {
        return Err(FolioError::ImageNotFound(path));
    }

    let mut img = image::open(&path).map_err(|source| FolioError::Decode {
        path: path.clone(),
        source,
    })?;

    if img.width() > MAX_DIMENSION || img.height() > MAX_DIMENSION {
        img = img.resize(MAX_DIMENSION, MAX_DIMENSION, FilterType::Lanczos3);
    }

    let rgba = img.to_rgba8();
    let (width, height) = rgba.dimensions();
    log::debug!("Decoded {} ({}x{})", path.display(), width, height);

    Ok(Handle::from_rgba(width, height, rgba.into_raw()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_strips_web_root() {
        let root = Path::new("/srv/assets");
        assert_eq!(
            resolve(root, "/deenApp/1.png"),
            PathBuf::from("/srv/assets/deenApp/1.png")
        );
        assert_eq!(
            resolve(root, "projects/e-invoice.jpg"),
            PathBuf::from("/srv/assets/projects/e-invoice.jpg")
        );
    }

    #[tokio::test]
    async fn test_load_existing_image() {
        let dir = tempfile::tempdir().unwrap();
        image::RgbaImage::from_pixel(4, 2, image::Rgba([10, 20, 30, 255]))
            .save(dir.path().join("cover.png"))
            .unwrap();

        let result = load_image(dir.path().to_path_buf(), "/cover.png".to_string()).await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn test_missing_image_fails() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_image(dir.path().to_path_buf(), "nope.png".to_string())
            .await
            .unwrap_err();
        assert!(err.contains("not found"));
    }

    #[tokio::test]
    async fn test_corrupt_image_fails() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.jpg"), b"definitely not a jpeg").unwrap();

        let err = load_image(dir.path().to_path_buf(), "broken.jpg".to_string())
            .await
            .unwrap_err();
        assert!(err.contains("decode"));
    }
}
