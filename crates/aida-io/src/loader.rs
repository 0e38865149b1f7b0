use std::{
    future::Future,
    path::{Path, PathBuf},
    pin::Pin,
};

use aida_image::Image;

use crate::{error::IoError, functional};

/// The future returned by an [`ImageLoader`], resolving to the decoded RGBA pixels.
pub type LoadFuture = Pin<Box<dyn Future<Output = Result<Image<u8, 4>, IoError>> + Send>>;

/// An external collaborator that turns an image location into decoded pixels.
///
/// Loading is asynchronous: the pixels only exist once the returned future completes.
pub trait ImageLoader: Send + Sync {
    /// Start loading the image found at `location`.
    fn load(&self, location: &str) -> LoadFuture;
}

/// Loads images from the local filesystem.
///
/// Accepts plain paths and `file://` URLs. Any other scheme is rejected with
/// [`IoError::UnsupportedScheme`] when the returned future is polled.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileLoader;

impl ImageLoader for FileLoader {
    fn load(&self, location: &str) -> LoadFuture {
        let path = location_to_path(location);
        Box::pin(async move {
            let path = path?;
            log::debug!("loading image from {}", path.display());

            if !tokio::fs::try_exists(&path).await? {
                return Err(IoError::FileDoesNotExist(path));
            }

            let bytes = tokio::fs::read(&path).await?;

            // decoding is cpu bound, keep it off the async workers
            tokio::task::spawn_blocking(move || functional::decode_image_rgba8(&bytes)).await?
        })
    }
}

/// Resolve an image location string to a filesystem path.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedScheme`] for URLs other than `file://`.
pub fn location_to_path(location: &str) -> Result<PathBuf, IoError> {
    match location.split_once("://") {
        Some(("file", path)) => Ok(Path::new(path).to_path_buf()),
        Some((scheme, _)) => Err(IoError::UnsupportedScheme(scheme.to_string())),
        None => Ok(Path::new(location).to_path_buf()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_to_path() -> Result<(), IoError> {
        assert_eq!(location_to_path("a/b.png")?, PathBuf::from("a/b.png"));
        assert_eq!(
            location_to_path("file:///tmp/b.png")?,
            PathBuf::from("/tmp/b.png")
        );
        assert!(matches!(
            location_to_path("https://example.com/b.png"),
            Err(IoError::UnsupportedScheme(s)) if s == "https"
        ));
        Ok(())
    }

    #[tokio::test]
    async fn test_file_loader() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("pixel.png");

        image::RgbaImage::from_raw(1, 1, vec![9, 8, 7, 6])
            .expect("buffer matches the dimensions")
            .save(&file_path)?;

        let location = format!("file://{}", file_path.display());
        let image = FileLoader.load(&location).await?;
        assert_eq!(image.as_slice(), &[9, 8, 7, 6]);

        Ok(())
    }

    #[tokio::test]
    async fn test_file_loader_missing() {
        let res = FileLoader.load("missing/pixel.png").await;
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }
}
