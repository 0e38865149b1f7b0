use std::{
    future::Future,
    path::{Path, PathBuf},
    pin::Pin,
};

use aida_image::{Image, ImageError, ImageSize};
use aida_io::ImageLoader;

use crate::{error::ConvertError, surface::Surface};

/// The future returned for sources whose pixels are still loading.
pub type SurfaceFuture = Pin<Box<dyn Future<Output = Result<Surface, ConvertError>> + Send>>;

/// A handle to an image that may or may not hold decoded pixels yet.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ImageHandle {
    src: Option<String>,
    pixels: Option<Image<u8, 4>>,
}

impl ImageHandle {
    /// Create a handle pointing at an image location that still has to be loaded.
    pub fn from_location(src: impl Into<String>) -> Self {
        Self {
            src: Some(src.into()),
            pixels: None,
        }
    }

    /// Create a handle for an image whose pixels are already decoded.
    pub fn from_pixels(pixels: Image<u8, 4>) -> Self {
        Self {
            src: None,
            pixels: Some(pixels),
        }
    }

    /// Attach the location the pixels were decoded from.
    pub fn with_location(mut self, src: impl Into<String>) -> Self {
        self.src = Some(src.into());
        self
    }

    /// Whether the handle holds decoded pixels.
    pub fn is_loaded(&self) -> bool {
        self.pixels.is_some()
    }

    /// The location of the image, if known.
    pub fn src(&self) -> Option<&str> {
        self.src.as_deref()
    }

    /// The size of the decoded image, if loaded.
    pub fn size(&self) -> Option<ImageSize> {
        self.pixels.as_ref().map(|p| p.size())
    }

    /// The decoded pixels, if loaded.
    pub fn pixels(&self) -> Option<&Image<u8, 4>> {
        self.pixels.as_ref()
    }
}

/// Where a converter takes its pixels from.
#[derive(Clone, Debug, PartialEq)]
pub enum Source {
    /// A location string (a path or a `file://` URL) to be loaded asynchronously.
    Path(String),
    /// An image handle, either already loaded or carrying a location to load.
    Image(ImageHandle),
    /// An existing drawable surface, usable immediately.
    Surface(Surface),
}

/// The outcome of resolving a [`Source`].
pub enum Resolution {
    /// The pixels are available right away.
    Ready(Surface),
    /// The pixels become available once the future completes.
    Pending(SurfaceFuture),
}

impl std::fmt::Debug for Resolution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Resolution::Ready(surface) => f.debug_tuple("Ready").field(&surface.size()).finish(),
            Resolution::Pending(_) => f.write_str("Pending"),
        }
    }
}

impl Source {
    /// Resolve the source into a surface holding its pixels.
    ///
    /// Loaded images and surfaces resolve immediately. Locations and unloaded image
    /// handles are handed to `loader` and resolve once the returned future completes.
    /// In every case the pixels are drawn onto a freshly created surface of matching size.
    ///
    /// # Errors
    ///
    /// Returns [`ConvertError::InvalidSourceKind`] when the source carries neither a
    /// location nor pixels, or when a surface has no pixels at all.
    pub fn resolve(self, loader: &dyn ImageLoader) -> Result<Resolution, ConvertError> {
        match self {
            Source::Path(location) => Self::load(location, loader),
            Source::Image(ImageHandle {
                pixels: Some(pixels),
                ..
            }) => {
                log::debug!("resolving loaded image of {}", pixels.size());
                Ok(Resolution::Ready(bind_surface(&pixels)?))
            }
            Source::Image(ImageHandle {
                src: Some(location),
                pixels: None,
            }) => Self::load(location, loader),
            Source::Image(ImageHandle {
                src: None,
                pixels: None,
            }) => Err(ConvertError::InvalidSourceKind(
                "image handle has neither pixels nor a location".to_string(),
            )),
            Source::Surface(surface) => {
                if surface.size().area() == 0 {
                    return Err(ConvertError::InvalidSourceKind(format!(
                        "surface has no pixels ({})",
                        surface.size()
                    )));
                }
                log::debug!("resolving surface of {}", surface.size());
                Ok(Resolution::Ready(bind_surface(surface.image_data())?))
            }
        }
    }

    fn load(location: String, loader: &dyn ImageLoader) -> Result<Resolution, ConvertError> {
        if location.trim().is_empty() {
            return Err(ConvertError::InvalidSourceKind(
                "image location is empty".to_string(),
            ));
        }

        log::debug!("loading image source {location}");
        let pending = loader.load(&location);

        let bound = async move {
            let pixels = pending.await.map_err(|e| {
                log::warn!("failed to load {location}: {e}");
                e
            })?;
            log::debug!("loaded {location} with {}", pixels.size());
            let surface = bind_surface(&pixels)?;
            Ok::<_, ConvertError>(surface)
        };

        Ok(Resolution::Pending(Box::pin(bound)))
    }
}

/// Create a surface matching the image size and draw the image onto it.
fn bind_surface(pixels: &Image<u8, 4>) -> Result<Surface, ImageError> {
    let mut surface = Surface::new(pixels.size())?;
    surface.draw_image(pixels)?;
    Ok(surface)
}

impl From<&str> for Source {
    fn from(location: &str) -> Self {
        Source::Path(location.to_string())
    }
}

impl From<String> for Source {
    fn from(location: String) -> Self {
        Source::Path(location)
    }
}

impl From<&Path> for Source {
    fn from(path: &Path) -> Self {
        Source::Path(path.to_string_lossy().into_owned())
    }
}

impl From<PathBuf> for Source {
    fn from(path: PathBuf) -> Self {
        Source::from(path.as_path())
    }
}

impl From<ImageHandle> for Source {
    fn from(handle: ImageHandle) -> Self {
        Source::Image(handle)
    }
}

impl From<Image<u8, 4>> for Source {
    fn from(pixels: Image<u8, 4>) -> Self {
        Source::Image(ImageHandle::from_pixels(pixels))
    }
}

impl From<Surface> for Source {
    fn from(surface: Surface) -> Self {
        Source::Surface(surface)
    }
}
