use aida_image::ImageError;
use aida_imgproc::color::ColorError;
use aida_io::IoError;

/// An error type for the convert module.
#[derive(thiserror::Error, Debug)]
pub enum ConvertError {
    /// The source is neither an image location, an image handle nor a drawable surface.
    #[error("Source must be an image location, an image or a surface: {0}")]
    InvalidSourceKind(String),

    /// A conversion was requested before the source finished loading.
    #[error("The image source has not finished loading")]
    NotReady,

    /// The source failed to load on an earlier attempt and holds no pixels.
    #[error("The image source failed to load and holds no pixels")]
    SourceUnavailable,

    /// The image could not be loaded.
    #[error("Failed to load the image. {0}")]
    Load(#[from] IoError),

    /// The image buffer is not valid.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The color conversion failed.
    #[error(transparent)]
    Color(#[from] ColorError),
}
