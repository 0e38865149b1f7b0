mod alpha;
mod convert;
mod hsv;
mod ycbcr;

pub use alpha::{alpha_blend, WHITE};
pub use convert::{ConvertColor, ConvertColorWithBackground};
pub use hsv::{hsv_from_rgba, pixel_hsv_from_rgb};
pub use ycbcr::{pixel_ycbcr_from_rgb, ycbcr_from_rgba};

// Re-export color space types for convenience
pub use aida_image::color_spaces::{Hsv8, Rgba8, YCbCr8};

use crate::parallel::ParallelError;
use aida_image::ImageError;

/// An error type for the color conversion kernels.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ColorError {
    /// The source or destination image is not valid for the conversion.
    #[error(transparent)]
    Image(#[from] ImageError),

    /// The per-pixel work could not be scheduled.
    #[error(transparent)]
    Parallel(#[from] ParallelError),
}
