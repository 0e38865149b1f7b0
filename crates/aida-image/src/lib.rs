#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// image representation for pixel conversion purposes.
pub mod image;

/// Error types for the image module.
pub mod error;

/// Typed color space wrappers around [`Image`].
pub mod color_spaces;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageSize};
