#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// Error types for I/O operations.
///
/// Defines [`error::IoError`] variants for file access, decoding failures
/// and unsupported image locations.
pub mod error;

/// High-level image reading functions.
///
/// Decodes any format supported by the `image` crate into an RGBA8 image.
/// See [`functional::read_image_rgba8`].
pub mod functional;

/// Asynchronous image loading.
///
/// The [`loader::ImageLoader`] trait is the seam through which image locations
/// are turned into decoded pixels; [`loader::FileLoader`] reads from the local filesystem.
pub mod loader;

pub use crate::error::IoError;
pub use crate::loader::{FileLoader, ImageLoader, LoadFuture};
