#![deny(missing_docs)]
#![doc = env!("CARGO_PKG_DESCRIPTION")]

/// The pixel converter bound to one resolved source.
pub mod converter;

/// Error types for source resolution and conversion.
pub mod error;

/// Image sources and their resolution into a surface.
pub mod source;

/// The drawable surface owned by each converter.
pub mod surface;

pub use crate::converter::{blend, ConverterOptions, PixelConverter};
pub use crate::error::ConvertError;
pub use crate::source::{ImageHandle, Resolution, Source, SurfaceFuture};
pub use crate::surface::Surface;
