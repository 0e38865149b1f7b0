#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use aida_image as image;

#[doc(inline)]
pub use aida_imgproc as imgproc;

#[doc(inline)]
pub use aida_io as io;

#[doc(inline)]
pub use aida_convert as convert;

#[doc(inline)]
pub use aida_convert::PixelConverter;
