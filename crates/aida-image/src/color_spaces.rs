use crate::{
    error::ImageError,
    image::{Image, ImageSize},
};
use std::ops::{Deref, DerefMut};

/// Macro to define a color space wrapper type with explicit bit depth
macro_rules! define_color_space {
    ($name:ident, $type:ty, $channels:expr, $doc:expr) => {
        #[doc = $doc]
        ///
        /// This is a zero-cost wrapper that provides compile-time type safety.
        #[derive(Clone, Debug, PartialEq)]
        #[repr(transparent)]
        pub struct $name(pub Image<$type, $channels>);

        impl $name {
            #[doc = concat!("Create ", stringify!($name), " image from size and data")]
            pub fn from_size_vec(size: ImageSize, data: Vec<$type>) -> Result<Self, ImageError> {
                Ok(Self(Image::new(size, data)?))
            }

            #[doc = concat!("Create ", stringify!($name), " image from size with default value")]
            pub fn from_size_val(size: ImageSize, val: $type) -> Result<Self, ImageError> {
                Ok(Self(Image::from_size_val(size, val)?))
            }

            /// Unwrap into the underlying Image
            pub fn into_inner(self) -> Image<$type, $channels> {
                self.0
            }

            /// Get a reference to the underlying Image
            pub fn as_image(&self) -> &Image<$type, $channels> {
                &self.0
            }

            /// Get a mutable reference to the underlying Image
            pub fn as_image_mut(&mut self) -> &mut Image<$type, $channels> {
                &mut self.0
            }
        }

        impl Deref for $name {
            type Target = Image<$type, $channels>;
            fn deref(&self) -> &Self::Target {
                &self.0
            }
        }

        impl DerefMut for $name {
            fn deref_mut(&mut self) -> &mut Self::Target {
                &mut self.0
            }
        }

        impl AsRef<Image<$type, $channels>> for $name {
            fn as_ref(&self) -> &Image<$type, $channels> {
                &self.0
            }
        }

        impl From<Image<$type, $channels>> for $name {
            fn from(image: Image<$type, $channels>) -> Self {
                Self(image)
            }
        }
    };
}

define_color_space!(
    Rgba8,
    u8,
    4,
    "RGBA color space with 8-bit unsigned integer channels"
);

define_color_space!(
    Hsv8,
    u8,
    3,
    "HSV color space with 8-bit unsigned integer channels, hue scaled from [0, 360) to [0, 255]"
);

define_color_space!(
    YCbCr8,
    u8,
    3,
    "YCbCr (full range BT.601) color space with 8-bit unsigned integer channels"
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deref_works_with_image_api() -> Result<(), ImageError> {
        let rgba = Rgba8::from_size_vec(
            ImageSize {
                width: 2,
                height: 3,
            },
            vec![0u8; 2 * 3 * 4],
        )?;

        assert_eq!(rgba.width(), 2);
        assert_eq!(rgba.height(), 3);
        assert_eq!(rgba.num_channels(), 4);

        Ok(())
    }

    #[test]
    fn test_wrapper_round_trips_image() -> Result<(), ImageError> {
        let image = Image::<u8, 3>::from_size_val(
            ImageSize {
                width: 1,
                height: 1,
            },
            7,
        )?;

        let hsv = Hsv8::from(image.clone());
        assert_eq!(hsv.as_image(), &image);
        assert_eq!(hsv.into_inner(), image);

        Ok(())
    }
}
