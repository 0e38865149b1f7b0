use crate::parallel::ExecutionStrategy;

use super::{ColorError, Hsv8, Rgba8, YCbCr8};

/// Trait for type-safe color space conversion
///
/// This trait provides a clean, ergonomic API for converting between different
/// color spaces with compile-time type safety.
///
/// # Example
///
/// ```
/// use aida_image::ImageSize;
/// use aida_imgproc::color::{ConvertColor, Hsv8, Rgba8};
///
/// let rgba = Rgba8::from_size_vec(
///     ImageSize { width: 1, height: 1 },
///     vec![255, 0, 0, 255],
/// )
/// .unwrap();
///
/// let mut hsv = Hsv8::from_size_val(rgba.size(), 0).unwrap();
///
/// rgba.convert(&mut hsv).unwrap();
/// assert_eq!(hsv.as_slice(), &[0, 255, 255]);
/// ```
pub trait ConvertColor<Dst> {
    /// Convert this image to another color space
    fn convert(&self, dst: &mut Dst) -> Result<(), ColorError>;
}

/// Trait for color conversion against an opaque background color
pub trait ConvertColorWithBackground<Dst> {
    /// Convert, compositing translucent pixels over the background color
    fn convert_with_bg(&self, dst: &mut Dst, bg: [u8; 3]) -> Result<(), ColorError>;
}

/// Macro to implement color conversions
macro_rules! impl_convert {
    ($src:ty => $dst:ty, $func:path) => {
        impl ConvertColor<$dst> for $src {
            fn convert(&self, dst: &mut $dst) -> Result<(), ColorError> {
                $func(&self.0, &mut dst.0, ExecutionStrategy::default())
            }
        }
    };
}

// ===== RGBA -> HSV / YCbCr Conversions =====
impl_convert!(Rgba8 => Hsv8, crate::color::hsv_from_rgba);
impl_convert!(Rgba8 => YCbCr8, crate::color::ycbcr_from_rgba);

// ===== RGBA -> RGBA over a background =====
impl ConvertColorWithBackground<Rgba8> for Rgba8 {
    fn convert_with_bg(&self, dst: &mut Rgba8, bg: [u8; 3]) -> Result<(), ColorError> {
        crate::color::alpha_blend(&self.0, &mut dst.0, bg, ExecutionStrategy::default())
    }
}
