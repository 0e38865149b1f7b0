use crate::parallel::{self, ExecutionStrategy};
use aida_image::{Image, ImageError};

use super::ColorError;

/// Opaque white, the default compositing background.
pub const WHITE: [u8; 3] = [255, 255, 255];

/// Composite an RGBA image over an opaque background color.
///
/// Every pixel is painted over the background using its own alpha as the blend weight.
/// With `a = alpha / 255`, `c = channel / 255` and `b = background / 255`:
///
/// out = ((1 - a) * b + a * c) * 255
///
/// The result is rounded and clamped to [0, 255], and the output alpha is forced to 255.
///
/// # Arguments
///
/// * `src` - The input RGBA image.
/// * `dst` - The output RGBA image.
/// * `background` - The opaque background color, usually [`WHITE`].
/// * `strategy` - How to schedule the per-pixel work.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use aida_image::{Image, ImageSize};
/// use aida_imgproc::color::{alpha_blend, WHITE};
/// use aida_imgproc::parallel::ExecutionStrategy;
///
/// let src = Image::<u8, 4>::new(
///     ImageSize { width: 2, height: 1 },
///     vec![255, 0, 0, 255, 10, 20, 30, 0],
/// )
/// .unwrap();
///
/// let mut dst = Image::<u8, 4>::from_size_val(src.size(), 0).unwrap();
///
/// alpha_blend(&src, &mut dst, WHITE, ExecutionStrategy::Serial).unwrap();
///
/// assert_eq!(dst.as_slice(), &[255, 0, 0, 255, 255, 255, 255, 255]);
/// ```
pub fn alpha_blend(
    src: &Image<u8, 4>,
    dst: &mut Image<u8, 4>,
    background: [u8; 3],
    strategy: ExecutionStrategy,
) -> Result<(), ColorError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        )
        .into());
    }

    let bg = [
        background[0] as f32 / 255.0,
        background[1] as f32 / 255.0,
        background[2] as f32 / 255.0,
    ];

    parallel::execute_with(strategy, src, dst, |src_pixel, dst_pixel| {
        let alpha = src_pixel[3] as f32 / 255.0;
        for ch in 0..3 {
            dst_pixel[ch] = blend_channel(src_pixel[ch], alpha, bg[ch]);
        }
        dst_pixel[3] = 255;
    })?;

    Ok(())
}

#[inline]
fn blend_channel(value: u8, alpha: f32, background: f32) -> u8 {
    let c = value as f32 / 255.0;
    let out = (1.0 - alpha) * background + alpha * c;
    (out * 255.0).round().clamp(0.0, 255.0) as u8
}
