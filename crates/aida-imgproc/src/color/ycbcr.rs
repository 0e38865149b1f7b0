use crate::parallel::{self, ExecutionStrategy};
use aida_image::{Image, ImageError};

use super::ColorError;

/// Convert a single RGB pixel to a full range BT.601 YCbCr triplet.
///
/// Y  = 0.299 * R + 0.587 * G + 0.114 * B
/// Cb = 128 - 0.168736 * R - 0.331264 * G + 0.5 * B
/// Cr = 128 + 0.5 * R - 0.418688 * G - 0.081312 * B
///
/// # Example
///
/// ```
/// use aida_imgproc::color::pixel_ycbcr_from_rgb;
///
/// assert_eq!(pixel_ycbcr_from_rgb(255, 255, 255), [255, 128, 128]);
/// assert_eq!(pixel_ycbcr_from_rgb(0, 0, 0), [0, 128, 128]);
/// ```
#[inline]
pub fn pixel_ycbcr_from_rgb(r: u8, g: u8, b: u8) -> [u8; 3] {
    let r = r as f32;
    let g = g as f32;
    let b = b as f32;

    let y = 0.299 * r + 0.587 * g + 0.114 * b;
    let cb = 128.0 - 0.168736 * r - 0.331264 * g + 0.5 * b;
    let cr = 128.0 + 0.5 * r - 0.418688 * g - 0.081312 * b;

    [to_u8(y), to_u8(cb), to_u8(cr)]
}

#[inline]
fn to_u8(x: f32) -> u8 {
    x.round().clamp(0.0, 255.0) as u8
}

/// Convert an RGBA image to an 8-bit YCbCr image.
///
/// The input channels are expected in the range [0, 255]; the alpha channel is ignored.
///
/// # Arguments
///
/// * `src` - The input RGBA image.
/// * `dst` - The output YCbCr image.
/// * `strategy` - How to schedule the per-pixel work.
///
/// # Returns
///
/// The YCbCr image with the following channels:
///
/// * Y: The luma channel in the range [0, 255].
/// * Cb: The blue-difference channel in the range [0, 255], centered at 128.
/// * Cr: The red-difference channel in the range [0, 255], centered at 128.
///
/// Precondition: the input and output images must have the same size.
pub fn ycbcr_from_rgba(
    src: &Image<u8, 4>,
    dst: &mut Image<u8, 3>,
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

    parallel::execute_with(strategy, src, dst, |src_pixel, dst_pixel| {
        let ycbcr = pixel_ycbcr_from_rgb(src_pixel[0], src_pixel[1], src_pixel[2]);
        dst_pixel.copy_from_slice(&ycbcr);
    })?;

    Ok(())
}
