use crate::parallel::{self, ExecutionStrategy};
use aida_image::{Image, ImageError};

use super::ColorError;

/// Convert a single RGB pixel to a packed 8-bit HSV triplet.
///
/// The hue in [0, 360) is scaled by 255 / 360, saturation and value are scaled by 255.
///
/// # Example
///
/// ```
/// use aida_imgproc::color::pixel_hsv_from_rgb;
///
/// assert_eq!(pixel_hsv_from_rgb(255, 0, 0), [0, 255, 255]);
/// assert_eq!(pixel_hsv_from_rgb(0, 0, 0), [0, 0, 0]);
/// ```
#[inline]
pub fn pixel_hsv_from_rgb(r: u8, g: u8, b: u8) -> [u8; 3] {
    // normalize the input to the range [0, 1]
    let r = r as f32 / 255.0;
    let g = g as f32 / 255.0;
    let b = b as f32 / 255.0;

    let max = r.max(g).max(b);
    let min = r.min(g).min(b);
    let delta = max - min;

    let h = if delta == 0.0 {
        0.0
    } else if max == r {
        60.0 * ((g - b) / delta)
    } else if max == g {
        60.0 * (2.0 + (b - r) / delta)
    } else {
        60.0 * (4.0 + (r - g) / delta)
    };

    // ensure h is in the range [0, 360)
    let h = if h < 0.0 { h + 360.0 } else { h };

    let s = if max == 0.0 { 0.0 } else { delta / max };

    [to_u8(h * 255.0 / 360.0), to_u8(s * 255.0), to_u8(max * 255.0)]
}

#[inline]
fn to_u8(x: f32) -> u8 {
    x.round().clamp(0.0, 255.0) as u8
}

/// Convert an RGBA image to an 8-bit HSV image.
///
/// The alpha channel is ignored; composite the image first with
/// [`alpha_blend`](super::alpha_blend) when translucent pixels must be accounted for.
///
/// # Arguments
///
/// * `src` - The input RGBA image.
/// * `dst` - The output HSV image.
/// * `strategy` - How to schedule the per-pixel work.
///
/// # Returns
///
/// The HSV image with the following channels:
///
/// * H: The hue channel in the range [0, 255] (0-360 degrees).
/// * S: The saturation channel in the range [0, 255].
/// * V: The value channel in the range [0, 255].
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use aida_image::{Image, ImageSize};
/// use aida_imgproc::color::hsv_from_rgba;
/// use aida_imgproc::parallel::ExecutionStrategy;
///
/// let image = Image::<u8, 4>::new(
///     ImageSize {
///         width: 4,
///         height: 5,
///     },
///     vec![0u8; 4 * 5 * 4],
/// )
/// .unwrap();
///
/// let mut hsv = Image::<u8, 3>::from_size_val(image.size(), 0).unwrap();
///
/// hsv_from_rgba(&image, &mut hsv, ExecutionStrategy::Serial).unwrap();
///
/// assert_eq!(hsv.num_channels(), 3);
/// assert_eq!(hsv.as_slice().len(), 4 * 5 * 3);
/// ```
pub fn hsv_from_rgba(
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
        let hsv = pixel_hsv_from_rgb(src_pixel[0], src_pixel[1], src_pixel[2]);
        dst_pixel.copy_from_slice(&hsv);
    })?;

    Ok(())
}
