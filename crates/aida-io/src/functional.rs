use std::path::Path;

use aida_image::{Image, ImageSize};

use crate::error::IoError;

/// Decodes an encoded image held in memory into an RGBA8 image.
///
/// The format is guessed from the data itself. Images without an alpha channel
/// come back fully opaque; grayscale images are expanded to RGB.
///
/// # Arguments
///
/// * `bytes` - The encoded image data (PNG, JPEG, BMP, GIF or WebP).
///
/// # Returns
///
/// An RGBA image with four channels (rgba8).
pub fn decode_image_rgba8(bytes: &[u8]) -> Result<Image<u8, 4>, IoError> {
    let img = image::ImageReader::new(std::io::Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?;

    let rgba = img.into_rgba8();
    let size = ImageSize {
        width: rgba.width() as usize,
        height: rgba.height() as usize,
    };

    Ok(Image::new(size, rgba.into_raw())?)
}

/// Reads an image from the given file path as RGBA8.
///
/// The method tries to read from any image format enabled in the image crate.
///
/// # Arguments
///
/// * `file_path` - The path to a valid image file.
///
/// # Returns
///
/// An RGBA image with four channels (rgba8).
///
/// # Errors
///
/// Returns [`IoError::FileDoesNotExist`] if the path does not exist, or a decoding
/// error if the file content is not a supported image.
pub fn read_image_rgba8(file_path: impl AsRef<Path>) -> Result<Image<u8, 4>, IoError> {
    let file_path = file_path.as_ref();

    // verify the file exists
    if !file_path.exists() {
        return Err(IoError::FileDoesNotExist(file_path.to_path_buf()));
    }

    let bytes = std::fs::read(file_path)?;
    decode_image_rgba8(&bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(path: &Path, width: u32, height: u32, data: Vec<u8>) {
        image::RgbaImage::from_raw(width, height, data)
            .expect("buffer matches the dimensions")
            .save(path)
            .expect("png written");
    }

    #[test]
    fn read_rgba_png() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("quad.png");

        #[rustfmt::skip]
        let data = vec![
            255, 0, 0, 255,
            0, 255, 0, 128,
            0, 0, 255, 0,
            10, 20, 30, 40,
        ];
        write_png(&file_path, 2, 2, data.clone());

        let image = read_image_rgba8(&file_path)?;
        assert_eq!(image.size().width, 2);
        assert_eq!(image.size().height, 2);
        assert_eq!(image.as_slice(), data.as_slice());

        Ok(())
    }

    #[test]
    fn read_rgb_png_is_opaque() -> Result<(), IoError> {
        let tmp_dir = tempfile::tempdir()?;
        let file_path = tmp_dir.path().join("rgb.png");

        image::RgbImage::from_raw(1, 1, vec![1, 2, 3])
            .expect("buffer matches the dimensions")
            .save(&file_path)?;

        let image = read_image_rgba8(&file_path)?;
        assert_eq!(image.as_slice(), &[1, 2, 3, 255]);

        Ok(())
    }

    #[test]
    fn read_missing_file() {
        let res = read_image_rgba8("does/not/exist.png");
        assert!(matches!(res, Err(IoError::FileDoesNotExist(_))));
    }

    #[test]
    fn decode_garbage() {
        let res = decode_image_rgba8(b"definitely not an image");
        assert!(res.is_err());
    }
}
