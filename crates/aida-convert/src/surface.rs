use aida_image::{Image, ImageError, ImageSize};

/// A drawable RGBA buffer of fixed size.
///
/// Each converter owns its own surface, so any number of converters can coexist.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    image: Image<u8, 4>,
}

impl Surface {
    /// Create a fully transparent surface of the given size.
    pub fn new(size: ImageSize) -> Result<Self, ImageError> {
        Ok(Self {
            image: Image::from_size_val(size, 0)?,
        })
    }

    /// Create a surface that already holds drawn content.
    pub fn from_image(image: Image<u8, 4>) -> Self {
        Self { image }
    }

    /// Get the size of the surface in pixels.
    pub fn size(&self) -> ImageSize {
        self.image.size()
    }

    /// Copy the pixels of `image` onto the surface, starting at the origin.
    ///
    /// # Errors
    ///
    /// The image must cover the surface exactly, otherwise an
    /// [`ImageError::InvalidImageSize`] is returned.
    pub fn draw_image(&mut self, image: &Image<u8, 4>) -> Result<(), ImageError> {
        if image.size() != self.size() {
            return Err(ImageError::InvalidImageSize(
                image.cols(),
                image.rows(),
                self.image.cols(),
                self.image.rows(),
            ));
        }

        self.image.as_slice_mut().copy_from_slice(image.as_slice());
        Ok(())
    }

    /// Read the pixels currently held by the surface.
    pub fn image_data(&self) -> &Image<u8, 4> {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_image() -> Result<(), ImageError> {
        let size = ImageSize {
            width: 2,
            height: 1,
        };
        let mut surface = Surface::new(size)?;
        assert_eq!(surface.image_data().as_slice(), &[0; 8]);

        let image = Image::new(size, vec![1, 2, 3, 4, 5, 6, 7, 8])?;
        surface.draw_image(&image)?;
        assert_eq!(surface.image_data(), &image);

        Ok(())
    }

    #[test]
    fn test_draw_image_size_mismatch() -> Result<(), ImageError> {
        let mut surface = Surface::new(ImageSize {
            width: 2,
            height: 2,
        })?;
        let image = Image::from_size_val(
            ImageSize {
                width: 1,
                height: 1,
            },
            0,
        )?;
        assert_eq!(
            surface.draw_image(&image),
            Err(ImageError::InvalidImageSize(1, 1, 2, 2))
        );
        Ok(())
    }
}
