use std::borrow::Cow;

use aida_image::{Image, ImageSize};
use aida_imgproc::{
    color::{self, ColorError, Hsv8, YCbCr8},
    parallel::ExecutionStrategy,
};
use aida_io::ImageLoader;

use crate::{
    error::ConvertError,
    source::{Resolution, Source, SurfaceFuture},
    surface::Surface,
};

/// Options controlling how a [`PixelConverter`] processes its pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConverterOptions {
    /// The opaque color translucent pixels are composited over.
    pub background: [u8; 3],
    /// How the per-pixel work is scheduled.
    pub strategy: ExecutionStrategy,
}

impl Default for ConverterOptions {
    fn default() -> Self {
        Self {
            background: color::WHITE,
            strategy: ExecutionStrategy::Serial,
        }
    }
}

impl ConverterOptions {
    /// Set the compositing background color.
    pub fn with_background(mut self, background: [u8; 3]) -> Self {
        self.background = background;
        self
    }

    /// Set the execution strategy of the per-pixel kernels.
    pub fn with_strategy(mut self, strategy: ExecutionStrategy) -> Self {
        self.strategy = strategy;
        self
    }
}

/// Optionally composite an RGBA buffer over an opaque background.
///
/// When `enabled` is false the input is handed back borrowed, without copying.
/// Otherwise a new buffer is returned where every pixel has been painted over the
/// background and its alpha forced to 255.
pub fn blend<'a>(
    buffer: &'a Image<u8, 4>,
    enabled: bool,
    background: [u8; 3],
    strategy: ExecutionStrategy,
) -> Result<Cow<'a, Image<u8, 4>>, ColorError> {
    if !enabled {
        return Ok(Cow::Borrowed(buffer));
    }

    let mut blended = Image::from_size_val(buffer.size(), 0)?;
    color::alpha_blend(buffer, &mut blended, background, strategy)?;
    Ok(Cow::Owned(blended))
}

enum State {
    Ready(Surface),
    Pending(SurfaceFuture),
    Failed,
}

/// Converts the pixels of one image source to alternate color models.
///
/// The converter binds its source once, at construction. Sources that are available
/// immediately (loaded images and surfaces) make the converter ready right away;
/// locations and unloaded images must be awaited with [`PixelConverter::ready`] first.
/// Until then every conversion fails with [`ConvertError::NotReady`].
///
/// # Example
///
/// ```
/// use aida_convert::PixelConverter;
/// use aida_image::{Image, ImageSize};
/// use aida_io::FileLoader;
///
/// let pixels = Image::<u8, 4>::new(
///     ImageSize { width: 1, height: 1 },
///     vec![255, 0, 0, 255],
/// )
/// .unwrap();
///
/// let converter = PixelConverter::new(pixels, &FileLoader).unwrap();
///
/// let hsv = converter.convert_to_hsv().unwrap();
/// assert_eq!(hsv.as_slice(), &[0, 255, 255]);
///
/// let ycbcr = converter.convert_to_ycbcr().unwrap();
/// assert_eq!(ycbcr.num_pixels(), 1);
/// ```
pub struct PixelConverter {
    state: State,
    options: ConverterOptions,
}

impl std::fmt::Debug for PixelConverter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = match &self.state {
            State::Ready(_) => "ready",
            State::Pending(_) => "pending",
            State::Failed => "failed",
        };
        f.debug_struct("PixelConverter")
            .field("state", &state)
            .field("size", &self.size())
            .field("options", &self.options)
            .finish()
    }
}

impl PixelConverter {
    /// Bind a converter to `source` with the default options.
    ///
    /// # Errors
    ///
    /// Fails fast with [`ConvertError::InvalidSourceKind`] if the source cannot be resolved.
    pub fn new(source: impl Into<Source>, loader: &dyn ImageLoader) -> Result<Self, ConvertError> {
        Self::with_options(source, loader, ConverterOptions::default())
    }

    /// Bind a converter to `source` with the given options.
    pub fn with_options(
        source: impl Into<Source>,
        loader: &dyn ImageLoader,
        options: ConverterOptions,
    ) -> Result<Self, ConvertError> {
        let state = match source.into().resolve(loader)? {
            Resolution::Ready(surface) => State::Ready(surface),
            Resolution::Pending(future) => State::Pending(future),
        };

        Ok(Self { state, options })
    }

    /// Bind a converter to `source` and wait until its pixels are available.
    pub async fn from_source(
        source: impl Into<Source>,
        loader: &dyn ImageLoader,
    ) -> Result<Self, ConvertError> {
        let mut converter = Self::new(source, loader)?;
        converter.ready().await?;
        Ok(converter)
    }

    /// Wait until the source pixels are available.
    ///
    /// Returns immediately for sources that were ready at construction. If loading
    /// fails the error is returned once, and the converter stays without pixels.
    pub async fn ready(&mut self) -> Result<(), ConvertError> {
        let future = match &mut self.state {
            State::Ready(_) => return Ok(()),
            State::Failed => return Err(ConvertError::SourceUnavailable),
            State::Pending(future) => future,
        };

        match future.await {
            Ok(surface) => {
                log::debug!("converter ready with {}", surface.size());
                self.state = State::Ready(surface);
                Ok(())
            }
            Err(e) => {
                self.state = State::Failed;
                Err(e)
            }
        }
    }

    /// Whether the source pixels are available.
    pub fn is_ready(&self) -> bool {
        matches!(self.state, State::Ready(_))
    }

    /// The size of the bound image, once available.
    pub fn size(&self) -> Option<ImageSize> {
        self.surface().ok().map(Surface::size)
    }

    /// The options this converter runs with.
    pub fn options(&self) -> &ConverterOptions {
        &self.options
    }

    fn surface(&self) -> Result<&Surface, ConvertError> {
        match &self.state {
            State::Ready(surface) => Ok(surface),
            State::Pending(_) => Err(ConvertError::NotReady),
            State::Failed => Err(ConvertError::SourceUnavailable),
        }
    }

    /// Get the current pixel data, optionally composited over the background.
    ///
    /// Without blending the bound pixels are returned borrowed and unchanged.
    pub fn get_image_data(
        &self,
        use_alpha_blending: bool,
    ) -> Result<Cow<'_, Image<u8, 4>>, ConvertError> {
        let surface = self.surface()?;
        Ok(blend(
            surface.image_data(),
            use_alpha_blending,
            self.options.background,
            self.options.strategy,
        )?)
    }

    /// Convert the pixels to HSV, one triplet per pixel.
    ///
    /// The pixels are always composited over the background first.
    pub fn convert_to_hsv(&self) -> Result<Hsv8, ConvertError> {
        let blended = self.get_image_data(true)?;
        let mut hsv = Hsv8::from_size_val(blended.size(), 0)?;
        color::hsv_from_rgba(&blended, &mut hsv, self.options.strategy)?;
        Ok(hsv)
    }

    /// Convert the pixels to YCbCr, one triplet per pixel.
    ///
    /// The pixels are always composited over the background first.
    pub fn convert_to_ycbcr(&self) -> Result<YCbCr8, ConvertError> {
        let blended = self.get_image_data(true)?;
        let mut ycbcr = YCbCr8::from_size_val(blended.size(), 0)?;
        color::ycbcr_from_rgba(&blended, &mut ycbcr, self.options.strategy)?;
        Ok(ycbcr)
    }
}
