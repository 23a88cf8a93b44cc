use crate::assets::RawResource;
use crate::errors::Result;

/// Decoded CPU-side pixel data, always RGBA8.
///
/// Produced from a [`RawResource`] byte stream and consumed by
/// [`Texture`](crate::renderer::Texture) for GPU upload. Immutable after
/// decode, so it can back any number of textures.
#[derive(Debug, Clone)]
pub struct Image {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
}

impl Image {
    /// Decodes an image (png/jpeg) from raw resource bytes.
    ///
    /// The source buffer is consumed: once decoded, the compressed bytes
    /// have no further use and are released here rather than by the caller.
    pub fn decode(raw: RawResource) -> Result<Self> {
        let decoded = image::load_from_memory(raw.bytes())?.to_rgba8();
        let (width, height) = decoded.dimensions();
        let pixels = decoded.into_raw();
        raw.release();
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Builds an image from already-decoded RGBA8 pixels.
    #[must_use]
    pub fn from_rgba8(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        debug_assert_eq!(pixels.len(), (width * height * 4) as usize);
        Self {
            width,
            height,
            pixels,
        }
    }

    /// A 1x1 opaque white image, used as the neutral material fallback.
    #[must_use]
    pub fn white() -> Self {
        Self::from_rgba8(1, 1, vec![255, 255, 255, 255])
    }

    #[inline]
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Tightly packed RGBA8 pixel data, row-major.
    #[inline]
    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }
}
