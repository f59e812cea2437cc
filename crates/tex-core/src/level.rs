//! A single mip level: one image in the pyramid.
//!
//! # Memory Layout
//!
//! Texels are stored packed, row-major, top-to-bottom, 3 bytes per texel:
//!
//! ```text
//! Memory: [R G B R G B R G B ...]  ← Row 0
//!         [R G B R G B R G B ...]  ← Row 1
//!         ...
//! ```
//!
//! No padding, no alpha channel. The invariant
//! `texels.len() == width * height * 3` is enforced at construction.
//!
//! # Used By
//!
//! - [`crate::texture::Texture`] - level storage
//! - `tex-ops` - sampling reads, pyramid generation writes

use crate::{Color, Error, Result};

/// One image level with packed 8-bit RGB texels.
///
/// Levels are immutable once built: either supplied by the caller as the
/// base image or synthesized by the pyramid generator.
///
/// # Example
///
/// ```rust
/// use tex_core::MipLevel;
///
/// let level = MipLevel::from_texels(2, 1, vec![255, 0, 0, 0, 255, 0]).unwrap();
/// assert_eq!(level.width(), 2);
/// assert_eq!(level.texel(0, 0).r, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MipLevel {
    width: u32,
    height: u32,
    texels: Vec<u8>,
}

impl MipLevel {
    /// Creates a level filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            texels: vec![0; width as usize * height as usize * 3],
        }
    }

    /// Creates a level from an existing packed RGB buffer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if the buffer length is not
    /// exactly `width * height * 3`.
    pub fn from_texels(width: u32, height: u32, texels: Vec<u8>) -> Result<Self> {
        let expected = width as usize * height as usize * 3;
        if texels.len() != expected {
            return Err(Error::invalid_dimensions(
                width,
                height,
                format!("expected {} bytes, got {}", expected, texels.len()),
            ));
        }
        Ok(Self {
            width,
            height,
            texels,
        })
    }

    /// Returns the level width in texels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the level height in texels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the level dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns `true` if the level has zero area.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the raw packed texel buffer.
    #[inline]
    pub fn texels(&self) -> &[u8] {
        &self.texels
    }

    /// Returns one row of packed RGB bytes.
    ///
    /// # Panics
    ///
    /// Panics if `y >= height`.
    #[inline]
    pub fn row(&self, y: u32) -> &[u8] {
        debug_assert!(y < self.height, "row out of bounds");
        let pitch = self.width as usize * 3;
        let start = y as usize * pitch;
        &self.texels[start..start + pitch]
    }

    /// Fetches the texel at (x, y) with clamp-to-edge addressing.
    ///
    /// Out-of-range coordinates saturate to the border texel rather than
    /// fault; this is the only code path that touches the raw buffer during
    /// sampling. An empty level yields black.
    ///
    /// # Example
    ///
    /// ```rust
    /// use tex_core::MipLevel;
    ///
    /// let level = MipLevel::from_texels(2, 1, vec![255, 0, 0, 0, 255, 0]).unwrap();
    /// // x = -100 clamps to the left border texel
    /// assert_eq!(level.texel(-100, 0), level.texel(0, 0));
    /// ```
    #[inline]
    pub fn texel(&self, x: i32, y: i32) -> Color {
        if self.is_empty() {
            return Color::BLACK;
        }
        let x = x.clamp(0, self.width as i32 - 1) as usize;
        let y = y.clamp(0, self.height as i32 - 1) as usize;
        let i = (y * self.width as usize + x) * 3;
        Color::from_rgb8([self.texels[i], self.texels[i + 1], self.texels[i + 2]])
    }
}
