//! Texture: an owned chain of mip levels.
//!
//! Level 0 is the full-resolution base image supplied by the asset loader;
//! coarser levels are synthesized by `tex-ops::mip::generate_mips`. Each
//! level's extent is at most half (floored, minimum 1) of the previous
//! level's.
//!
//! # Concurrency
//!
//! Write-then-freeze: once pyramid generation completes, the level store is
//! read-only and sampling may proceed from multiple threads without
//! synchronization. Generation itself must be serialized per texture.

use crate::{MipLevel, Result};

/// Upper bound on the total number of levels in a pyramid.
pub const MAX_MIP_LEVELS: usize = 14;

/// An ordered sequence of mip levels, indexed 0 (finest) to coarsest.
///
/// # Example
///
/// ```rust
/// use tex_core::Texture;
///
/// let texture = Texture::from_rgb8(2, 2, vec![0; 12]).unwrap();
/// assert_eq!(texture.num_levels(), 1);
/// assert_eq!(texture.base().dimensions(), (2, 2));
/// ```
#[derive(Debug, Clone)]
pub struct Texture {
    levels: Vec<MipLevel>,
}

impl Texture {
    /// Creates a texture holding only the given base level.
    pub fn from_base(base: MipLevel) -> Self {
        Self { levels: vec![base] }
    }

    /// Creates a texture from a packed RGB base buffer.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidDimensions`] if the buffer length is
    /// not `width * height * 3`.
    pub fn from_rgb8(width: u32, height: u32, texels: Vec<u8>) -> Result<Self> {
        Ok(Self::from_base(MipLevel::from_texels(width, height, texels)?))
    }

    /// Returns the number of levels currently present.
    #[inline]
    pub fn num_levels(&self) -> usize {
        self.levels.len()
    }

    /// Returns the level at `index`, or `None` if it does not exist.
    #[inline]
    pub fn level(&self, index: usize) -> Option<&MipLevel> {
        self.levels.get(index)
    }

    /// Returns the full-resolution base level.
    #[inline]
    pub fn base(&self) -> &MipLevel {
        &self.levels[0]
    }

    /// Returns all levels, finest first.
    #[inline]
    pub fn levels(&self) -> &[MipLevel] {
        &self.levels
    }

    /// Returns mutable access to the level store.
    ///
    /// Intended for the pyramid generator; sampling must not run while the
    /// store is being rewritten.
    #[inline]
    pub fn levels_mut(&mut self) -> &mut Vec<MipLevel> {
        &mut self.levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rgb8() {
        let tex = Texture::from_rgb8(4, 2, vec![7; 4 * 2 * 3]).unwrap();
        assert_eq!(tex.num_levels(), 1);
        assert_eq!(tex.base().dimensions(), (4, 2));
    }

    #[test]
    fn test_from_rgb8_wrong_size() {
        assert!(Texture::from_rgb8(4, 2, vec![7; 10]).is_err());
    }

    #[test]
    fn test_level_access() {
        let tex = Texture::from_rgb8(1, 1, vec![1, 2, 3]).unwrap();
        assert!(tex.level(0).is_some());
        assert!(tex.level(1).is_none());
    }
}
