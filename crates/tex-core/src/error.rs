//! Error types for tex-core operations.
//!
//! Sampling itself is total over clamped inputs and never fails; errors only
//! arise when constructing levels from caller-supplied buffers.
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - [`crate::level::MipLevel`] - Buffer validation
//! - [`crate::texture::Texture`] - Base level construction

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building texture storage.
#[derive(Debug, Error)]
pub enum Error {
    /// Texel buffer length does not match the declared dimensions.
    ///
    /// A [`crate::MipLevel`] requires exactly `width * height * 3` bytes of
    /// packed RGB data.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Declared width
        width: u32,
        /// Declared height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },
}

impl Error {
    /// Creates an [`Error::InvalidDimensions`] error.
    #[inline]
    pub fn invalid_dimensions(width: u32, height: u32, reason: impl Into<String>) -> Self {
        Self::InvalidDimensions {
            width,
            height,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_message() {
        let err = Error::invalid_dimensions(5, 3, "expected 45 bytes, got 44");
        let msg = err.to_string();
        assert!(msg.contains("5x3"));
        assert!(msg.contains("44"));
    }
}
