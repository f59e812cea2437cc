//! # tex-core
//!
//! Core types for software texture sampling.
//!
//! This crate provides the foundational types used throughout the tex-rs
//! workspace:
//!
//! - [`Color`] - Floating-point RGB color triplet
//! - [`MipLevel`] - A single image level with packed 8-bit RGB texels
//! - [`Texture`] - An owned chain of mip levels, finest first
//!
//! ## Design Philosophy
//!
//! A [`Texture`] is built once (level 0 supplied by the asset loader, coarser
//! levels synthesized by `tex-ops`) and is read-only afterwards. All texel
//! lookups go through [`MipLevel::texel`], which saturates out-of-range
//! coordinates to the border texel (clamp-to-edge addressing), so callers
//! never have to bounds-check UV-derived coordinates themselves.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of tex-rs and has no internal dependencies.
//! The other workspace crates depend on `tex-core`:
//!
//! ```text
//! tex-core (this crate)
//!    ^
//!    |
//!    +-- tex-math (interpolation helpers)
//!    +-- tex-ops  (sampling, LOD, mip generation)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod color;
pub mod error;
pub mod level;
pub mod texture;

// Re-exports for convenience
pub use color::Color;
pub use error::{Error, Result};
pub use level::MipLevel;
pub use texture::{Texture, MAX_MIP_LEVELS};
