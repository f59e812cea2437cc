//! # tex-ops
//!
//! Texture sampling and mipmap pyramid generation.
//!
//! This crate provides the per-pixel sampling entry point used by a software
//! rasterizer, plus the one-shot pyramid builder that prepares a texture for
//! minification.
//!
//! # Modules
//!
//! - [`params`] - Per-query sampling parameters and filter modes
//! - [`lod`] - Derivative-based level-of-detail resolution
//! - [`sample`] - Nearest / bilinear / trilinear sampling
//! - [`mip`] - Box/trapezoidal mip pyramid generation
//!
//! # Example
//!
//! ```rust
//! use glam::Vec2;
//! use tex_core::Texture;
//! use tex_ops::{generate_mips, sample, SampleParams, TexelFilter, LevelFilter};
//!
//! let mut texture = Texture::from_rgb8(4, 4, vec![128; 4 * 4 * 3]).unwrap();
//! generate_mips(&mut texture, 0).unwrap();
//!
//! let params = SampleParams {
//!     uv: Vec2::new(0.5, 0.5),
//!     uv_dx: Vec2::new(0.75, 0.5),
//!     uv_dy: Vec2::new(0.5, 0.75),
//!     texel_filter: TexelFilter::Linear,
//!     level_filter: LevelFilter::Linear,
//! };
//! let color = sample(&texture, &params);
//! assert!((color.r - 128.0 / 255.0).abs() < 0.01);
//! ```
//!
//! # Concurrency
//!
//! Sampling is a pure read over the level store and may run from many
//! threads once [`generate_mips`] has completed; generation itself must be
//! serialized per texture.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod lod;
pub mod mip;
pub mod params;
pub mod sample;

pub use error::{OpsError, OpsResult};
pub use lod::level_of_detail;
pub use mip::generate_mips;
pub use params::{LevelFilter, SampleParams, TexelFilter};
pub use sample::{sample, sample_bilinear, sample_nearest, sample_trilinear};
