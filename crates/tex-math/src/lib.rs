//! # tex-math
//!
//! Interpolation utilities for texture filtering.
//!
//! This crate provides the scalar helpers shared by the sampling and mip
//! generation code in `tex-ops`:
//!
//! - [`lerp`] / [`lerp_color`] - Linear interpolation
//! - [`fract`] - Fractional part
//! - [`saturate`] - Clamp to `[0, 1]`
//!
//! # Dependencies
//!
//! - [`tex-core`](tex_core) - Core types
//!
//! # Used By
//!
//! - `tex-ops` - bilinear/trilinear weights and LOD fractions

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod interp;

pub use interp::{fract, lerp, lerp_color, saturate};
