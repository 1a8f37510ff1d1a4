//! # edgekit-core
//!
//! Core types for grayscale raster processing.
//!
//! This crate provides the foundational types used throughout the edgekit
//! workspace:
//!
//! - [`GrayImage`] - Owned 8-bit single-channel image buffer, row-major
//! - [`ScalarField`] - Per-pixel `f32` field for intermediate results
//! - [`Padding`], [`PaddedSource`] - Boundary policies and padded sampling
//! - [`Error`], [`Result`] - Unified error handling
//!
//! ## Design Philosophy
//!
//! Buffers are caller-owned and validated at construction: once a
//! [`GrayImage`] or [`ScalarField`] exists, its length matches its
//! dimensions and the dimensions are positive. Downstream code can index
//! without re-checking, and boundary behavior is expressed once through
//! [`PaddedSource`] rather than ad hoc bounds arithmetic in every filter.
//!
//! ## Crate Structure
//!
//! This crate is the foundation of edgekit and has no internal
//! dependencies:
//!
//! ```text
//! edgekit-core (this crate)
//!    ^
//!    |
//!    +-- edgekit-ops (gradient operators, Canny pipeline)
//!    +-- edgekit-tests (integration tests)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod border;
pub mod error;
pub mod field;
pub mod image;

// Re-exports for convenience
pub use border::{pad_reflect, pad_replicate, pad_zero, PaddedSource, Padding};
pub use error::{Error, Result};
pub use field::{ScalarField, FLAT_RANGE_EPS};
pub use image::GrayImage;

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use edgekit_core::prelude::*;
/// ```
pub mod prelude {
    pub use crate::border::{pad_reflect, pad_replicate, pad_zero, PaddedSource, Padding};
    pub use crate::error::{Error, Result};
    pub use crate::field::ScalarField;
    pub use crate::image::GrayImage;
}
