//! Error types for edgekit-core operations.
//!
//! All validation in this workspace happens before any pixel is touched:
//! an operation either returns a fully computed buffer or one of these
//! errors, never a partial result.
//!
//! # Usage
//!
//! ```rust
//! use edgekit_core::{Error, Result};
//!
//! fn check(width: u32, height: u32) -> Result<()> {
//!     if width == 0 || height == 0 {
//!         return Err(Error::invalid_dimensions(width, height, "zero dimension"));
//!     }
//!     Ok(())
//! }
//! ```

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when constructing or accessing raster buffers.
#[derive(Debug, Error)]
pub enum Error {
    /// Width or height is zero, or otherwise unusable.
    #[error("invalid dimensions: {width}x{height} ({reason})")]
    InvalidDimensions {
        /// Requested width
        width: u32,
        /// Requested height
        height: u32,
        /// Reason why dimensions are invalid
        reason: String,
    },

    /// Buffer length does not match `width * height`.
    #[error("buffer size mismatch: expected {expected} samples, got {got}")]
    BufferSizeMismatch {
        /// Expected sample count
        expected: usize,
        /// Actual sample count
        got: usize,
    },

    /// Pixel coordinates are outside image bounds.
    #[error("pixel ({row}, {col}) out of bounds for image {width}x{height}")]
    OutOfBounds {
        /// Row that was accessed
        row: u32,
        /// Column that was accessed
        col: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
    },

    /// A requested sub-region extends beyond the image bounds.
    #[error("region ({top}, {left}, {region_height}x{region_width}) exceeds image bounds {width}x{height}")]
    InvalidRegion {
        /// Region top row
        top: u32,
        /// Region left column
        left: u32,
        /// Region height
        region_height: u32,
        /// Region width
        region_width: u32,
        /// Image width
        width: u32,
        /// Image height
        height: u32,
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

    /// Creates an [`Error::BufferSizeMismatch`] error.
    #[inline]
    pub fn buffer_size_mismatch(expected: usize, got: usize) -> Self {
        Self::BufferSizeMismatch { expected, got }
    }

    /// Creates an [`Error::OutOfBounds`] error.
    #[inline]
    pub fn out_of_bounds(row: u32, col: u32, width: u32, height: u32) -> Self {
        Self::OutOfBounds {
            row,
            col,
            width,
            height,
        }
    }

    /// Returns `true` if this is a bounds-related error.
    #[inline]
    pub fn is_bounds_error(&self) -> bool {
        matches!(self, Self::OutOfBounds { .. } | Self::InvalidRegion { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_dimensions_message() {
        let err = Error::invalid_dimensions(0, 12, "zero dimension");
        let msg = err.to_string();
        assert!(msg.contains("0x12"));
        assert!(msg.contains("zero dimension"));
    }

    #[test]
    fn test_out_of_bounds() {
        let err = Error::out_of_bounds(10, 20, 8, 8);
        assert!(err.is_bounds_error());
        assert!(err.to_string().contains("(10, 20)"));
    }

    #[test]
    fn test_buffer_size_mismatch() {
        let err = Error::buffer_size_mismatch(64, 60);
        let msg = err.to_string();
        assert!(msg.contains("64"));
        assert!(msg.contains("60"));
    }
}
