//! Floating-point scalar field.
//!
//! [`ScalarField`] carries the intermediate per-pixel values of the edge
//! detection pipeline (gradient sums, magnitudes, directions, suppressed
//! magnitudes) between stages: same shape contract as
//! [`GrayImage`](crate::GrayImage), `f32` samples.

use crate::{Error, GrayImage, Result};

/// Threshold below which an observed value range counts as flat.
///
/// A field whose `max - min` falls under this renders as all zeros: a
/// near-constant field carries no edge information.
pub const FLAT_RANGE_EPS: f32 = 1e-5;

/// Owned single-channel `f32` buffer, row-major, one value per pixel.
///
/// # Example
///
/// ```rust
/// use edgekit_core::ScalarField;
///
/// let mut field = ScalarField::zeros(4, 4).unwrap();
/// field.set(2, 3, 1.5);
/// assert_eq!(field.get(2, 3), 1.5);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    /// Values, row-major
    data: Vec<f32>,
    /// Field width in samples
    width: u32,
    /// Field height in samples
    height: u32,
}

impl ScalarField {
    /// Creates a zero-filled field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    pub fn zeros(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(width, height, "zero dimension"));
        }
        Ok(Self {
            data: vec![0.0; width as usize * height as usize],
            width,
            height,
        })
    }

    /// Creates a field from existing values.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for zero dimensions and
    /// [`Error::BufferSizeMismatch`] if the length does not match.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(width, height, "zero dimension"));
        }
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::buffer_size_mismatch(expected, data.len()));
        }
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Returns the field width in samples.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the field height in samples.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of samples.
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the field holds no samples (never, once built).
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the raw values as a slice.
    #[inline]
    pub fn data(&self) -> &[f32] {
        &self.data
    }

    /// Returns the value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn get(&self, row: u32, col: u32) -> f32 {
        assert!(row < self.height && col < self.width);
        self.data[row as usize * self.width as usize + col as usize]
    }

    /// Sets the value at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn set(&mut self, row: u32, col: u32, value: f32) {
        assert!(row < self.height && col < self.width);
        self.data[row as usize * self.width as usize + col as usize] = value;
    }

    /// Returns the observed (min, max) over all values.
    pub fn min_max(&self) -> (f32, f32) {
        let mut min = self.data[0];
        let mut max = self.data[0];
        for &v in &self.data[1..] {
            if v < min {
                min = v;
            }
            if v > max {
                max = v;
            }
        }
        (min, max)
    }

    /// Linearly rescales the field into an 8-bit image over `[0, 255]`.
    ///
    /// Uses the observed (min, max) of the whole field. If the range is
    /// narrower than [`FLAT_RANGE_EPS`] the output is all zeros; a flat
    /// field carries no edge information. Scaled values are clamped to
    /// `[0, 255]` to absorb float rounding.
    ///
    /// # Example
    ///
    /// ```rust
    /// use edgekit_core::ScalarField;
    ///
    /// let field = ScalarField::from_data(2, 1, vec![10.0, 20.0]).unwrap();
    /// let img = field.to_gray_normalized();
    /// assert_eq!(img.data(), &[0, 255]);
    ///
    /// let flat = ScalarField::from_data(2, 1, vec![5.0, 5.0]).unwrap();
    /// assert_eq!(flat.to_gray_normalized().data(), &[0, 0]);
    /// ```
    pub fn to_gray_normalized(&self) -> GrayImage {
        let (min, max) = self.min_max();
        let range = max - min;

        let mut out = vec![0u8; self.data.len()];
        if range >= FLAT_RANGE_EPS {
            for (dst, &v) in out.iter_mut().zip(&self.data) {
                let scaled = (v - min) / range * 255.0;
                *dst = scaled.clamp(0.0, 255.0) as u8;
            }
        }

        // Dimensions were validated at construction, so this cannot fail.
        GrayImage::from_data(self.width, self.height, out)
            .unwrap_or_else(|_| unreachable!("field dimensions are valid"))
    }
}
