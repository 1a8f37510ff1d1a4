//! Grayscale image buffer.
//!
//! [`GrayImage`] is the pixel container every operation in this workspace
//! consumes and produces: a flat, row-major `Vec<u8>` of single-channel
//! samples with `length == width * height`.
//!
//! # Memory Layout
//!
//! Samples are stored row-major, top-to-bottom:
//!
//! ```text
//! Memory: [p p p p ...]  <- Row 0
//!         [p p p p ...]  <- Row 1
//!         ...
//! ```
//!
//! # Coordinate convention
//!
//! All accessors take `(row, col)` in that order, matching the loop
//! structure of the filtering code (`i` over rows, `j` over columns).
//! The signed accessors [`GrayImage::get`] and [`GrayImage::get_or`]
//! accept out-of-range coordinates so kernel loops never need ad hoc
//! bounds arithmetic at call sites.
//!
//! # Usage
//!
//! ```rust
//! use edgekit_core::GrayImage;
//!
//! let mut img = GrayImage::new(16, 16).unwrap();
//! img.set_pixel(3, 4, 200);
//! assert_eq!(img.pixel(3, 4), 200);
//! assert_eq!(img.get(-1, 0), None);
//! assert_eq!(img.get_or(-1, 0, 0), 0);
//! ```

use crate::{Error, Result};

/// Owned single-channel 8-bit image buffer, row-major.
///
/// Operations in this workspace never mutate their input image and never
/// retain one across calls; every derived buffer is freshly allocated.
///
/// # Example
///
/// ```rust
/// use edgekit_core::GrayImage;
///
/// let img = GrayImage::from_data(2, 2, vec![0, 64, 128, 255]).unwrap();
/// assert_eq!(img.dimensions(), (2, 2));
/// assert_eq!(img.pixel(1, 0), 128);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrayImage {
    /// Sample data, row-major
    data: Vec<u8>,
    /// Image width in pixels
    width: u32,
    /// Image height in pixels
    height: u32,
}

impl GrayImage {
    /// Creates a new image filled with zeros.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] if either dimension is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use edgekit_core::GrayImage;
    ///
    /// let img = GrayImage::new(640, 480).unwrap();
    /// assert_eq!(img.len(), 640 * 480);
    /// assert!(GrayImage::new(0, 480).is_err());
    /// ```
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::invalid_dimensions(width, height, "zero dimension"));
        }
        let len = width as usize * height as usize;
        Ok(Self {
            data: vec![0; len],
            width,
            height,
        })
    }

    /// Creates an image from existing sample data.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimensions`] for zero dimensions and
    /// [`Error::BufferSizeMismatch`] if `data.len() != width * height`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use edgekit_core::GrayImage;
    ///
    /// let img = GrayImage::from_data(4, 1, vec![1, 2, 3, 4]).unwrap();
    /// assert!(GrayImage::from_data(4, 1, vec![1, 2]).is_err());
    /// ```
    pub fn from_data(width: u32, height: u32, data: Vec<u8>) -> Result<Self> {
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

    /// Creates an image filled with a single value.
    pub fn filled(width: u32, height: u32, value: u8) -> Result<Self> {
        let mut img = Self::new(width, height)?;
        img.fill(value);
        Ok(img)
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the image dimensions as (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the total number of samples (`width * height`).
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the image holds no samples.
    ///
    /// Always `false` for a constructed image; present for slice-like
    /// API completeness.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the raw sample data as a slice.
    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Consumes the image and returns the underlying buffer.
    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Returns the sample at `(row, col)`, or `None` if out of bounds.
    ///
    /// Coordinates are signed so kernel loops can probe past the borders
    /// without separate range checks.
    #[inline]
    pub fn get(&self, row: i64, col: i64) -> Option<u8> {
        if row < 0 || row >= self.height as i64 || col < 0 || col >= self.width as i64 {
            return None;
        }
        Some(self.data[row as usize * self.width as usize + col as usize])
    }

    /// Returns the sample at `(row, col)`, or `default` if out of bounds.
    ///
    /// # Example
    ///
    /// ```rust
    /// use edgekit_core::GrayImage;
    ///
    /// let img = GrayImage::filled(2, 2, 9).unwrap();
    /// assert_eq!(img.get_or(0, 0, 0), 9);
    /// assert_eq!(img.get_or(5, 5, 0), 0);
    /// ```
    #[inline]
    pub fn get_or(&self, row: i64, col: i64, default: u8) -> u8 {
        self.get(row, col).unwrap_or(default)
    }

    /// Returns the sample at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds. Use [`get`](Self::get)
    /// for checked access.
    #[inline]
    pub fn pixel(&self, row: u32, col: u32) -> u8 {
        assert!(row < self.height && col < self.width);
        self.data[row as usize * self.width as usize + col as usize]
    }

    /// Sets the sample at `(row, col)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are out of bounds.
    #[inline]
    pub fn set_pixel(&mut self, row: u32, col: u32, value: u8) {
        assert!(row < self.height && col < self.width);
        self.data[row as usize * self.width as usize + col as usize] = value;
    }

    /// Fills the entire image with one value.
    pub fn fill(&mut self, value: u8) {
        self.data.fill(value);
    }

    /// Extracts a copy of the `region_height x region_width` sub-region
    /// whose top-left corner is at `(top, left)`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidRegion`] if the region does not fit, and
    /// [`Error::InvalidDimensions`] for a zero-sized region.
    ///
    /// # Example
    ///
    /// ```rust
    /// use edgekit_core::GrayImage;
    ///
    /// let img = GrayImage::from_data(3, 3, vec![1, 2, 3, 4, 5, 6, 7, 8, 9]).unwrap();
    /// let center = img.crop(1, 1, 1, 1).unwrap();
    /// assert_eq!(center.data(), &[5]);
    /// ```
    pub fn crop(&self, top: u32, left: u32, region_height: u32, region_width: u32) -> Result<Self> {
        if region_height == 0 || region_width == 0 {
            return Err(Error::invalid_dimensions(
                region_width,
                region_height,
                "zero-sized region",
            ));
        }
        if top.checked_add(region_height).is_none_or(|b| b > self.height)
            || left.checked_add(region_width).is_none_or(|r| r > self.width)
        {
            return Err(Error::InvalidRegion {
                top,
                left,
                region_height,
                region_width,
                width: self.width,
                height: self.height,
            });
        }
        let mut data = Vec::with_capacity(region_height as usize * region_width as usize);
        for r in top..top + region_height {
            let start = r as usize * self.width as usize + left as usize;
            data.extend_from_slice(&self.data[start..start + region_width as usize]);
        }
        Self::from_data(region_width, region_height, data)
    }
}
