//! Border handling for kernel application.
//!
//! Filters that slide a kernel over an image must decide what a sample
//! "outside" the image looks like. This module provides:
//!
//! - [`Padding`] - the boundary policy selector
//! - [`pad_zero`], [`pad_replicate`], [`pad_reflect`] - physical padders
//!   that return an enlarged image with the requested border band
//! - [`PaddedSource`] - a sampling view over a virtually or physically
//!   padded image, so kernel loops read one uniform interface
//!
//! # Example
//!
//! ```rust
//! use edgekit_core::{GrayImage, Padding, PaddedSource};
//!
//! let img = GrayImage::from_data(2, 2, vec![10, 20, 30, 40]).unwrap();
//! let src = PaddedSource::new(&img, 1, Padding::Replicate);
//! assert_eq!(src.sample(-1, -1), 10); // nearest edge value repeated
//! assert_eq!(src.sample(0, 0), 10);
//! assert_eq!(src.sample(2, 2), 40);
//! ```

use crate::GrayImage;

/// Boundary policy for out-of-range reads during kernel application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Padding {
    /// No physical padding; out-of-range reads yield 0.
    ///
    /// The kernel stays centered on every original pixel, so border
    /// pixels are under-weighted by zero fill rather than computed over
    /// a shrinking valid window. This is a deliberate policy, not an
    /// approximation of one.
    None,
    /// Physical zero border.
    Zero,
    /// Nearest edge value repeated outward (coordinate clamp).
    #[default]
    Replicate,
    /// Mirror across the edge: `r < 0 -> -r-1`, `r >= h -> 2h-r-1`.
    ///
    /// Consistent for pad bands up to the image dimension; the filters
    /// in this workspace use a band of 1.
    Reflect,
}

/// Returns a copy of `src` embedded in a zero border of `pad` pixels on
/// every side.
///
/// The output is `(width + 2*pad) x (height + 2*pad)`; cropping its
/// center region reproduces `src` exactly.
///
/// # Example
///
/// ```rust
/// use edgekit_core::{pad_zero, GrayImage};
///
/// let img = GrayImage::from_data(1, 1, vec![9]).unwrap();
/// let padded = pad_zero(&img, 1);
/// assert_eq!(padded.data(), &[0, 0, 0, 0, 9, 0, 0, 0, 0]);
/// ```
pub fn pad_zero(src: &GrayImage, pad: u32) -> GrayImage {
    let (width, height) = src.dimensions();
    let new_width = width + 2 * pad;
    let new_height = height + 2 * pad;

    let mut out = vec![0u8; new_width as usize * new_height as usize];
    for r in 0..height {
        for c in 0..width {
            let idx = (r + pad) as usize * new_width as usize + (c + pad) as usize;
            out[idx] = src.pixel(r, c);
        }
    }

    GrayImage::from_data(new_width, new_height, out)
        .unwrap_or_else(|_| unreachable!("padded dimensions are valid"))
}

/// Returns a copy of `src` with a replicate border: each border sample
/// repeats the nearest edge value (coordinates clamped to `[0, dim-1]`).
pub fn pad_replicate(src: &GrayImage, pad: u32) -> GrayImage {
    let (width, height) = src.dimensions();
    let new_width = width + 2 * pad;
    let new_height = height + 2 * pad;

    let mut out = vec![0u8; new_width as usize * new_height as usize];
    for big_r in 0..new_height {
        for big_c in 0..new_width {
            let r = (big_r as i64 - pad as i64).clamp(0, height as i64 - 1);
            let c = (big_c as i64 - pad as i64).clamp(0, width as i64 - 1);
            out[big_r as usize * new_width as usize + big_c as usize] =
                src.pixel(r as u32, c as u32);
        }
    }

    GrayImage::from_data(new_width, new_height, out)
        .unwrap_or_else(|_| unreachable!("padded dimensions are valid"))
}

/// Returns a copy of `src` with a mirrored border.
///
/// Coordinates reflect across the image edge: row `-1` reads row `0`,
/// row `-2` reads row `1`, row `height` reads row `height - 1`, and so
/// on. Valid for `pad` up to the image dimension.
pub fn pad_reflect(src: &GrayImage, pad: u32) -> GrayImage {
    let (width, height) = src.dimensions();
    debug_assert!(pad <= width && pad <= height, "reflect band wider than image");
    let new_width = width + 2 * pad;
    let new_height = height + 2 * pad;

    let mut out = vec![0u8; new_width as usize * new_height as usize];
    for big_r in 0..new_height {
        for big_c in 0..new_width {
            let r = reflect_index(big_r as i64 - pad as i64, height);
            let c = reflect_index(big_c as i64 - pad as i64, width);
            out[big_r as usize * new_width as usize + big_c as usize] = src.pixel(r, c);
        }
    }

    GrayImage::from_data(new_width, new_height, out)
        .unwrap_or_else(|_| unreachable!("padded dimensions are valid"))
}

/// Mirrors a coordinate across the `[0, len)` edges.
#[inline]
fn reflect_index(i: i64, len: u32) -> u32 {
    let len = len as i64;
    let mut i = i;
    if i < 0 {
        i = -i - 1;
    }
    if i >= len {
        i = 2 * len - i - 1;
    }
    i as u32
}

/// Sampling view over a padded image.
///
/// Construction resolves the [`Padding`] policy once: the physical modes
/// allocate a single padded buffer, [`Padding::None`] borrows the input
/// directly. [`sample`](Self::sample) is then valid for
/// `row in [-pad, height + pad)` and `col in [-pad, width + pad)`, so a
/// kernel loop never branches on the boundary policy itself.
pub struct PaddedSource<'a> {
    inner: Source<'a>,
    pad: i64,
}

enum Source<'a> {
    /// No physical padding; reads resolve against the original image.
    Direct(&'a GrayImage),
    /// One physically padded buffer, indexed with a `pad` offset.
    Padded(GrayImage),
}

impl<'a> PaddedSource<'a> {
    /// Builds a sampling view over `src` with a pad band of `pad` pixels.
    pub fn new(src: &'a GrayImage, pad: u32, mode: Padding) -> Self {
        let inner = match mode {
            Padding::None => Source::Direct(src),
            Padding::Zero => Source::Padded(pad_zero(src, pad)),
            Padding::Replicate => Source::Padded(pad_replicate(src, pad)),
            Padding::Reflect => Source::Padded(pad_reflect(src, pad)),
        };
        Self {
            inner,
            pad: pad as i64,
        }
    }

    /// Returns the sample at `(row, col)` in original image coordinates.
    ///
    /// Reads beyond the declared pad band answer 0 rather than panicking;
    /// they indicate a kernel/pad mismatch at the call site.
    #[inline]
    pub fn sample(&self, row: i64, col: i64) -> u8 {
        match &self.inner {
            Source::Direct(img) => img.get_or(row, col, 0),
            Source::Padded(img) => img.get_or(row + self.pad, col + self.pad, 0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> GrayImage {
        GrayImage::from_data(2, 2, vec![1, 2, 3, 4]).unwrap()
    }

    #[test]
    fn test_pad_zero_roundtrip() {
        let img = GrayImage::from_data(3, 2, vec![1, 2, 3, 4, 5, 6]).unwrap();
        let padded = pad_zero(&img, 2);
        assert_eq!(padded.dimensions(), (7, 6));
        let cropped = padded.crop(2, 2, 2, 3).unwrap();
        assert_eq!(cropped, img);
    }

    #[test]
    fn test_pad_zero_border_is_zero() {
        let padded = pad_zero(&quad(), 1);
        assert_eq!(padded.pixel(0, 0), 0);
        assert_eq!(padded.pixel(0, 3), 0);
        assert_eq!(padded.pixel(3, 0), 0);
        assert_eq!(padded.pixel(3, 3), 0);
        assert_eq!(padded.pixel(1, 1), 1);
        assert_eq!(padded.pixel(2, 2), 4);
    }

    #[test]
    fn test_pad_replicate_corners() {
        let padded = pad_replicate(&quad(), 1);
        assert_eq!(padded.dimensions(), (4, 4));
        assert_eq!(padded.pixel(0, 0), 1);
        assert_eq!(padded.pixel(0, 3), 2);
        assert_eq!(padded.pixel(3, 0), 3);
        assert_eq!(padded.pixel(3, 3), 4);
        // Edge midpoints repeat the adjacent row/column.
        assert_eq!(padded.pixel(0, 1), 1);
        assert_eq!(padded.pixel(1, 0), 1);
    }

    #[test]
    fn test_pad_reflect_mirrors_edges() {
        let img = GrayImage::from_data(3, 1, vec![10, 20, 30]).unwrap();
        let padded = pad_reflect(&img, 1);
        assert_eq!(padded.dimensions(), (5, 3));
        // Row -1 mirrors row 0, row 1 (past the end) mirrors row 0.
        assert_eq!(padded.pixel(1, 0), 10);
        assert_eq!(padded.pixel(1, 4), 30);
        // Columns: -1 -> 0, 3 -> 2.
        assert_eq!(padded.data()[padded.width() as usize + 1], 10);
    }

    #[test]
    fn test_reflect_index_mapping() {
        assert_eq!(reflect_index(-1, 4), 0);
        assert_eq!(reflect_index(-2, 4), 1);
        assert_eq!(reflect_index(0, 4), 0);
        assert_eq!(reflect_index(3, 4), 3);
        assert_eq!(reflect_index(4, 4), 3);
        assert_eq!(reflect_index(5, 4), 2);
    }

    #[test]
    fn test_source_none_zero_fills() {
        let img = quad();
        let src = PaddedSource::new(&img, 1, Padding::None);
        assert_eq!(src.sample(-1, 0), 0);
        assert_eq!(src.sample(0, -1), 0);
        assert_eq!(src.sample(2, 2), 0);
        assert_eq!(src.sample(0, 0), 1);
        assert_eq!(src.sample(1, 1), 4);
    }

    #[test]
    fn test_source_zero_matches_none_inside_band() {
        let img = quad();
        let none = PaddedSource::new(&img, 1, Padding::None);
        let zero = PaddedSource::new(&img, 1, Padding::Zero);
        for r in -1..3i64 {
            for c in -1..3i64 {
                assert_eq!(none.sample(r, c), zero.sample(r, c));
            }
        }
    }

    #[test]
    fn test_source_replicate_and_reflect() {
        let img = GrayImage::from_data(3, 3, (1..=9).collect()).unwrap();
        let rep = PaddedSource::new(&img, 1, Padding::Replicate);
        assert_eq!(rep.sample(-1, -1), 1);
        assert_eq!(rep.sample(3, 3), 9);
        assert_eq!(rep.sample(-1, 1), 2);

        let refl = PaddedSource::new(&img, 1, Padding::Reflect);
        assert_eq!(refl.sample(-1, 0), 1); // row -1 mirrors row 0
        assert_eq!(refl.sample(3, 0), 7); // row 3 mirrors row 2
        assert_eq!(refl.sample(1, -1), 4);
    }
}
