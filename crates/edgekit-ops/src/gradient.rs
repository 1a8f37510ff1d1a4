//! Kernel correlation and gradient fields.
//!
//! [`correlate`] is the single shared primitive behind both the gradient
//! edge detector and the Canny pipeline's gradient stage: it slides a
//! (Gx, Gy) kernel pair over every pixel of the input, resolving border
//! reads through [`PaddedSource`], and returns the raw per-pixel sums as
//! a [`Gradient`]. Magnitude and direction are derived views over those
//! sums.
//!
//! The weighted sum is a correlation (no kernel flip), matching the
//! convention of the kernel constants in [`crate::kernel`].
//!
//! # Example
//!
//! ```rust
//! use edgekit_core::{GrayImage, Padding};
//! use edgekit_ops::{correlate, GradientOperator};
//!
//! let img = GrayImage::from_data(4, 4, vec![
//!     0, 0, 255, 255,
//!     0, 0, 255, 255,
//!     0, 0, 255, 255,
//!     0, 0, 255, 255,
//! ]).unwrap();
//!
//! let grad = correlate(&img, GradientOperator::Sobel, Padding::Replicate).unwrap();
//! let mag = grad.magnitude();
//! // The vertical step edge responds between columns 1 and 2.
//! assert!(mag.get(1, 1) > 0.0);
//! assert_eq!(mag.get(1, 0), 0.0);
//! ```

use edgekit_core::{GrayImage, PaddedSource, Padding, ScalarField};
use tracing::trace;

use crate::kernel::{
    GradientOperator, PREWITT_X, PREWITT_Y, ROBERTS_X, ROBERTS_Y, SOBEL_X, SOBEL_Y,
};
use crate::OpsResult;

/// Per-pixel kernel correlation sums (sumX, sumY).
///
/// Both fields have the dimensions of the source image the pair was
/// computed from.
#[derive(Debug, Clone)]
pub struct Gradient {
    /// Horizontal kernel response (Gx correlation sums).
    pub x: ScalarField,
    /// Vertical kernel response (Gy correlation sums).
    pub y: ScalarField,
}

impl Gradient {
    /// Returns the gradient magnitude `sqrt(sumX^2 + sumY^2)` per pixel.
    pub fn magnitude(&self) -> ScalarField {
        let data = self
            .x
            .data()
            .iter()
            .zip(self.y.data())
            .map(|(&sx, &sy)| (sx * sx + sy * sy).sqrt())
            .collect();
        ScalarField::from_data(self.x.width(), self.x.height(), data)
            .unwrap_or_else(|_| unreachable!("component dimensions are valid"))
    }

    /// Returns the gradient direction `atan2(sumY, sumX)` in degrees,
    /// range (-180, 180].
    pub fn direction_degrees(&self) -> ScalarField {
        let data = self
            .x
            .data()
            .iter()
            .zip(self.y.data())
            .map(|(&sx, &sy)| sy.atan2(sx).to_degrees())
            .collect();
        ScalarField::from_data(self.x.width(), self.x.height(), data)
            .unwrap_or_else(|_| unreachable!("component dimensions are valid"))
    }
}

/// Correlates the operator's (Gx, Gy) kernel pair with the image.
///
/// Every output pixel `(i, j)` is the kernel-weighted sum of samples
/// around `(i, j)`, with out-of-image reads resolved by `padding` (see
/// [`Padding`] for the border semantics). Output dimensions equal the
/// input's.
///
/// # Example
///
/// ```rust
/// use edgekit_core::{GrayImage, Padding};
/// use edgekit_ops::{correlate, GradientOperator};
///
/// let img = GrayImage::filled(8, 8, 100).unwrap();
/// let grad = correlate(&img, GradientOperator::Prewitt, Padding::Replicate).unwrap();
/// // A constant image has zero gradient everywhere under replicate padding.
/// assert!(grad.magnitude().data().iter().all(|&m| m == 0.0));
/// ```
pub fn correlate(
    src: &GrayImage,
    op: GradientOperator,
    padding: Padding,
) -> OpsResult<Gradient> {
    let (width, height) = src.dimensions();
    trace!(width, height, ?op, ?padding, "correlate");

    let source = PaddedSource::new(src, op.pad_size(), padding);

    let (x, y) = match op {
        GradientOperator::Sobel => correlate_3x3(&source, width, height, &SOBEL_X, &SOBEL_Y),
        GradientOperator::Prewitt => {
            correlate_3x3(&source, width, height, &PREWITT_X, &PREWITT_Y)
        }
        GradientOperator::Roberts => {
            correlate_2x2(&source, width, height, &ROBERTS_X, &ROBERTS_Y)
        }
    };

    Ok(Gradient {
        x: ScalarField::from_data(width, height, x)?,
        y: ScalarField::from_data(width, height, y)?,
    })
}

/// 3x3 correlation, kernel centered on the output pixel.
fn correlate_3x3(
    source: &PaddedSource<'_>,
    width: u32,
    height: u32,
    gx: &[[i32; 3]; 3],
    gy: &[[i32; 3]; 3],
) -> (Vec<f32>, Vec<f32>) {
    let len = width as usize * height as usize;
    let mut sums_x = Vec::with_capacity(len);
    let mut sums_y = Vec::with_capacity(len);

    for i in 0..height as i64 {
        for j in 0..width as i64 {
            let mut sum_x = 0.0f32;
            let mut sum_y = 0.0f32;

            for ki in -1..=1i64 {
                for kj in -1..=1i64 {
                    let v = source.sample(i + ki, j + kj) as f32;
                    let kr = (ki + 1) as usize;
                    let kc = (kj + 1) as usize;
                    sum_x += v * gx[kr][kc] as f32;
                    sum_y += v * gy[kr][kc] as f32;
                }
            }

            sums_x.push(sum_x);
            sums_y.push(sum_y);
        }
    }

    (sums_x, sums_y)
}

/// 2x2 correlation, kernel anchored at the top-left of its window.
fn correlate_2x2(
    source: &PaddedSource<'_>,
    width: u32,
    height: u32,
    gx: &[[i32; 2]; 2],
    gy: &[[i32; 2]; 2],
) -> (Vec<f32>, Vec<f32>) {
    let len = width as usize * height as usize;
    let mut sums_x = Vec::with_capacity(len);
    let mut sums_y = Vec::with_capacity(len);

    for i in 0..height as i64 {
        for j in 0..width as i64 {
            let mut sum_x = 0.0f32;
            let mut sum_y = 0.0f32;

            for ki in 0..=1i64 {
                for kj in 0..=1i64 {
                    let v = source.sample(i + ki, j + kj) as f32;
                    sum_x += v * gx[ki as usize][kj as usize] as f32;
                    sum_y += v * gy[ki as usize][kj as usize] as f32;
                }
            }

            sums_x.push(sum_x);
            sums_y.push(sum_y);
        }
    }

    (sums_x, sums_y)
}
