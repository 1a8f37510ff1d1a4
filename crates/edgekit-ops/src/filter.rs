//! Low-pass smoothing filters.
//!
//! The Canny pipeline consumes smoothing through the [`Smoother`] trait;
//! the implementations here are the stock collaborators. All filters
//! share the same border policy: kernel taps that fall outside the image
//! are skipped and the remaining weights renormalized, so border pixels
//! are averaged over their in-bounds neighborhood only. The result is
//! monotonic averaging with no sharpening, same dimensions as the input.
//!
//! # Example
//!
//! ```rust
//! use edgekit_core::GrayImage;
//! use edgekit_ops::filter::gaussian_blur;
//!
//! let img = GrayImage::filled(8, 8, 120).unwrap();
//! let smoothed = gaussian_blur(&img, 5, 1.0).unwrap();
//! // Averaging a constant image changes nothing.
//! assert_eq!(smoothed.data(), img.data());
//! ```

use edgekit_core::GrayImage;
use tracing::debug;

use crate::{OpsError, OpsResult};

/// Low-pass smoothing collaborator consumed by the Canny pipeline.
///
/// Contract: same output dimensions as the input, deterministic, no side
/// effects, monotonic-averaging semantics (no sharpening).
pub trait Smoother {
    /// Smooths `src` with the given kernel size and smoothing parameter.
    ///
    /// `sigma` is interpreted by the implementation; averaging filters
    /// that have no use for it ignore it.
    fn smooth(&self, src: &GrayImage, kernel_size: usize, sigma: f32) -> OpsResult<GrayImage>;
}

/// [`Smoother`] backed by [`gaussian_blur`]. The Canny default.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaussianSmoother;

impl Smoother for GaussianSmoother {
    fn smooth(&self, src: &GrayImage, kernel_size: usize, sigma: f32) -> OpsResult<GrayImage> {
        gaussian_blur(src, kernel_size, sigma)
    }
}

/// [`Smoother`] backed by [`box_blur`]; ignores `sigma`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoxSmoother;

impl Smoother for BoxSmoother {
    fn smooth(&self, src: &GrayImage, kernel_size: usize, _sigma: f32) -> OpsResult<GrayImage> {
        box_blur(src, kernel_size)
    }
}

/// Validates a smoothing kernel size, bumping even sizes to odd.
fn odd_kernel_size(kernel_size: usize) -> OpsResult<usize> {
    if kernel_size == 0 {
        return Err(OpsError::InvalidParameter(
            "smoothing kernel size must be at least 1".into(),
        ));
    }
    Ok(if kernel_size % 2 == 0 {
        kernel_size + 1
    } else {
        kernel_size
    })
}

/// Gaussian blur.
///
/// Builds a normalized 2D Gaussian kernel from
/// `exp(-(i^2 + j^2) / 2*sigma^2)` and averages each pixel over its
/// in-bounds neighborhood, renormalizing by the weight actually applied.
///
/// Even `kernel_size` is bumped to the next odd size.
///
/// # Errors
///
/// [`OpsError::InvalidParameter`] for `kernel_size == 0` or
/// `sigma <= 0`.
pub fn gaussian_blur(src: &GrayImage, kernel_size: usize, sigma: f32) -> OpsResult<GrayImage> {
    if sigma <= 0.0 {
        return Err(OpsError::InvalidParameter(format!(
            "sigma must be positive, got {sigma}"
        )));
    }
    let size = odd_kernel_size(kernel_size)?;
    let (width, height) = src.dimensions();
    debug!(width, height, size, sigma, "gaussian blur");

    let half = (size / 2) as i64;
    let sigma2 = 2.0 * sigma * sigma;

    // Normalized kernel; the loop below renormalizes again at borders
    // where part of the kernel falls outside the image.
    let mut kernel = Vec::with_capacity(size * size);
    let mut sum = 0.0f32;
    for i in -half..=half {
        for j in -half..=half {
            let d = (i * i + j * j) as f32;
            let w = (-d / sigma2).exp();
            kernel.push(w);
            sum += w;
        }
    }
    for w in &mut kernel {
        *w /= sum;
    }

    let mut out = vec![0u8; width as usize * height as usize];
    for i in 0..height as i64 {
        for j in 0..width as i64 {
            let mut weighted_sum = 0.0f32;
            let mut weight_sum = 0.0f32;

            for ki in -half..=half {
                for kj in -half..=half {
                    if let Some(v) = src.get(i + ki, j + kj) {
                        let w = kernel[((ki + half) * (2 * half + 1) + (kj + half)) as usize];
                        weighted_sum += v as f32 * w;
                        weight_sum += w;
                    }
                }
            }

            // Round rather than truncate so a constant image survives
            // the float accumulation bit-exactly.
            out[(i * width as i64 + j) as usize] =
                (weighted_sum / weight_sum).round().clamp(0.0, 255.0) as u8;
        }
    }

    Ok(GrayImage::from_data(width, height, out)?)
}

/// Box blur: mean of the in-bounds neighborhood.
///
/// Border pixels average over fewer samples rather than reading padded
/// values; the divisor is the count of taps actually inside the image.
pub fn box_blur(src: &GrayImage, kernel_size: usize) -> OpsResult<GrayImage> {
    let size = odd_kernel_size(kernel_size)?;
    let (width, height) = src.dimensions();
    debug!(width, height, size, "box blur");

    let half = (size / 2) as i64;
    let mut out = vec![0u8; width as usize * height as usize];

    for i in 0..height as i64 {
        for j in 0..width as i64 {
            let mut sum = 0u32;
            let mut count = 0u32;

            for ki in -half..=half {
                for kj in -half..=half {
                    if let Some(v) = src.get(i + ki, j + kj) {
                        sum += v as u32;
                        count += 1;
                    }
                }
            }

            out[(i * width as i64 + j) as usize] = (sum / count) as u8;
        }
    }

    Ok(GrayImage::from_data(width, height, out)?)
}

/// Median filter: median of the in-bounds neighborhood.
///
/// Removes impulse noise while preserving step edges better than the
/// averaging filters.
pub fn median_blur(src: &GrayImage, kernel_size: usize) -> OpsResult<GrayImage> {
    let size = odd_kernel_size(kernel_size)?;
    let (width, height) = src.dimensions();
    debug!(width, height, size, "median blur");

    let half = (size / 2) as i64;
    let mut out = vec![0u8; width as usize * height as usize];
    let mut window = Vec::with_capacity(size * size);

    for i in 0..height as i64 {
        for j in 0..width as i64 {
            window.clear();
            for ki in -half..=half {
                for kj in -half..=half {
                    if let Some(v) = src.get(i + ki, j + kj) {
                        window.push(v);
                    }
                }
            }

            let mid = window.len() / 2;
            let (_, median, _) = window.select_nth_unstable(mid);
            out[(i * width as i64 + j) as usize] = *median;
        }
    }

    Ok(GrayImage::from_data(width, height, out)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_bad_parameters() {
        let img = GrayImage::filled(4, 4, 10).unwrap();
        assert!(matches!(
            gaussian_blur(&img, 0, 1.0),
            Err(OpsError::InvalidParameter(_))
        ));
        assert!(matches!(
            gaussian_blur(&img, 3, 0.0),
            Err(OpsError::InvalidParameter(_))
        ));
        assert!(matches!(
            box_blur(&img, 0),
            Err(OpsError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_even_kernel_size_is_bumped() {
        let img = GrayImage::from_data(4, 4, (0..16u8).map(|v| v * 16).collect()).unwrap();
        let a = gaussian_blur(&img, 4, 1.0).unwrap();
        let b = gaussian_blur(&img, 5, 1.0).unwrap();
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn test_constant_image_unchanged() {
        let img = GrayImage::filled(8, 8, 99).unwrap();
        assert_eq!(gaussian_blur(&img, 5, 1.5).unwrap().data(), img.data());
        assert_eq!(box_blur(&img, 3).unwrap().data(), img.data());
        assert_eq!(median_blur(&img, 3).unwrap().data(), img.data());
    }

    #[test]
    fn test_box_blur_averages_neighborhood() {
        // Single bright pixel in the center of a 3x3 image.
        let mut img = GrayImage::new(3, 3).unwrap();
        img.set_pixel(1, 1, 90);
        let out = box_blur(&img, 3).unwrap();
        // Center: 90 / 9 = 10. Corners: 90 / 4 = 22.
        assert_eq!(out.pixel(1, 1), 10);
        assert_eq!(out.pixel(0, 0), 22);
    }

    #[test]
    fn test_median_removes_impulse() {
        let mut img = GrayImage::filled(3, 3, 50).unwrap();
        img.set_pixel(1, 1, 255);
        let out = median_blur(&img, 3).unwrap();
        assert_eq!(out.pixel(1, 1), 50);
    }

    #[test]
    fn test_gaussian_smooths_step_monotonically() {
        #[rustfmt::skip]
        let data = vec![
            0, 0, 255, 255,
            0, 0, 255, 255,
            0, 0, 255, 255,
            0, 0, 255, 255,
        ];
        let img = GrayImage::from_data(4, 4, data).unwrap();
        let out = gaussian_blur(&img, 3, 1.0).unwrap();

        // Values stay within the input range and rise across the step.
        for r in 0..4 {
            let row: Vec<u8> = (0..4).map(|c| out.pixel(r, c)).collect();
            assert!(row.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn test_smoother_trait_objects() {
        let img = GrayImage::filled(4, 4, 30).unwrap();
        let smoothers: [&dyn Smoother; 2] = [&GaussianSmoother, &BoxSmoother];
        for s in smoothers {
            let out = s.smooth(&img, 3, 1.0).unwrap();
            assert_eq!(out.dimensions(), img.dimensions());
        }
    }
}
