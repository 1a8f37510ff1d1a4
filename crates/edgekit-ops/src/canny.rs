//! Canny edge detection pipeline.
//!
//! Five stages in strict order: smoothing (through the [`Smoother`]
//! collaborator), Sobel gradient via the shared correlation primitive,
//! non-maximum suppression, double thresholding, and hysteresis linking.
//! Data flows strictly forward; only the hysteresis stage re-reads its
//! own output, and only within a pass.
//!
//! The intermediate edge map encodes pixels as 0, [`WEAK_EDGE`] or
//! [`STRONG_EDGE`]; the final result contains only `{0, 255}`.
//!
//! # Example
//!
//! ```rust
//! use edgekit_core::GrayImage;
//! use edgekit_ops::{detect_edges_canny, CannyParams};
//!
//! let img = GrayImage::filled(8, 8, 100).unwrap();
//! let params = CannyParams::default();
//! let edges = detect_edges_canny(&img, &params).unwrap();
//! // A uniform image has no edges.
//! assert!(edges.data().iter().all(|&v| v == 0));
//! ```

use edgekit_core::{GrayImage, Padding, ScalarField};
use tracing::debug;

use crate::filter::{GaussianSmoother, Smoother};
use crate::gradient::correlate;
use crate::kernel::GradientOperator;
use crate::{OpsError, OpsResult};

/// Edge map value for a confirmed edge pixel.
pub const STRONG_EDGE: u8 = 255;

/// Edge map value for a candidate pixel awaiting hysteresis linking.
pub const WEAK_EDGE: u8 = 75;

/// Weak-edge promotion policy for the hysteresis stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HysteresisMode {
    /// One row-major pass over the interior.
    ///
    /// Promotions made earlier in the pass are visible to later pixels,
    /// so a weak chain is followed in scan order but a chain running
    /// against it is only promoted one hop. This mirrors the classic
    /// single-pass formulation.
    #[default]
    SinglePass,
    /// Repeat the linking pass until no weak pixel changes state, fully
    /// promoting multi-hop weak chains regardless of orientation.
    Iterate,
}

/// Parameters for [`detect_edges_canny`].
///
/// `low_threshold <= high_threshold` is not enforced: with `low > high`
/// the weak band is empty and only the strong classification applies,
/// mirroring the permissive behavior of the classical formulation.
///
/// # Example
///
/// ```rust
/// use edgekit_core::Padding;
/// use edgekit_ops::{CannyParams, HysteresisMode};
///
/// let params = CannyParams::default()
///     .with_thresholds(30.0, 90.0)
///     .with_smoothing(5, 1.4)
///     .with_padding(Padding::Reflect)
///     .with_hysteresis(HysteresisMode::Iterate);
/// assert_eq!(params.low_threshold, 30.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CannyParams {
    /// Lower magnitude threshold; below it a pixel is never an edge.
    pub low_threshold: f32,
    /// Upper magnitude threshold; at or above it a pixel is a strong edge.
    pub high_threshold: f32,
    /// Gaussian sigma for the smoothing stage.
    pub sigma: f32,
    /// Kernel size for the smoothing stage.
    pub kernel_size: usize,
    /// Border policy for the gradient stage.
    pub padding: Padding,
    /// Weak-edge promotion policy.
    pub hysteresis: HysteresisMode,
}

impl Default for CannyParams {
    fn default() -> Self {
        Self {
            low_threshold: 50.0,
            high_threshold: 150.0,
            sigma: 1.0,
            kernel_size: 5,
            padding: Padding::Replicate,
            hysteresis: HysteresisMode::SinglePass,
        }
    }
}

impl CannyParams {
    /// Sets the low and high magnitude thresholds.
    pub fn with_thresholds(mut self, low: f32, high: f32) -> Self {
        self.low_threshold = low;
        self.high_threshold = high;
        self
    }

    /// Sets the smoothing kernel size and sigma.
    pub fn with_smoothing(mut self, kernel_size: usize, sigma: f32) -> Self {
        self.kernel_size = kernel_size;
        self.sigma = sigma;
        self
    }

    /// Sets the border policy for the gradient stage.
    pub fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the weak-edge promotion policy.
    pub fn with_hysteresis(mut self, hysteresis: HysteresisMode) -> Self {
        self.hysteresis = hysteresis;
        self
    }
}

/// Runs the Canny pipeline with the stock Gaussian smoother.
///
/// See [`detect_edges_canny_with`] to supply a different smoothing
/// collaborator.
pub fn detect_edges_canny(src: &GrayImage, params: &CannyParams) -> OpsResult<GrayImage> {
    detect_edges_canny_with(src, params, &GaussianSmoother)
}

/// Runs the Canny pipeline with a caller-supplied smoother.
///
/// Stage order: smooth, Sobel gradient under `params.padding`,
/// non-maximum suppression, double thresholding, hysteresis linking.
/// The output contains only `{0, 255}` and has the input's dimensions.
pub fn detect_edges_canny_with<S: Smoother + ?Sized>(
    src: &GrayImage,
    params: &CannyParams,
    smoother: &S,
) -> OpsResult<GrayImage> {
    let (width, height) = src.dimensions();
    debug!(
        width,
        height,
        low = params.low_threshold,
        high = params.high_threshold,
        sigma = params.sigma,
        kernel_size = params.kernel_size,
        "canny edge detection"
    );

    let smoothed = smoother.smooth(src, params.kernel_size, params.sigma)?;
    if smoothed.dimensions() != src.dimensions() {
        return Err(OpsError::InvalidInput(format!(
            "smoother changed dimensions: {:?} -> {:?}",
            src.dimensions(),
            smoothed.dimensions()
        )));
    }

    let grad = correlate(&smoothed, GradientOperator::Sobel, params.padding)?;
    let magnitude = grad.magnitude();
    let direction = grad.direction_degrees();

    let suppressed = non_max_suppression(&magnitude, &direction)?;
    let map = double_threshold(&suppressed, params.low_threshold, params.high_threshold);

    Ok(link_edges(&map, params.hysteresis))
}

/// Non-maximum suppression: thins the magnitude field to local maxima
/// along the gradient direction.
///
/// The direction is normalized into `[0, 180)` and bucketed into four
/// sectors; the pixel survives only if its magnitude is `>=` both
/// neighbors along the bucketed direction (ties keep the pixel). Border
/// pixels of width 1 are fixed at 0; this pass never consults padding.
///
/// The output never exceeds `magnitude` pointwise.
///
/// # Errors
///
/// [`OpsError::InvalidInput`] if the field dimensions differ.
pub fn non_max_suppression(
    magnitude: &ScalarField,
    direction: &ScalarField,
) -> OpsResult<ScalarField> {
    if magnitude.dimensions() != direction.dimensions() {
        return Err(OpsError::InvalidInput(format!(
            "magnitude {:?} and direction {:?} dimensions differ",
            magnitude.dimensions(),
            direction.dimensions()
        )));
    }

    let (width, height) = magnitude.dimensions();
    let mut out = ScalarField::zeros(width, height)?;

    for i in 1..height.saturating_sub(1) {
        for j in 1..width.saturating_sub(1) {
            // Normalize into [0, 180); opposite directions compare the
            // same neighbor pair.
            let angle = (direction.get(i, j) + 180.0).rem_euclid(180.0);
            let m = magnitude.get(i, j);

            let (n1, n2) = if !(22.5..157.5).contains(&angle) {
                // Horizontal gradient: compare left/right.
                (magnitude.get(i, j + 1), magnitude.get(i, j - 1))
            } else if angle < 67.5 {
                (magnitude.get(i + 1, j - 1), magnitude.get(i - 1, j + 1))
            } else if angle < 112.5 {
                // Vertical gradient: compare up/down.
                (magnitude.get(i + 1, j), magnitude.get(i - 1, j))
            } else {
                (magnitude.get(i - 1, j - 1), magnitude.get(i + 1, j + 1))
            };

            if m >= n1 && m >= n2 {
                out.set(i, j, m);
            }
        }
    }

    Ok(out)
}

/// Double thresholding: classifies suppressed magnitudes into
/// `{0, WEAK_EDGE, STRONG_EDGE}`.
///
/// `value >= high` is strong, `low <= value < high` is weak, the rest is
/// 0. `low <= high` is not enforced; with `low > high` the weak class is
/// simply empty.
pub fn double_threshold(suppressed: &ScalarField, low: f32, high: f32) -> GrayImage {
    let (width, height) = suppressed.dimensions();
    let data = suppressed
        .data()
        .iter()
        .map(|&v| {
            if v >= high {
                STRONG_EDGE
            } else if v >= low {
                WEAK_EDGE
            } else {
                0
            }
        })
        .collect();

    GrayImage::from_data(width, height, data)
        .unwrap_or_else(|_| unreachable!("field dimensions are valid"))
}

/// Hysteresis linking: resolves [`WEAK_EDGE`] pixels against their
/// 8-connected neighborhood.
///
/// A weak pixel adjacent to at least one [`STRONG_EDGE`] pixel becomes
/// strong; every other weak pixel becomes 0. The pass runs in place in
/// row-major order, so promotions are visible to pixels scanned later
/// (see [`HysteresisMode`] for the multi-hop consequences). The output
/// contains only `{0, 255}` plus any values the input carried that were
/// neither weak nor strong.
///
/// Idempotent on maps that contain no weak pixels.
pub fn link_edges(map: &GrayImage, mode: HysteresisMode) -> GrayImage {
    let (width, height) = map.dimensions();
    let w = width as usize;
    let mut data = map.data().to_vec();

    let has_strong_neighbor = |data: &[u8], i: usize, j: usize| -> bool {
        for di in -1..=1i64 {
            for dj in -1..=1i64 {
                let r = i as i64 + di;
                let c = j as i64 + dj;
                if r >= 0 && r < height as i64 && c >= 0 && c < width as i64 {
                    if data[r as usize * w + c as usize] == STRONG_EDGE {
                        return true;
                    }
                }
            }
        }
        false
    };

    match mode {
        HysteresisMode::SinglePass => {
            for i in 1..(height as usize).saturating_sub(1) {
                for j in 1..w.saturating_sub(1) {
                    if data[i * w + j] == WEAK_EDGE {
                        data[i * w + j] = if has_strong_neighbor(&data, i, j) {
                            STRONG_EDGE
                        } else {
                            0
                        };
                    }
                }
            }
        }
        HysteresisMode::Iterate => {
            // Promote-only passes until a fixed point, then drop what is
            // still weak.
            loop {
                let mut changed = false;
                for i in 1..(height as usize).saturating_sub(1) {
                    for j in 1..w.saturating_sub(1) {
                        if data[i * w + j] == WEAK_EDGE && has_strong_neighbor(&data, i, j) {
                            data[i * w + j] = STRONG_EDGE;
                            changed = true;
                        }
                    }
                }
                if !changed {
                    break;
                }
            }
        }
    }

    // Weak pixels that survived the interior passes (including the
    // untouched border band) are not edges.
    for v in &mut data {
        if *v == WEAK_EDGE {
            *v = 0;
        }
    }

    GrayImage::from_data(width, height, data)
        .unwrap_or_else(|_| unreachable!("map dimensions are valid"))
}
