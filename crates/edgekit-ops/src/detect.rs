//! Gradient-based edge detector.
//!
//! Single-stage edge detection: correlate a gradient operator with the
//! image, then render the magnitude field either as a binary mask or a
//! normalized 0-255 map.
//!
//! # Example
//!
//! ```rust
//! use edgekit_core::{GrayImage, Padding};
//! use edgekit_ops::{detect_edges_gradient, EdgeRender, GradientOperator};
//!
//! let img = GrayImage::from_data(4, 4, vec![
//!     0, 0, 255, 255,
//!     0, 0, 255, 255,
//!     0, 0, 255, 255,
//!     0, 0, 255, 255,
//! ]).unwrap();
//!
//! let edges = detect_edges_gradient(
//!     &img,
//!     GradientOperator::Sobel,
//!     EdgeRender::Binary { threshold: 100.0 },
//!     Padding::Zero,
//! ).unwrap();
//! assert_eq!(edges.pixel(1, 1), 255); // on the step
//! assert_eq!(edges.pixel(1, 0), 0);   // flat region
//! ```

use edgekit_core::{GrayImage, Padding};
use tracing::debug;

use crate::gradient::correlate;
use crate::kernel::GradientOperator;
use crate::OpsResult;

/// How the magnitude field is rendered into the output image.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EdgeRender {
    /// Linear rescale of the observed magnitude range into `[0, 255]`.
    ///
    /// A near-constant magnitude field renders as all zeros (see
    /// [`edgekit_core::FLAT_RANGE_EPS`]).
    Normalized,
    /// Binary mask: `magnitude >= threshold` maps to 255, else 0.
    Binary {
        /// Magnitude cutoff, compared inclusively.
        threshold: f32,
    },
}

/// Detects edges with a gradient operator.
///
/// Computes the gradient magnitude via [`correlate`] under the requested
/// `padding`, then renders it per `render`. The output has the input's
/// dimensions; the input is not modified.
///
/// Raising a binary threshold never turns a 0 pixel into 255: the mask is
/// monotonic in the threshold.
pub fn detect_edges_gradient(
    src: &GrayImage,
    op: GradientOperator,
    render: EdgeRender,
    padding: Padding,
) -> OpsResult<GrayImage> {
    let (width, height) = src.dimensions();
    debug!(width, height, ?op, ?render, ?padding, "gradient edge detection");

    let magnitude = correlate(src, op, padding)?.magnitude();

    let out = match render {
        EdgeRender::Binary { threshold } => {
            let data = magnitude
                .data()
                .iter()
                .map(|&m| if m >= threshold { 255 } else { 0 })
                .collect();
            GrayImage::from_data(width, height, data)?
        }
        EdgeRender::Normalized => magnitude.to_gray_normalized(),
    };

    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vertical_step_4x4() -> GrayImage {
        #[rustfmt::skip]
        let data = vec![
            0, 0, 255, 255,
            0, 0, 255, 255,
            0, 0, 255, 255,
            0, 0, 255, 255,
        ];
        GrayImage::from_data(4, 4, data).unwrap()
    }

    #[test]
    fn test_binary_sobel_on_vertical_step() {
        let img = vertical_step_4x4();
        let edges = detect_edges_gradient(
            &img,
            GradientOperator::Sobel,
            EdgeRender::Binary { threshold: 100.0 },
            Padding::Zero,
        )
        .unwrap();

        assert_eq!(edges.dimensions(), (4, 4));
        // Strong response along the boundary columns, none in the flat
        // interiors of either plateau.
        for r in 0..4 {
            assert_eq!(edges.pixel(r, 1), 255, "row {r} boundary column");
            assert_eq!(edges.pixel(r, 2), 255, "row {r} boundary column");
            assert_eq!(edges.pixel(r, 0), 0, "row {r} flat column");
        }
    }

    #[test]
    fn test_binary_monotonic_in_threshold() {
        let img = vertical_step_4x4();
        let run = |t: f32| {
            detect_edges_gradient(
                &img,
                GradientOperator::Sobel,
                EdgeRender::Binary { threshold: t },
                Padding::Zero,
            )
            .unwrap()
        };

        let lo = run(50.0);
        let hi = run(400.0);
        for (l, h) in lo.data().iter().zip(hi.data()) {
            // Raising the threshold can only clear pixels, never set them.
            assert!(h <= l);
        }
    }

    #[test]
    fn test_uniform_image_normalized_is_zero() {
        let img = GrayImage::filled(6, 6, 77).unwrap();
        let edges = detect_edges_gradient(
            &img,
            GradientOperator::Prewitt,
            EdgeRender::Normalized,
            Padding::Replicate,
        )
        .unwrap();
        assert!(edges.data().iter().all(|&v| v == 0));
    }

    #[test]
    fn test_normalized_spans_range_on_step() {
        let img = vertical_step_4x4();
        let edges = detect_edges_gradient(
            &img,
            GradientOperator::Sobel,
            EdgeRender::Normalized,
            Padding::Replicate,
        )
        .unwrap();
        let max = edges.data().iter().copied().max().unwrap();
        let min = edges.data().iter().copied().min().unwrap();
        assert_eq!(max, 255);
        assert_eq!(min, 0);
    }

    #[test]
    fn test_roberts_binary_output_dimensions() {
        let img = vertical_step_4x4();
        let edges = detect_edges_gradient(
            &img,
            GradientOperator::Roberts,
            EdgeRender::Binary { threshold: 50.0 },
            Padding::Reflect,
        )
        .unwrap();
        assert_eq!(edges.len(), img.len());
    }
}
