//! # edgekit-ops
//!
//! Spatial-domain edge detection for grayscale rasters.
//!
//! This crate implements the edge-detection engine of the edgekit
//! workspace on top of the buffer types from [`edgekit_core`].
//!
//! # Modules
//!
//! - [`kernel`] - Fixed gradient operator kernels (Sobel, Prewitt, Roberts)
//! - [`gradient`] - The shared kernel-correlation primitive
//! - [`detect`] - Single-stage gradient edge detector
//! - [`canny`] - The full Canny pipeline
//! - [`filter`] - Low-pass smoothing collaborators
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
//! assert_eq!(edges.len(), img.len());
//! ```
//!
//! # Error Handling
//!
//! All parameter and input validation happens before any pixel is
//! computed; an operation returns either a complete output buffer or an
//! [`OpsError`], never a partial result. No operation mutates its input.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod error;
pub mod canny;
pub mod detect;
pub mod filter;
pub mod gradient;
pub mod kernel;

pub use canny::{
    detect_edges_canny, detect_edges_canny_with, double_threshold, link_edges,
    non_max_suppression, CannyParams, HysteresisMode, STRONG_EDGE, WEAK_EDGE,
};
pub use detect::{detect_edges_gradient, EdgeRender};
pub use error::{OpsError, OpsResult};
pub use filter::{box_blur, gaussian_blur, median_blur, BoxSmoother, GaussianSmoother, Smoother};
pub use gradient::{correlate, Gradient};
pub use kernel::GradientOperator;
