//! Gradient operator kernels.
//!
//! The derivative estimators used by the edge detectors, as fixed named
//! constants. The exact weights are part of the output contract; they are
//! never synthesized at runtime.
//!
//! Sobel and Prewitt are 3x3 kernels centered on the output pixel.
//! Roberts cross is the one 2x2 operator: it has no true center, so its
//! result is attributed to the top-left sample of the 2x2 window.

/// Sobel horizontal derivative kernel.
pub const SOBEL_X: [[i32; 3]; 3] = [
    [-1, 0, 1],
    [-2, 0, 2],
    [-1, 0, 1],
];

/// Sobel vertical derivative kernel.
pub const SOBEL_Y: [[i32; 3]; 3] = [
    [-1, -2, -1],
    [0, 0, 0],
    [1, 2, 1],
];

/// Prewitt horizontal derivative kernel.
pub const PREWITT_X: [[i32; 3]; 3] = [
    [-1, 0, 1],
    [-1, 0, 1],
    [-1, 0, 1],
];

/// Prewitt vertical derivative kernel.
pub const PREWITT_Y: [[i32; 3]; 3] = [
    [-1, -1, -1],
    [0, 0, 0],
    [1, 1, 1],
];

/// Roberts cross kernel, first diagonal.
pub const ROBERTS_X: [[i32; 2]; 2] = [
    [1, 0],
    [0, -1],
];

/// Roberts cross kernel, second diagonal.
pub const ROBERTS_Y: [[i32; 2]; 2] = [
    [0, 1],
    [-1, 0],
];

/// Selector for a gradient kernel pair (Gx, Gy).
///
/// A tagged variant rather than a raw kernel reference keeps the kernel
/// shape (3x3 centered vs 2x2 anchored) attached to the choice, so the
/// correlation loop cannot pair a kernel with the wrong anchoring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientOperator {
    /// Sobel 3x3 (center-weighted derivative estimate).
    #[default]
    Sobel,
    /// Prewitt 3x3 (uniform derivative estimate).
    Prewitt,
    /// Roberts cross 2x2 (diagonal differences).
    Roberts,
}

impl GradientOperator {
    /// Pad band required around the image for this operator.
    ///
    /// One pixel for all supported kernels: the 3x3 kernels reach one
    /// step outward from the center, and Roberts reaches one step down
    /// and right from its anchor.
    #[inline]
    pub const fn pad_size(self) -> u32 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derivative_kernels_sum_to_zero() {
        // A derivative estimator must not respond to a constant signal.
        let sum3 = |k: &[[i32; 3]; 3]| k.iter().flatten().sum::<i32>();
        let sum2 = |k: &[[i32; 2]; 2]| k.iter().flatten().sum::<i32>();

        assert_eq!(sum3(&SOBEL_X), 0);
        assert_eq!(sum3(&SOBEL_Y), 0);
        assert_eq!(sum3(&PREWITT_X), 0);
        assert_eq!(sum3(&PREWITT_Y), 0);
        assert_eq!(sum2(&ROBERTS_X), 0);
        assert_eq!(sum2(&ROBERTS_Y), 0);
    }

    #[test]
    fn test_pad_size() {
        assert_eq!(GradientOperator::Sobel.pad_size(), 1);
        assert_eq!(GradientOperator::Prewitt.pad_size(), 1);
        assert_eq!(GradientOperator::Roberts.pad_size(), 1);
    }
}
