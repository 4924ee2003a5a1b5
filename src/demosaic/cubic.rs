//! Upsampling using cubic interpolation.
//!
//! Catmull-Rom weights evaluated a quarter pixel off centre:
//!
//! ```text
//!   even_kernel = (1 / 128) * [ -3  29 111  -9 ]     on (i - 2, i - 1, i, i + 1)
//!   odd_kernel  = (1 / 128) * [ -9 111  29  -3 ]     on (i - 1, i, i + 1, i + 2)
//! ```
//!
//! Borders are mirrored.  The negative lobes overshoot at sharp edges,
//! so results are clamped to the sample range.

use crate::demosaic::{Border, Kernel};

pub(crate) const KERNEL: Kernel = Kernel {
    even: &[-3, 29, 111, -9],
    even_start: 2,
    odd: &[-9, 111, 29, -3],
    odd_start: 1,
    denom: 128,
    padding: 2,
    border: Border::Mirror,
};
