//! Upsampling using quadratic interpolation.
//!
//! Each output sample is the 3-point Lagrange polynomial through the
//! nearest source sample and its two neighbours, evaluated a quarter
//! pixel off centre.
//!
//! ```text
//!   even_kernel = (1 / 32) * [  5 30 -3 ]     on (i - 1, i, i + 1)
//!   odd_kernel  = (1 / 32) * [ -3 30  5 ]     on (i - 1, i, i + 1)
//! ```
//!
//! Borders are mirrored.  Results are clamped to the sample range.

use crate::demosaic::{Border, Kernel};

pub(crate) const KERNEL: Kernel = Kernel {
    even: &[5, 30, -3],
    even_start: 1,
    odd: &[-3, 30, 5],
    odd_start: 1,
    denom: 32,
    padding: 1,
    border: Border::Mirror,
};
