//! Upsampling using linear interpolation.
//!
//! Output pixels sit a quarter pixel either side of their source pixel,
//! so each axis blends the two nearest source samples 3:1.
//!
//! ```text
//!   even_kernel = (1 / 4) * [ 1 3 ]     on (i - 1, i)
//!   odd_kernel  = (1 / 4) * [ 3 1 ]     on (i, i + 1)
//! ```
//!
//! Borders replicate the edge pixel.

use crate::demosaic::{Border, Kernel};

pub(crate) const KERNEL: Kernel = Kernel {
    even: &[1, 3],
    even_start: 1,
    odd: &[3, 1],
    odd_start: 0,
    denom: 4,
    padding: 1,
    border: Border::Replicate,
};
