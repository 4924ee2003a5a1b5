//! This crate reconstructs colour or gray images from raw Bayer frames.
//!
//! A raw frame is split into its four colour sub-lattices, the two green
//! lattices are averaged, and the quarter-resolution RGB plane is
//! upsampled back to full resolution:
//!
//! ```text
//!   raw [H, W] -> (G1, G2, R, B) [H/2, W/2] -> RGB [H/2, W/2, 3] -> RGB [H, W, 3] -> (gray [H, W])
//! ```
//!
//! Samples are `u8` or `u16`; the output always has the sample width of
//! the input.  A `[N, H, W]` stack is demosaiced frame by frame.
//!
//! # Examples
//!
//! ```
//! use debayer::{demosaic, Raster, CFA};
//!
//! let raw = Raster::new(&[2, 2], vec![23u8, 128, 202, 27]).unwrap();
//! let gray = demosaic(&raw, CFA::GRBG, 1, false).unwrap();
//! assert_eq!(gray.as_slice(), &[76, 76, 76, 76]);
//! ```

pub use bayer::{
    read_exact_u16be, read_exact_u16le, read_exact_u8, read_frame, read_frames, BayerDepth,
    CfaOffsets, CFA,
};
pub use batch::{demosaic, demosaic_frame, demosaic_with};
pub use demosaic::{upsample, Demosaic};
pub use errcode::BayerError;
pub use errcode::BayerResult;
pub use gray::{luminance, rgb2gray, WEIGHTS};
pub use green::{merge_green, GreenRounding};
pub use options::{DemosaicOptions, DemosaicOptionsBuilder};
pub use raster::{DynRaster, Raster, RasterDepth, Sample};
pub use split::{split_channels, Channels};

mod batch;
mod bayer;
mod border_mirror;
mod border_replicate;
mod demosaic;
mod errcode;
mod gray;
mod green;
mod options;
mod raster;
mod split;
