//! Luminance reduction of colour images to a single channel.
//!
//! ```text
//!   Y = 0.299 R + 0.587 G + 0.114 B
//! ```
//!
//! An alpha channel, if present, never contributes to the result.

use log::info;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::raster::Sample;
use crate::{BayerError, BayerResult, Raster};

/// Luminance weights for red, green and blue.
pub const WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

/// How the axes of an image are to be read.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ColorLayout {
    /// `[H, W]`: nothing to reduce.
    Gray,
    /// `[H, W, C]` with `C` of 3 or 4.
    Single { channels: usize },
    /// `[N, H, W, C]` with `C` of 3 or 4.
    Batch { frames: usize, channels: usize },
}

fn classify(shape: &[usize]) -> BayerResult<ColorLayout> {
    match *shape {
        [_, _] => Ok(ColorLayout::Gray),
        [_, _, c @ (3 | 4)] => Ok(ColorLayout::Single { channels: c }),
        [n, _, _, c @ (3 | 4)] => Ok(ColorLayout::Batch {
            frames: n,
            channels: c,
        }),
        _ => Err(BayerError::WrongShape(shape.to_vec())),
    }
}

/// Luminance of one pixel, rounded to nearest with ties to even.
///
/// Only the first three samples are read.
///
/// # Panics
///
/// Panics if `px` holds fewer than three samples.
#[inline]
pub fn luminance<T: Sample>(px: &[T]) -> T {
    assert!(px.len() >= 3, "pixel needs red, green and blue samples");

    let y = px[0].to_u32() as f64 * WEIGHTS[0]
        + px[1].to_u32() as f64 * WEIGHTS[1]
        + px[2].to_u32() as f64 * WEIGHTS[2];
    T::from_u32(y.round_ties_even().clamp(0.0, T::MAX as f64) as u32)
}

fn reduce_frame<T: Sample>(src: &[T], channels: usize, dst: &mut [T]) {
    for (px, e) in src.chunks_exact(channels).zip(dst.iter_mut()) {
        *e = luminance(px);
    }
}

/// Reduce an RGB or RGBA image, or a batch of them, to gray.
///
/// | input shape       | output shape |
/// |-------------------|--------------|
/// | `[H, W]`          | unchanged    |
/// | `[H, W, 3 or 4]`  | `[H, W]`     |
/// | `[N, H, W, 3 or 4]` | `[N, H, W]` |
///
/// Any other shape is an error.
///
/// # Examples
///
/// ```
/// use debayer::{rgb2gray, Raster};
///
/// let rgb = Raster::new(&[1, 1, 3], vec![128u8, 25, 202]).unwrap();
/// assert_eq!(rgb2gray(&rgb).unwrap().as_slice(), &[76]);
/// ```
pub fn rgb2gray<T: Sample>(img: &Raster<T>) -> BayerResult<Raster<T>> {
    let layout = classify(img.shape())?;
    if img.is_empty() {
        return Err(BayerError::NoInput);
    }

    let shape = img.shape();
    match layout {
        ColorLayout::Gray => {
            info!("assuming it is already gray since ndim=2");
            Ok(img.clone())
        }
        ColorLayout::Single { channels } => {
            if channels == 4 {
                info!("assuming this is an RGBA image, discarding alpha channel");
            }
            let mut dst: Raster<T> = Raster::zeros(&shape[..2]);
            reduce_frame(img.as_slice(), channels, dst.as_mut_slice());
            Ok(dst)
        }
        ColorLayout::Batch { frames, channels } => {
            info!("iterating over {} frames", frames);
            let mut dst: Raster<T> = Raster::zeros(&shape[..3]);
            let src_stride = img.stride();
            let dst_stride = dst.stride();

            let reduce = |(src, out): (&[T], &mut [T])| reduce_frame(src, channels, out);

            #[cfg(feature = "rayon")]
            img.as_slice()
                .par_chunks(src_stride)
                .zip(dst.as_mut_slice().par_chunks_mut(dst_stride))
                .for_each(reduce);

            #[cfg(not(feature = "rayon"))]
            img.as_slice()
                .chunks(src_stride)
                .zip(dst.as_mut_slice().chunks_mut(dst_stride))
                .for_each(reduce);

            Ok(dst)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{luminance, rgb2gray};
    use crate::{BayerError, Raster};

    #[test]
    fn test_uniform() {
        let rgb = Raster::new(&[2, 2, 3], vec![76u8; 12]).unwrap();
        let gray = rgb2gray(&rgb).unwrap();
        assert_eq!(gray.shape(), &[2, 2]);
        assert_eq!(gray.as_slice(), &[76; 4]);
    }

    #[test]
    fn test_saturated() {
        assert_eq!(luminance(&[255u8, 255, 255]), 255);
        assert_eq!(luminance(&[65535u16, 65535, 65535]), 65535);
        assert_eq!(luminance(&[0u16, 0, 0]), 0);
    }

    #[test]
    #[should_panic]
    fn test_short_pixel() {
        luminance(&[1u8, 2]);
    }

    #[test]
    fn test_alpha_discarded() {
        let rgba: Vec<u8> = [[128, 25, 202, 255], [10, 20, 30, 0]].concat();
        let rgb: Vec<u8> = [[128, 25, 202], [10, 20, 30]].concat();

        let a = rgb2gray(&Raster::new(&[1, 2, 4], rgba).unwrap()).unwrap();
        let b = rgb2gray(&Raster::new(&[1, 2, 3], rgb).unwrap()).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.as_slice(), &[76, 18]);
    }

    #[test]
    fn test_rgba_batch() {
        let rgba = Raster::new(&[1, 2, 2, 4], [76u8, 76, 76, 255].repeat(4)).unwrap();
        let gray = rgb2gray(&rgba).unwrap();
        assert_eq!(gray.shape(), &[1, 2, 2]);
        assert_eq!(gray.as_slice(), &[76; 4]);
    }

    #[test]
    fn test_batch_order() {
        let frames: Vec<u16> = [[1000u16, 1000, 1000], [2000, 2000, 2000], [3000, 3000, 3000]].concat();
        let gray = rgb2gray(&Raster::new(&[3, 1, 1, 3], frames).unwrap()).unwrap();
        assert_eq!(gray.shape(), &[3, 1, 1]);
        assert_eq!(gray.as_slice(), &[1000, 2000, 3000]);
    }

    #[test]
    fn test_already_gray() {
        let img = Raster::new(&[2, 2], vec![1u8, 2, 3, 4]).unwrap();
        assert_eq!(rgb2gray(&img).unwrap(), img);
    }

    #[test]
    fn test_unsupported_shapes() {
        for shape in [&[4][..], &[2, 2, 2], &[1, 2, 2, 5], &[1, 1, 2, 2, 3]] {
            let len = shape.iter().product();
            let img = Raster::new(shape, vec![0u8; len]).unwrap();
            assert!(matches!(rgb2gray(&img), Err(BayerError::WrongShape(_))), "{:?}", shape);
        }
    }
}
