//! Upsampling using nearest neighbour interpolation.
//!
//! Every source pixel becomes a 2x2 block of identical pixels.

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::demosaic::check_plane;
use crate::raster::Sample;
use crate::{BayerResult, Raster};

pub fn run<T: Sample>(src: &Raster<T>) -> BayerResult<Raster<T>> {
    let (h, w) = check_plane(src)?;
    let mut dst: Raster<T> = Raster::zeros(&[2 * h, 2 * w, 3]);
    let stride = 2 * w * 3;

    let apply_kernel_row = |(y, row): (usize, &mut [T])| {
        let curr = src.row(y / 2);
        for (px, out) in curr.chunks_exact(3).zip(row.chunks_exact_mut(6)) {
            out[..3].copy_from_slice(px);
            out[3..].copy_from_slice(px);
        }
    };

    #[cfg(feature = "rayon")]
    dst.as_mut_slice()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(apply_kernel_row);

    #[cfg(not(feature = "rayon"))]
    dst.as_mut_slice()
        .chunks_mut(stride)
        .enumerate()
        .for_each(apply_kernel_row);

    Ok(dst)
}

#[cfg(test)]
mod tests {
    use super::run;
    use crate::Raster;

    #[test]
    fn test_even() {
        let src: [u8; 12] = [
            229, 67, 95,   146,232, 51,
            229,241,169,   161, 15, 52 ];

        let expected = [
            229, 67, 95,  229, 67, 95,  146,232, 51,  146,232, 51,
            229, 67, 95,  229, 67, 95,  146,232, 51,  146,232, 51,
            229,241,169,  229,241,169,  161, 15, 52,  161, 15, 52,
            229,241,169,  229,241,169,  161, 15, 52,  161, 15, 52 ];

        let dst = run(&Raster::new(&[2, 2, 3], src.to_vec()).unwrap()).unwrap();
        assert_eq!(dst.shape(), &[4, 4, 3]);
        assert_eq!(dst.as_slice(), &expected[..]);
    }

    #[test]
    fn test_blocks_u16() {
        let src: Vec<u16> = (0..5 * 3 * 3).map(|v| v * 1000).collect();
        let plane = Raster::new(&[5, 3, 3], src).unwrap();
        let dst = run(&plane).unwrap();

        for y in 0..10 {
            for x in 0..6 {
                for c in 0..3 {
                    assert_eq!(dst.get(&[y, x, c]), plane.get(&[y / 2, x / 2, c]));
                }
            }
        }
    }
}
