//! Collection of 2x upsampling algorithms.
//!
//! Every algorithm takes the quarter-resolution `[h, w, 3]` plane built
//! from the CFA sub-lattices and produces the `[2h, 2w, 3]` plane.
//!
//! Nearest neighbour is exact.  Linear, quadratic and cubic are fixed
//! point interpolating kernels aligned on pixel centres; they do not
//! reproduce corner-aligned B-spline zooms (such as `scipy.ndimage.zoom`)
//! bit for bit, and their output near edges and in gradients differs
//! from such resamplers.

use log::warn;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::border_mirror::BorderMirror;
use crate::border_replicate::BorderReplicate;
use crate::raster::Sample;
use crate::{BayerError, BayerResult, Raster};

pub mod cubic;
pub mod linear;
pub mod nearestneighbour;
pub mod quadratic;

/// The interpolation algorithm used to fill in the missing data.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Demosaic {
    #[default]
    NearestNeighbour,
    Linear,
    Quadratic,
    Cubic,
}

impl Demosaic {
    /// Select an algorithm by interpolation order plus one: 1 is nearest
    /// neighbour, 2 linear, 3 quadratic and 4 cubic.
    ///
    /// Any other selector falls back to nearest neighbour with a warning.
    pub fn from_alg(alg: i32) -> Self {
        match alg {
            1 => Demosaic::NearestNeighbour,
            2 => Demosaic::Linear,
            3 => Demosaic::Quadratic,
            4 => Demosaic::Cubic,
            _ => {
                warn!("unknown method {} falling back to nearest neighbour alg=1", alg);
                Demosaic::NearestNeighbour
            }
        }
    }

    pub fn alg(self) -> i32 {
        match self {
            Demosaic::NearestNeighbour => 1,
            Demosaic::Linear => 2,
            Demosaic::Quadratic => 3,
            Demosaic::Cubic => 4,
        }
    }
}

/// Upsample a `[h, w, 3]` plane to `[2h, 2w, 3]`.
pub fn upsample<T: Sample>(src: &Raster<T>, alg: Demosaic) -> BayerResult<Raster<T>> {
    match alg {
        Demosaic::NearestNeighbour => nearestneighbour::run(src),
        Demosaic::Linear => run_kernel(src, &linear::KERNEL),
        Demosaic::Quadratic => run_kernel(src, &quadratic::KERNEL),
        Demosaic::Cubic => run_kernel(src, &cubic::KERNEL),
    }
}

/// Check that the source is a non-empty 3-channel plane, returning `(h, w)`.
fn check_plane<T: Sample>(src: &Raster<T>) -> BayerResult<(usize, usize)> {
    let shape = src.shape();
    if shape.len() != 3 || shape[2] != 3 {
        return Err(BayerError::WrongShape(shape.to_vec()));
    }
    if src.is_empty() {
        return Err(BayerError::NoInput);
    }
    Ok((shape[0], shape[1]))
}

/// Border policy of a padded line.
pub trait BorderFill: Sync {
    /// Map a source index, possibly outside `0..n`, onto `0..n`.
    fn index(&self, i: isize) -> usize;

    /// Fill the left and right borders of a padded line whose data
    /// region is already in place.
    fn fill_row(&self, dst: &mut [i64]);
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Border {
    Replicate,
    Mirror,
}

impl Border {
    fn reader(self, width: usize, padding: usize) -> Box<dyn BorderFill> {
        match self {
            Border::Replicate => Box::new(BorderReplicate::new(width, padding)),
            Border::Mirror => Box::new(BorderMirror::new(width, padding)),
        }
    }
}

/// Separable 2x interpolation kernel.
///
/// Output sample `2i` is the weighted sum of the source samples starting
/// at `i - even_start`; output sample `2i + 1` starts at `i - odd_start`.
/// The same taps are applied along rows, then along columns, and the
/// result is divided by `denom * denom` once.
pub(crate) struct Kernel {
    pub even: &'static [i64],
    pub even_start: usize,
    pub odd: &'static [i64],
    pub odd_start: usize,
    pub denom: i64,
    pub padding: usize,
    pub border: Border,
}

impl Kernel {
    #[inline]
    fn taps(&self, out: usize) -> (&'static [i64], usize) {
        if out % 2 == 0 {
            (self.even, self.even_start)
        } else {
            (self.odd, self.odd_start)
        }
    }
}

fn run_kernel<T: Sample>(src: &Raster<T>, k: &Kernel) -> BayerResult<Raster<T>> {
    let (h, w) = check_plane(src)?;
    let pad = k.padding;
    let stride = 2 * w * 3;

    // Horizontal pass into a vertically padded intermediate.
    let mut data = vec![0i64; stride * (h + 2 * pad)];
    {
        let rdr = k.border.reader(w, pad);
        let horizontal = |(y, row): (usize, &mut [i64])| {
            let src_row = src.row(y);
            let mut line = vec![0i64; w + 2 * pad];

            for c in 0..3 {
                for x in 0..w {
                    line[pad + x] = src_row[3 * x + c].to_u32() as i64;
                }
                rdr.fill_row(&mut line);

                for out in 0..(2 * w) {
                    let (taps, start) = k.taps(out);
                    let j = pad + out / 2 - start;
                    row[3 * out + c] = apply_taps(taps, |t| line[j + t]);
                }
            }
        };

        #[cfg(feature = "rayon")]
        data.par_chunks_mut(stride)
            .skip(pad)
            .take(h)
            .enumerate()
            .for_each(horizontal);

        #[cfg(not(feature = "rayon"))]
        data.chunks_mut(stride)
            .skip(pad)
            .take(h)
            .enumerate()
            .for_each(horizontal);

        let rdr = k.border.reader(h, pad);
        for yy in (0..pad).chain((pad + h)..(h + 2 * pad)) {
            let from = pad + rdr.index(yy as isize - pad as isize);
            data.copy_within((stride * from)..(stride * (from + 1)), stride * yy);
        }
    }

    // Vertical pass, rounding once at the end.
    let norm = k.denom * k.denom;
    let mut dst: Raster<T> = Raster::zeros(&[2 * h, 2 * w, 3]);
    let vertical = |(out, row): (usize, &mut [T])| {
        let (taps, start) = k.taps(out);
        let first = pad + out / 2 - start;

        for (col, e) in row.iter_mut().enumerate() {
            let acc = apply_taps(taps, |t| data[stride * (first + t) + col]);
            *e = narrow(acc, norm);
        }
    };

    #[cfg(feature = "rayon")]
    dst.as_mut_slice()
        .par_chunks_mut(stride)
        .enumerate()
        .for_each(vertical);

    #[cfg(not(feature = "rayon"))]
    dst.as_mut_slice()
        .chunks_mut(stride)
        .enumerate()
        .for_each(vertical);

    Ok(dst)
}

#[inline]
fn apply_taps<F: Fn(usize) -> i64>(taps: &[i64], sample: F) -> i64 {
    taps.iter().enumerate().map(|(t, &wt)| wt * sample(t)).sum()
}

/// Divide by `norm` rounding half up, then clamp to the sample range.
#[inline]
fn narrow<T: Sample>(acc: i64, norm: i64) -> T {
    let v = (acc + norm / 2).div_euclid(norm);
    T::from_u32(v.clamp(0, T::MAX as i64) as u32)
}
