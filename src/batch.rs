//! The single-frame pipeline and its batch driver.

use log::{debug, info};

#[cfg(feature = "rayon")]
use rayon::prelude::*;

use crate::demosaic::upsample;
use crate::raster::Sample;
use crate::{
    merge_green, rgb2gray, split_channels, BayerError, BayerResult, DemosaicOptions, DynRaster,
    Raster, CFA,
};

/// How the axes of a raw input are to be read.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum FrameLayout {
    /// `[H, W]`.
    Single,
    /// `[N, H, W]` with `W != 3`.
    Batch { frames: usize, h: usize, w: usize },
}

fn classify(shape: &[usize]) -> BayerResult<FrameLayout> {
    match *shape {
        [_, _] => Ok(FrameLayout::Single),
        // A trailing axis of 3 is a single colour image, never a batch.
        [_, _, 3] => Err(BayerError::AlreadyDemosaiced(shape.to_vec())),
        [n, h, w] => Ok(FrameLayout::Batch { frames: n, h, w }),
        _ => Err(BayerError::WrongShape(shape.to_vec())),
    }
}

/// Demosaic one `[H, W]` raw frame.
///
/// Produces `[H, W, 3]` when `opts.color` is set, `[H, W]` otherwise.
pub fn demosaic_frame<T: Sample>(raw: &Raster<T>, opts: &DemosaicOptions) -> BayerResult<Raster<T>> {
    let ch = split_channels(raw, opts.cfa)?;
    let green = merge_green(&ch.green1, &ch.green2, opts.rounding)?;
    let plane = interleave(&ch.red, &green, &ch.blue)?;
    debug!(
        "demosaic {:?} {} with {:?}, {:?}",
        raw.shape(),
        opts.cfa,
        opts.algorithm,
        opts.rounding
    );

    let rgb = upsample(&plane, opts.algorithm)?;
    if opts.color {
        Ok(rgb)
    } else {
        rgb2gray(&rgb)
    }
}

/// Stack three single-channel planes into one `[h, w, 3]` plane.
fn interleave<T: Sample>(r: &Raster<T>, g: &Raster<T>, b: &Raster<T>) -> BayerResult<Raster<T>> {
    let shape = r.shape();
    let data = r
        .as_slice()
        .iter()
        .zip(g.as_slice())
        .zip(b.as_slice())
        .flat_map(|((&rv, &gv), &bv)| [rv, gv, bv])
        .collect();

    Raster::new(&[shape[0], shape[1], 3], data)
}

/// Demosaic a raw frame or a batch of raw frames.
///
/// | input shape | colour output  | gray output |
/// |-------------|----------------|-------------|
/// | `[H, W]`    | `[H, W, 3]`    | `[H, W]`    |
/// | `[N, H, W]` | `[N, H, W, 3]` | `[N, H, W]` |
///
/// `[H, W, 3]` is rejected as already demosaiced.  Batch frames are
/// processed independently and keep their order.
pub fn demosaic_with<T: Sample>(input: &Raster<T>, opts: &DemosaicOptions) -> BayerResult<Raster<T>> {
    if input.is_empty() {
        return Err(BayerError::NoInput);
    }

    let (n, h, w) = match classify(input.shape())? {
        FrameLayout::Single => return demosaic_frame(input, opts),
        FrameLayout::Batch { frames, h, w } => (frames, h, w),
    };
    if h % 2 != 0 || w % 2 != 0 {
        return Err(BayerError::WrongResolution(h, w));
    }

    info!("iterate over {} frames", n);
    let mut dst: Raster<T> = if opts.color {
        Raster::zeros(&[n, h, w, 3])
    } else {
        Raster::zeros(&[n, h, w])
    };
    let src_stride = input.stride();
    let dst_stride = dst.stride();

    let process = |(src, out): (&[T], &mut [T])| -> BayerResult<()> {
        let frame = Raster::new(&[h, w], src.to_vec())?;
        let res = demosaic_frame(&frame, opts)?;
        out.copy_from_slice(res.as_slice());
        Ok(())
    };

    #[cfg(feature = "rayon")]
    input
        .as_slice()
        .par_chunks(src_stride)
        .zip(dst.as_mut_slice().par_chunks_mut(dst_stride))
        .try_for_each(process)?;

    #[cfg(not(feature = "rayon"))]
    input
        .as_slice()
        .chunks(src_stride)
        .zip(dst.as_mut_slice().chunks_mut(dst_stride))
        .try_for_each(process)?;

    Ok(dst)
}

/// Demosaic with an integer algorithm selector.
///
/// `alg` is 1 for nearest neighbour, 2 linear, 3 quadratic, 4 cubic;
/// anything else falls back to nearest neighbour with a warning.  Green
/// samples are merged rounding half away from zero.
///
/// # Examples
///
/// ```
/// use debayer::{demosaic, Raster, CFA};
///
/// let raw = Raster::new(&[2, 2], vec![23u8, 128, 202, 27]).unwrap();
/// let rgb = demosaic(&raw, CFA::GRBG, 1, true).unwrap();
/// assert_eq!(rgb.shape(), &[2, 2, 3]);
/// assert_eq!(rgb.row(0), &[128, 25, 202, 128, 25, 202]);
/// ```
pub fn demosaic<T: Sample>(input: &Raster<T>, cfa: CFA, alg: i32, color: bool) -> BayerResult<Raster<T>> {
    let opts = DemosaicOptions::builder()
        .cfa(cfa)
        .alg(alg)
        .color(color)
        .build();
    demosaic_with(input, &opts)
}

impl DynRaster {
    pub fn demosaic(&self, cfa: CFA, alg: i32, color: bool) -> BayerResult<DynRaster> {
        match self {
            DynRaster::U8(r) => Ok(demosaic(r, cfa, alg, color)?.into()),
            DynRaster::U16(r) => Ok(demosaic(r, cfa, alg, color)?.into()),
        }
    }

    pub fn demosaic_with(&self, opts: &DemosaicOptions) -> BayerResult<DynRaster> {
        match self {
            DynRaster::U8(r) => Ok(demosaic_with(r, opts)?.into()),
            DynRaster::U16(r) => Ok(demosaic_with(r, opts)?.into()),
        }
    }

    pub fn rgb2gray(&self) -> BayerResult<DynRaster> {
        match self {
            DynRaster::U8(r) => Ok(rgb2gray(r)?.into()),
            DynRaster::U16(r) => Ok(rgb2gray(r)?.into()),
        }
    }
}
