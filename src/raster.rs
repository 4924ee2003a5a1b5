//! Raster implementation.

use std::fmt;

use crate::{BayerError, BayerResult};

/// Depth of a raster.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum RasterDepth {
    Depth8,
    Depth16,
}

impl RasterDepth {
    /// Map a sensor's bits-per-sample onto a supported raster depth.
    ///
    /// Only 8 and 16 bit samples are accepted.  Sensors that capture
    /// 10 or 12 bits but store them in 16-bit words should pass 16.
    ///
    /// # Examples
    ///
    /// ```
    /// use debayer::RasterDepth;
    ///
    /// assert_eq!(RasterDepth::from_bits(16).unwrap(), RasterDepth::Depth16);
    /// assert!(RasterDepth::from_bits(12).is_err());
    /// ```
    pub fn from_bits(bits: u32) -> BayerResult<Self> {
        match bits {
            8 => Ok(RasterDepth::Depth8),
            16 => Ok(RasterDepth::Depth16),
            _ => Err(BayerError::WrongDepth(bits)),
        }
    }

    /// The number of bytes per sample for a raster of the given depth.
    pub fn bytes_per_sample(self) -> usize {
        match self {
            RasterDepth::Depth8 => 1,
            RasterDepth::Depth16 => 2,
        }
    }
}

mod private {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
}

/// An unsigned sample type that a raster may hold: `u8` or `u16`.
pub trait Sample: private::Sealed + Copy + Default + PartialEq + fmt::Debug + Send + Sync {
    const DEPTH: RasterDepth;
    const MAX: u32;

    fn to_u32(self) -> u32;

    /// Narrow to the sample type, saturating at `MAX`.
    fn from_u32(v: u32) -> Self;
}

impl Sample for u8 {
    const DEPTH: RasterDepth = RasterDepth::Depth8;
    const MAX: u32 = u8::MAX as u32;

    #[inline]
    fn to_u32(self) -> u32 {
        self as u32
    }

    #[inline]
    fn from_u32(v: u32) -> Self {
        v.min(<Self as Sample>::MAX) as u8
    }
}

impl Sample for u16 {
    const DEPTH: RasterDepth = RasterDepth::Depth16;
    const MAX: u32 = u16::MAX as u32;

    #[inline]
    fn to_u32(self) -> u32 {
        self as u32
    }

    #[inline]
    fn from_u32(v: u32) -> Self {
        v.min(<Self as Sample>::MAX) as u16
    }
}

/// Row-major n-dimensional raster.
///
/// The shape follows the usual image convention: `[H, W]` for a raw or
/// gray frame, `[H, W, C]` for a color image and a leading frame axis
/// for batches, e.g. `[N, H, W]` or `[N, H, W, 3]`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Raster<T> {
    shape: Vec<usize>,
    data: Vec<T>,
}

impl<T: Sample> Raster<T> {
    /// Wrap an existing sample buffer.
    ///
    /// # Examples
    ///
    /// ```
    /// let raw = debayer::Raster::new(&[2, 2], vec![23u8, 128, 202, 27]).unwrap();
    /// assert_eq!(raw.shape(), &[2, 2]);
    /// ```
    pub fn new(shape: &[usize], data: Vec<T>) -> BayerResult<Self> {
        if shape.is_empty() {
            return Err(BayerError::NoInput);
        }

        let expected = shape.iter().product::<usize>();
        if data.len() != expected {
            return Err(BayerError::SizeMismatch(expected, data.len()));
        }

        Ok(Raster {
            shape: shape.to_vec(),
            data,
        })
    }

    /// Allocate a zero-filled raster.
    ///
    /// # Panics
    ///
    /// Panics if `shape` is empty.
    pub fn zeros(shape: &[usize]) -> Self {
        assert!(!shape.is_empty(), "raster needs at least one axis");

        let len = shape.iter().product::<usize>();
        Raster {
            shape: shape.to_vec(),
            data: vec![T::default(); len],
        }
    }

    pub fn shape(&self) -> &[usize] {
        &self.shape
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn depth(&self) -> RasterDepth {
        T::DEPTH
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    /// Sample at a full multi-dimensional index, or `None` if out of range.
    pub fn get(&self, index: &[usize]) -> Option<T> {
        if index.len() != self.shape.len() {
            return None;
        }

        let mut offset = 0;
        for (&i, &n) in index.iter().zip(&self.shape) {
            if i >= n {
                return None;
            }
            offset = offset * n + i;
        }
        self.data.get(offset).copied()
    }

    /// Number of samples in one step along the leading axis.
    pub fn stride(&self) -> usize {
        self.shape[1..].iter().product()
    }

    /// Borrow a row (one step along the leading axis).
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of range.
    pub fn row(&self, y: usize) -> &[T] {
        assert!(y < self.shape[0]);

        let stride = self.stride();
        &self.data[(stride * y)..(stride * (y + 1))]
    }

    /// Borrow a mutable row (one step along the leading axis).
    ///
    /// # Panics
    ///
    /// Panics if `y` is out of range.
    pub fn row_mut(&mut self, y: usize) -> &mut [T] {
        assert!(y < self.shape[0]);

        let stride = self.stride();
        &mut self.data[(stride * y)..(stride * (y + 1))]
    }

    /// Copy out frame `i` of a batch, dropping the leading axis.
    pub fn frame(&self, i: usize) -> BayerResult<Raster<T>> {
        if self.shape.len() < 2 || i >= self.shape[0] {
            return Err(BayerError::WrongShape(self.shape.clone()));
        }
        Raster::new(&self.shape[1..], self.row(i).to_vec())
    }
}

/// A raster whose sample width is only known at run time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DynRaster {
    U8(Raster<u8>),
    U16(Raster<u16>),
}

impl DynRaster {
    pub fn depth(&self) -> RasterDepth {
        match self {
            DynRaster::U8(_) => RasterDepth::Depth8,
            DynRaster::U16(_) => RasterDepth::Depth16,
        }
    }

    pub fn shape(&self) -> &[usize] {
        match self {
            DynRaster::U8(r) => r.shape(),
            DynRaster::U16(r) => r.shape(),
        }
    }
}

impl From<Raster<u8>> for DynRaster {
    fn from(r: Raster<u8>) -> Self {
        DynRaster::U8(r)
    }
}

impl From<Raster<u16>> for DynRaster {
    fn from(r: Raster<u16>) -> Self {
        DynRaster::U16(r)
    }
}
