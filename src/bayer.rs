//! Bayer image definitions.

use std::fmt;
use std::io::Read;
use std::str::FromStr;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};
use log::debug;

use crate::{BayerError, BayerResult, DynRaster, Raster, RasterDepth};

/// The 2x2 colour filter array (CFA) pattern.
///
/// The sequence of R, G, B describe the colours of the top-left,
/// top-right, bottom-left, and bottom-right pixels in the 2x2 block,
/// in that order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum CFA {
    BGGR,
    GBRG,
    GRBG,
    RGGB,
}

/// (row, column) offsets of each sub-lattice inside the 2x2 block.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CfaOffsets {
    pub green1: (usize, usize),
    pub green2: (usize, usize),
    pub red: (usize, usize),
    pub blue: (usize, usize),
}

impl CFA {
    pub fn offsets(self) -> CfaOffsets {
        match self {
            CFA::GRBG => CfaOffsets {
                green1: (0, 0),
                green2: (1, 1),
                red: (0, 1),
                blue: (1, 0),
            },
            CFA::GBRG => CfaOffsets {
                green1: (0, 0),
                green2: (1, 1),
                red: (1, 0),
                blue: (0, 1),
            },
            CFA::RGGB => CfaOffsets {
                green1: (0, 1),
                green2: (1, 0),
                red: (0, 0),
                blue: (1, 1),
            },
            CFA::BGGR => CfaOffsets {
                green1: (0, 1),
                green2: (1, 0),
                red: (1, 1),
                blue: (0, 0),
            },
        }
    }
}

impl fmt::Display for CFA {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CFA::BGGR => "BGGR",
            CFA::GBRG => "GBRG",
            CFA::GRBG => "GRBG",
            CFA::RGGB => "RGGB",
        };
        f.write_str(name)
    }
}

impl FromStr for CFA {
    type Err = BayerError;

    fn from_str(s: &str) -> BayerResult<Self> {
        match s.to_ascii_uppercase().as_str() {
            "BGGR" => Ok(CFA::BGGR),
            "GBRG" => Ok(CFA::GBRG),
            "GRBG" => Ok(CFA::GRBG),
            "RGGB" => Ok(CFA::RGGB),
            _ => Err(BayerError::UnknownCfa(s.to_string())),
        }
    }
}

/// The depth and endianness of the raw samples delivered by a sensor.
///
/// Note that many cameras only capture 10 or 12 bits per pixel, but
/// still store the data as 16 bits per pixel.  These should be treated
/// as 16 bits per pixel for the purposes of this library.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BayerDepth {
    Depth8,
    Depth16BE,
    Depth16LE,
}

impl BayerDepth {
    pub fn raster_depth(self) -> RasterDepth {
        match self {
            BayerDepth::Depth8 => RasterDepth::Depth8,
            BayerDepth::Depth16BE | BayerDepth::Depth16LE => RasterDepth::Depth16,
        }
    }
}

/// Read the exact number of bytes required to fill buf.
/// For u8 source data.
pub fn read_exact_u8(r: &mut dyn Read, buf: &mut [u8]) -> BayerResult<()> {
    r.read_exact(buf)?;
    Ok(())
}

/// Read the exact number of bytes required to fill buf.
/// For u16 big-endian source data.
pub fn read_exact_u16be(r: &mut dyn Read, buf: &mut [u16]) -> BayerResult<()> {
    r.read_u16_into::<BigEndian>(buf)?;
    Ok(())
}

/// Read the exact number of bytes required to fill buf.
/// For u16 little-endian source data.
pub fn read_exact_u16le(r: &mut dyn Read, buf: &mut [u16]) -> BayerResult<()> {
    r.read_u16_into::<LittleEndian>(buf)?;
    Ok(())
}

/// Read one raw `h` x `w` frame.
pub fn read_frame(r: &mut dyn Read, depth: BayerDepth, h: usize, w: usize) -> BayerResult<DynRaster> {
    read_shape(r, depth, &[h, w])
}

/// Read `n` consecutive raw `h` x `w` frames into a `[n, h, w]` stack.
pub fn read_frames(
    r: &mut dyn Read,
    depth: BayerDepth,
    n: usize,
    h: usize,
    w: usize,
) -> BayerResult<DynRaster> {
    read_shape(r, depth, &[n, h, w])
}

fn read_shape(r: &mut dyn Read, depth: BayerDepth, shape: &[usize]) -> BayerResult<DynRaster> {
    if shape.iter().any(|&n| n == 0) {
        return Err(BayerError::NoInput);
    }

    let len = shape.iter().product::<usize>();
    debug!(
        "reading {:?} {:?} frame, {} bytes",
        shape,
        depth,
        len * depth.raster_depth().bytes_per_sample()
    );

    match depth {
        BayerDepth::Depth8 => {
            let mut buf = vec![0u8; len];
            read_exact_u8(r, &mut buf)?;
            Ok(Raster::new(shape, buf)?.into())
        }
        BayerDepth::Depth16BE => {
            let mut buf = vec![0u16; len];
            read_exact_u16be(r, &mut buf)?;
            Ok(Raster::new(shape, buf)?.into())
        }
        BayerDepth::Depth16LE => {
            let mut buf = vec![0u16; len];
            read_exact_u16le(r, &mut buf)?;
            Ok(Raster::new(shape, buf)?.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{read_frame, read_frames, BayerDepth, CFA};
    use crate::{BayerError, DynRaster};
    use std::io::Cursor;

    #[test]
    fn test_cfa_parse() {
        assert_eq!("grbg".parse::<CFA>().unwrap(), CFA::GRBG);
        assert_eq!("GBRG".parse::<CFA>().unwrap(), CFA::GBRG);
        assert!(matches!("gbgr".parse::<CFA>(), Err(BayerError::UnknownCfa(_))));
        assert_eq!(CFA::RGGB.to_string(), "RGGB");
    }

    #[test]
    fn test_offsets_cover_block() {
        for cfa in [CFA::BGGR, CFA::GBRG, CFA::GRBG, CFA::RGGB] {
            let o = cfa.offsets();
            let mut seen = [[false; 2]; 2];
            for (y, x) in [o.green1, o.green2, o.red, o.blue] {
                assert!(!seen[y][x], "{} reuses ({}, {})", cfa, y, x);
                seen[y][x] = true;
            }
        }
    }

    #[test]
    fn test_read_u16_endianness() {
        let be = [0x01, 0x02, 0x03, 0x04, 0x05, 0x06, 0x07, 0x08];
        let le = [0x02, 0x01, 0x04, 0x03, 0x06, 0x05, 0x08, 0x07];

        let a = read_frame(&mut Cursor::new(&be[..]), BayerDepth::Depth16BE, 2, 2).unwrap();
        let b = read_frame(&mut Cursor::new(&le[..]), BayerDepth::Depth16LE, 2, 2).unwrap();
        assert_eq!(a, b);

        match a {
            DynRaster::U16(r) => assert_eq!(r.as_slice(), &[0x0102, 0x0304, 0x0506, 0x0708]),
            DynRaster::U8(_) => panic!("expected 16-bit raster"),
        }
    }

    #[test]
    fn test_read_depth() {
        let src = [0u8; 8];
        for depth in [BayerDepth::Depth8, BayerDepth::Depth16BE, BayerDepth::Depth16LE] {
            let n = 8 / depth.raster_depth().bytes_per_sample();
            let res = read_frame(&mut Cursor::new(&src[..]), depth, 1, n).unwrap();
            assert_eq!(res.depth(), depth.raster_depth());
            assert_eq!(res.shape(), &[1, n]);
        }
    }

    #[test]
    fn test_read_frames_short() {
        let src = [0u8; 7];
        let res = read_frames(&mut Cursor::new(&src[..]), BayerDepth::Depth8, 2, 2, 2);
        assert!(matches!(res, Err(BayerError::Io(_))));
    }

    #[test]
    fn test_read_frames_shape() {
        let src = [0u8; 8];
        let res = read_frames(&mut Cursor::new(&src[..]), BayerDepth::Depth8, 2, 2, 2).unwrap();
        assert_eq!(res.shape(), &[2, 2, 2]);
    }
}
