//! Extraction of the four colour sub-lattices from a raw frame.

use crate::raster::Sample;
use crate::{BayerError, BayerResult, Raster, CFA};

/// Quarter-resolution sub-lattices of one raw frame.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Channels<T> {
    pub green1: Raster<T>,
    pub green2: Raster<T>,
    pub red: Raster<T>,
    pub blue: Raster<T>,
}

/// Split a `[H, W]` raw frame into its green, green, red and blue
/// sub-lattices, each of shape `[H / 2, W / 2]`.
///
/// # Examples
///
/// ```
/// use debayer::{split_channels, Raster, CFA};
///
/// let raw = Raster::new(&[2, 2], vec![23u8, 128, 202, 27]).unwrap();
/// let ch = split_channels(&raw, CFA::GRBG).unwrap();
/// assert_eq!(ch.red.as_slice(), &[128]);
/// assert_eq!(ch.blue.as_slice(), &[202]);
/// ```
pub fn split_channels<T: Sample>(raw: &Raster<T>, cfa: CFA) -> BayerResult<Channels<T>> {
    let (h, w) = check_frame(raw)?;
    let o = cfa.offsets();

    Ok(Channels {
        green1: sub_lattice(raw, h, w, o.green1)?,
        green2: sub_lattice(raw, h, w, o.green2)?,
        red: sub_lattice(raw, h, w, o.red)?,
        blue: sub_lattice(raw, h, w, o.blue)?,
    })
}

/// Validate a single raw frame and return its `(h, w)`.
pub(crate) fn check_frame<T: Sample>(raw: &Raster<T>) -> BayerResult<(usize, usize)> {
    if raw.ndim() != 2 {
        return Err(BayerError::WrongShape(raw.shape().to_vec()));
    }
    if raw.is_empty() {
        return Err(BayerError::NoInput);
    }

    let (h, w) = (raw.shape()[0], raw.shape()[1]);
    if h % 2 != 0 || w % 2 != 0 {
        return Err(BayerError::WrongResolution(h, w));
    }
    Ok((h, w))
}

fn sub_lattice<T: Sample>(
    raw: &Raster<T>,
    h: usize,
    w: usize,
    (dy, dx): (usize, usize),
) -> BayerResult<Raster<T>> {
    let data = raw
        .as_slice()
        .chunks_exact(w)
        .skip(dy)
        .step_by(2)
        .flat_map(|row| row.iter().skip(dx).step_by(2).copied())
        .collect();

    Raster::new(&[h / 2, w / 2], data)
}

#[cfg(test)]
mod tests {
    use super::split_channels;
    use crate::{BayerError, Raster, CFA};

    const SRC: [u8; 16] = [
        229, 67, 95,146,
        232, 51,229,241,
        169,161, 15, 52,
         45,175, 98,197 ];

    #[test]
    fn test_grbg() {
        let raw = Raster::new(&[4, 4], SRC.to_vec()).unwrap();
        let ch = split_channels(&raw, CFA::GRBG).unwrap();

        assert_eq!(ch.green1.shape(), &[2, 2]);
        assert_eq!(ch.green1.as_slice(), &[229, 95, 169, 15]);
        assert_eq!(ch.green2.as_slice(), &[51, 241, 175, 197]);
        assert_eq!(ch.red.as_slice(), &[67, 146, 161, 52]);
        assert_eq!(ch.blue.as_slice(), &[232, 229, 45, 98]);
    }

    #[test]
    fn test_gbrg_swaps_red_blue() {
        let raw = Raster::new(&[4, 4], SRC.to_vec()).unwrap();
        let grbg = split_channels(&raw, CFA::GRBG).unwrap();
        let gbrg = split_channels(&raw, CFA::GBRG).unwrap();

        assert_eq!(grbg.green1, gbrg.green1);
        assert_eq!(grbg.green2, gbrg.green2);
        assert_eq!(grbg.red, gbrg.blue);
        assert_eq!(grbg.blue, gbrg.red);
    }

    #[test]
    fn test_rggb() {
        let raw = Raster::new(&[4, 4], SRC.to_vec()).unwrap();
        let ch = split_channels(&raw, CFA::RGGB).unwrap();

        assert_eq!(ch.red.as_slice(), &[229, 95, 169, 15]);
        assert_eq!(ch.green1.as_slice(), &[67, 146, 161, 52]);
        assert_eq!(ch.green2.as_slice(), &[232, 229, 45, 98]);
        assert_eq!(ch.blue.as_slice(), &[51, 241, 175, 197]);
    }

    #[test]
    fn test_odd_dimensions() {
        let raw = Raster::new(&[3, 2], vec![0u16; 6]).unwrap();
        let res = split_channels(&raw, CFA::GRBG);
        assert!(matches!(res, Err(BayerError::WrongResolution(3, 2))));
    }

    #[test]
    fn test_wrong_rank() {
        let raw = Raster::new(&[2, 2, 2], vec![0u8; 8]).unwrap();
        assert!(matches!(split_channels(&raw, CFA::GBRG), Err(BayerError::WrongShape(_))));
    }

    #[test]
    fn test_empty() {
        let raw = Raster::new(&[0, 4], Vec::<u8>::new()).unwrap();
        assert!(matches!(split_channels(&raw, CFA::GRBG), Err(BayerError::NoInput)));
    }
}
