//! Merging of the two green sub-lattices.

use crate::raster::Sample;
use crate::{BayerError, BayerResult, Raster};

/// Rounding applied when the two green samples have an odd sum.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum GreenRounding {
    /// `(g1 + g2 + 1) / 2`: 23 and 24 merge to 24.
    #[default]
    HalfAwayFromZero,
    /// `(g1 + g2) / 2`: 23 and 24 merge to 23.
    TowardZero,
    /// Ties to the even value: 23 and 24 merge to 24, 24 and 25 to 24.
    HalfToEven,
}

impl GreenRounding {
    /// Average two samples already widened to `u32`.
    #[inline]
    pub fn average(self, g1: u32, g2: u32) -> u32 {
        let sum = g1 + g2;
        match self {
            GreenRounding::HalfAwayFromZero => (sum + 1) / 2,
            GreenRounding::TowardZero => sum / 2,
            GreenRounding::HalfToEven => {
                let half = sum / 2;
                if sum % 2 == 1 && half % 2 == 1 {
                    half + 1
                } else {
                    half
                }
            }
        }
    }
}

/// Average two green sub-lattices of the same shape.
///
/// Both operands are widened to `u32` before summing, so the maximum
/// sample value never wraps.
pub fn merge_green<T: Sample>(
    green1: &Raster<T>,
    green2: &Raster<T>,
    rounding: GreenRounding,
) -> BayerResult<Raster<T>> {
    if green1.shape() != green2.shape() {
        return Err(BayerError::WrongShape(green2.shape().to_vec()));
    }

    let data = green1
        .as_slice()
        .iter()
        .zip(green2.as_slice())
        .map(|(&a, &b)| T::from_u32(rounding.average(a.to_u32(), b.to_u32())))
        .collect();

    Raster::new(green1.shape(), data)
}

#[cfg(test)]
mod tests {
    use super::{merge_green, GreenRounding};
    use crate::Raster;

    #[test]
    fn test_odd_sum() {
        assert_eq!(GreenRounding::HalfAwayFromZero.average(23, 24), 24);
        assert_eq!(GreenRounding::TowardZero.average(23, 24), 23);
        assert_eq!(GreenRounding::HalfToEven.average(23, 24), 24);
        assert_eq!(GreenRounding::HalfToEven.average(24, 25), 24);
        assert_eq!(GreenRounding::HalfAwayFromZero.average(24, 25), 25);
    }

    #[test]
    fn test_even_sum_agrees() {
        for rounding in [
            GreenRounding::HalfAwayFromZero,
            GreenRounding::TowardZero,
            GreenRounding::HalfToEven,
        ] {
            assert_eq!(rounding.average(23, 27), 25);
        }
    }

    #[test]
    fn test_no_overflow_u8() {
        let g = Raster::new(&[1, 2], vec![255u8, 254]).unwrap();
        for rounding in [
            GreenRounding::HalfAwayFromZero,
            GreenRounding::TowardZero,
            GreenRounding::HalfToEven,
        ] {
            let m = merge_green(&g, &g, rounding).unwrap();
            assert_eq!(m.as_slice(), &[255, 254]);
        }
    }

    #[test]
    fn test_no_overflow_u16() {
        let g1 = Raster::new(&[1, 2], vec![65535u16, 65535]).unwrap();
        let g2 = Raster::new(&[1, 2], vec![65535u16, 65534]).unwrap();

        let m = merge_green(&g1, &g2, GreenRounding::HalfAwayFromZero).unwrap();
        assert_eq!(m.as_slice(), &[65535, 65535]);

        let m = merge_green(&g1, &g2, GreenRounding::TowardZero).unwrap();
        assert_eq!(m.as_slice(), &[65535, 65534]);
    }

    #[test]
    fn test_shape_mismatch() {
        let g1 = Raster::new(&[1, 2], vec![0u8, 0]).unwrap();
        let g2 = Raster::new(&[2, 1], vec![0u8, 0]).unwrap();
        assert!(merge_green(&g1, &g2, GreenRounding::default()).is_err());
    }
}
