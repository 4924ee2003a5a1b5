//! Border policy that mirrors pixels about the edge.
//!
//! If the line data is given by the unprimed values shown below, the
//! padded line looks as follows, where the primed values have the same
//! value as the unprimed values.
//!
//! ```text
//!   p3' p2' p1' | p0 p1 p2 ... pl pm pn | pm' pl' pk'
//! ```
//!
//! Lines shorter than the padding keep reflecting back and forth, and a
//! single pixel line degenerates to replication.

use crate::demosaic::BorderFill;

/// Tuple struct (x1, x2, x3) designating the different sub-regions
/// of a padded line.
///
/// ```text
///    0 .. x1 => left border
///   x1 .. x2 => data
///   x2 .. x3 => right border
/// ```
pub struct BorderMirror(usize, usize, usize);

impl BorderMirror {
    pub fn new(width: usize, padding: usize) -> Self {
        let x1 = padding;
        let x2 = x1.checked_add(width).expect("overflow");
        let x3 = x2.checked_add(padding).expect("overflow");
        assert!(width >= 1);

        BorderMirror(x1, x2, x3)
    }
}

impl BorderFill for BorderMirror {
    fn index(&self, i: isize) -> usize {
        let BorderMirror(x1, x2, _) = *self;
        let n = (x2 - x1) as isize;
        if n == 1 {
            return 0;
        }

        let period = 2 * (n - 1);
        let m = i.rem_euclid(period);
        if m < n {
            m as usize
        } else {
            (period - m) as usize
        }
    }

    fn fill_row(&self, dst: &mut [i64]) {
        let BorderMirror(x1, x2, x3) = *self;

        for i in (0..x1).chain(x2..x3) {
            let j = self.index(i as isize - x1 as isize);
            dst[i] = dst[x1 + j];
        }
    }
}
