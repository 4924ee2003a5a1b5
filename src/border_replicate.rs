//! Border policy that replicates the edge pixel.
//!
//! If the line data is given by the unprimed values shown below, the
//! padded line looks as follows, where the primed values have the same
//! value as the unprimed values.
//!
//! ```text
//!   p0' p0' p0' | p0 p1 p2 ... pl pm pn | pn' pn' pn'
//! ```

use crate::demosaic::BorderFill;

/// Tuple struct (x1, x2, x3) designating the different sub-regions
/// of a padded line.
///
/// ```text
///    0 .. x1 => left border
///   x1 .. x2 => data
///   x2 .. x3 => right border
/// ```
pub struct BorderReplicate(usize, usize, usize);

impl BorderReplicate {
    pub fn new(width: usize, padding: usize) -> Self {
        let x1 = padding;
        let x2 = x1.checked_add(width).expect("overflow");
        let x3 = x2.checked_add(padding).expect("overflow");
        assert!(width >= 1);

        BorderReplicate(x1, x2, x3)
    }
}

impl BorderFill for BorderReplicate {
    fn index(&self, i: isize) -> usize {
        let BorderReplicate(x1, x2, _) = *self;
        i.clamp(0, (x2 - x1 - 1) as isize) as usize
    }

    fn fill_row(&self, dst: &mut [i64]) {
        let BorderReplicate(x1, x2, x3) = *self;

        let first = dst[x1];
        dst[..x1].fill(first);

        let last = dst[x2 - 1];
        dst[x2..x3].fill(last);
    }
}
