//! Total ordering over signed values.

use core::cmp::Ordering;

use crate::bigint::BigInt;
use crate::math::large;

impl Ord for BigInt {
    /// A negative value sorts below any non-negative value; two negatives
    /// order by reversed magnitude; two non-negatives by magnitude.
    ///
    /// Magnitude comparison is sound on limb counts alone when they
    /// differ, because representations are canonical.
    fn cmp(&self, other: &BigInt) -> Ordering {
        match (self.neg, other.neg) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            (false, false) => large::compare(&self.mag, &other.mag),
            (true, true) => large::compare(&self.mag, &other.mag).reverse(),
        }
    }
}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &BigInt) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
