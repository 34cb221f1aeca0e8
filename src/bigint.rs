//! The arbitrary-precision signed integer type.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt::{self, Debug, Display};

use crate::error::{Error, Result};
use crate::math::{div, small, Limb, RADIX};

/// An arbitrary-precision signed integer.
///
/// The value is a sign flag plus a magnitude stored as base-`10^9` limbs,
/// least significant first. Representations are canonical: the magnitude
/// never carries a most-significant zero limb (zero is the single limb
/// `0`), and zero is never negative. `Eq`, `Ord` and `Hash` therefore
/// agree with numeric equality.
///
/// Binary operators clone their left operand and delegate to the
/// compound-assignment forms, which do the work in place:
///
/// ```
/// use darkint::BigInt;
///
/// let a: BigInt = "123456789123456789".parse().unwrap();
/// let b: BigInt = "876543210876543211".parse().unwrap();
/// assert_eq!((a + b).to_string(), "1000000000000000000");
/// ```
///
/// Division truncates toward zero and the remainder takes the dividend's
/// sign, matching primitive integer division:
///
/// ```
/// use darkint::BigInt;
///
/// assert_eq!(BigInt::from(-7) / BigInt::from(2), BigInt::from(-3));
/// assert_eq!(BigInt::from(-7) % BigInt::from(2), BigInt::from(-1));
/// ```
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct BigInt {
    pub(crate) neg: bool,
    pub(crate) mag: Vec<Limb>,
}

impl BigInt {
    /// The zero value.
    pub fn new() -> BigInt {
        BigInt {
            neg: false,
            mag: vec![0],
        }
    }

    /// Builds a value from base-`10^9` limbs in little-endian order and a
    /// sign flag.
    ///
    /// Leading zero limbs are stripped and a zero magnitude clears the
    /// sign, so the result is always canonical. This is the raw engine
    /// constructor, exposed for interoperability and testing.
    ///
    /// ```
    /// use darkint::BigInt;
    ///
    /// let n = BigInt::from_limbs(vec![112635269, 121932631], false);
    /// assert_eq!(n.to_string(), "121932631112635269");
    /// ```
    ///
    /// # Panics
    ///
    /// Panics if any limb is `10^9` or larger.
    pub fn from_limbs(limbs: Vec<u32>, negative: bool) -> BigInt {
        assert!(
            limbs.iter().all(|&limb| limb < RADIX),
            "limb out of range for base 10^9"
        );
        BigInt::from_parts(limbs, negative)
    }

    /// Canonicalizing constructor; every engine routine funnels its
    /// result through here or through `normalize`.
    pub(crate) fn from_parts(mag: Vec<Limb>, neg: bool) -> BigInt {
        let mut out = BigInt { neg, mag };
        out.normalize();
        out
    }

    /// Restores the canonical form after in-place limb surgery.
    pub(crate) fn normalize(&mut self) {
        if self.mag.is_empty() {
            self.mag.push(0);
        }
        small::normalize(&mut self.mag);
        if self.is_zero() {
            self.neg = false;
        }
    }

    pub(crate) fn set_zero(&mut self) {
        self.mag.clear();
        self.mag.push(0);
        self.neg = false;
    }

    /// Whether the value is zero.
    pub fn is_zero(&self) -> bool {
        self.mag == [0]
    }

    /// Whether the value is strictly negative.
    pub fn is_negative(&self) -> bool {
        self.neg
    }

    /// Number of base-`10^9` limbs in the magnitude.
    pub fn limb_count(&self) -> usize {
        self.mag.len()
    }

    /// Truncating division returning quotient and remainder together.
    ///
    /// The quotient's sign is the XOR of the operand signs; a non-zero
    /// remainder follows the dividend's sign. This matches primitive
    /// integer division (`-7 / 2 == -3`, `-7 % 2 == -1`), not floored
    /// division. Fails when `divisor` is zero; the `/` and `%` operators
    /// panic on that error instead, like their primitive counterparts.
    ///
    /// ```
    /// use darkint::BigInt;
    ///
    /// let (q, r) = BigInt::from(100).div_rem(&BigInt::from(7)).unwrap();
    /// assert_eq!(q, BigInt::from(14));
    /// assert_eq!(r, BigInt::from(2));
    /// ```
    pub fn div_rem(&self, divisor: &BigInt) -> Result<(BigInt, BigInt)> {
        if divisor.is_zero() {
            return Err(Error::divide_by_zero());
        }
        let (q_mag, r_mag) = div::div_rem(&self.mag, &divisor.mag);
        let quotient = BigInt::from_parts(q_mag, self.neg ^ divisor.neg);
        let remainder = BigInt::from_parts(r_mag, self.neg);
        Ok((quotient, remainder))
    }

    /// Quotient of truncating division, or `None` for a zero divisor.
    pub fn checked_div(&self, divisor: &BigInt) -> Option<BigInt> {
        self.div_rem(divisor).ok().map(|(quotient, _)| quotient)
    }

    /// Remainder of truncating division, or `None` for a zero divisor.
    pub fn checked_rem(&self, divisor: &BigInt) -> Option<BigInt> {
        self.div_rem(divisor).ok().map(|(_, remainder)| remainder)
    }
}

impl Default for BigInt {
    fn default() -> BigInt {
        BigInt::new()
    }
}

macro_rules! from_signed {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for BigInt {
                fn from(value: $ty) -> BigInt {
                    let neg = value < 0;
                    // `unsigned_abs` keeps the minimum value exact; the
                    // plain `abs` has no representation for it.
                    let mut rest = value.unsigned_abs() as u64;
                    let mut mag = Vec::new();
                    while rest != 0 {
                        mag.push((rest % RADIX as u64) as Limb);
                        rest /= RADIX as u64;
                    }
                    BigInt::from_parts(mag, neg)
                }
            }
        )*
    };
}

macro_rules! from_unsigned {
    ($($ty:ty)*) => {
        $(
            impl From<$ty> for BigInt {
                fn from(value: $ty) -> BigInt {
                    let mut rest = value as u64;
                    let mut mag = Vec::new();
                    while rest != 0 {
                        mag.push((rest % RADIX as u64) as Limb);
                        rest /= RADIX as u64;
                    }
                    BigInt::from_parts(mag, false)
                }
            }
        )*
    };
}

from_signed! { i8 i16 i32 i64 isize }
from_unsigned! { u8 u16 u32 u64 usize }

/// Canonical decimal rendering: optional `-`, the most significant limb
/// unpadded, every lower limb zero-padded to nine digits.
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.neg {
            f.write_str("-")?;
        }
        let mut buf = itoa::Buffer::new();
        if let Some((top, rest)) = self.mag.split_last() {
            f.write_str(buf.format(*top))?;
            for &limb in rest.iter().rev() {
                let digits = buf.format(limb);
                f.write_str(&"000000000"[digits.len()..])?;
                f.write_str(digits)?;
            }
        }
        Ok(())
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for BigInt {
    /// Serializes as the canonical decimal string.
    fn serialize<S>(&self, serializer: S) -> core::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for BigInt {
    /// Deserializes from the canonical decimal string; formats that
    /// produce native integers are accepted as well.
    fn deserialize<D>(deserializer: D) -> core::result::Result<BigInt, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct BigIntVisitor;

        impl<'de> serde::de::Visitor<'de> for BigIntVisitor {
            type Value = BigInt;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str("a decimal integer string")
            }

            fn visit_str<E>(self, value: &str) -> core::result::Result<BigInt, E>
            where
                E: serde::de::Error,
            {
                value.parse().map_err(|_| {
                    serde::de::Error::invalid_value(serde::de::Unexpected::Str(value), &self)
                })
            }

            fn visit_i64<E>(self, value: i64) -> core::result::Result<BigInt, E>
            where
                E: serde::de::Error,
            {
                Ok(BigInt::from(value))
            }

            fn visit_u64<E>(self, value: u64) -> core::result::Result<BigInt, E>
            where
                E: serde::de::Error,
            {
                Ok(BigInt::from(value))
            }
        }

        deserializer.deserialize_str(BigIntVisitor)
    }
}
