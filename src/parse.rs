//! Decimal text to limb conversion.

use alloc::vec::Vec;
use core::str::FromStr;

use crate::bigint::BigInt;
use crate::error::{Error, Result};
use crate::math::{Limb, RADIX_DIGITS};

impl FromStr for BigInt {
    type Err = Error;

    /// Parses an optional leading `-` followed by one or more ASCII
    /// digits.
    ///
    /// Anything else fails with an invalid-format error carrying the byte
    /// index of the offending position. Redundant leading zeros are
    /// accepted and normalized away, so `"-0"` parses to canonical zero.
    ///
    /// ```
    /// use darkint::BigInt;
    ///
    /// let n: BigInt = "-123456789876543210".parse().unwrap();
    /// assert_eq!(n.to_string(), "-123456789876543210");
    /// assert!("12x34".parse::<BigInt>().is_err());
    /// ```
    fn from_str(text: &str) -> Result<BigInt> {
        parse_decimal(text)
    }
}

pub(crate) fn parse_decimal(text: &str) -> Result<BigInt> {
    let bytes = text.as_bytes();
    let (neg, start) = match bytes.first() {
        Some(b'-') => (true, 1),
        _ => (false, 0),
    };
    let digits = &bytes[start..];
    if digits.is_empty() {
        return Err(Error::invalid_format(start));
    }
    if let Some(bad) = digits.iter().position(|b| !b.is_ascii_digit()) {
        return Err(Error::invalid_format(start + bad));
    }

    // Nine decimal digits per limb, chunked from the least significant
    // end; the leftover most significant chunk may be short.
    let mut mag: Vec<Limb> = Vec::with_capacity(digits.len() / RADIX_DIGITS + 1);
    for chunk in digits.rchunks(RADIX_DIGITS) {
        let mut limb: Limb = 0;
        for &b in chunk {
            limb = limb * 10 + (b - b'0') as Limb;
        }
        mag.push(limb);
    }
    Ok(BigInt::from_parts(mag, neg))
}
