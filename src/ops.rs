//! Operator overloads for `BigInt`.
//!
//! The compound-assignment impls own the sign dispatch and mutate in
//! place; the binary operators are thin wrappers that clone or consume
//! the left operand and delegate to them.

use core::cmp::Ordering;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Rem, RemAssign, Sub, SubAssign};

use crate::bigint::BigInt;
use crate::math::large;

impl BigInt {
    /// Combines two magnitudes carrying opposite effective signs: equal
    /// magnitudes cancel to canonical zero, otherwise the larger
    /// magnitude wins the subtraction and decides the sign.
    fn sub_signed(&mut self, other: &BigInt, sign_if_other_larger: bool) {
        match large::compare(&self.mag, &other.mag) {
            Ordering::Equal => self.set_zero(),
            Ordering::Greater => large::isub(&mut self.mag, &other.mag),
            Ordering::Less => {
                let mut mag = other.mag.clone();
                large::isub(&mut mag, &self.mag);
                self.mag = mag;
                self.neg = sign_if_other_larger;
            }
        }
    }
}

impl AddAssign<&BigInt> for BigInt {
    fn add_assign(&mut self, rhs: &BigInt) {
        if self.neg == rhs.neg {
            large::iadd_shifted(&mut self.mag, &rhs.mag, 0);
        } else {
            self.sub_signed(rhs, rhs.neg);
        }
    }
}

impl SubAssign<&BigInt> for BigInt {
    fn sub_assign(&mut self, rhs: &BigInt) {
        if self.neg == rhs.neg {
            // Subtracting a like-signed value is adding its negation.
            self.sub_signed(rhs, !rhs.neg);
        } else {
            large::iadd_shifted(&mut self.mag, &rhs.mag, 0);
        }
    }
}

impl MulAssign<&BigInt> for BigInt {
    fn mul_assign(&mut self, rhs: &BigInt) {
        if self.is_zero() {
            return;
        }
        if rhs.is_zero() {
            self.set_zero();
            return;
        }
        self.neg ^= rhs.neg;
        self.mag = large::mul(&self.mag, &rhs.mag);
    }
}

impl DivAssign<&BigInt> for BigInt {
    fn div_assign(&mut self, rhs: &BigInt) {
        *self = match self.div_rem(rhs) {
            Ok((quotient, _)) => quotient,
            Err(err) => panic!("{}", err),
        };
    }
}

impl RemAssign<&BigInt> for BigInt {
    fn rem_assign(&mut self, rhs: &BigInt) {
        *self = match self.div_rem(rhs) {
            Ok((_, remainder)) => remainder,
            Err(err) => panic!("{}", err),
        };
    }
}

macro_rules! forward_binop {
    ($($op:ident :: $method:ident => $assign_op:ident :: $assign:ident,)*) => {
        $(
            impl $assign_op<BigInt> for BigInt {
                fn $assign(&mut self, rhs: BigInt) {
                    self.$assign(&rhs);
                }
            }

            impl $op<BigInt> for BigInt {
                type Output = BigInt;
                fn $method(mut self, rhs: BigInt) -> BigInt {
                    self.$assign(&rhs);
                    self
                }
            }

            impl $op<&BigInt> for BigInt {
                type Output = BigInt;
                fn $method(mut self, rhs: &BigInt) -> BigInt {
                    self.$assign(rhs);
                    self
                }
            }

            impl $op<BigInt> for &BigInt {
                type Output = BigInt;
                fn $method(self, rhs: BigInt) -> BigInt {
                    let mut out = self.clone();
                    out.$assign(&rhs);
                    out
                }
            }

            impl $op<&BigInt> for &BigInt {
                type Output = BigInt;
                fn $method(self, rhs: &BigInt) -> BigInt {
                    let mut out = self.clone();
                    out.$assign(rhs);
                    out
                }
            }
        )*
    };
}

forward_binop! {
    Add::add => AddAssign::add_assign,
    Sub::sub => SubAssign::sub_assign,
    Mul::mul => MulAssign::mul_assign,
    Div::div => DivAssign::div_assign,
    Rem::rem => RemAssign::rem_assign,
}
