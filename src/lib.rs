//! Arbitrary-precision signed integer arithmetic.
//!
//! This crate provides [`BigInt`], a signed integer of unbounded size
//! with the four basic operations, remainder, and total ordering. The
//! magnitude is stored as base-`10^9` limbs, so decimal text converts to
//! and from the internal representation nine digits at a time, in either
//! direction, without any division.
//!
//! Multiplication is hybrid: grade-school convolution for small or
//! unevenly sized operands, Karatsuba divide-and-conquer once both
//! operands are a few hundred limbs wide. Division is long division, one
//! limb of quotient at a time, each found by binary search over a trial
//! multiple of the divisor.
//!
//! # Constructing and computing
//!
//! ```
//! use darkint::BigInt;
//!
//! let a: BigInt = "123456789".parse()?;
//! let b: BigInt = "987654321".parse()?;
//! assert_eq!((a * b).to_string(), "121932631112635269");
//!
//! let n = BigInt::from(i64::MIN);
//! assert_eq!(n.to_string(), "-9223372036854775808");
//! # Ok::<(), darkint::Error>(())
//! ```
//!
//! # Division convention
//!
//! Division truncates toward zero, and a non-zero remainder takes the
//! dividend's sign, exactly like Rust's primitive integers. The `/` and
//! `%` operators panic on a zero divisor; [`BigInt::div_rem`],
//! [`BigInt::checked_div`] and [`BigInt::checked_rem`] report it as an
//! error instead.
//!
//! # No-std support
//!
//! As long as there is a memory allocator, this crate works without the
//! rest of the Rust standard library. Disable the default `std` feature
//! and it falls back to `core` and `alloc`.

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]

extern crate alloc;

mod bigint;
mod cmp;
pub mod error;
mod math;
mod ops;
mod parse;

pub use crate::bigint::BigInt;
pub use crate::error::{Category, Error, ErrorCode, Result};
