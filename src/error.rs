//! When constructing or dividing big integers goes wrong.

use alloc::boxed::Box;
use alloc::string::ToString;
use core::fmt::{self, Debug, Display};
use core::result;

/// This type represents all possible errors that can occur when operating
/// on [`BigInt`](crate::BigInt) values.
pub struct Error {
    /// This `Box` allows us to keep the size of `Error` as small as
    /// possible, so that `Result<T>` stays cheap to pass around on the
    /// happy path.
    err: Box<ErrorImpl>,
}

/// Alias for a `Result` with the error type `darkint::Error`.
pub type Result<T> = result::Result<T, Error>;

impl Error {
    /// Byte index at which parsing failed.
    ///
    /// Only meaningful for [`Category::Syntax`] errors; arithmetic errors
    /// report index zero.
    pub fn index(&self) -> usize {
        self.err.index
    }

    /// Specifies the cause of this error.
    ///
    /// Useful when precise error handling or translation of error
    /// messages is required.
    pub fn code(&self) -> &ErrorCode {
        &self.err.code
    }

    /// Categorizes the cause of this error.
    ///
    /// - `Category::Syntax` - text that does not denote a decimal integer
    /// - `Category::Arithmetic` - an operation with no defined result
    pub fn classify(&self) -> Category {
        match self.err.code {
            ErrorCode::InvalidFormat => Category::Syntax,
            ErrorCode::DivideByZero => Category::Arithmetic,
        }
    }

    /// Returns true if this error was caused by text that is not a valid
    /// decimal integer.
    pub fn is_invalid_format(&self) -> bool {
        self.classify() == Category::Syntax
    }

    /// Returns true if this error was caused by a zero divisor.
    pub fn is_divide_by_zero(&self) -> bool {
        self.classify() == Category::Arithmetic
    }

    pub(crate) fn invalid_format(index: usize) -> Error {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::InvalidFormat,
                index,
            }),
        }
    }

    pub(crate) fn divide_by_zero() -> Error {
        Error {
            err: Box::new(ErrorImpl {
                code: ErrorCode::DivideByZero,
                index: 0,
            }),
        }
    }
}

/// Categorizes the cause of a `darkint::Error`.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Category {
    /// The error was caused by text that is not a decimal integer.
    Syntax,

    /// The error was caused by an operation with no defined result.
    Arithmetic,
}

struct ErrorImpl {
    code: ErrorCode,
    index: usize,
}

/// This type describes all possible error causes reported through
/// [`Error`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum ErrorCode {
    /// A disallowed character, or no digits at all, in a decimal integer
    /// literal.
    InvalidFormat,

    /// Division or remainder with a zero divisor.
    DivideByZero,
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ErrorCode::InvalidFormat => f.write_str("invalid decimal integer literal"),
            ErrorCode::DivideByZero => f.write_str("attempt to divide by zero"),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.classify() {
            Category::Syntax => write!(f, "{} at index {}", self.err.code, self.err.index),
            Category::Arithmetic => Display::fmt(&self.err.code, f),
        }
    }
}

impl Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.classify() {
            Category::Syntax => write!(
                f,
                "Error({:?}, index: {})",
                self.err.code.to_string(),
                self.err.index
            ),
            Category::Arithmetic => write!(f, "Error({:?})", self.err.code.to_string()),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Error {}
