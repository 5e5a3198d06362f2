//! Numeric accumulation for `sum` and `average`.
//!
//! Integers stay integers while they fit; any float operand (or an integer
//! overflow) promotes the running total to a float.

use std::fmt;
use std::iter::Sum;
use std::ops::Add;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A number produced by a numeric selector.
#[derive(Clone, Copy, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Number {
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
}

impl Number {
    /// The additive identity, `Int(0)`.
    pub const ZERO: Self = Self::Int(0);

    /// Converts to `f64`.
    ///
    /// Note: large `i64` values may lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub const fn as_f64(self) -> f64 {
        match self {
            Self::Int(n) => n as f64,
            Self::Float(n) => n,
        }
    }

    /// Returns the integer value, if this is an `Int`.
    #[must_use]
    pub const fn as_int(self) -> Option<i64> {
        match self {
            Self::Int(n) => Some(n),
            Self::Float(_) => None,
        }
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::ZERO
    }
}

impl Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Int(a), Self::Int(b)) => a
                .checked_add(b)
                .map_or_else(|| Self::Float(self.as_f64() + rhs.as_f64()), Self::Int),
            _ => Self::Float(self.as_f64() + rhs.as_f64()),
        }
    }
}

impl Sum for Number {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

// Ints and floats with the same magnitude compare equal here, unlike `Value`.
impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            _ => self.as_f64() == other.as_f64(),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
        }
    }
}

impl From<i64> for Number {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<f64> for Number {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

/// Conversion into a [`Number`] for summing.
///
/// Returning `None` marks the value as non-numeric; `sum` and `average`
/// fail on the first such value.
pub trait Numeric {
    /// Returns the numeric value, or `None` if this value is not a number.
    fn to_number(&self) -> Option<Number>;
}

macro_rules! numeric_lossless_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                fn to_number(&self) -> Option<Number> {
                    Some(Number::Int(i64::from(*self)))
                }
            }
        )*
    };
}

macro_rules! numeric_wide_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[allow(clippy::cast_precision_loss)]
                fn to_number(&self) -> Option<Number> {
                    Some(i64::try_from(*self).map_or(Number::Float(*self as f64), Number::Int))
                }
            }
        )*
    };
}

numeric_lossless_int!(i8, i16, i32, i64, u8, u16, u32);
numeric_wide_int!(i128, isize, u64, u128, usize);

impl Numeric for f32 {
    fn to_number(&self) -> Option<Number> {
        Some(Number::Float(f64::from(*self)))
    }
}

impl Numeric for f64 {
    fn to_number(&self) -> Option<Number> {
        Some(Number::Float(*self))
    }
}

impl Numeric for Number {
    fn to_number(&self) -> Option<Number> {
        Some(*self)
    }
}

impl Numeric for bool {
    fn to_number(&self) -> Option<Number> {
        None
    }
}

impl<N: Numeric> Numeric for Option<N> {
    fn to_number(&self) -> Option<Number> {
        self.as_ref().and_then(Numeric::to_number)
    }
}

impl<N: Numeric + ?Sized> Numeric for &N {
    fn to_number(&self) -> Option<Number> {
        (**self).to_number()
    }
}
