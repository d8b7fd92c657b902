use std::fmt;
use std::ops::{Add, Mul, Sub};

use log::trace;
use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

/// An exact rational value, always kept in lowest terms with a positive denominator
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Number(BigRational);

impl Number {
    pub fn from_integer(value: i64) -> Self {
        Self(BigRational::from_integer(BigInt::from(value)))
    }

    pub fn from_digit(digit: u32) -> Self {
        Self(BigRational::from_integer(BigInt::from(digit)))
    }

    /// Build `numer / denom`, or `None` when the denominator is zero
    pub fn new(numer: i64, denom: i64) -> Option<Self> {
        if denom == 0 {
            return None;
        }
        Some(Self(BigRational::new(BigInt::from(numer), BigInt::from(denom))))
    }

    pub fn zero() -> Self {
        Self(BigRational::zero())
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    pub fn is_negative(&self) -> bool {
        self.0.is_negative()
    }

    pub fn is_integer(&self) -> bool {
        self.0.is_integer()
    }

    pub fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    pub fn numer(&self) -> &BigInt {
        self.0.numer()
    }

    pub fn denom(&self) -> &BigInt {
        self.0.denom()
    }

    /// Exact quotient, `None` for a zero divisor
    pub fn checked_div(&self, rhs: &Number) -> Option<Number> {
        if rhs.is_zero() {
            return None;
        }
        Some(Self(&self.0 / &rhs.0))
    }

    /// Exact power.
    ///
    /// Returns `None` whenever the result is not a rational number or is undefined:
    /// - zero raised to a zero or negative exponent
    /// - a negative base with a fractional exponent
    /// - a fractional exponent whose root of the base is irrational
    /// - an exponent too large to fit in a `u32`
    pub fn checked_pow(&self, exponent: &Number) -> Option<Number> {
        if self.is_zero() && !exponent.0.is_positive() {
            return None;
        }

        let root_index = exponent.denom().to_u32()?;
        let power = exponent.numer().abs().to_u32()?;

        let base = if root_index == 1 {
            self.0.clone()
        } else {
            if self.is_negative() {
                return None;
            }
            let numer = exact_root(self.numer(), root_index)?;
            let denom = exact_root(self.denom(), root_index)?;
            BigRational::new(numer, denom)
        };

        let raised = BigRational::new(base.numer().pow(power), base.denom().pow(power));
        if exponent.is_negative() {
            if raised.is_zero() {
                return None;
            }
            Some(Self(raised.recip()))
        } else {
            Some(Self(raised))
        }
    }
}

/// Integer `n`-th root of a non-negative value, when it exists
fn exact_root(value: &BigInt, n: u32) -> Option<BigInt> {
    if value.is_negative() || n == 0 {
        return None;
    }
    let root = value.nth_root(n);
    if &root.pow(n) == value {
        Some(root)
    } else {
        trace!("{} has no exact root of index {}", value, n);
        None
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Self::from_integer(value)
    }
}

impl Default for Number {
    fn default() -> Self {
        Self::zero()
    }
}

impl Add for &Number {
    type Output = Number;

    fn add(self, rhs: &Number) -> Number {
        Number(&self.0 + &rhs.0)
    }
}

impl Sub for &Number {
    type Output = Number;

    fn sub(self, rhs: &Number) -> Number {
        Number(&self.0 - &rhs.0)
    }
}

impl Mul for &Number {
    type Output = Number;

    fn mul(self, rhs: &Number) -> Number {
        Number(&self.0 * &rhs.0)
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.0.denom().is_one() {
            write!(f, "{}", self.0.numer())
        } else {
            write!(f, "{}/{}", self.0.numer(), self.0.denom())
        }
    }
}
