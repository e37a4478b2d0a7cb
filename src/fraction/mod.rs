// An exact rational arithmetic lib implemented in rust.
// Copyright (C) 2025 Richard Sun
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.


//! # fraction
//!
//! Exact rational arithmetic with automatic reduction to lowest terms
//!
//! # Core features
//! - Basic arithmetic (`+`, `-`, `*`, `/` and the assigning forms)
//! - Every value kept in canonical form: lowest terms, positive denominator
//! - Fallible construction and division with a [`FractionError`] per failure kind
//! - Conversions from native integers and into `f32`/`f64`

pub(crate) mod utils;

use std::{
    cmp::Ordering, fmt::{self, Display, Formatter}, ops::{
        Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign
    }
};

use thiserror::Error;

use utils::normalize;

/// Failure kinds surfaced by fallible `Fraction` operations.
///
/// Callers match on the variant; the two kinds are never folded together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FractionError {
    /// A denominator of zero was supplied, either at construction or
    /// through [`Fraction::set_denominator`].
    #[error("denominator cannot be zero")]
    InvalidDenominator,
    /// The divisor fraction has a zero numerator.
    #[error("division by a fraction with a zero numerator")]
    DivisionByZero,
}

/// Rational number stored as an `i64` numerator/denominator pair.
///
/// The stored pair is always canonical: lowest terms, denominator
/// strictly positive, and exactly `0/1` for a zero value. Arithmetic
/// never mutates its operands; every produced value is re-normalized.
///
/// Intermediate cross products are formed in `i128`, so they cannot wrap.
/// A *reduced* result outside `i64` range is not representable and is not
/// supported (a known limitation of the fixed-width representation).
///
/// # Examples - basic use
/// ```
/// use frac64::Fraction;
///
/// let a = Fraction::new(3, 4).unwrap();
/// let b = Fraction::new(5, 6).unwrap();
/// assert_eq!(a + b, Fraction::new(19, 12).unwrap());
/// ```
///
/// # Canonical form
/// ```
/// # use frac64::Fraction;
/// let f = Fraction::new(4, -6).unwrap(); // stored as -2/3
/// assert_eq!(f.numerator(), -2);
/// assert_eq!(f.denominator(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fraction {
    nume: i64,
    deno: i64,
}

impl Fraction {
    pub const ZERO: Self = Self { nume: 0, deno: 1 };
    pub const ONE: Self = Self { nume: 1, deno: 1 };

    /// Creates a new fraction, reduced to canonical form.
    ///
    /// # Parameters
    /// - `nume`: numerator
    /// - `deno`: denominator (non-zero)
    ///
    /// # Errors
    /// [`FractionError::InvalidDenominator`] when `deno` is zero.
    ///
    /// # Examples
    /// ```
    /// # use frac64::{Fraction, FractionError};
    ///
    /// let f = Fraction::new(4, -2).unwrap(); // -2/1
    /// assert_eq!(f.numerator(), -2);
    ///
    /// assert_eq!(Fraction::new(1, 0), Err(FractionError::InvalidDenominator));
    /// ```
    pub fn new(nume: i64, deno: i64) -> Result<Self, FractionError> {
        Self::from_wide(nume as i128, deno as i128)
    }

    /// Shared construction path for `new` and the arithmetic results.
    /// Validates the denominator, then normalizes the pair.
    fn from_wide(nume: i128, deno: i128) -> Result<Self, FractionError> {
        if deno == 0 {
            return Err(FractionError::InvalidDenominator);
        }
        let (nume, deno) = normalize(nume, deno);
        Ok(Self { nume, deno })
    }

    /// The stored numerator. Carries the sign of the fraction.
    pub fn numerator(&self) -> i64 {
        self.nume
    }

    /// The stored denominator. Always positive.
    pub fn denominator(&self) -> i64 {
        self.deno
    }

    /// Replaces the numerator and re-normalizes the whole pair.
    ///
    /// Both stored components may change: the new pair is reduced
    /// against the current denominator.
    ///
    /// # Examples
    /// ```
    /// # use frac64::Fraction;
    /// let mut f = Fraction::new(3, 4).unwrap();
    /// f.set_numerator(2);
    /// assert_eq!(f, Fraction::new(1, 2).unwrap());
    /// ```
    pub fn set_numerator(&mut self, value: i64) {
        (self.nume, self.deno) = normalize(value as i128, self.deno as i128);
    }

    /// Replaces the denominator and re-normalizes the whole pair.
    ///
    /// # Errors
    /// [`FractionError::InvalidDenominator`] when `value` is zero; the
    /// stored pair is left untouched in that case.
    ///
    /// # Examples
    /// ```
    /// # use frac64::Fraction;
    /// let mut f = Fraction::new(3, 4).unwrap();
    /// f.set_denominator(-6).unwrap();
    /// assert_eq!(f, Fraction::new(-1, 2).unwrap());
    ///
    /// assert!(f.set_denominator(0).is_err());
    /// assert_eq!(f, Fraction::new(-1, 2).unwrap()); // unchanged
    /// ```
    pub fn set_denominator(&mut self, value: i64) -> Result<(), FractionError> {
        if value == 0 {
            return Err(FractionError::InvalidDenominator);
        }
        (self.nume, self.deno) = normalize(self.nume as i128, value as i128);
        Ok(())
    }

    /// The value as a floating-point approximation, computed on each call.
    ///
    /// # Examples
    /// ```
    /// # use frac64::Fraction;
    /// let f = Fraction::new(3, 4).unwrap();
    /// assert_eq!(f.decimal_value(), 0.75);
    /// ```
    pub fn decimal_value(&self) -> f64 {
        self.nume as f64 / self.deno as f64
    }

    /// Returns true for values greater than zero.
    pub fn is_positive(&self) -> bool {
        self.nume > 0
    }

    /// Returns true for values less than zero.
    pub fn is_negative(&self) -> bool {
        self.nume < 0
    }

    /// Returns true for the zero value.
    ///
    /// # Examples
    /// ```
    /// # use frac64::Fraction;
    /// assert!(Fraction::new(0, 7).unwrap().is_zero());
    /// assert!(!Fraction::new(1, 7).unwrap().is_zero());
    /// ```
    pub fn is_zero(&self) -> bool {
        self.nume == 0
    }

    /// Returns true when the denominator is 1.
    pub fn is_integer(&self) -> bool {
        self.deno == 1
    }

    /// The absolute value.
    ///
    /// # Examples
    /// ```
    /// # use frac64::Fraction;
    /// let f = Fraction::new(-2, 3).unwrap();
    /// assert_eq!(f.abs(), Fraction::new(2, 3).unwrap());
    /// ```
    pub fn abs(&self) -> Self {
        Self {
            nume: self.nume.abs(),
            deno: self.deno,
        }
    }

    /// The reciprocal.
    ///
    /// # Errors
    /// [`FractionError::DivisionByZero`] when the value is zero.
    ///
    /// # Examples
    /// ```
    /// # use frac64::Fraction;
    /// let f = Fraction::new(-2, 3).unwrap();
    /// assert_eq!(f.reciprocal().unwrap(), Fraction::new(-3, 2).unwrap());
    ///
    /// assert!(Fraction::ZERO.reciprocal().is_err());
    /// ```
    pub fn reciprocal(&self) -> Result<Self, FractionError> {
        if self.nume == 0 {
            return Err(FractionError::DivisionByZero);
        }
        // Swapping a canonical pair only needs the sign moved back onto
        // the numerator, which normalize does.
        let (nume, deno) = normalize(self.deno as i128, self.nume as i128);
        Ok(Self { nume, deno })
    }

    /// Fraction division, with the divisor checked up front.
    ///
    /// A divisor with a zero numerator is rejected regardless of its
    /// denominator.
    ///
    /// # Errors
    /// [`FractionError::DivisionByZero`] when `rhs` is zero-valued.
    ///
    /// # Examples
    /// ```
    /// # use frac64::{Fraction, FractionError};
    /// let a = Fraction::new(3, 4).unwrap();
    /// let b = Fraction::new(5, 6).unwrap();
    /// assert_eq!(a.checked_div(b).unwrap(), Fraction::new(9, 10).unwrap());
    ///
    /// assert_eq!(a.checked_div(Fraction::ZERO), Err(FractionError::DivisionByZero));
    /// ```
    pub fn checked_div(self, rhs: Self) -> Result<Self, FractionError> {
        Ok(self * rhs.reciprocal()?)
    }
}

impl<T: Into<Fraction>> Add<T> for Fraction {
    type Output = Self;

    /// Fraction addition by cross-multiplication.
    ///
    /// # Examples
    /// ```
    /// # use frac64::Fraction;
    /// let a = Fraction::new(1, 2).unwrap();
    /// let b = Fraction::new(1, 3).unwrap();
    /// assert_eq!(a + b, Fraction::new(5, 6).unwrap());
    /// assert_eq!(a + 1, Fraction::new(3, 2).unwrap());
    /// ```
    fn add(self, rhs: T) -> Self::Output {
        let rhs: Self = rhs.into();
        let (a, b) = (self.nume as i128, self.deno as i128);
        let (c, d) = (rhs.nume as i128, rhs.deno as i128);
        let (nume, deno) = normalize(a * d + c * b, b * d);
        Self { nume, deno }
    }
}

impl<T: Into<Fraction>> Sub<T> for Fraction {
    type Output = Self;

    /// Fraction subtraction, as addition of the negated right-hand side.
    ///
    /// # Examples
    /// ```
    /// # use frac64::Fraction;
    /// let a = Fraction::new(1, 2).unwrap();
    /// let b = Fraction::new(1, 3).unwrap();
    /// assert_eq!(a - b, Fraction::new(1, 6).unwrap());
    /// assert_eq!(a - 1, Fraction::new(-1, 2).unwrap());
    /// ```
    fn sub(self, rhs: T) -> Self::Output {
        let rhs: Self = -rhs.into();
        self + rhs
    }
}

impl<T: Into<Fraction>> Mul<T> for Fraction {
    type Output = Self;

    /// Fraction multiplication.
    ///
    /// # Examples
    /// ```
    /// # use frac64::Fraction;
    /// let a = Fraction::new(1, 2).unwrap();
    /// let b = Fraction::new(1, 3).unwrap();
    /// assert_eq!(a * b, Fraction::new(1, 6).unwrap());
    /// assert_eq!(a * 3, Fraction::new(3, 2).unwrap());
    /// ```
    fn mul(self, rhs: T) -> Self::Output {
        let rhs: Self = rhs.into();
        let (a, b) = (self.nume as i128, self.deno as i128);
        let (c, d) = (rhs.nume as i128, rhs.deno as i128);
        let (nume, deno) = normalize(a * c, b * d);
        Self { nume, deno }
    }
}

impl<T: Into<Fraction>> Div<T> for Fraction {
    type Output = Self;

    /// Fraction division, as multiplication by the reciprocal.
    ///
    /// # Panics
    /// Panics when `rhs` is zero-valued. Use [`Fraction::checked_div`]
    /// for the fallible form.
    ///
    /// # Examples
    /// ```
    /// # use frac64::Fraction;
    /// let a = Fraction::new(1, 2).unwrap();
    /// let b = Fraction::new(1, 3).unwrap();
    /// assert_eq!(a / b, Fraction::new(3, 2).unwrap());
    /// assert_eq!(a / 3, Fraction::new(1, 6).unwrap());
    /// ```
    fn div(self, rhs: T) -> Self::Output {
        self.checked_div(rhs.into())
            .expect("division by a zero-valued fraction")
    }
}

impl<T: Into<Fraction>> AddAssign<T> for Fraction {
    /// Implements `+=`, numerically identical to `+`.
    ///
    /// # Examples
    /// ```rust
    /// # use frac64::Fraction;
    /// let mut a = Fraction::new(1, 2).unwrap();
    /// a += Fraction::new(1, 3).unwrap();
    /// assert_eq!(a, Fraction::new(5, 6).unwrap());
    /// ```
    fn add_assign(&mut self, rhs: T) {
        *self = *self + rhs.into();
    }
}

impl<T: Into<Fraction>> SubAssign<T> for Fraction {
    /// Implements `-=`, numerically identical to `-`.
    ///
    /// # Examples
    /// ```rust
    /// # use frac64::Fraction;
    /// let mut a = Fraction::new(1, 2).unwrap();
    /// a -= Fraction::new(1, 3).unwrap();
    /// assert_eq!(a, Fraction::new(1, 6).unwrap());
    /// ```
    fn sub_assign(&mut self, rhs: T) {
        *self = *self - rhs.into();
    }
}

impl<T: Into<Fraction>> MulAssign<T> for Fraction {
    /// Implements `*=`, numerically identical to `*`.
    ///
    /// # Examples
    /// ```rust
    /// # use frac64::Fraction;
    /// let mut a = Fraction::new(-7, 6).unwrap();
    /// a *= Fraction::new(-8, 7).unwrap();
    /// assert_eq!(a, Fraction::new(4, 3).unwrap());
    /// ```
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs.into();
    }
}

impl<T: Into<Fraction>> DivAssign<T> for Fraction {
    /// Implements `/=`, numerically identical to `/`.
    ///
    /// # Panics
    /// Panics when `rhs` is zero-valued, like the `/` operator.
    ///
    /// # Examples
    /// ```rust
    /// # use frac64::Fraction;
    /// let mut a = Fraction::new(-7, 6).unwrap();
    /// a /= Fraction::new(-7, 8).unwrap();
    /// assert_eq!(a, Fraction::new(4, 3).unwrap());
    /// ```
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs.into();
    }
}

impl Neg for Fraction {
    type Output = Self;

    /// Negation.
    ///
    /// # Examples
    /// ```
    /// # use frac64::Fraction;
    /// let a = Fraction::new(1, 2).unwrap();
    /// assert_eq!(-a, Fraction::new(-1, 2).unwrap());
    /// assert_eq!(-Fraction::ZERO, Fraction::ZERO);
    /// ```
    fn neg(self) -> Self::Output {
        let (nume, deno) = normalize(-(self.nume as i128), self.deno as i128);
        Self { nume, deno }
    }
}

impl Display for Fraction {
    /// Renders the stored pair as `"N/D"`.
    ///
    /// The pair is already canonical, so the sign sits on the numerator
    /// and integral values render with a denominator of 1.
    ///
    /// # Examples
    /// ```
    /// # use frac64::Fraction;
    /// assert_eq!(Fraction::new(3, 4).unwrap().to_string(), "3/4");
    /// assert_eq!(Fraction::new(1, -2).unwrap().to_string(), "-1/2");
    /// assert_eq!(Fraction::new(4, 2).unwrap().to_string(), "2/1");
    /// ```
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}/{}", self.nume, self.deno)
    }
}

impl Ord for Fraction {
    /// Total order by cross-multiplication, avoiding precision loss.
    ///
    /// Consistent with `Eq`: canonical pairs compare equal exactly when
    /// they are identical.
    fn cmp(&self, other: &Self) -> Ordering {
        let lhs = self.nume as i128 * other.deno as i128;
        let rhs = other.nume as i128 * self.deno as i128;
        lhs.cmp(&rhs)
    }
}

impl PartialOrd for Fraction {
    /// # Examples
    /// ```
    /// # use frac64::Fraction;
    /// let a = Fraction::new(3, 4).unwrap();
    /// let b = Fraction::new(2, 3).unwrap();
    /// assert!(a > b);
    /// ```
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Fraction {
                fn from(value: $t) -> Self {
                    Self {
                        nume: value as i64,
                        deno: 1,
                    }
                }
            }
        )*
    };
}

impl_from_int!(u8, u16, u32, i8, i16, i32, i64);

macro_rules! impl_from_for_float {
    ($($t:ty),*) => {
        $(
            impl From<Fraction> for $t {
                fn from(value: Fraction) -> Self {
                    value.nume as $t / value.deno as $t
                }
            }
        )*
    };
}

impl_from_for_float!(f32, f64);
