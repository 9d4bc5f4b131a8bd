//! Host numeric scalars for constant nodes.
//!
//! This module provides the closed numeric tower carried by valued
//! constants: machine integers, floats and complex numbers, with the
//! usual promotion rules (`Int` → `Float` → `Complex`) applied when
//! mixed variants meet in arithmetic.
//!
//! Overflow, precision loss and division oddities are deliberately
//! delegated to the host types; the engine never special-cases them.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg};

use num_complex::Complex64;
use num_traits::{One, Zero};

/// A numeric scalar: the value side of a constant node.
///
/// Equality is per-variant (`Int(2)` and `Float(2.0)` are *not* equal);
/// the simplification engine tests for zero and one numerically instead,
/// so `Float(0.0)` still vanishes from a sum. `NaN` sits outside the
/// equality domain exactly as it does for the host float type: constants
/// holding `NaN` should not be used as set or map keys.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer.
    Int(i64),
    /// A 64-bit float.
    Float(f64),
    /// A complex number with 64-bit float components.
    Complex(Complex64),
}

impl Number {
    /// Returns the integer value, if this is the `Int` variant.
    #[must_use]
    pub fn as_int(self) -> Option<i64> {
        match self {
            Number::Int(n) => Some(n),
            Number::Float(_) | Number::Complex(_) => None,
        }
    }

    /// Returns true if this is the `Int` variant.
    #[must_use]
    pub fn is_integer(self) -> bool {
        matches!(self, Number::Int(_))
    }

    /// Widens to a complex number.
    #[must_use]
    pub fn to_complex(self) -> Complex64 {
        match self {
            Number::Int(n) => Complex64::new(n as f64, 0.0),
            Number::Float(x) => Complex64::new(x, 0.0),
            Number::Complex(z) => z,
        }
    }
}

impl Zero for Number {
    fn zero() -> Self {
        Number::Int(0)
    }

    /// Numeric zero test across all variants: `Float(0.0)` and
    /// `Complex(0, 0)` count as zero.
    fn is_zero(&self) -> bool {
        match self {
            Number::Int(n) => *n == 0,
            Number::Float(x) => *x == 0.0,
            Number::Complex(z) => z.re == 0.0 && z.im == 0.0,
        }
    }
}

impl One for Number {
    fn one() -> Self {
        Number::Int(1)
    }

    /// Numeric one test across all variants.
    fn is_one(&self) -> bool {
        match self {
            Number::Int(n) => *n == 1,
            Number::Float(x) => *x == 1.0,
            Number::Complex(z) => z.re == 1.0 && z.im == 0.0,
        }
    }
}

// Per-variant equality makes this sound for everything except NaN,
// which the host float type already excludes from reflexivity.
impl Eq for Number {}

impl Hash for Number {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // -0.0 == 0.0 must hash identically.
        fn bits(x: f64) -> u64 {
            if x == 0.0 {
                0f64.to_bits()
            } else {
                x.to_bits()
            }
        }

        match self {
            Number::Int(n) => {
                state.write_u8(0);
                n.hash(state);
            }
            Number::Float(x) => {
                state.write_u8(1);
                bits(*x).hash(state);
            }
            Number::Complex(z) => {
                state.write_u8(2);
                bits(z.re).hash(state);
                bits(z.im).hash(state);
            }
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::Float(x) => write!(f, "{x}"),
            Number::Complex(z) => write!(f, "{z}"),
        }
    }
}

impl Add for Number {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        use Number::{Complex, Float, Int};
        match (self, rhs) {
            (Int(a), Int(b)) => Int(a + b),
            (Float(a), Float(b)) => Float(a + b),
            (Int(a), Float(b)) | (Float(b), Int(a)) => Float(a as f64 + b),
            (Complex(_), _) | (_, Complex(_)) => Complex(self.to_complex() + rhs.to_complex()),
        }
    }
}

impl Mul for Number {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        use Number::{Complex, Float, Int};
        match (self, rhs) {
            (Int(a), Int(b)) => Int(a * b),
            (Float(a), Float(b)) => Float(a * b),
            (Int(a), Float(b)) | (Float(b), Int(a)) => Float(a as f64 * b),
            (Complex(_), _) | (_, Complex(_)) => Complex(self.to_complex() * rhs.to_complex()),
        }
    }
}

impl AddAssign for Number {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl MulAssign for Number {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Number::Int(n) => Number::Int(-n),
            Number::Float(x) => Number::Float(-x),
            Number::Complex(z) => Number::Complex(-z),
        }
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(i64::from(value))
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<Complex64> for Number {
    fn from(value: Complex64) -> Self {
        Number::Complex(value)
    }
}
