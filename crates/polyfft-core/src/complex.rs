//! Complex scalar helpers: roots of unity, fixed-precision rounding, and
//! approximate equality.
//!
//! Transforms never round-trip exactly in floating point, so every equality
//! test in the crate goes through [`round_complex`], which keeps
//! [`ROUND_DIGITS`] decimal digits of each component.

use std::f64::consts::TAU;
use std::fmt;

use num_complex::Complex64;
use num_traits::{One, Zero};

use crate::constants::ROUND_DIGITS;

/// Principal `n`-th root of unity, `exp(2πi / n)`.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn root_of_unity(n: usize) -> Complex64 {
    (Complex64::i() * (TAU / n as f64)).exp()
}

/// Round one component to [`ROUND_DIGITS`] decimal digits.
///
/// Negative zero is folded into positive zero so that rounded values
/// compare and print consistently. Magnitudes too large to scale without
/// overflowing (above roughly `1.8e298`) carry no fractional digits at this
/// precision and are returned as they are.
#[must_use]
pub fn round_component(x: f64) -> f64 {
    let scale = 10f64.powi(ROUND_DIGITS);
    let scaled = x * scale;
    if scaled.is_infinite() {
        return x + 0.0;
    }
    scaled.round() / scale + 0.0
}

/// Round both components of `c` to [`ROUND_DIGITS`] decimal digits.
#[must_use]
pub fn round_complex(c: Complex64) -> Complex64 {
    Complex64::new(round_component(c.re), round_component(c.im))
}

/// `true` when `a` and `b` agree after rounding.
#[must_use]
pub fn is_almost_equal(a: Complex64, b: Complex64) -> bool {
    round_complex(a) == round_complex(b)
}

/// `true` when `c` rounds to zero.
#[must_use]
pub fn is_almost_zero(c: Complex64) -> bool {
    is_almost_equal(c, Complex64::zero())
}

/// `true` when `c` rounds to one.
#[must_use]
pub fn is_almost_one(c: Complex64) -> bool {
    is_almost_equal(c, Complex64::one())
}

/// Display adapter rendering a coefficient as `r`, `r + ii`, `r - ii` or `ii`.
///
/// The value is rounded first, so floating-point noise never shows up as a
/// spurious imaginary part.
#[derive(Debug, Clone, Copy)]
pub struct Pretty(pub Complex64);

impl fmt::Display for Pretty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Complex64 { re, im } = round_complex(self.0);
        if im == 0.0 {
            write!(f, "{re}")
        } else if re == 0.0 {
            write!(f, "{im}i")
        } else if im < 0.0 {
            write!(f, "{re} - {}i", -im)
        } else {
            write!(f, "{re} + {im}i")
        }
    }
}
