//! Complex-coefficient polynomial container.

use std::fmt;
use std::ops::Index;

use num_complex::Complex64;
use num_traits::Zero;

use crate::complex::{is_almost_equal, is_almost_zero, Pretty};
use crate::error::FftError;

/// Polynomial with complex coefficients.
///
/// The coefficient at index `i` is the factor of `x^i`. The length is one
/// more than the nominal degree and may include trailing zeros; call
/// [`Polynomial::trim`] to restore the minimal representation.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polynomial {
    coeffs: Vec<Complex64>,
}

impl Polynomial {
    /// Create a polynomial from its coefficients, lowest power first.
    ///
    /// `[a, b, c]` is `a + bx + cx^2`.
    #[must_use]
    pub fn new(coeffs: Vec<Complex64>) -> Self {
        Self { coeffs }
    }

    /// Create a polynomial of `len` zero coefficients.
    #[must_use]
    pub fn zeros(len: usize) -> Self {
        Self {
            coeffs: vec![Complex64::zero(); len],
        }
    }

    /// Create a polynomial with real coefficients.
    pub fn from_reals<I: IntoIterator<Item = f64>>(values: I) -> Self {
        values.into_iter().map(|re| Complex64::new(re, 0.0)).collect()
    }

    /// Number of stored coefficients.
    #[must_use]
    pub fn len(&self) -> usize {
        self.coeffs.len()
    }

    /// `true` when no coefficients are stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Coefficients, lowest power first.
    #[must_use]
    pub fn coeffs(&self) -> &[Complex64] {
        &self.coeffs
    }

    /// Coefficient of `x^i`, if stored.
    #[must_use]
    pub fn get(&self, i: usize) -> Option<Complex64> {
        self.coeffs.get(i).copied()
    }

    /// Remove trailing coefficients that are approximately zero.
    pub fn trim(&mut self) {
        while self.coeffs.last().is_some_and(|&c| is_almost_zero(c)) {
            self.coeffs.pop();
        }
    }

    /// Trimmed copy of `self`.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        let mut p = self.clone();
        p.trim();
        p
    }

    /// Copy padded with zeros to the next power-of-two length.
    ///
    /// An empty polynomial pads to a single zero coefficient, since 1 is the
    /// smallest power of two.
    #[must_use]
    pub fn padded_to_power_of_two(&self) -> Self {
        self.extended_and_padded(0)
    }

    /// Copy grown with zeros to at least `min_len` coefficients, then padded
    /// to the next power of two.
    #[must_use]
    pub fn extended_and_padded(&self, min_len: usize) -> Self {
        let target = self.len().max(min_len).max(1).next_power_of_two();
        let mut coeffs = Vec::with_capacity(target);
        coeffs.extend_from_slice(&self.coeffs);
        coeffs.resize(target, Complex64::zero());
        Self { coeffs }
    }

    /// Copy with every coefficient divided by `n`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn scale_down(&self, n: usize) -> Self {
        let n = n as f64;
        self.coeffs.iter().map(|&c| c / n).collect()
    }

    /// Product `self * other` via the FFT.
    pub fn multiply(&self, other: &Self) -> Result<Self, FftError> {
        crate::fft::multiply(self, other)
    }

    /// Approximate equality: both sides trimmed, same length, and every
    /// coefficient pair equal after rounding.
    #[must_use]
    pub fn approx_eq(&self, other: &Self) -> bool {
        let a = self.trimmed();
        let b = other.trimmed();
        a.len() == b.len()
            && a
                .coeffs
                .iter()
                .zip(&b.coeffs)
                .all(|(&x, &y)| is_almost_equal(x, y))
    }

    /// Indices at which `self` and `other` differ after rounding.
    ///
    /// Both sides are trimmed first; positions present on only one side
    /// count as mismatches.
    #[must_use]
    pub fn mismatches(&self, other: &Self) -> Vec<usize> {
        let a = self.trimmed();
        let b = other.trimmed();
        let len = a.len().max(b.len());
        (0..len)
            .filter(|&i| match (a.get(i), b.get(i)) {
                (Some(x), Some(y)) => !is_almost_equal(x, y),
                _ => true,
            })
            .collect()
    }
}

impl Index<usize> for Polynomial {
    type Output = Complex64;

    fn index(&self, i: usize) -> &Complex64 {
        &self.coeffs[i]
    }
}

impl From<Vec<Complex64>> for Polynomial {
    fn from(coeffs: Vec<Complex64>) -> Self {
        Self::new(coeffs)
    }
}

impl FromIterator<Complex64> for Polynomial {
    fn from_iter<I: IntoIterator<Item = Complex64>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a Polynomial {
    type Item = &'a Complex64;
    type IntoIter = std::slice::Iter<'a, Complex64>;

    fn into_iter(self) -> Self::IntoIter {
        self.coeffs.iter()
    }
}

/// One `index: coefficient` line per coefficient.
impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &c) in self.coeffs.iter().enumerate() {
            writeln!(f, "{i}: {}", Pretty(c))?;
        }
        Ok(())
    }
}
