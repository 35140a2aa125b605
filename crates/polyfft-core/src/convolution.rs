//! Schoolbook O(n·m) polynomial product, the reference oracle for the FFT
//! multiplier.

use num_complex::Complex64;
use num_traits::Zero;

use crate::poly::Polynomial;

/// Multiply by direct convolution: `r[i + j] += p[i] * q[j]`.
///
/// Unlike [`crate::fft::multiply`] this accepts empty operands (the product
/// is then empty) and does not trim its result.
#[must_use]
pub fn mul_by_convolution(p: &Polynomial, q: &Polynomial) -> Polynomial {
    if p.is_empty() || q.is_empty() {
        return Polynomial::default();
    }
    let mut out = vec![Complex64::zero(); p.len() + q.len() - 1];
    for (i, &a) in p.coeffs().iter().enumerate() {
        for (j, &b) in q.coeffs().iter().enumerate() {
            out[i + j] += a * b;
        }
    }
    Polynomial::new(out)
}
