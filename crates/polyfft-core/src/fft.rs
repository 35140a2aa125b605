//! Public FFT multiplication API.
//!
//! Multiplies polynomials through the convolution theorem: evaluate both
//! operands at the roots of unity, multiply the values pointwise, and
//! interpolate the product back.

use crate::error::FftError;
use crate::fft_core::{forward, inverse};
use crate::poly::Polynomial;

/// Multiply two polynomials.
///
/// Both operands are trimmed first; the product is returned trimmed. An
/// operand that trims to zero coefficients is rejected with
/// [`FftError::EmptyOperand`]: the zero polynomial is not supported.
pub fn multiply(p: &Polynomial, q: &Polynomial) -> Result<Polynomial, FftError> {
    let p = p.trimmed();
    let q = q.trimmed();
    if p.is_empty() || q.is_empty() {
        return Err(FftError::EmptyOperand);
    }

    // Exact coefficient count of the product.
    let count = p.len() + q.len() - 1;
    tracing::debug!(lhs = p.len(), rhs = q.len(), count, "fft multiply");

    let p = p.extended_and_padded(count);
    let q = q.extended_and_padded(count);
    let size = p.len();
    debug_assert_eq!(size, q.len());

    let p_vals = forward(&p)?;
    let q_vals = forward(&q)?;
    let r_vals = pointwise_multiply(&p_vals, &q_vals)?;

    let mut product = inverse(&r_vals)?.scale_down(size);
    product.trim();
    Ok(product)
}

/// Square a polynomial, reusing a single forward transform.
pub fn square(p: &Polynomial) -> Result<Polynomial, FftError> {
    let p = p.trimmed();
    if p.is_empty() {
        return Err(FftError::EmptyOperand);
    }

    let count = 2 * p.len() - 1;
    tracing::debug!(len = p.len(), count, "fft square");

    let p = p.extended_and_padded(count);
    let size = p.len();

    let values: Polynomial = forward(&p)?.coeffs().iter().map(|v| v * v).collect();

    let mut product = inverse(&values)?.scale_down(size);
    product.trim();
    Ok(product)
}

/// Pointwise product of two value sequences of equal length.
pub fn pointwise_multiply(a: &Polynomial, b: &Polynomial) -> Result<Polynomial, FftError> {
    if a.len() != b.len() {
        return Err(FftError::LengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(a.coeffs()
        .iter()
        .zip(b.coeffs())
        .map(|(x, y)| x * y)
        .collect())
}
