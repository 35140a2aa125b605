//! Recursive divide-and-conquer FFT with parallel halves.
//!
//! This is an independent formulation of [`crate::fft_core::transform`]
//! used to cross-check the iterative engine. It is not on the
//! multiplication path.

use num_complex::Complex64;

use crate::complex::is_almost_one;
use crate::constants::PARALLEL_RECURSION_THRESHOLD;
use crate::error::FftError;
use crate::fft_core::{layer_count, Direction};
use crate::poly::Polynomial;

/// Recursive DFT of `p` in the given direction.
///
/// Validates the length like the iterative transform, then recurses with
/// the root `ω_n` (or `1/ω_n`). The inverse is not normalized.
pub fn fft_recursive(p: &Polynomial, direction: Direction) -> Result<Polynomial, FftError> {
    let n = p.len();
    layer_count(n)?;
    Ok(Polynomial::new(recursive_fft(
        p.coeffs(),
        direction.root(n),
        PARALLEL_RECURSION_THRESHOLD,
    )))
}

/// Evaluate `a` at the powers of `omega`, a primitive `a.len()`-th root of
/// unity.
///
/// When `omega` is approximately one the sub-problem has length one and is
/// returned unchanged. Sub-problems of at least `parallel_threshold`
/// elements transform their even and odd halves concurrently.
///
/// The length is not checked here; [`fft_recursive`] validates it.
#[must_use]
pub(crate) fn recursive_fft(a: &[Complex64], omega: Complex64, parallel_threshold: usize) -> Vec<Complex64> {
    let n = a.len();
    if n <= 1 || is_almost_one(omega) {
        return a.to_vec();
    }

    let even: Vec<Complex64> = a.iter().step_by(2).copied().collect();
    let odd: Vec<Complex64> = a.iter().skip(1).step_by(2).copied().collect();
    let omega_sq = omega * omega;

    let (s, l) = if n >= parallel_threshold {
        rayon::join(
            || recursive_fft(&even, omega_sq, parallel_threshold),
            || recursive_fft(&odd, omega_sq, parallel_threshold),
        )
    } else {
        (
            recursive_fft(&even, omega_sq, parallel_threshold),
            recursive_fft(&odd, omega_sq, parallel_threshold),
        )
    };

    let half = n / 2;
    let mut ret = vec![Complex64::default(); n];
    let mut x = Complex64::new(1.0, 0.0);
    for i in 0..half {
        let t = x * l[i];
        ret[i] = s[i] + t;
        ret[i + half] = s[i] - t;
        x *= omega;
    }
    ret
}
