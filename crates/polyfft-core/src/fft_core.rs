//! Core FFT transform: iterative Cooley-Tukey over complex coefficients.

use num_complex::Complex64;
use num_traits::Zero;
use rayon::prelude::*;

use crate::complex::root_of_unity;
use crate::constants::PARALLEL_TRANSFORM_THRESHOLD;
use crate::error::FftError;
use crate::poly::Polynomial;
use crate::twiddle::TwiddleTable;

/// Transform direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Evaluate at the roots of unity.
    Forward,
    /// Interpolate from values at the roots of unity (unnormalized).
    Inverse,
}

impl Direction {
    /// Root used for a transform of length `n`: `ω_n`, or `1/ω_n` when
    /// interpolating.
    #[must_use]
    pub fn root(self, n: usize) -> Complex64 {
        let w = root_of_unity(n);
        match self {
            Self::Forward => w,
            Self::Inverse => w.inv(),
        }
    }
}

/// Number of butterfly layers for a transform of length `n`.
///
/// Fails unless `n` is an exact power of two (zero included).
pub fn layer_count(n: usize) -> Result<u32, FftError> {
    if n.is_power_of_two() {
        Ok(n.trailing_zeros())
    } else {
        Err(FftError::InvalidLength { len: n })
    }
}

/// Reverse the low `bits` bits of `i`.
#[must_use]
pub fn reverse_bits(i: usize, bits: u32) -> usize {
    if bits == 0 {
        0
    } else {
        i.reverse_bits() >> (usize::BITS - bits)
    }
}

/// Bit-reversal permutation into a fresh buffer: coefficient `i` lands at
/// the index whose low `bits` bits are those of `i` reversed.
#[must_use]
pub fn bit_reverse_permutation(data: &[Complex64], bits: u32) -> Vec<Complex64> {
    let mut out = vec![Complex64::zero(); data.len()];
    for (i, &c) in data.iter().enumerate() {
        out[reverse_bits(i, bits)] = c;
    }
    out
}

/// Forward or inverse DFT of a power-of-two-length polynomial.
///
/// The input is left untouched; the result is a new polynomial of the same
/// length. The inverse transform is not normalized: divide by the length
/// (see [`Polynomial::scale_down`]) to recover coefficients.
pub fn transform(p: &Polynomial, direction: Direction) -> Result<Polynomial, FftError> {
    let n = p.len();
    let layers = layer_count(n)?;

    let mut data = bit_reverse_permutation(p.coeffs(), layers);
    let twiddles = TwiddleTable::new(n, direction);

    // Layer L+1 reads the complete output of layer L.
    for layer in 1..=layers {
        butterfly_layer(&mut data, 1 << layer, &twiddles);
    }

    tracing::trace!(len = n, layers, ?direction, "transform complete");
    Ok(Polynomial::new(data))
}

/// Evaluate `p` at the roots of unity.
pub fn forward(p: &Polynomial) -> Result<Polynomial, FftError> {
    transform(p, Direction::Forward)
}

/// Unnormalized interpolation from values at the roots of unity.
pub fn inverse(p: &Polynomial) -> Result<Polynomial, FftError> {
    transform(p, Direction::Inverse)
}

/// Pad `p` to a power-of-two length, then evaluate it.
pub fn transform_padded(p: &Polynomial) -> Result<Polynomial, FftError> {
    forward(&p.padded_to_power_of_two())
}

/// One layer of butterflies over independent groups of `node_size`
/// elements. Groups never touch each other's elements.
fn butterfly_layer(data: &mut [Complex64], node_size: usize, twiddles: &TwiddleTable) {
    let half = node_size / 2;
    let stride = twiddles.stride(node_size);
    let powers = twiddles.powers();

    let combine = |group: &mut [Complex64]| {
        let (lo, hi) = group.split_at_mut(half);
        for (i, (c1, c2)) in lo.iter_mut().zip(hi.iter_mut()).enumerate() {
            let u = *c1;
            let t = powers[i * stride] * *c2;
            *c1 = u + t;
            *c2 = u - t;
        }
    };

    if data.len() >= PARALLEL_TRANSFORM_THRESHOLD {
        data.par_chunks_mut(node_size).for_each(combine);
    } else {
        data.chunks_mut(node_size).for_each(combine);
    }
}
