//! Seeded random test-case generation.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use polyfft_core::{Complex64, Polynomial};

/// Build the generator for a run: seeded when `seed` is given, otherwise
/// seeded from OS entropy.
#[must_use]
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

/// Polynomial of `len` coefficients whose real and imaginary parts are
/// uniform in `[0, max_value)`.
pub fn random_polynomial<R: Rng + ?Sized>(rng: &mut R, len: usize, max_value: f64) -> Polynomial {
    (0..len)
        .map(|_| Complex64::new(rng.gen::<f64>() * max_value, rng.gen::<f64>() * max_value))
        .collect()
}
