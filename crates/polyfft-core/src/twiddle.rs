//! Twiddle-factor tables shared by every layer of one transform.

use std::f64::consts::TAU;

use num_complex::Complex64;

use crate::fft_core::Direction;

/// Powers `ω_n^j` for `j < n / 2`, where `ω_n` is the principal `n`-th root
/// of unity (or its inverse for interpolation).
///
/// A layer with node size `m` needs `ω_m^i = ω_n^(i·n/m)`, so one table
/// built for the full length serves every layer through a stride.
#[derive(Debug, Clone)]
pub struct TwiddleTable {
    n: usize,
    powers: Vec<Complex64>,
}

impl TwiddleTable {
    /// Build the table for transform length `n` (a power of two).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(n: usize, direction: Direction) -> Self {
        let sign = match direction {
            Direction::Forward => 1.0,
            Direction::Inverse => -1.0,
        };
        let step = sign * TAU / n as f64;
        // Each power is evaluated directly, not by repeated multiplication.
        let powers = (0..n / 2)
            .map(|j| (Complex64::i() * (step * j as f64)).exp())
            .collect();
        Self { n, powers }
    }

    /// Stride into the table for a layer of node size `m`.
    #[must_use]
    pub fn stride(&self, node_size: usize) -> usize {
        self.n / node_size
    }

    /// Raw table of `n / 2` powers.
    #[must_use]
    pub fn powers(&self) -> &[Complex64] {
        &self.powers
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::complex::{is_almost_equal, root_of_unity};

    #[test]
    fn factors_match_layer_roots() {
        let table = TwiddleTable::new(16, Direction::Forward);
        assert_eq!(table.powers().len(), 8);
        for node_size in [2, 4, 8, 16] {
            let w = root_of_unity(node_size);
            let stride = table.stride(node_size);
            let mut x = Complex64::new(1.0, 0.0);
            for i in 0..node_size / 2 {
                assert!(is_almost_equal(table.powers()[i * stride], x));
                x *= w;
            }
        }
    }

    #[test]
    fn inverse_table_holds_reciprocals() {
        let fwd = TwiddleTable::new(8, Direction::Forward);
        let inv = TwiddleTable::new(8, Direction::Inverse);
        for (a, b) in fwd.powers().iter().zip(inv.powers()) {
            assert!(is_almost_equal(a * b, Complex64::new(1.0, 0.0)));
        }
    }

    #[test]
    fn length_one_table_is_empty_of_powers() {
        let table = TwiddleTable::new(1, Direction::Forward);
        assert_eq!(table.stride(1), 1);
        assert!(table.powers().is_empty());
    }
}
