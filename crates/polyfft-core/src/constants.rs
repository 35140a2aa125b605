//! Constants for rounding precision, parallel thresholds, and exit codes.

/// Number of decimal digits kept when comparing complex values.
///
/// Two values are considered equal when both components agree after
/// rounding to this many digits.
pub const ROUND_DIGITS: i32 = 10;

/// Transform length (in coefficients) at or above which the groups of a
/// butterfly layer are processed in parallel.
pub const PARALLEL_TRANSFORM_THRESHOLD: usize = 1 << 14;

/// Sub-problem length at or above which the recursive transform evaluates
/// its even and odd halves in parallel.
pub const PARALLEL_RECURSION_THRESHOLD: usize = 1 << 12;

/// Exit codes for the command-line driver.
pub mod exit_codes {
    /// Generic error.
    pub const ERROR_GENERIC: i32 = 1;
    /// A transform was requested on an invalid length or operand.
    pub const ERROR_INVALID_INPUT: i32 = 2;
    /// FFT product and convolution oracle disagreed.
    pub const ERROR_MISMATCH: i32 = 3;
    /// Invalid configuration.
    pub const ERROR_CONFIG: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thresholds_are_powers_of_two() {
        assert!(PARALLEL_TRANSFORM_THRESHOLD.is_power_of_two());
        assert!(PARALLEL_RECURSION_THRESHOLD.is_power_of_two());
    }

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            exit_codes::ERROR_GENERIC,
            exit_codes::ERROR_INVALID_INPUT,
            exit_codes::ERROR_MISMATCH,
            exit_codes::ERROR_CONFIG,
        ];
        for (i, a) in codes.iter().enumerate() {
            assert_ne!(*a, 0);
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
