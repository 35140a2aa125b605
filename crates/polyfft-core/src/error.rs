//! Error type for transforms and polynomial multiplication.

/// Errors reported by the FFT engine and the multiplier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FftError {
    /// The transform length is not an exact power of two.
    #[error("transform length {len} is not a power of two; pad the polynomial first")]
    InvalidLength { len: usize },

    /// An operand trimmed down to zero coefficients.
    #[error("polynomial must have at least one coefficient")]
    EmptyOperand,

    /// Value sequences of different lengths cannot be multiplied pointwise.
    #[error("pointwise product of sequences with lengths {left} and {right}")]
    LengthMismatch { left: usize, right: usize },
}
