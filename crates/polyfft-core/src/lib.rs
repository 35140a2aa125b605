//! # polyfft-core
//!
//! Complex-number FFT engine and FFT-based polynomial multiplication.
//!
//! The iterative transform in [`fft_core`] drives [`fft::multiply`]; the
//! recursive transform in [`fft_recursion`] and the schoolbook product in
//! [`convolution`] exist to cross-check it. Floating-point results are
//! compared with the fixed-precision rounding in [`complex`].

pub mod complex;
pub mod constants;
pub mod convolution;
pub mod error;
pub mod fft;
pub mod fft_core;
pub mod fft_recursion;
pub mod poly;
pub mod twiddle;

// Re-exports
pub use complex::{is_almost_equal, is_almost_zero, round_complex, Pretty};
pub use constants::{exit_codes, ROUND_DIGITS};
pub use convolution::mul_by_convolution;
pub use error::FftError;
pub use fft::{multiply, square};
pub use fft_core::{transform, Direction};
pub use fft_recursion::fft_recursive;
pub use num_complex::Complex64;
pub use poly::Polynomial;
