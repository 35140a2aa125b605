//! CLI output formatting.

use std::fmt::Write as _;
use std::io::{self, Write};
use std::time::Duration;

use polyfft_core::{Complex64, Polynomial, Pretty};

/// Render a coefficient as `r`, `r + ii`, `r - ii`, or `ii`.
#[must_use]
pub fn format_complex(c: Complex64) -> String {
    Pretty(c).to_string()
}

/// Render one worked example the way the driver prints it.
#[must_use]
pub fn format_example(index: usize, p: &Polynomial, q: &Polynomial, product: &Polynomial) -> String {
    format!("Example {index}:\np =\n{p}\nq =\n{q}\np*q =\n{product}")
}

/// Render the coefficients at `indices` side by side.
#[must_use]
pub fn format_mismatches(indices: &[usize], fft: &Polynomial, oracle: &Polynomial) -> String {
    let mut out = String::new();
    for &i in indices {
        let left = fft.get(i).map_or_else(|| "-".to_string(), format_complex);
        let right = oracle.get(i).map_or_else(|| "-".to_string(), format_complex);
        let _ = writeln!(out, "  {i}: fft = {left}, convolution = {right}");
    }
    out
}

/// Format a duration for display.
#[must_use]
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_precision_loss
)]
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 0.001 {
        format!("{:.2}µs", secs * 1_000_000.0)
    } else if secs < 1.0 {
        format!("{:.2}ms", secs * 1000.0)
    } else if secs < 60.0 {
        format!("{secs:.3}s")
    } else {
        let mins = (secs / 60.0).floor() as u64;
        let remaining = secs - (mins as f64 * 60.0);
        format!("{mins}m{remaining:.1}s")
    }
}

/// Write a polynomial to a file, one `index: coefficient` line each.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_to_file(path: &str, value: &Polynomial) -> io::Result<()> {
    let mut file = std::fs::File::create(path)?;
    write!(file, "{value}")?;
    Ok(())
}
