#![no_main]

use libfuzzer_sys::fuzz_target;

use polyfft_core::convolution::mul_by_convolution;
use polyfft_core::fft::multiply;
use polyfft_core::{Complex64, FftError, Polynomial};

/// Two bytes per coefficient, read as signed quarter-integers.
fn decode(bytes: &[u8]) -> Polynomial {
    bytes
        .chunks_exact(2)
        .map(|pair| {
            Complex64::new(
                f64::from(pair[0] as i8) / 4.0,
                f64::from(pair[1] as i8) / 4.0,
            )
        })
        .collect()
}

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte splits the rest into the two operands; cap sizes for speed
    let rest = &data[1..data.len().min(1 + 2 * 256)];
    let split = (usize::from(data[0]) * 2).min(rest.len());
    let p = decode(&rest[..split]);
    let q = decode(&rest[split..]);

    match multiply(&p, &q) {
        Ok(fast) => {
            let slow = mul_by_convolution(&p, &q);
            assert!(fast.approx_eq(&slow), "mismatch at {:?}", fast.mismatches(&slow));
        }
        Err(FftError::EmptyOperand) => {
            assert!(p.trimmed().is_empty() || q.trimmed().is_empty());
        }
        Err(e) => panic!("unexpected error: {e}"),
    }
});
