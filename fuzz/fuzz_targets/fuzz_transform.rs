#![no_main]

use libfuzzer_sys::fuzz_target;

use polyfft_core::fft_core::{transform, Direction};
use polyfft_core::fft_recursion::fft_recursive;
use polyfft_core::{Complex64, FftError, Polynomial};

fuzz_target!(|data: &[u8]| {
    let p: Polynomial = data
        .iter()
        .take(1024)
        .map(|&b| Complex64::new(f64::from(b as i8), f64::from(b >> 4)))
        .collect();

    // Non-power-of-two lengths must be rejected, never panic
    let forward = match transform(&p, Direction::Forward) {
        Ok(values) => values,
        Err(FftError::InvalidLength { len }) => {
            assert!(!len.is_power_of_two());
            return;
        }
        Err(e) => panic!("unexpected error: {e}"),
    };

    let n = p.len();
    let back = transform(&forward, Direction::Inverse).unwrap().scale_down(n);
    assert!(back.approx_eq(&p));

    let rec = fft_recursive(&p, Direction::Forward).unwrap();
    let cross = transform(&rec, Direction::Inverse).unwrap().scale_down(n);
    assert!(cross.approx_eq(&p));
});
