//! Application entry point and dispatch.

use std::time::Instant;

use anyhow::{Context, Result};
use rand::Rng;

use polyfft_cli::generator::{make_rng, random_polynomial};
use polyfft_cli::output::write_to_file;
use polyfft_cli::presenter::{CLIResultPresenter, ResultPresenter, TrialResult};
use polyfft_core::convolution::mul_by_convolution;
use polyfft_core::fft::multiply;
use polyfft_core::fft_core::{transform, Direction};
use polyfft_core::fft_recursion::fft_recursive;
use polyfft_core::{Complex64, FftError, Polynomial};

use crate::config::AppConfig;
use crate::errors::AppError;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        polyfft_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(());
    }

    config.validate()?;
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet, config.show_mismatches);

    let last = if config.examples {
        run_examples(&presenter)?
    } else {
        run_trials(config, &presenter)?
    };

    if let (Some(path), Some(product)) = (&config.output, &last) {
        write_to_file(path, product).with_context(|| format!("writing product to {path}"))?;
    }

    Ok(())
}

/// The five worked examples: `(p, q)` pairs covering constants, the
/// imaginary unit, linear factors, complex coefficients, and operands of
/// mismatched non-power-of-two lengths.
#[must_use]
pub fn example_cases() -> Vec<(Polynomial, Polynomial)> {
    let c = Complex64::new;
    vec![
        (
            Polynomial::from_reals([-2.0]),
            Polynomial::from_reals([15.0, 0.0, 0.0]),
        ),
        (
            Polynomial::new(vec![Complex64::i()]),
            Polynomial::from_reals([3.0]),
        ),
        (
            Polynomial::from_reals([1.0, 3.0]),
            Polynomial::from_reals([-2.0, 1.0]),
        ),
        (
            Polynomial::new(vec![c(2.0, 4.0), c(2.0, 8.0), c(2.0, 3.0)]),
            Polynomial::new(vec![c(2.0, 0.0), c(7.0, 3.0)]),
        ),
        (
            Polynomial::from_reals([1.0, 2.0]),
            Polynomial::from_reals([1.0, 2.0, 3.0, 4.0, 5.0]),
        ),
    ]
}

fn run_examples(presenter: &dyn ResultPresenter) -> Result<Option<Polynomial>> {
    let mut last = None;
    for (i, (p, q)) in example_cases().into_iter().enumerate() {
        let product = multiply(&p, &q).with_context(|| format!("example {}", i + 1))?;
        presenter.present_example(i + 1, &p, &q, &product);
        last = Some(product);
    }
    Ok(last)
}

fn run_trials(config: &AppConfig, presenter: &dyn ResultPresenter) -> Result<Option<Polynomial>> {
    let mut rng = make_rng(config.seed);
    let mut trials = Vec::with_capacity(config.iterations);

    for index in 1..=config.iterations {
        let trial = run_trial(index, &mut rng, config).with_context(|| format!("trial {index}"))?;
        presenter.present_trial(&trial);
        trials.push(trial);
    }
    presenter.present_summary(&trials);

    let failed = trials.iter().filter(|t| !t.is_equivalent()).count();
    if failed > 0 {
        tracing::warn!(failed, total = trials.len(), "nonequivalent trials");
        if config.fail_on_mismatch {
            return Err(AppError::Mismatch {
                count: failed,
                total: trials.len(),
            }
            .into());
        }
    }

    Ok(trials.pop().map(|t| t.product))
}

/// Multiply two random operands with the FFT and with the convolution
/// oracle, and compare.
pub fn run_trial<R: Rng + ?Sized>(
    index: usize,
    rng: &mut R,
    config: &AppConfig,
) -> Result<TrialResult, FftError> {
    let a = random_polynomial(rng, config.len_a, config.max_value);
    let b = random_polynomial(rng, config.len_b, config.max_value);

    let start = Instant::now();
    let product = multiply(&a, &b)?;
    let fft_duration = start.elapsed();

    let start = Instant::now();
    let oracle = mul_by_convolution(&a, &b);
    let convolution_duration = start.elapsed();

    let mismatches = product.mismatches(&oracle);
    if !mismatches.is_empty() {
        tracing::debug!(
            trial = index,
            count = mismatches.len(),
            first = mismatches[0],
            "fft product differs from convolution"
        );
    }

    let recursive_agrees = if config.recursive_check {
        Some(recursive_agrees(&a)?)
    } else {
        None
    };

    Ok(TrialResult {
        index,
        lhs_len: a.len(),
        rhs_len: b.len(),
        product,
        oracle,
        mismatches,
        recursive_agrees,
        fft_duration,
        convolution_duration,
    })
}

/// Invert the recursive forward transform of `p` with the iterative
/// inverse and check that `p` comes back.
fn recursive_agrees(p: &Polynomial) -> Result<bool, FftError> {
    let padded = p.padded_to_power_of_two();
    let n = padded.len();
    let values = fft_recursive(&padded, Direction::Forward)?;
    let back = transform(&values, Direction::Inverse)?.scale_down(n);
    Ok(back.approx_eq(&padded))
}
