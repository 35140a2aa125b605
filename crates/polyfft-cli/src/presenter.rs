//! CLI result presenter.

use std::time::Duration;

use polyfft_core::Polynomial;

use crate::output::{format_duration, format_example, format_mismatches};
use crate::ui::styled_verdict;

/// Outcome of one random trial: FFT product against the convolution oracle.
#[derive(Debug, Clone)]
pub struct TrialResult {
    /// 1-based trial number.
    pub index: usize,
    /// Coefficient counts of the operands.
    pub lhs_len: usize,
    pub rhs_len: usize,
    /// FFT product.
    pub product: Polynomial,
    /// Schoolbook product.
    pub oracle: Polynomial,
    /// Indices where the two products differ after rounding.
    pub mismatches: Vec<usize>,
    /// Whether the recursive transform agreed with the iterative one, when
    /// that check was requested.
    pub recursive_agrees: Option<bool>,
    pub fft_duration: Duration,
    pub convolution_duration: Duration,
}

impl TrialResult {
    /// `true` when every requested check passed.
    #[must_use]
    pub fn is_equivalent(&self) -> bool {
        self.mismatches.is_empty() && self.recursive_agrees != Some(false)
    }
}

/// Trait for presenting driver results to the user.
pub trait ResultPresenter {
    /// Present one of the fixed worked examples.
    fn present_example(&self, index: usize, p: &Polynomial, q: &Polynomial, product: &Polynomial);

    /// Present a random trial.
    fn present_trial(&self, trial: &TrialResult);

    /// Present the summary over all trials.
    fn present_summary(&self, trials: &[TrialResult]);
}

/// Summary line: how many trials matched the oracle.
#[must_use]
pub fn format_summary(trials: &[TrialResult]) -> String {
    let equal = trials.iter().filter(|t| t.is_equivalent()).count();
    format!(
        "{equal} of {} trials equivalent ({} nonequivalent)",
        trials.len(),
        trials.len() - equal
    )
}

/// CLI result presenter.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
    show_mismatches: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool, show_mismatches: bool) -> Self {
        Self {
            verbose,
            quiet,
            show_mismatches,
        }
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_example(&self, index: usize, p: &Polynomial, q: &Polynomial, product: &Polynomial) {
        if self.quiet {
            print!("{product}");
            return;
        }
        println!("{}", format_example(index, p, q, product));
    }

    fn present_trial(&self, trial: &TrialResult) {
        if self.quiet {
            return;
        }

        println!("{}", styled_verdict(trial.is_equivalent()));

        if self.verbose {
            println!(
                "  trial {}: {} x {} coefficients, fft {}, convolution {}",
                trial.index,
                trial.lhs_len,
                trial.rhs_len,
                format_duration(trial.fft_duration),
                format_duration(trial.convolution_duration),
            );
            if trial.recursive_agrees == Some(false) {
                println!("  recursive transform disagreed with iterative transform");
            }
        }

        if self.show_mismatches && !trial.mismatches.is_empty() {
            print!(
                "{}",
                format_mismatches(&trial.mismatches, &trial.product, &trial.oracle)
            );
        }
    }

    fn present_summary(&self, trials: &[TrialResult]) {
        println!("{}", format_summary(trials));
    }
}
