//! Application configuration from CLI flags and environment.

use clap::Parser;

use crate::errors::AppError;

/// polyfft: multiply complex polynomials with the FFT and cross-check the
/// products against schoolbook convolution.
#[derive(Parser, Debug)]
#[command(
    name = "polyfft",
    version,
    after_help = "Products are compared after rounding every component to 10 decimal \
                  digits. With large random operands an FFT product that is accurate to \
                  about 1e-12 can still round differently from the convolution product, \
                  so some trials may be reported as Nonequival."
)]
pub struct AppConfig {
    /// Run the five worked examples instead of random trials.
    #[arg(long)]
    pub examples: bool,

    /// Number of random trials.
    #[arg(short = 'n', long, default_value = "100", env = "POLYFFT_ITERATIONS")]
    pub iterations: usize,

    /// Coefficient count of the first random operand.
    #[arg(long, default_value = "500")]
    pub len_a: usize,

    /// Coefficient count of the second random operand.
    #[arg(long, default_value = "500")]
    pub len_b: usize,

    /// Upper bound (exclusive) of random real and imaginary parts.
    #[arg(long, default_value = "1.0")]
    pub max_value: f64,

    /// Seed for reproducible trials (entropy-seeded when absent).
    #[arg(long, env = "POLYFFT_SEED")]
    pub seed: Option<u64>,

    /// Also check the recursive transform against the iterative one.
    #[arg(long)]
    pub recursive_check: bool,

    /// Print the coefficients that differ in nonequivalent trials.
    #[arg(long)]
    pub show_mismatches: bool,

    /// Exit with a failure code if any trial is nonequivalent.
    #[arg(long)]
    pub fail_on_mismatch: bool,

    /// Verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode (only products and the summary).
    #[arg(short, long)]
    pub quiet: bool,

    /// Write the last computed product to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Reject settings that cannot produce a valid trial.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.examples {
            return Ok(());
        }
        if self.len_a == 0 || self.len_b == 0 {
            return Err(AppError::Config(
                "operand lengths must be at least 1".into(),
            ));
        }
        if !self.max_value.is_finite() || self.max_value <= 0.0 {
            return Err(AppError::Config(format!(
                "max value must be a positive finite number, got {}",
                self.max_value
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> AppConfig {
        AppConfig::try_parse_from(std::iter::once("polyfft").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn default_trial_shape() {
        let config = parse(&[]);
        assert_eq!(config.len_a, 500);
        assert_eq!(config.len_b, 500);
        assert!((config.max_value - 1.0).abs() < f64::EPSILON);
        assert!(!config.examples);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_empty_operands() {
        let config = parse(&["--len-a", "0"]);
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn rejects_non_positive_max_value() {
        let config = parse(&["--max-value", "0"]);
        assert!(config.validate().is_err());
        let config = parse(&["--max-value=-2.5"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn examples_skip_trial_validation() {
        let config = parse(&["--examples", "--len-a", "0"]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn help_describes_oracle_and_rounding() {
        use clap::CommandFactory;
        let help = AppConfig::command().render_help().to_string();
        assert!(help.contains("schoolbook convolution"), "{help}");
        assert!(help.contains("10 decimal digits"), "{help}");
    }
}
