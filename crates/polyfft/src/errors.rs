//! Error handling and exit codes.

use polyfft_core::constants::exit_codes;
use polyfft_core::FftError;

/// Errors raised by the driver itself.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Invalid command-line configuration.
    #[error("configuration error: {0}")]
    Config(String),

    /// Some trials disagreed with the convolution oracle.
    #[error("{count} of {total} trials were nonequivalent")]
    Mismatch { count: usize, total: usize },
}

/// Map an error to the process exit code.
pub fn handle_error(err: &anyhow::Error) -> i32 {
    if let Some(app) = err.downcast_ref::<AppError>() {
        return match app {
            AppError::Config(_) => exit_codes::ERROR_CONFIG,
            AppError::Mismatch { .. } => exit_codes::ERROR_MISMATCH,
        };
    }
    if err.downcast_ref::<FftError>().is_some() {
        return exit_codes::ERROR_INVALID_INPUT;
    }
    exit_codes::ERROR_GENERIC
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(handle_error(&AppError::Config("bad".into()).into()), 4);
        assert_eq!(
            handle_error(&AppError::Mismatch { count: 1, total: 3 }.into()),
            3
        );
        assert_eq!(handle_error(&FftError::EmptyOperand.into()), 2);
        assert_eq!(handle_error(&anyhow::anyhow!("disk full")), 1);
    }

    #[test]
    fn context_keeps_code() {
        let err = anyhow::Error::from(FftError::InvalidLength { len: 3 }).context("trial 7");
        assert_eq!(handle_error(&err), 2);
    }
}
