//! Console styling for the driver's report lines.

use console::style;

/// Check if color output is disabled via `NO_COLOR` env var.
#[must_use]
pub fn is_color_disabled() -> bool {
    std::env::var("NO_COLOR").is_ok()
}

/// Word printed for a trial: `Equival` when the FFT product matched the
/// convolution oracle, `Nonequival` otherwise.
#[must_use]
pub fn verdict_word(equal: bool) -> &'static str {
    if equal {
        "Equival"
    } else {
        "Nonequival"
    }
}

/// Verdict word, colored unless `NO_COLOR` is set.
#[must_use]
pub fn styled_verdict(equal: bool) -> String {
    let word = verdict_word(equal);
    if is_color_disabled() {
        word.to_string()
    } else if equal {
        style(word).green().to_string()
    } else {
        style(word).red().bold().to_string()
    }
}

/// Print an error message to stderr.
pub fn print_error(text: &str) {
    if is_color_disabled() {
        eprintln!("[ERROR] {text}");
    } else {
        eprintln!("{} {text}", style("[ERROR]").red().bold());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verdict_words() {
        assert_eq!(verdict_word(true), "Equival");
        assert_eq!(verdict_word(false), "Nonequival");
    }

    #[test]
    fn styled_verdict_keeps_word() {
        assert!(styled_verdict(true).contains("Equival"));
        assert!(styled_verdict(false).contains("Nonequival"));
    }

    #[test]
    fn print_error_does_not_panic() {
        print_error("polynomial must have at least one coefficient");
    }
}
