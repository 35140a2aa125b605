//! polyfft: FFT polynomial multiplication demo driver.

use polyfft_lib::{app, config, errors};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        polyfft_cli::ui::print_error(&format!("{err:#}"));
        std::process::exit(errors::handle_error(&err));
    }
}
