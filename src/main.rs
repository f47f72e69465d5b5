use clap::Parser;
use std::process::ExitCode;
use zig_installer::{Cli, colors, output};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    // Malformed flags exit here, before anything else runs
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .init();
    colors::init_colors();

    let config = cli.into_config();

    match zig_installer::run(&config).await {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            output::error(&e);
            ExitCode::FAILURE
        }
    }
}
