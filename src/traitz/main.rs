mod cli;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let args = cli::setup::Cli::parse();

    // Warnings reach users as command messages; the log repeats them only when verbose.
    let default_level = if args.verbose { "traitz=debug" } else { "error" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .init();

    if let Err(e) = cli::commands::run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
