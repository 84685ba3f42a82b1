/// Soundcheck - default audio output activity check
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use soundcheck::SystemAudio;
use soundcheck_cli::{exit_status, render, Cli};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.default_log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let service = SystemAudio;
    tracing::debug!(service = service.name(), "Probing default output device");

    let verdict = soundcheck::inspect(&service);

    if !cli.quiet {
        let output = render(&verdict, cli.format)?;
        writeln!(std::io::stdout().lock(), "{output}")?;
    }

    Ok(ExitCode::from(exit_status(&verdict)))
}
