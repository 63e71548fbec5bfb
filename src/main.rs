use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use abi_exporter::cli::Cli;
use abi_exporter::config::Config;
use abi_exporter::exporter;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.debug);

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:?}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: &Cli) -> Result<()> {
    let config = Config::from_cli(cli)?;
    let summary = exporter::run(&config).await?;
    if !summary.is_success() {
        anyhow::bail!(
            "failed to export {} of {} artifacts",
            summary.failed.len(),
            config.artifacts.len()
        );
    }
    info!(
        "exported {} ABIs to {}",
        summary.exported.len(),
        config.output_root.display()
    );
    Ok(())
}

fn init_tracing(debug: bool) {
    let default_level = if debug { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}
