use std::io;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use indicatif::{ProgressBar, ProgressStyle};

use heic_compressor::cli::Cli;
use heic_compressor::orchestrator::{Orchestrator, Outcome};
use heic_compressor::prompt;
use heic_compressor_core::converter::Converter;
use heic_compressor_core::walker::Walker;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Init logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    let raw_input = match &cli.path {
        Some(path) => path.clone(),
        None => {
            let stdin = io::stdin();
            prompt::read_path(&mut stdin.lock(), &mut io::stdout())
                .context("Failed to read path from standard input")?
        }
    };

    let converter = Converter::new(cli.to_settings());
    log::debug!(
        "Quality {} (lossless: {})",
        converter.quality(),
        converter.settings().lossless()
    );

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(
        ProgressStyle::with_template("{spinner:.green} {pos} converted {msg}")?
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ "),
    );
    spinner.enable_steady_tick(Duration::from_millis(120));

    let orchestrator = Orchestrator::new(
        converter,
        Walker::new(cli.to_walk_options()),
        cli.batch_mode(),
    )
    .with_progress(spinner);

    match orchestrator.run(&raw_input).context("Batch aborted")? {
        Outcome::NotFound(_) => {}
        Outcome::Completed(report) => report.print_summary(),
    }

    Ok(())
}
