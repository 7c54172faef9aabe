mod cli;
mod output;
mod source;

use anyhow::{Context, Result};
use changecalc_classify::classify;
use changecalc_core::{init_logging, Config};
use clap::Parser;
use cli::{Cli, Settings};
use source::{ChangeSource, JsonFileSource, SourceConfig};
use tracing::{debug, info, warn};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref()).context("Failed to load configuration")?;
    let settings = Settings::resolve(&cli, &config)?;
    let _logging = init_logging(&settings.log_level, settings.log_file.as_deref());

    if let Some(warning) = config.version_warning() {
        warn!("{}", warning);
    }
    debug!(?settings, "Resolved settings");

    let source = JsonFileSource::new(SourceConfig {
        owner: cli.repo_owner,
        repo: cli.repo_name,
        pull_request: cli.pull_request,
        input: cli.input,
    });
    let records = source.fetch()?;

    info!(
        "Classifying {} changed files for {} as {}",
        records.len(),
        source.config().describe(),
        settings.format
    );
    let result = classify(&records, settings.format)
        .with_context(|| format!("Failed to classify changes for {}", source.config().describe()))?;

    let content = output::render(&result, settings.emit)?;
    output::write_output(&content, settings.output.as_deref(), settings.append)?;

    Ok(())
}
