use anyhow::{Context, Result};
use changecalc_classify::OutputFormat;
use changecalc_core::{Config, EmitMode};
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "changecalc",
    version,
    about = "Classify the files changed in a pull request by status"
)]
pub struct Cli {
    /// Pull request files JSON document, or `-` for stdin
    #[arg(short, long, env = "CHANGECALC_INPUT")]
    pub input: Option<PathBuf>,

    /// Output format: csv, space_delimited, json
    #[arg(short, long, env = "CHANGECALC_FORMAT")]
    pub format: Option<OutputFormat>,

    /// How results are written: json, key-value
    #[arg(long)]
    pub emit: Option<EmitMode>,

    /// Write results to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Append to the output file instead of truncating it
    #[arg(long, requires = "output")]
    pub append: bool,

    /// Truncate the output file even if the config enables appending
    #[arg(long, conflicts_with = "append")]
    pub no_append: bool,

    /// Repository owner
    #[arg(long)]
    pub repo_owner: Option<String>,

    /// Repository name
    #[arg(long)]
    pub repo_name: Option<String>,

    /// Pull request number
    #[arg(long)]
    pub pull_request: Option<u64>,

    /// Specify configuration file path
    #[arg(long, env = "CHANGECALC_CONFIG")]
    pub config: Option<PathBuf>,

    /// Log level
    #[arg(long, env = "CHANGECALC_LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Effective settings after applying CLI overrides on top of the config
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub format: OutputFormat,
    pub emit: EmitMode,
    pub output: Option<PathBuf>,
    pub append: bool,
    pub log_level: String,
    pub log_file: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &Config) -> Result<Self> {
        let format = match cli.format {
            Some(format) => format,
            None => {
                let token = config.classify().format;
                token
                    .parse::<OutputFormat>()
                    .with_context(|| format!("Invalid [classify] format in config: {}", token))?
            }
        };

        let output_config = config.output();
        let log_config = config.log();

        Ok(Self {
            format,
            emit: cli.emit.unwrap_or(output_config.emit),
            output: cli.output.clone(),
            append: cli.output.is_some()
                && !cli.no_append
                && (cli.append || output_config.append),
            log_level: cli.log_level.clone().unwrap_or(log_config.level),
            log_file: log_config.file,
        })
    }
}
