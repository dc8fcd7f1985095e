// File: cli.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::config::{ErrorPolicy, FileScope, OutputFormat, ProbeConfig};
use crate::coordinator::{Coordinator, RunReport};
use crate::error::{ProbeError, ProbeResult};
use crate::getstate::GetState;
use crate::input::read_lines;
use crate::sink::ResultSink;
use chrono::{DateTime, Utc};
use clap::Parser;
use log::{warn, LevelFilter};
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Parser, Debug)]
#[command(
    name = env!("CARGO_PKG_NAME"),
    version = env!("CARGO_PKG_VERSION"),
    author = env!("CARGO_PKG_AUTHORS"),
    about = env!("CARGO_PKG_DESCRIPTION"),
)]
pub struct Cli {
    #[arg(short = 'p', long = "payloads", help = "Path to the payload file")]
    pub payloads: Option<PathBuf>,

    #[arg(short = 'H', long = "headers", help = "Path to the headers file")]
    pub headers: Option<PathBuf>,

    #[arg(short = 'l', long = "list", help = "Path to the URLs file")]
    pub url_list: Option<PathBuf>,

    #[arg(short = 'u', long = "url", help = "Single URL")]
    pub url: Option<String>,

    #[arg(
        short = 'm',
        long = "mode",
        help = "Mode: 'single' for a single URL, 'list' for a list of URLs"
    )]
    pub mode: Option<String>,

    #[arg(short = 'o', long = "output", help = "Path to the output file")]
    pub output: Option<PathBuf>,

    #[arg(short = 'v', long = "verbose", help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(
        short = 't',
        long = "threads",
        help = "Maximum number of targets probed at once (default: all)"
    )]
    pub threads: Option<usize>,

    #[arg(long = "log-all", help = "Write every trial to the output file")]
    pub log_all: bool,

    #[arg(
        long = "format",
        value_enum,
        default_value_t = OutputFormat::Text,
        help = "Output file line format"
    )]
    pub format: OutputFormat,

    #[arg(
        long = "continue-on-error",
        help = "Skip only the failed trial instead of abandoning the target"
    )]
    pub continue_on_error: bool,

    #[arg(long = "no-color", help = "Disable colored output")]
    pub no_color: bool,

    #[arg(
        short = 's',
        long = "suppress-stats",
        help = "Suppress the run summary"
    )]
    pub suppress_stats: bool,

    #[arg(long = "log-level", default_value = "warn")]
    pub log_level: String,
}

impl Cli {
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            return LevelFilter::Debug;
        }
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Warn)
    }

    pub fn probe_config(&self) -> ProbeConfig {
        let mut config = ProbeConfig::new();
        config.set_max_concurrency(self.threads);
        config.set_output_format(self.format);
        if self.log_all {
            config.set_file_scope(FileScope::All);
        }
        if self.continue_on_error {
            config.set_error_policy(ErrorPolicy::Continue);
        }
        config
    }

    /// The single URL (if any) followed by the URL list (if any).
    pub fn targets(&self) -> ProbeResult<Vec<String>> {
        let mut targets = Vec::new();
        if let Some(url) = &self.url {
            targets.push(url.trim().to_string());
        }
        if let Some(path) = &self.url_list {
            targets.extend(read_lines(path)?);
        }
        Ok(targets)
    }

    /// `-m` is advisory; a value that contradicts the given flags only earns a warning.
    pub fn mode_warning(&self) -> Option<String> {
        let mode = self.mode.as_deref()?;
        match mode.trim().to_ascii_lowercase().as_str() {
            "single" if self.url_list.is_some() => Some(
                "Mode 'single' given together with a URL list; probing every listed URL"
                    .to_string(),
            ),
            "list" if self.url_list.is_none() => {
                Some("Mode 'list' given without a URL list; probing the single URL".to_string())
            }
            "single" | "list" => None,
            _ => Some(format!("Unknown mode '{}', ignoring it", mode)),
        }
    }
}

/// Runs a probe with results going to stdout.
pub async fn run(cli: &Cli) -> ProbeResult<RunReport> {
    let sink = ResultSink::stdout().with_color(!cli.no_color);
    run_with_sink(cli, sink).await
}

pub async fn run_with_sink(cli: &Cli, sink: ResultSink) -> ProbeResult<RunReport> {
    let (payloads_path, headers_path) = match (&cli.payloads, &cli.headers) {
        (Some(payloads), Some(headers)) => (payloads, headers),
        _ => {
            return Err(ProbeError::Configuration(
                "Payloads file and Headers file paths are required.".to_string(),
            ))
        }
    };
    if cli.url.is_none() && cli.url_list.is_none() {
        return Err(ProbeError::Configuration(
            "A target URL (-u) or a URL list file (-l) is required.".to_string(),
        ));
    }
    if let Some(warning) = cli.mode_warning() {
        warn!("{}", warning);
    }

    if cli.no_color {
        colored::control::set_override(false);
    }

    let payloads = read_lines(payloads_path)?;
    let headers = read_lines(headers_path)?;
    let targets = cli.targets()?;

    let config = cli.probe_config();
    let mut sink = sink.configured(&config);
    if let Some(path) = &cli.output {
        sink = sink.create_file(path)?;
    }

    let state = Arc::new(GetState::new());
    state.mark_start();
    let coordinator = Coordinator::new(config, Arc::clone(&state));
    let report = coordinator
        .run_all(&targets, &payloads, &headers, sink)
        .await?;
    state.mark_end();

    if !cli.suppress_stats {
        println!("{}", summary_line(&state, targets.len()));
    }

    Ok(report)
}

fn human_readable_time(millis: u64) -> String {
    DateTime::<Utc>::from_timestamp_millis(millis as i64)
        .map(|t| t.format("%Y-%m-%d %H:%M:%S").to_string())
        .unwrap_or_else(|| "unknown".to_string())
}

pub fn summary_line(state: &GetState, targets: usize) -> String {
    format!(
        "{} trials against {} targets. Started at {} / Ended at {}. {} ms. Completed: {}. Vulnerable: {}. Failed: {}. Aborted targets: {}.",
        state.total_trials(),
        targets,
        human_readable_time(state.start_time()),
        human_readable_time(state.end_time()),
        state.elapsed_millis(),
        state.completed_trials(),
        state.vulnerable_trials(),
        state.failed_trials(),
        state.aborted_workers()
    )
}
