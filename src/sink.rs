// File: sink.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::config::{FileScope, OutputFormat, ProbeConfig};
use crate::error::{ProbeError, ProbeResult};
use crate::trial::TrialResult;
use colored::*;
use log::debug;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub const DEFAULT_CHANNEL_CAPACITY: usize = 1024;

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SinkTotals {
    pub results: u64,
    pub vulnerable: u64,
    pub file_lines: u64,
}

/// Owns the console writer and the optional output file.
///
/// Only the sink task writes; workers hand results over through the
/// channel returned by [`ResultSink::spawn`].
pub struct ResultSink {
    console: Box<dyn Write + Send>,
    file: Option<Box<dyn Write + Send>>,
    file_scope: FileScope,
    output_format: OutputFormat,
    colored: bool,
    totals: SinkTotals,
}

impl ResultSink {
    pub fn new(console: Box<dyn Write + Send>) -> Self {
        ResultSink {
            console,
            file: None,
            file_scope: FileScope::default(),
            output_format: OutputFormat::default(),
            colored: false,
            totals: SinkTotals::default(),
        }
    }

    pub fn stdout() -> Self {
        Self::new(Box::new(io::stdout())).with_color(true)
    }

    /// Takes file scope and line format from the config.
    pub fn configured(mut self, config: &ProbeConfig) -> Self {
        self.file_scope = config.file_scope();
        self.output_format = config.output_format();
        self
    }

    pub fn with_file(mut self, file: Box<dyn Write + Send>) -> Self {
        self.file = Some(file);
        self
    }

    /// Creates (truncating) the output file at `path`.
    pub fn create_file(self, path: &Path) -> ProbeResult<Self> {
        let file = File::create(path).map_err(|e| {
            ProbeError::Output(io::Error::new(
                e.kind(),
                format!("cannot create {}: {}", path.display(), e),
            ))
        })?;
        Ok(self.with_file(Box::new(BufWriter::new(file))))
    }

    pub fn with_scope(mut self, file_scope: FileScope) -> Self {
        self.file_scope = file_scope;
        self
    }

    pub fn with_format(mut self, output_format: OutputFormat) -> Self {
        self.output_format = output_format;
        self
    }

    pub fn with_color(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    pub fn has_file(&self) -> bool {
        self.file.is_some()
    }

    pub fn totals(&self) -> SinkTotals {
        self.totals
    }

    pub fn record(&mut self, result: &TrialResult) -> io::Result<()> {
        self.console
            .write_all(console_block(result, self.colored).as_bytes())?;

        self.totals.results += 1;
        if result.verdict().is_vulnerable() {
            self.totals.vulnerable += 1;
        }

        let admitted = match self.file_scope {
            FileScope::All => true,
            FileScope::VulnerableOnly => result.verdict().is_vulnerable(),
        };
        if let (Some(file), true) = (self.file.as_mut(), admitted) {
            let line = file_line(result, self.output_format)?;
            writeln!(file, "{}", line)?;
            self.totals.file_lines += 1;
        }
        Ok(())
    }

    /// Flushes both writers and closes the file.
    pub fn finish(mut self) -> io::Result<SinkTotals> {
        self.console.flush()?;
        if let Some(mut file) = self.file.take() {
            file.flush()?;
        }
        Ok(self.totals)
    }

    /// Moves the sink onto its own task and returns the sender side.
    ///
    /// The task ends once every sender is dropped and the queue is drained.
    pub fn spawn(
        self,
        capacity: usize,
    ) -> (mpsc::Sender<TrialResult>, JoinHandle<io::Result<SinkTotals>>) {
        let (tx, mut rx) = mpsc::channel::<TrialResult>(capacity.max(1));
        let mut sink = self;
        let handle = tokio::spawn(async move {
            while let Some(result) = rx.recv().await {
                sink.record(&result)?;
            }
            debug!("Result channel closed, flushing sink");
            sink.finish()
        });
        (tx, handle)
    }
}

pub fn console_block(result: &TrialResult, colored: bool) -> String {
    let url = format!("Testing for URL: {}", result.url());
    let header = format!("Testing for Header: {}", result.header());
    let payload = format!("Payload: {}", result.payload());
    let time = format!("Response Time: {:.2} seconds", result.elapsed_secs());
    let status = format!("Status: {}", result.verdict());

    if colored {
        format!(
            "{}\n{}\n{}\n{}\n{}\n\n",
            url.cyan(),
            header.yellow(),
            payload.magenta(),
            time.blue(),
            status.green()
        )
    } else {
        format!("{}\n{}\n{}\n{}\n{}\n\n", url, header, payload, time, status)
    }
}

pub fn file_line(result: &TrialResult, format: OutputFormat) -> io::Result<String> {
    match format {
        OutputFormat::Text => Ok(format!(
            "URL: {}, Header: {}, Payload: {}, Response Time: {:.2} seconds, Status: {}",
            result.url(),
            result.header(),
            result.payload(),
            result.elapsed_secs(),
            result.verdict()
        )),
        OutputFormat::JsonLines => Ok(serde_json::to_string(result)?),
    }
}
