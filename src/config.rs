// File: config.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use clap::ValueEnum;
use reqwest::Method;
use std::time::Duration;

pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_WINDOW_LOW: f64 = 25.0;
pub const DEFAULT_WINDOW_HIGH: f64 = 50.0;

/// Which trials the output file receives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileScope {
    #[default]
    VulnerableOnly,
    All,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    #[value(name = "jsonl")]
    JsonLines,
}

/// What a worker does after a transport error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ErrorPolicy {
    /// Abandon every remaining trial for the target.
    #[default]
    Abort,
    /// Drop only the failed trial and move on to the next one.
    Continue,
}

#[derive(Debug, Clone)]
pub struct ProbeConfig {
    timeout: Duration,
    window_low: f64,
    window_high: f64,
    method: Method,
    file_scope: FileScope,
    output_format: OutputFormat,
    error_policy: ErrorPolicy,
    max_concurrency: Option<usize>,
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl ProbeConfig {
    pub fn new() -> Self {
        Self {
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            window_low: DEFAULT_WINDOW_LOW,
            window_high: DEFAULT_WINDOW_HIGH,
            method: Method::GET,
            file_scope: FileScope::default(),
            output_format: OutputFormat::default(),
            error_policy: ErrorPolicy::default(),
            max_concurrency: None,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = timeout;
    }

    pub fn window_low(&self) -> f64 {
        self.window_low
    }

    pub fn window_high(&self) -> f64 {
        self.window_high
    }

    /// Sets the inclusive delay window. Bounds given in the wrong order are swapped.
    pub fn set_window(&mut self, low: f64, high: f64) {
        if low <= high {
            self.window_low = low;
            self.window_high = high;
        } else {
            self.window_low = high;
            self.window_high = low;
        }
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn file_scope(&self) -> FileScope {
        self.file_scope
    }

    pub fn set_file_scope(&mut self, file_scope: FileScope) {
        self.file_scope = file_scope;
    }

    pub fn output_format(&self) -> OutputFormat {
        self.output_format
    }

    pub fn set_output_format(&mut self, output_format: OutputFormat) {
        self.output_format = output_format;
    }

    pub fn error_policy(&self) -> ErrorPolicy {
        self.error_policy
    }

    pub fn set_error_policy(&mut self, error_policy: ErrorPolicy) {
        self.error_policy = error_policy;
    }

    pub fn max_concurrency(&self) -> Option<usize> {
        self.max_concurrency
    }

    /// `None` or `Some(0)` lets every target run at once.
    pub fn set_max_concurrency(&mut self, max_concurrency: Option<usize>) {
        self.max_concurrency = max_concurrency.filter(|&n| n > 0);
    }
}
