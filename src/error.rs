// File: error.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum ProbeError {
    Configuration(String),
    Input {
        path: PathBuf,
        source: std::io::Error,
    },
    InvalidTarget(String),
    InvalidHeaderName(String),
    InvalidPayload(String),
    Client(reqwest::Error),
    Output(std::io::Error),
}

impl ProbeError {
    /// Process exit code for a run that ended with this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Configuration(_) => 2,
            _ => 1,
        }
    }
}

impl fmt::Display for ProbeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Configuration(msg) => write!(f, "Error: {}", msg),
            Self::Input { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            Self::InvalidTarget(msg) => write!(f, "Invalid target URL: {}", msg),
            Self::InvalidHeaderName(name) => write!(f, "Invalid header name: {:?}", name),
            Self::InvalidPayload(payload) => {
                write!(f, "Payload is not a valid header value: {:?}", payload)
            }
            Self::Client(e) => write!(f, "Failed to build HTTP client: {}", e),
            Self::Output(e) => write!(f, "Output error: {}", e),
        }
    }
}

impl std::error::Error for ProbeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Input { source, .. } => Some(source),
            Self::Client(e) => Some(e),
            Self::Output(e) => Some(e),
            Self::Configuration(_)
            | Self::InvalidTarget(_)
            | Self::InvalidHeaderName(_)
            | Self::InvalidPayload(_) => None,
        }
    }
}

impl From<reqwest::Error> for ProbeError {
    fn from(error: reqwest::Error) -> Self {
        Self::Client(error)
    }
}

impl From<std::io::Error> for ProbeError {
    fn from(error: std::io::Error) -> Self {
        Self::Output(error)
    }
}

pub type ProbeResult<T> = Result<T, ProbeError>;
