// File: lib.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(clippy::uninlined_format_args)]

pub mod classifier;
pub mod cli;
pub mod config;
pub mod coordinator;
pub mod error;
pub mod getstate;
pub mod input;
pub mod sink;
pub mod trial;
pub mod worker;

#[cfg(test)]
mod classifier_tests;
#[cfg(test)]
mod config_tests;

pub use classifier::classify;
pub use config::ProbeConfig;
pub use coordinator::{Coordinator, RunReport};
pub use error::{ProbeError, ProbeResult};
pub use trial::{TrialResult, Verdict};
