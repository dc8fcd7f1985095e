// File: worker.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::config::{ErrorPolicy, ProbeConfig};
use crate::error::ProbeResult;
use crate::getstate::GetState;
use crate::trial::{TrialPlan, TrialResult};
use log::{debug, error, info};
use reqwest::Url;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;

/// Everything one worker needs for its target. Owned by that worker alone.
#[derive(Debug)]
pub struct WorkUnit {
    target: String,
    url: Url,
    plan: Arc<TrialPlan>,
    results: mpsc::Sender<TrialResult>,
}

impl WorkUnit {
    pub fn new(
        target: String,
        url: Url,
        plan: Arc<TrialPlan>,
        results: mpsc::Sender<TrialResult>,
    ) -> Self {
        WorkUnit {
            target,
            url,
            plan,
            results,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WorkerOutcome {
    Completed,
    /// A transport error ended the run at `trial_index`.
    Aborted { trial_index: usize, error: String },
    /// The result sink went away before the plan was finished.
    SinkClosed,
}

#[derive(Debug, Clone)]
pub struct WorkerReport {
    pub target: String,
    pub planned: usize,
    pub completed: usize,
    pub failed: usize,
    pub outcome: WorkerOutcome,
}

impl WorkerReport {
    pub fn is_aborted(&self) -> bool {
        matches!(self.outcome, WorkerOutcome::Aborted { .. })
    }
}

pub struct TargetWorker {
    unit: WorkUnit,
    client: reqwest::Client,
    config: ProbeConfig,
    state: Arc<GetState>,
}

impl TargetWorker {
    /// Builds the worker together with its own HTTP client.
    pub fn new(unit: WorkUnit, config: ProbeConfig, state: Arc<GetState>) -> ProbeResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(TargetWorker {
            unit,
            client,
            config,
            state,
        })
    }

    pub fn target(&self) -> &str {
        self.unit.target()
    }

    /// Runs the plan against the target, one request at a time.
    pub async fn run(self) -> WorkerReport {
        let TargetWorker {
            unit,
            client,
            config,
            state,
        } = self;

        let mut report = WorkerReport {
            target: unit.target.clone(),
            planned: unit.plan.len(),
            completed: 0,
            failed: 0,
            outcome: WorkerOutcome::Completed,
        };
        debug!("Starting {} trials against {}", report.planned, unit.target);

        for trial in unit.plan.iter() {
            let request = client
                .request(config.method().clone(), unit.url.clone())
                .header(trial.header_name.clone(), trial.header_value.clone());

            let start = Instant::now();
            let response = request.send().await;
            let elapsed = start.elapsed().as_secs_f64();

            match response {
                // Only the headers matter; dropping the response releases the connection.
                Ok(response) => drop(response),
                Err(e) => {
                    error!(
                        "The request was not successful due to: {} (url: {}, header: {}, payload: {})",
                        e, unit.target, trial.header, trial.payload
                    );
                    state.add_failure();
                    report.failed += 1;
                    match config.error_policy() {
                        ErrorPolicy::Abort => {
                            state.add_aborted_worker();
                            info!(
                                "Abandoning {} remaining trials for {}",
                                report.planned - trial.index - 1,
                                unit.target
                            );
                            report.outcome = WorkerOutcome::Aborted {
                                trial_index: trial.index,
                                error: e.to_string(),
                            };
                            return report;
                        }
                        ErrorPolicy::Continue => continue,
                    }
                }
            }

            let result = TrialResult::new(
                unit.target.clone(),
                trial.header.to_string(),
                trial.payload.to_string(),
                elapsed,
                config.window_low(),
                config.window_high(),
            );
            state.add_success(result.verdict().is_vulnerable());
            report.completed += 1;

            if unit.results.send(result).await.is_err() {
                debug!("Result sink closed, stopping worker for {}", unit.target);
                report.outcome = WorkerOutcome::SinkClosed;
                return report;
            }
        }

        debug!(
            "Finished {}: {} completed, {} failed",
            unit.target, report.completed, report.failed
        );
        report
    }
}
