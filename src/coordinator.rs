// File: coordinator.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::config::ProbeConfig;
use crate::error::{ProbeError, ProbeResult};
use crate::getstate::GetState;
use crate::sink::{ResultSink, SinkTotals, DEFAULT_CHANNEL_CAPACITY};
use crate::trial::TrialPlan;
use crate::worker::{TargetWorker, WorkUnit, WorkerReport};
use futures::stream::{FuturesUnordered, StreamExt};
use log::{debug, warn};
use reqwest::Url;
use std::io;
use std::sync::Arc;
use tokio::sync::Semaphore;

#[derive(Debug, Clone)]
pub struct RunReport {
    pub workers: Vec<WorkerReport>,
    pub totals: SinkTotals,
}

impl RunReport {
    pub fn worker(&self, target: &str) -> Option<&WorkerReport> {
        self.workers.iter().find(|w| w.target == target)
    }

    pub fn aborted_workers(&self) -> usize {
        self.workers.iter().filter(|w| w.is_aborted()).count()
    }
}

/// Parses a target line into a URL a request can be built for.
pub fn parse_target(raw: &str) -> ProbeResult<Url> {
    let url = Url::parse(raw.trim())
        .map_err(|e| ProbeError::InvalidTarget(format!("{}: {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        scheme => Err(ProbeError::InvalidTarget(format!(
            "{}: unsupported scheme {}",
            raw, scheme
        ))),
    }
}

pub struct Coordinator {
    config: ProbeConfig,
    state: Arc<GetState>,
}

impl Coordinator {
    pub fn new(config: ProbeConfig, state: Arc<GetState>) -> Self {
        Coordinator { config, state }
    }

    pub fn config(&self) -> &ProbeConfig {
        &self.config
    }

    pub fn state(&self) -> &Arc<GetState> {
        &self.state
    }

    /// Probes every target concurrently and waits for all workers and the sink.
    ///
    /// Every target, header name and payload is validated before the first
    /// request goes out; a bad one fails the whole run. Transport errors stay
    /// inside their worker and only show up in the returned reports.
    pub async fn run_all(
        &self,
        targets: &[String],
        payloads: &[String],
        headers: &[String],
        sink: ResultSink,
    ) -> ProbeResult<RunReport> {
        let plan = Arc::new(TrialPlan::new(headers, payloads)?);
        let urls = targets
            .iter()
            .map(|raw| parse_target(raw).map(|url| (raw.trim().to_string(), url)))
            .collect::<ProbeResult<Vec<_>>>()?;

        if urls.is_empty() {
            warn!("No targets to probe");
        }
        if plan.is_empty() {
            warn!("Header or payload list is empty, nothing to send");
        }
        self.state.set_total_trials((plan.len() * urls.len()) as u64);

        let (tx, sink_handle) = sink.spawn(DEFAULT_CHANNEL_CAPACITY);

        let workers = urls
            .into_iter()
            .map(|(target, url)| {
                let unit = WorkUnit::new(target, url, Arc::clone(&plan), tx.clone());
                TargetWorker::new(unit, self.config.clone(), Arc::clone(&self.state))
            })
            .collect::<ProbeResult<Vec<_>>>();
        drop(tx);

        let workers = match workers {
            Ok(workers) => workers,
            Err(e) => {
                match sink_handle.await {
                    Ok(Ok(totals)) => debug!("Sink closed after {} results", totals.results),
                    Ok(Err(sink_error)) => debug!("Sink failed while closing: {}", sink_error),
                    Err(join_error) => debug!("Sink task failed: {}", join_error),
                }
                return Err(e);
            }
        };

        let semaphore = self
            .config
            .max_concurrency()
            .map(|n| Arc::new(Semaphore::new(n)));

        let mut futures = FuturesUnordered::new();
        for worker in workers {
            let semaphore = semaphore.clone();
            futures.push(tokio::spawn(async move {
                let _permit = match semaphore {
                    Some(semaphore) => semaphore.acquire_owned().await.ok(),
                    None => None,
                };
                worker.run().await
            }));
        }
        debug!("Spawned {} workers", futures.len());

        let mut reports = Vec::with_capacity(futures.len());
        while let Some(task) = futures.next().await {
            match task {
                Ok(report) => reports.push(report),
                Err(e) => warn!("Worker task failed: {}", e),
            }
        }

        let totals = sink_handle
            .await
            .map_err(|e| ProbeError::Output(io::Error::new(io::ErrorKind::Other, e)))??;

        Ok(RunReport {
            workers: reports,
            totals,
        })
    }
}
