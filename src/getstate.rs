// File: getstate.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2022-2025
// - Volker Schwaberow <volker@schwaberow.de>

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

/// Run-wide counters shared by every worker.
#[derive(Debug, Default)]
pub struct GetState {
    total_trials: AtomicU64,
    completed_trials: AtomicU64,
    vulnerable_trials: AtomicU64,
    failed_trials: AtomicU64,
    aborted_workers: AtomicU64,
    start_time: AtomicU64,
    end_time: AtomicU64,
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

impl GetState {
    pub fn new() -> GetState {
        GetState::default()
    }

    pub fn add_success(&self, vulnerable: bool) {
        self.completed_trials.fetch_add(1, Ordering::Relaxed);
        if vulnerable {
            self.vulnerable_trials.fetch_add(1, Ordering::Relaxed);
        }
    }

    pub fn add_failure(&self) {
        self.failed_trials.fetch_add(1, Ordering::Relaxed);
    }

    pub fn add_aborted_worker(&self) {
        self.aborted_workers.fetch_add(1, Ordering::Relaxed);
    }

    pub fn total_trials(&self) -> u64 {
        self.total_trials.load(Ordering::Relaxed)
    }

    pub fn set_total_trials(&self, total_trials: u64) {
        self.total_trials.store(total_trials, Ordering::Relaxed);
    }

    pub fn completed_trials(&self) -> u64 {
        self.completed_trials.load(Ordering::Relaxed)
    }

    pub fn vulnerable_trials(&self) -> u64 {
        self.vulnerable_trials.load(Ordering::Relaxed)
    }

    pub fn failed_trials(&self) -> u64 {
        self.failed_trials.load(Ordering::Relaxed)
    }

    pub fn aborted_workers(&self) -> u64 {
        self.aborted_workers.load(Ordering::Relaxed)
    }

    pub fn mark_start(&self) {
        self.start_time.store(now_millis(), Ordering::Relaxed);
    }

    pub fn start_time(&self) -> u64 {
        self.start_time.load(Ordering::Relaxed)
    }

    pub fn mark_end(&self) {
        self.end_time.store(now_millis(), Ordering::Relaxed);
    }

    pub fn end_time(&self) -> u64 {
        self.end_time.load(Ordering::Relaxed)
    }

    pub fn elapsed_millis(&self) -> u64 {
        self.end_time().saturating_sub(self.start_time())
    }
}
