// File: classifier.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::trial::Verdict;

/// Maps a response latency onto a verdict.
///
/// A trial is `Vulnerable` when the elapsed seconds fall inside the closed
/// window `[window_low, window_high]`. Faster responses show no injection
/// effect and slower ones are treated as network noise.
pub fn classify(elapsed: f64, window_low: f64, window_high: f64) -> Verdict {
    if elapsed >= window_low && elapsed <= window_high {
        Verdict::Vulnerable
    } else {
        Verdict::NotVulnerable
    }
}
