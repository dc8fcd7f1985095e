// File: trial.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::classifier::classify;
use crate::error::{ProbeError, ProbeResult};
use chrono::{DateTime, Utc};
use reqwest::header::{HeaderName, HeaderValue};
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Verdict {
    Vulnerable,
    #[serde(rename = "Not Vulnerable")]
    NotVulnerable,
}

impl Verdict {
    pub fn is_vulnerable(&self) -> bool {
        matches!(self, Verdict::Vulnerable)
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Verdict::Vulnerable => write!(f, "Vulnerable"),
            Verdict::NotVulnerable => write!(f, "Not Vulnerable"),
        }
    }
}

/// The header × payload cross-product probed against every target.
///
/// Header names and payloads are validated up front so that building a
/// request inside a worker cannot fail.
#[derive(Debug, Clone)]
pub struct TrialPlan {
    headers: Vec<(HeaderName, String)>,
    payloads: Vec<(HeaderValue, String)>,
}

/// One (header, payload) combination of a plan.
#[derive(Debug, Clone, Copy)]
pub struct Trial<'a> {
    pub index: usize,
    pub header: &'a str,
    pub payload: &'a str,
    pub header_name: &'a HeaderName,
    pub header_value: &'a HeaderValue,
}

impl TrialPlan {
    pub fn new(headers: &[String], payloads: &[String]) -> ProbeResult<Self> {
        let headers = headers
            .iter()
            .map(|raw| {
                let header = raw.trim();
                HeaderName::from_bytes(header.as_bytes())
                    .map(|name| (name, header.to_string()))
                    .map_err(|_| ProbeError::InvalidHeaderName(raw.clone()))
            })
            .collect::<ProbeResult<Vec<_>>>()?;

        let payloads = payloads
            .iter()
            .map(|payload| {
                HeaderValue::from_bytes(payload.as_bytes())
                    .map(|value| (value, payload.clone()))
                    .map_err(|_| ProbeError::InvalidPayload(payload.clone()))
            })
            .collect::<ProbeResult<Vec<_>>>()?;

        Ok(TrialPlan { headers, payloads })
    }

    pub fn len(&self) -> usize {
        self.headers.len() * self.payloads.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Header-major, payload-minor, both in input order.
    pub fn iter(&self) -> impl Iterator<Item = Trial<'_>> + '_ {
        self.headers
            .iter()
            .flat_map(move |(name, header)| {
                self.payloads
                    .iter()
                    .map(move |(value, payload)| (name, header, value, payload))
            })
            .enumerate()
            .map(|(index, (name, header, value, payload))| Trial {
                index,
                header: header.as_str(),
                payload: payload.as_str(),
                header_name: name,
                header_value: value,
            })
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TrialResult {
    url: String,
    header: String,
    payload: String,
    elapsed_secs: f64,
    verdict: Verdict,
    observed_at: DateTime<Utc>,
}

impl TrialResult {
    pub fn new(
        url: String,
        header: String,
        payload: String,
        elapsed_secs: f64,
        window_low: f64,
        window_high: f64,
    ) -> Self {
        let elapsed_secs = elapsed_secs.max(0.0);
        TrialResult {
            url,
            header,
            payload,
            elapsed_secs,
            verdict: classify(elapsed_secs, window_low, window_high),
            observed_at: Utc::now(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn header(&self) -> &str {
        &self.header
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.elapsed_secs
    }

    pub fn verdict(&self) -> Verdict {
        self.verdict
    }

    pub fn observed_at(&self) -> DateTime<Utc> {
        self.observed_at
    }
}
