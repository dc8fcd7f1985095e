// File: common/mod.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

#![allow(dead_code)]

use hsqlprobe::config::ProbeConfig;
use hsqlprobe::sink::ResultSink;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

/// In-memory writer that can be inspected after the sink is gone.
#[derive(Clone, Default)]
pub struct SharedBuffer(Arc<Mutex<Vec<u8>>>);

impl SharedBuffer {
    pub fn contents(&self) -> String {
        String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
    }

    pub fn blocks(&self) -> Vec<String> {
        self.contents()
            .split("\n\n")
            .filter(|block| !block.is_empty())
            .map(|block| block.to_string())
            .collect()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Config with a delay window and timeout scaled down for tests.
pub fn fast_config() -> ProbeConfig {
    let mut config = ProbeConfig::new();
    config.set_window(0.25, 1.5);
    config.set_timeout(Duration::from_secs(5));
    config
}

pub fn console_sink() -> (ResultSink, SharedBuffer) {
    let console = SharedBuffer::default();
    (ResultSink::new(Box::new(console.clone())), console)
}

pub fn sink_with_file() -> (ResultSink, SharedBuffer, SharedBuffer) {
    let console = SharedBuffer::default();
    let file = SharedBuffer::default();
    let sink = ResultSink::new(Box::new(console.clone())).with_file(Box::new(file.clone()));
    (sink, console, file)
}

pub async fn server_with_delay(delay: Duration) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_delay(delay))
        .mount(&server)
        .await;
    server
}

/// Nothing listens here, so connecting fails right away.
pub fn unreachable_target() -> String {
    "http://127.0.0.1:1/".to_string()
}

pub fn write_list(dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, lines.join("\n")).unwrap();
    path
}
