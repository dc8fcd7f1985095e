// File: input.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

use crate::error::{ProbeError, ProbeResult};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Reads a list file into its non-blank lines, in file order.
///
/// Line terminators (`\n` and `\r\n`) are stripped; other whitespace is kept
/// because payloads may depend on it.
pub fn read_lines(path: &Path) -> ProbeResult<Vec<String>> {
    let input_error = |source| ProbeError::Input {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(input_error)?;
    let reader = BufReader::new(file);

    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line.map_err(input_error)?;
        let line = line.strip_suffix('\r').unwrap_or(&line);
        if !line.trim().is_empty() {
            lines.push(line.to_string());
        }
    }

    Ok(lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn file_with(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_reads_lines_in_order() {
        let file = file_with("X-Forwarded-For\nUser-Agent\nReferer\n");
        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["X-Forwarded-For", "User-Agent", "Referer"]);
    }

    #[test]
    fn test_skips_blank_lines_and_strips_crlf() {
        let file = file_with("a\r\n\r\n   \nb\n");
        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["a", "b"]);
    }

    #[test]
    fn test_keeps_payload_whitespace() {
        let file = file_with("1' AND SLEEP(30)-- \n");
        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["1' AND SLEEP(30)-- "]);
    }

    #[test]
    fn test_last_line_without_newline() {
        let file = file_with("first\nsecond");
        let lines = read_lines(file.path()).unwrap();
        assert_eq!(lines, vec!["first", "second"]);
    }

    #[test]
    fn test_missing_file_is_input_error() {
        let err = read_lines(Path::new("/nonexistent/hsqlprobe/payloads.txt")).unwrap_err();
        match err {
            ProbeError::Input { path, .. } => {
                assert_eq!(path, Path::new("/nonexistent/hsqlprobe/payloads.txt"))
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
