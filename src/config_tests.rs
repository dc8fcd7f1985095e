// File: config_tests.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2023-2025
// - Volker Schwaberow <volker@schwaberow.de>

#[cfg(test)]
mod tests {
    use crate::config::{ErrorPolicy, FileScope, OutputFormat, ProbeConfig};
    use reqwest::Method;
    use rstest::*;
    use std::time::Duration;

    #[test]
    fn test_probe_config_default() {
        let config = ProbeConfig::default();

        assert_eq!(config.timeout(), Duration::from_secs(60));
        assert_eq!(config.window_low(), 25.0);
        assert_eq!(config.window_high(), 50.0);
        assert_eq!(config.method(), &Method::GET);
        assert_eq!(config.file_scope(), FileScope::VulnerableOnly);
        assert_eq!(config.output_format(), OutputFormat::Text);
        assert_eq!(config.error_policy(), ErrorPolicy::Abort);
        assert_eq!(config.max_concurrency(), None);
    }

    #[test]
    fn test_probe_config_new_matches_default() {
        let new = ProbeConfig::new();
        let default = ProbeConfig::default();

        assert_eq!(new.timeout(), default.timeout());
        assert_eq!(new.window_low(), default.window_low());
        assert_eq!(new.window_high(), default.window_high());
        assert_eq!(new.file_scope(), default.file_scope());
    }

    #[rstest]
    #[case(1)]
    #[case(5)]
    #[case(60)]
    #[case(120)]
    fn test_set_timeout(#[case] secs: u64) {
        let mut config = ProbeConfig::new();

        config.set_timeout(Duration::from_secs(secs));
        assert_eq!(config.timeout(), Duration::from_secs(secs));
    }

    #[test]
    fn test_set_window() {
        let mut config = ProbeConfig::new();

        config.set_window(0.2, 2.0);
        assert_eq!(config.window_low(), 0.2);
        assert_eq!(config.window_high(), 2.0);
    }

    #[test]
    fn test_set_window_swaps_reversed_bounds() {
        let mut config = ProbeConfig::new();

        config.set_window(50.0, 25.0);
        assert_eq!(config.window_low(), 25.0);
        assert_eq!(config.window_high(), 50.0);
    }

    #[test]
    fn test_set_file_scope() {
        let mut config = ProbeConfig::new();

        config.set_file_scope(FileScope::All);
        assert_eq!(config.file_scope(), FileScope::All);

        config.set_file_scope(FileScope::VulnerableOnly);
        assert_eq!(config.file_scope(), FileScope::VulnerableOnly);
    }

    #[test]
    fn test_set_output_format() {
        let mut config = ProbeConfig::new();

        config.set_output_format(OutputFormat::JsonLines);
        assert_eq!(config.output_format(), OutputFormat::JsonLines);
    }

    #[test]
    fn test_set_error_policy() {
        let mut config = ProbeConfig::new();

        config.set_error_policy(ErrorPolicy::Continue);
        assert_eq!(config.error_policy(), ErrorPolicy::Continue);
    }

    #[rstest]
    #[case(None, None)]
    #[case(Some(0), None)]
    #[case(Some(1), Some(1))]
    #[case(Some(16), Some(16))]
    fn test_set_max_concurrency(#[case] input: Option<usize>, #[case] expected: Option<usize>) {
        let mut config = ProbeConfig::new();

        config.set_max_concurrency(input);
        assert_eq!(config.max_concurrency(), expected);
    }
}
