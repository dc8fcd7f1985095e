// File: classifier_tests.rs
// SPDX-License-Identifier: MIT OR Apache-2.0
//
// Copyright (c) 2025
// - Volker Schwaberow <volker@schwaberow.de>

#[cfg(test)]
mod tests {
    use crate::classifier::classify;
    use crate::config::{DEFAULT_WINDOW_HIGH, DEFAULT_WINDOW_LOW};
    use crate::trial::Verdict;
    use rstest::*;

    #[rstest]
    #[case(25.0)]
    #[case(25.001)]
    #[case(30.0)]
    #[case(42.5)]
    #[case(49.999)]
    #[case(50.0)]
    fn test_inside_window_is_vulnerable(#[case] elapsed: f64) {
        assert_eq!(
            classify(elapsed, DEFAULT_WINDOW_LOW, DEFAULT_WINDOW_HIGH),
            Verdict::Vulnerable
        );
    }

    #[rstest]
    #[case(0.0)]
    #[case(0.05)]
    #[case(24.999)]
    #[case(50.001)]
    #[case(59.9)]
    #[case(1.0e9)]
    fn test_outside_window_is_not_vulnerable(#[case] elapsed: f64) {
        assert_eq!(
            classify(elapsed, DEFAULT_WINDOW_LOW, DEFAULT_WINDOW_HIGH),
            Verdict::NotVulnerable
        );
    }

    #[test]
    fn test_custom_window() {
        assert_eq!(classify(0.3, 0.2, 2.0), Verdict::Vulnerable);
        assert_eq!(classify(0.1, 0.2, 2.0), Verdict::NotVulnerable);
        assert_eq!(classify(2.1, 0.2, 2.0), Verdict::NotVulnerable);
    }

    #[test]
    fn test_degenerate_window() {
        assert_eq!(classify(5.0, 5.0, 5.0), Verdict::Vulnerable);
        assert_eq!(classify(5.01, 5.0, 5.0), Verdict::NotVulnerable);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(classify(30.0, 25.0, 50.0), Verdict::Vulnerable);
        }
    }
}
