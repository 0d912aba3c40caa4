// SPDX-FileCopyrightText: 2026 GenUI Playground Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the GenUI Playground service.
//!
//! Provides the error type, shared types, the agent [`Tool`] interface, and
//! the seam traits ([`ImageStore`], [`ImageGenerator`], [`Clock`]) that the
//! gateway depends on instead of concrete backends.

pub mod error;
pub mod tool;
pub mod traits;
pub mod types;

pub use error::GenuiError;
pub use tool::{Tool, ToolOutput, ToolRegistry};
pub use traits::{Clock, ImageGenerator, ImageStore, SystemClock};
pub use types::{GeneratedImage, HealthStatus, ImageEntry, PatternCategory, StoredImage};

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use super::*;

    #[test]
    fn genui_error_variants_display() {
        let cases: Vec<(GenuiError, &str)> = vec![
            (GenuiError::Config("x".into()), "configuration error: x"),
            (GenuiError::InvalidInput("x".into()), "invalid input: x"),
            (
                GenuiError::NotFound {
                    kind: "pattern",
                    id: "nope".into(),
                },
                "pattern not found: nope",
            ),
            (
                GenuiError::Upstream {
                    status: 429,
                    body: "slow down".into(),
                },
                "upstream returned 429: slow down",
            ),
            (GenuiError::provider("bad"), "provider error: bad"),
            (GenuiError::storage("full"), "storage error: full"),
            (GenuiError::Internal("x".into()), "internal error: x"),
        ];
        for (err, expected) in cases {
            assert_eq!(err.to_string(), expected);
        }
    }

    #[test]
    fn pattern_category_has_five_variants() {
        use strum::IntoEnumIterator;

        let all: Vec<PatternCategory> = PatternCategory::iter().collect();
        assert_eq!(all.len(), 5);

        for category in &all {
            let parsed = PatternCategory::from_str(&category.to_string()).expect("should parse");
            assert_eq!(*category, parsed);
        }
    }

    #[test]
    fn pattern_category_names_are_lowercase() {
        assert_eq!(PatternCategory::Visualization.as_str(), "visualization");
        assert_eq!(PatternCategory::Status.to_string(), "status");
        assert_eq!(
            PatternCategory::valid_names(),
            "visualization, form, card, action, status"
        );
    }

    #[test]
    fn pattern_category_parses_case_insensitively() {
        assert_eq!(
            PatternCategory::from_str("STATUS").unwrap(),
            PatternCategory::Status
        );
        assert!(PatternCategory::from_str("chart").is_err());
    }

    #[test]
    fn pattern_category_serde() {
        let json = serde_json::to_string(&PatternCategory::Card).unwrap();
        assert_eq!(json, "\"card\"");
        let parsed: PatternCategory = serde_json::from_str("\"action\"").unwrap();
        assert_eq!(parsed, PatternCategory::Action);
    }

    #[test]
    fn health_status_variants() {
        assert_eq!(HealthStatus::Healthy, HealthStatus::Healthy);
        assert_ne!(HealthStatus::Degraded("x".into()), HealthStatus::Healthy);
        assert_ne!(HealthStatus::Unhealthy("x".into()), HealthStatus::Healthy);
    }

    #[test]
    fn all_seam_traits_are_object_safe() {
        fn _store(_: &dyn ImageStore) {}
        fn _generator(_: &dyn ImageGenerator) {}
        fn _clock(_: &dyn Clock) {}
        fn _tool(_: &dyn Tool) {}
    }
}
