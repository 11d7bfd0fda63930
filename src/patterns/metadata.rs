use std::collections::BTreeMap;

use lazy_static::lazy_static;
use serde::{Deserialize, Serialize};

pub const METADATA_JSON: &str = include_str!("../../data/metadata.json");

lazy_static! {
    pub static ref PATTERNS_METADATA: PatternsMetadata =
        serde_json::from_str(METADATA_JSON).expect("embedded pattern metadata must parse");
}


/// Descriptive figures about the shipped data. Meant for logs and
/// monitoring; nothing in the crate branches on it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PatternsMetadata {
    pub version: String,
    pub total_patterns: usize,
    pub categories: Vec<String>,
    pub domains: Vec<String>,
    pub embedding_dimension: usize,
    pub average_confidence: f64,
    pub coverage: BTreeMap<String, String>,
    pub size_bytes: SizeBytes,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeBytes {
    pub patterns: usize,
    pub embeddings: usize,
    pub total: usize,
}

impl PatternsMetadata {
    pub fn summary(&self) -> String {
        format!(
            "v{}: {} patterns, {} categories, {} domains, dim={}, {} bytes",
            self.version,
            self.total_patterns,
            self.categories.len(),
            self.domains.len(),
            self.embedding_dimension,
            self.size_bytes.total
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EMBEDDING_DIMENSION;
    use crate::embeddings::EMBEDDINGS_BASE64;
    use crate::patterns::{EMBEDDED_PATTERNS, PATTERNS_JSON};

    fn distinct_in_order<'a>(items: impl Iterator<Item = &'a str>) -> Vec<String> {
        let mut out: Vec<String> = Vec::new();
        for item in items {
            if !out.iter().any(|seen| seen == item) {
                out.push(item.to_string());
            }
        }
        out
    }

    #[test]
    fn test_total_matches_table() {
        assert_eq!(PATTERNS_METADATA.total_patterns, EMBEDDED_PATTERNS.len());
        assert_eq!(PATTERNS_METADATA.embedding_dimension, EMBEDDING_DIMENSION);
    }

    #[test]
    fn test_categories_and_domains_match_table() {
        let categories = distinct_in_order(EMBEDDED_PATTERNS.iter().map(|p| p.category.as_str()));
        let domains = distinct_in_order(EMBEDDED_PATTERNS.iter().filter_map(|p| p.domain.as_deref()));
        assert_eq!(PATTERNS_METADATA.categories, categories);
        assert_eq!(PATTERNS_METADATA.domains, domains);
    }

    #[test]
    fn test_average_confidence() {
        let sum: f64 = EMBEDDED_PATTERNS.iter().map(|p| p.confidence).sum();
        let average = sum / EMBEDDED_PATTERNS.len() as f64;
        assert!((PATTERNS_METADATA.average_confidence - average).abs() < 1e-3);
    }

    #[test]
    fn test_coverage_lists_every_domain() {
        for domain in &PATTERNS_METADATA.domains {
            assert!(PATTERNS_METADATA.coverage.contains_key(domain), "no coverage for {domain}");
        }
    }

    #[test]
    fn test_size_bytes_match_data_files() {
        let sizes = PATTERNS_METADATA.size_bytes;
        assert_eq!(sizes.patterns, PATTERNS_JSON.len());
        assert_eq!(sizes.embeddings, EMBEDDINGS_BASE64.len());
        assert_eq!(sizes.total, sizes.patterns + sizes.embeddings);
    }

    #[test]
    fn test_summary() {
        let summary = PATTERNS_METADATA.summary();
        assert!(summary.starts_with(&format!("v{}", PATTERNS_METADATA.version)));
        assert!(summary.contains("220 patterns"));
    }
}
