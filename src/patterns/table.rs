use std::collections::{HashMap, HashSet};

use lazy_static::lazy_static;
use tracing::debug;

use super::models::Pattern;
use crate::core::error::{PatternError, Result};

/// The pattern table as shipped. Record order is the row order of the
/// embedding blob; never reorder one without regenerating the other.
pub const PATTERNS_JSON: &str = include_str!("../../data/patterns.json");

lazy_static! {
    pub static ref EMBEDDED_PATTERNS: Vec<Pattern> =
        parse_patterns(PATTERNS_JSON).expect("embedded pattern table must parse");

    static ref PATTERN_INDEX: HashMap<&'static str, usize> = EMBEDDED_PATTERNS
        .iter()
        .enumerate()
        .map(|(row, pattern)| (pattern.id.as_str(), row))
        .collect();
}


pub fn parse_patterns(json: &str) -> Result<Vec<Pattern>> {
    let patterns: Vec<Pattern> = serde_json::from_str(json)?;

    let mut seen = HashSet::with_capacity(patterns.len());
    for pattern in &patterns {
        if !seen.insert(pattern.id.as_str()) {
            return Err(PatternError::DuplicateId(pattern.id.clone()));
        }
    }

    debug!("Parsed pattern table: {} patterns", patterns.len());
    Ok(patterns)
}


pub fn pattern_ids() -> Vec<&'static str> {
    EMBEDDED_PATTERNS.iter().map(|p| p.id.as_str()).collect()
}


pub fn find_pattern(id: &str) -> Option<&'static Pattern> {
    PATTERN_INDEX.get(id).map(|&row| &EMBEDDED_PATTERNS[row])
}
