//! Query-classification patterns with pre-computed semantic embeddings.
//!
//! The crate ships two pieces of inert data and an accessor over them:
//! an ordered pattern table (regex + output template per record) and a
//! base64 blob of 384-dimensional f32 vectors, one per pattern, laid out
//! in table order.

pub mod core;
pub mod embeddings;
pub mod patterns;

pub use crate::core::config::EmbeddingStoreConfig;
pub use crate::core::error::{PatternError, Result};
pub use embeddings::{PatternEmbeddings, get_pattern_embeddings};
pub use patterns::{
    EMBEDDED_PATTERNS, Frequency, PATTERNS_METADATA, Pattern, PatternsMetadata, find_pattern,
    pattern_ids,
};


pub const EMBEDDING_DIMENSION: usize = 384;
