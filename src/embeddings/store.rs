use std::collections::HashMap;
use std::time::Instant;

use lazy_static::lazy_static;
use tracing::{debug, info, warn};

use super::codec;
use super::fingerprint::{embedded_fingerprint, table_fingerprint};
use crate::core::config::EmbeddingStoreConfig;
use crate::core::error::{PatternError, Result};
use crate::patterns::{EMBEDDED_PATTERNS, PATTERNS_METADATA};

pub const EMBEDDINGS_BASE64: &str = include_str!("../../data/pattern_embeddings.b64");

lazy_static! {
    static ref PATTERN_EMBEDDINGS: Result<PatternEmbeddings> = load_embedded();
}


/// Read-only mapping from pattern id to its embedding vector.
///
/// All vectors live in one contiguous buffer; lookups hand out slices
/// into it.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternEmbeddings {
    dimension: usize,
    ids: Vec<String>,
    index: HashMap<String, usize>,
    vectors: Vec<f32>,
}

impl PatternEmbeddings {

    pub fn from_base64<'a, I>(encoded: &str, ids: I, config: &EmbeddingStoreConfig) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let bytes = codec::decode_base64(encoded)?;
        Self::from_bytes(&bytes, ids, config)
    }

    /// Like [`Self::from_base64`], but first checks `ids` against the
    /// fingerprint recorded when the blob was generated (unless the config
    /// turns that check off).
    pub fn from_base64_verified<'a, I>(
        encoded: &str,
        ids: I,
        expected_fingerprint: &str,
        config: &EmbeddingStoreConfig,
    ) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        config.validate()?;
        let ids: Vec<&str> = ids.into_iter().collect();

        if config.verify_fingerprint {
            let actual = table_fingerprint(ids.iter().copied(), config.dimension);
            let expected = expected_fingerprint.trim();
            if actual != expected {
                return Err(PatternError::FingerprintMismatch {
                    expected: expected.to_string(),
                    actual,
                });
            }
        }

        Self::from_base64(encoded, ids, config)
    }

    /// Slices `bytes` into one vector per id, row `i` at offset
    /// `i * dimension * 4`. The buffer must hold exactly that many rows.
    pub fn from_bytes<'a, I>(bytes: &[u8], ids: I, config: &EmbeddingStoreConfig) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        config.validate()?;
        let dimension = config.dimension;
        let ids: Vec<String> = ids.into_iter().map(str::to_owned).collect();

        let expected = codec::expected_len(ids.len(), dimension).ok_or_else(|| {
            PatternError::Config(format!(
                "{} patterns x {} dims overflows the addressable size",
                ids.len(),
                dimension
            ))
        })?;
        if bytes.len() != expected {
            return Err(PatternError::LengthMismatch {
                expected,
                actual: bytes.len(),
                patterns: ids.len(),
                dimension,
            });
        }

        let mut index = HashMap::with_capacity(ids.len());
        for (row, id) in ids.iter().enumerate() {
            if index.insert(id.clone(), row).is_some() {
                return Err(PatternError::DuplicateId(id.clone()));
            }
        }

        let vectors = codec::bytes_to_f32s(bytes);

        if config.reject_non_finite {
            if let Some(pos) = vectors.iter().position(|v| !v.is_finite()) {
                return Err(PatternError::NonFinite {
                    id: ids[pos / dimension].clone(),
                    index: pos % dimension,
                });
            }
        }

        debug!("Sliced {} embedding rows of {} dims", ids.len(), dimension);

        Ok(Self {
            dimension,
            ids,
            index,
            vectors,
        })
    }


    pub fn get(&self, id: &str) -> Option<&[f32]> {
        self.index.get(id).map(|&row| self.row(row))
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Ids in row order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    /// `(id, vector)` pairs in row order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[f32])> {
        self.ids
            .iter()
            .map(String::as_str)
            .zip(self.vectors.chunks_exact(self.dimension))
    }

    /// Re-encodes to the fixed-stride little-endian layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        codec::f32s_to_bytes(&self.vectors)
    }

    /// Owned copy, for callers that need a mutable map.
    pub fn to_map(&self) -> HashMap<String, Vec<f32>> {
        self.iter()
            .map(|(id, vector)| (id.to_string(), vector.to_vec()))
            .collect()
    }

    fn row(&self, row: usize) -> &[f32] {
        let start = row * self.dimension;
        &self.vectors[start..start + self.dimension]
    }
}


fn load_embedded() -> Result<PatternEmbeddings> {
    load_from(
        EMBEDDINGS_BASE64,
        embedded_fingerprint(),
        &EmbeddingStoreConfig::default(),
    )
}

fn load_from(
    encoded: &str,
    fingerprint: &str,
    config: &EmbeddingStoreConfig,
) -> Result<PatternEmbeddings> {
    let started = Instant::now();

    let result = PatternEmbeddings::from_base64_verified(
        encoded,
        EMBEDDED_PATTERNS.iter().map(|p| p.id.as_str()),
        fingerprint,
        config,
    );

    match &result {
        Ok(store) => info!(
            "Pattern embeddings decoded: patterns={}, dim={}, bytes={}, elapsed={:?} ({})",
            store.len(),
            store.dimension(),
            store.vectors.len() * codec::F32_BYTES,
            started.elapsed(),
            PATTERNS_METADATA.summary()
        ),
        Err(e) => warn!("Pattern embeddings unavailable: {}", e),
    }

    result
}

/// Process-wide embeddings for [`EMBEDDED_PATTERNS`], decoded on first
/// call. Later calls return the same store, or the same error.
pub fn get_pattern_embeddings() -> Result<&'static PatternEmbeddings> {
    cached(&PATTERN_EMBEDDINGS)
}

fn cached(slot: &'static Result<PatternEmbeddings>) -> Result<&'static PatternEmbeddings> {
    slot.as_ref().map_err(Clone::clone)
}
