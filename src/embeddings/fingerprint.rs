use sha2::{Digest, Sha256};

/// Fingerprint of the pattern table the blob was generated from, stored
/// next to the blob.
pub const EMBEDDINGS_FINGERPRINT: &str = include_str!("../../data/pattern_embeddings.sha256");


pub fn embedded_fingerprint() -> &'static str {
    EMBEDDINGS_FINGERPRINT.trim()
}

/// SHA-256 over the dimension and the ids in row order, each terminated by
/// a newline. Any insertion, removal or reordering of patterns changes it.
pub fn table_fingerprint<'a, I>(ids: I, dimension: usize) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut hasher = Sha256::new();
    hasher.update(dimension.to_string().as_bytes());
    hasher.update(b"\n");
    for id in ids {
        hasher.update(id.as_bytes());
        hasher.update(b"\n");
    }
    format!("{:x}", hasher.finalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EMBEDDING_DIMENSION;
    use crate::patterns::pattern_ids;

    #[test]
    fn test_known_digest() {
        assert_eq!(
            table_fingerprint(["a", "b"], 2),
            "d1b15f66a216b16a6d13913b1a1a65a9c214f0068477d7cdccced9d4d55aa24b"
        );
    }

    #[test]
    fn test_order_and_dimension_sensitive() {
        let base = table_fingerprint(["a", "b"], 2);
        assert_ne!(base, table_fingerprint(["b", "a"], 2));
        assert_ne!(base, table_fingerprint(["a", "b"], 3));
        assert_ne!(base, table_fingerprint(["ab"], 2));
    }

    #[test]
    fn test_embedded_table_matches_stored_fingerprint() {
        let fingerprint = embedded_fingerprint();
        assert_eq!(fingerprint.len(), 64);
        assert_eq!(table_fingerprint(pattern_ids(), EMBEDDING_DIMENSION), fingerprint);
    }
}
