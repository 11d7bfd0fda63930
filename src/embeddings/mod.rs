pub mod codec;
pub mod fingerprint;
pub mod store;

pub use fingerprint::{embedded_fingerprint, table_fingerprint};
pub use store::{EMBEDDINGS_BASE64, PatternEmbeddings, get_pattern_embeddings};
