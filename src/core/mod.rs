pub mod config;
pub mod error;

pub use config::EmbeddingStoreConfig;
pub use error::{PatternError, Result};
