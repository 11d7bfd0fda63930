pub mod metadata;
pub mod models;
pub mod table;
pub mod template;

pub use metadata::{PATTERNS_METADATA, PatternsMetadata, SizeBytes};
pub use models::{Frequency, Pattern};
pub use table::{EMBEDDED_PATTERNS, PATTERNS_JSON, find_pattern, parse_patterns, pattern_ids};
pub use template::{interpolate, placeholder_groups};
