//! Wire format of the embedding blob: base64 over densely packed
//! little-endian f32 values, `dimension` values per pattern, rows in
//! pattern-table order. No header, no length prefixes.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::core::error::Result;

pub const F32_BYTES: usize = std::mem::size_of::<f32>();


pub fn decode_base64(encoded: &str) -> Result<Vec<u8>> {
    Ok(STANDARD.decode(encoded.trim())?)
}


pub fn encode_base64(bytes: &[u8]) -> String {
    STANDARD.encode(bytes)
}

/// Trailing bytes that do not fill a whole f32 are ignored; callers check
/// the length against the expected stride first.
pub fn bytes_to_f32s(bytes: &[u8]) -> Vec<f32> {
    bytes
        .chunks_exact(F32_BYTES)
        .map(|chunk| f32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]))
        .collect()
}


pub fn f32s_to_bytes(values: &[f32]) -> Vec<u8> {
    let mut bytes = Vec::with_capacity(std::mem::size_of_val(values));
    for value in values {
        bytes.extend_from_slice(&value.to_le_bytes());
    }
    bytes
}

/// Byte length of a blob holding `patterns` rows of `dimension` floats.
pub fn expected_len(patterns: usize, dimension: usize) -> Option<usize> {
    patterns.checked_mul(dimension)?.checked_mul(F32_BYTES)
}
