//! Binary / base64 / PEM text conversions.

use base64::Engine;

use crate::error::{CryptoError, CryptoResult};

/// Encode bytes as base64 (standard alphabet, no line wrapping).
pub fn base64_encode(data: &[u8]) -> String {
    base64::engine::general_purpose::STANDARD.encode(data)
}

/// Decode base64 string to bytes.
pub fn base64_decode(text: &str) -> CryptoResult<Vec<u8>> {
    base64::engine::general_purpose::STANDARD
        .decode(text)
        .map_err(|e| CryptoError::InvalidEncoding(format!("Invalid base64: {}", e)))
}

/// Frame DER bytes as a PEM block.
///
/// The body is a single base64 line between the marker lines; no 64-column
/// wrapping is applied.
pub fn pem_encode(der: &[u8], header: &str, footer: &str) -> String {
    format!("{}\n{}\n{}", header, base64_encode(der), footer)
}

/// Strip the PEM markers and base64-decode the body.
///
/// The header and footer must sit exactly at the boundaries of the
/// (whitespace-trimmed) input; any mismatch fails instead of guessing at
/// offsets. Interior whitespace in the body is ignored, so 64-column PEM
/// produced by other tools still decodes.
pub fn pem_decode(text: &str, header: &str, footer: &str) -> CryptoResult<Vec<u8>> {
    let trimmed = text.trim();

    let body = trimmed.strip_prefix(header).ok_or_else(|| {
        CryptoError::InvalidEncoding(format!("PEM header {:?} not found at start", header))
    })?;
    let body = body.strip_suffix(footer).ok_or_else(|| {
        CryptoError::InvalidEncoding(format!("PEM footer {:?} not found at end", footer))
    })?;

    let compact: String = body.chars().filter(|c| !c.is_whitespace()).collect();
    base64_decode(&compact)
}
