//! Error types for cryptographic operations.

use thiserror::Error;

/// Cryptographic operation errors.
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Malformed base64 or PEM text.
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Key material failed to parse as valid SPKI/PKCS8.
    #[error("Key import failed: {0}")]
    ImportFailure(String),

    /// Key generation rejected by the crypto provider.
    #[error("Key generation failed: {0}")]
    GenerationFailure(String),

    /// Encryption rejected by the crypto provider.
    #[error("Encryption failed: {0}")]
    Encryption(String),

    /// Symmetric decryption failed - wrong passphrase or corrupted blob.
    #[error("Decryption failed - wrong passphrase or corrupted data")]
    DecryptionFailure,

    /// RSA-OAEP unwrap failed - wrong private key or corrupted wrapped key.
    #[error("Key unwrap failed - wrong private key or corrupted wrapped key")]
    UnwrapFailure,
}

/// Result type for cryptographic operations.
pub type CryptoResult<T> = Result<T, CryptoError>;
