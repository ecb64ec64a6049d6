//! # sealfile-crypto
//!
//! Hybrid encryption engine for sealfile.
//!
//! This crate encrypts payloads so that only the holder of a recipient's
//! RSA private key can recover them: each payload is encrypted under a
//! one-shot random passphrase, and the passphrase is wrapped with the
//! recipient's public key. A passphrase-only symmetric mode is also exposed
//! for cases where both sides share a secret out of band.
//!
//! ## Cryptographic Primitives
//!
//! - **Symmetric cipher**: AES-256-CBC with PKCS7 padding
//! - **Key derivation**: Argon2id (salted, per-blob)
//! - **Key wrapping**: RSA-OAEP 4096-bit with SHA-256
//! - **Key serialization**: SPKI / PKCS8 PEM
//! - **Random generation**: OS CSPRNG
//!
//! ## Blob Format (SFSYM01)
//!
//! ```text
//! ┌──────────────────────────────┐
//! │ Magic: "SFSYM01\n" (8 bytes) │
//! ├──────────────────────────────┤
//! │ Salt (16 bytes)              │
//! ├──────────────────────────────┤
//! │ AES-256-CBC ciphertext       │
//! └──────────────────────────────┘
//! ```
//!
//! The whole blob is base64-armored, so every artifact is transport-safe
//! text.
//!
//! ## Examples
//!
//! ### Passphrase Encryption
//!
//! ```rust
//! use sealfile_crypto::{base64_decode, base64_encode, decrypt_symmetric, encrypt_symmetric};
//!
//! let payload = base64_encode(b"Confidential information");
//! let blob = encrypt_symmetric(&payload, "shared secret").unwrap();
//!
//! let recovered = decrypt_symmetric(&blob, "shared secret").unwrap();
//! assert_eq!(base64_decode(&recovered).unwrap(), b"Confidential information");
//! ```
//!
//! ### Hybrid Encryption
//!
//! ```rust,no_run
//! use sealfile_crypto::{decrypt_hybrid, encrypt_hybrid, KeyPair};
//!
//! let recipient = KeyPair::generate().unwrap(); // 4096-bit RSA, takes a while
//!
//! let artifacts = encrypt_hybrid(b"Secret", &recipient.public_key_pem).unwrap();
//! let plaintext = decrypt_hybrid(
//!     &artifacts.body_ciphertext,
//!     &artifacts.wrapped_key,
//!     &recipient.private_key_pem,
//! )
//! .unwrap();
//! assert_eq!(plaintext, b"Secret");
//! ```

pub mod cipher;
pub mod codec;
pub mod error;
pub mod hybrid;
pub mod kdf;
pub mod keys;
pub mod random;

// Re-export commonly used types
pub use cipher::{decrypt_symmetric, encrypt_symmetric, generate_salt, MAGIC_SYM};
pub use codec::{base64_decode, base64_encode, pem_decode, pem_encode};
pub use error::{CryptoError, CryptoResult};
pub use hybrid::{decrypt_hybrid, encrypt_hybrid, HybridArtifacts};
pub use kdf::{derive_key_iv, KeyIv, SALT_SIZE};
pub use keys::{
    import_private_key, import_public_key, KeyPair, UnwrappingKey, WrappingKey, MODULUS_BITS,
};
pub use random::EphemeralKey;
