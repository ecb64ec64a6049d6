//! Passphrase-to-key derivation using Argon2id.

use argon2::{Algorithm, Argon2, Params, Version};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::error::{CryptoError, CryptoResult};

/// Salt length embedded in every symmetric ciphertext blob.
pub const SALT_SIZE: usize = 16;

// Interactive-profile Argon2id parameters. Every file operation pays this
// cost once, so the archive-grade settings would be overkill here.
const MEMORY_KIB: u32 = 19_456; // 19 MiB
const ITERATIONS: u32 = 2;
const PARALLELISM: u32 = 1;

/// Derived AES key and IV with automatic zeroization on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct KeyIv {
    key: [u8; 32],
    iv: [u8; 16],
}

impl KeyIv {
    /// The 256-bit cipher key.
    pub fn key(&self) -> &[u8; 32] {
        &self.key
    }

    /// The 128-bit initialization vector.
    pub fn iv(&self) -> &[u8; 16] {
        &self.iv
    }
}

impl std::fmt::Debug for KeyIv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("KeyIv")
            .field("key", &"[REDACTED]")
            .field("iv", &"[REDACTED]")
            .finish()
    }
}

/// Derive a 256-bit key and 128-bit IV from a passphrase and salt.
///
/// Deterministic for a given passphrase/salt pair; the salt travels inside
/// the ciphertext blob so decryption needs no side channel.
pub fn derive_key_iv(passphrase: &[u8], salt: &[u8; SALT_SIZE]) -> CryptoResult<KeyIv> {
    let params = Params::new(MEMORY_KIB, ITERATIONS, PARALLELISM, Some(48))
        .map_err(|e| CryptoError::GenerationFailure(e.to_string()))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);

    let mut okm = [0u8; 48];
    argon2
        .hash_password_into(passphrase, salt, &mut okm)
        .map_err(|e| CryptoError::GenerationFailure(e.to_string()))?;

    let mut key = [0u8; 32];
    let mut iv = [0u8; 16];
    key.copy_from_slice(&okm[..32]);
    iv.copy_from_slice(&okm[32..]);
    okm.zeroize();

    Ok(KeyIv { key, iv })
}
