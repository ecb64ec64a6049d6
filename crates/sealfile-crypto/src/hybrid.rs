//! Hybrid public-key encryption flow.
//!
//! # Encryption Flow
//!
//! 1. Generate an ephemeral 32-hex-char passphrase from OS randomness
//! 2. Base64-encode the payload
//! 3. Encrypt the base64 text with the passphrase (AES-256-CBC adapter)
//! 4. Import the recipient's public key
//! 5. RSA-OAEP-wrap the passphrase's UTF-8 bytes
//! 6. Base64-encode the wrapped key
//!
//! The ephemeral passphrase is zeroized after step 5 and never emitted.
//!
//! # Decryption Flow
//!
//! 1. Import the private key
//! 2. Base64-decode the wrapped key
//! 3. RSA-OAEP-unwrap the passphrase bytes
//! 4. Decrypt the body blob with the recovered passphrase
//! 5. Base64-decode the payload
//!
//! Any step failure aborts the whole operation with its distinct error kind;
//! partial results are never surfaced.

use zeroize::Zeroizing;

use crate::cipher::{decrypt_symmetric, encrypt_symmetric};
use crate::codec::{base64_decode, base64_encode};
use crate::error::{CryptoError, CryptoResult};
use crate::keys::{import_private_key, import_public_key};
use crate::random::EphemeralKey;

/// Output of hybrid encryption.
///
/// Both parts are required for recovery; losing either makes the payload
/// permanently unrecoverable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HybridArtifacts {
    /// Self-contained symmetric ciphertext of the payload.
    pub body_ciphertext: String,
    /// Base64 RSA-OAEP ciphertext of the ephemeral passphrase.
    pub wrapped_key: String,
}

/// Encrypt a payload for the holder of `recipient_public_key_pem`.
pub fn encrypt_hybrid(
    plaintext: &[u8],
    recipient_public_key_pem: &str,
) -> CryptoResult<HybridArtifacts> {
    let public_key = import_public_key(recipient_public_key_pem)?;

    let ephemeral = EphemeralKey::generate();
    let body_ciphertext = encrypt_symmetric(&base64_encode(plaintext), ephemeral.as_str())?;
    let wrapped = public_key.wrap(ephemeral.as_str().as_bytes())?;
    drop(ephemeral); // zeroizes the passphrase

    Ok(HybridArtifacts {
        body_ciphertext,
        wrapped_key: base64_encode(&wrapped),
    })
}

/// Recover a payload from a [`HybridArtifacts`] pair using the recipient's
/// private key.
pub fn decrypt_hybrid(
    body_ciphertext: &str,
    wrapped_key: &str,
    recipient_private_key_pem: &str,
) -> CryptoResult<Vec<u8>> {
    let private_key = import_private_key(recipient_private_key_pem)?;

    let wrapped_raw = base64_decode(wrapped_key)?;
    let passphrase_bytes = Zeroizing::new(private_key.unwrap_key(&wrapped_raw)?);
    // A wrong key that somehow survives OAEP validation yields garbage bytes
    let passphrase = std::str::from_utf8(&passphrase_bytes).map_err(|_| CryptoError::UnwrapFailure)?;

    let plaintext_b64 = decrypt_symmetric(body_ciphertext, passphrase)?;
    base64_decode(&plaintext_b64).map_err(|_| CryptoError::DecryptionFailure)
}
