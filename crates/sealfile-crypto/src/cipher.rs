//! Passphrase-based AES-256-CBC encryption of base64-text payloads.
//!
//! The adapter operates on base64-text representations of the payload, not
//! raw bytes: callers base64-encode before encrypting and base64-decode
//! after decrypting. This keeps every artifact transport-safe as text.
//!
//! Blob layout (before the outer base64):
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

use aes::cipher::{block_padding::Pkcs7, BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use rand::{CryptoRng, RngCore};

use crate::codec::{base64_decode, base64_encode};
use crate::error::{CryptoError, CryptoResult};
use crate::kdf::{derive_key_iv, SALT_SIZE};

type Aes256CbcEnc = cbc::Encryptor<aes::Aes256>;
type Aes256CbcDec = cbc::Decryptor<aes::Aes256>;

/// Magic bytes marking a symmetric ciphertext blob.
pub const MAGIC_SYM: &[u8; 8] = b"SFSYM01\n";

const BLOCK_SIZE: usize = 16;

/// Generate cryptographically secure random bytes.
pub fn generate_random<const N: usize>() -> [u8; N] {
    let mut bytes = [0u8; N];
    rand::thread_rng().fill_bytes(&mut bytes);
    bytes
}

/// Generate a random salt (16 bytes).
pub fn generate_salt() -> [u8; SALT_SIZE] {
    generate_random()
}

/// Encrypt a base64-text payload with a passphrase.
///
/// A fresh random salt is drawn per call, so encrypting the same payload
/// with the same passphrase twice yields different blobs.
pub fn encrypt_symmetric(plaintext_b64: &str, passphrase: &str) -> CryptoResult<String> {
    encrypt_symmetric_with_rng(&mut rand::thread_rng(), plaintext_b64, passphrase)
}

/// Encrypt with a caller-supplied random source.
pub fn encrypt_symmetric_with_rng<R: RngCore + CryptoRng>(
    rng: &mut R,
    plaintext_b64: &str,
    passphrase: &str,
) -> CryptoResult<String> {
    let mut salt = [0u8; SALT_SIZE];
    rng.fill_bytes(&mut salt);

    let derived = derive_key_iv(passphrase.as_bytes(), &salt)?;
    let ciphertext = Aes256CbcEnc::new(derived.key().into(), derived.iv().into())
        .encrypt_padded_vec_mut::<Pkcs7>(plaintext_b64.as_bytes());

    let mut blob = Vec::with_capacity(MAGIC_SYM.len() + SALT_SIZE + ciphertext.len());
    blob.extend_from_slice(MAGIC_SYM);
    blob.extend_from_slice(&salt);
    blob.extend_from_slice(&ciphertext);

    Ok(base64_encode(&blob))
}

/// Decrypt a ciphertext blob back to its base64-text payload.
///
/// Re-derives the key/IV from the embedded salt. Wrong passphrases and
/// malformed blobs of any shape fail with [`CryptoError::DecryptionFailure`];
/// garbage is never surfaced as success.
pub fn decrypt_symmetric(ciphertext_text: &str, passphrase: &str) -> CryptoResult<String> {
    let blob = base64_decode(ciphertext_text).map_err(|_| CryptoError::DecryptionFailure)?;

    // magic + salt + at least one cipher block
    if blob.len() < MAGIC_SYM.len() + SALT_SIZE + BLOCK_SIZE {
        return Err(CryptoError::DecryptionFailure);
    }
    if &blob[..MAGIC_SYM.len()] != MAGIC_SYM {
        return Err(CryptoError::DecryptionFailure);
    }

    let mut salt = [0u8; SALT_SIZE];
    salt.copy_from_slice(&blob[MAGIC_SYM.len()..MAGIC_SYM.len() + SALT_SIZE]);

    let body = &blob[MAGIC_SYM.len() + SALT_SIZE..];
    if body.len() % BLOCK_SIZE != 0 {
        return Err(CryptoError::DecryptionFailure);
    }

    let derived = derive_key_iv(passphrase.as_bytes(), &salt)?;
    let plaintext = Aes256CbcDec::new(derived.key().into(), derived.iv().into())
        .decrypt_padded_vec_mut::<Pkcs7>(body)
        .map_err(|_| CryptoError::DecryptionFailure)?;

    String::from_utf8(plaintext).map_err(|_| CryptoError::DecryptionFailure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_salt() {
        let salt1 = generate_salt();
        let salt2 = generate_salt();

        assert_eq!(salt1.len(), SALT_SIZE);
        assert_ne!(salt1, salt2); // Should be random
    }

    #[test]
    fn test_encrypt_decrypt_roundtrip() {
        let payload = base64_encode(b"Hello, World!");
        let blob = encrypt_symmetric(&payload, "my-passphrase").unwrap();
        let decrypted = decrypt_symmetric(&blob, "my-passphrase").unwrap();
        assert_eq!(payload, decrypted);
    }

    #[test]
    fn test_roundtrip_all_byte_values() {
        let bytes: Vec<u8> = (0..=255).collect();
        let payload = base64_encode(&bytes);
        let blob = encrypt_symmetric(&payload, "binary-safe").unwrap();
        let decrypted = decrypt_symmetric(&blob, "binary-safe").unwrap();
        assert_eq!(base64_decode(&decrypted).unwrap(), bytes);
    }

    #[test]
    fn test_empty_payload() {
        let blob = encrypt_symmetric("", "some passphrase").unwrap();
        let decrypted = decrypt_symmetric(&blob, "some passphrase").unwrap();
        assert_eq!(decrypted, "");
    }

    #[test]
    fn test_large_payload() {
        let payload = base64_encode(&vec![0x42u8; 1024 * 1024]);
        let blob = encrypt_symmetric(&payload, "big one").unwrap();
        let decrypted = decrypt_symmetric(&blob, "big one").unwrap();
        assert_eq!(payload, decrypted);
    }

    #[test]
    fn test_wrong_passphrase() {
        let blob = encrypt_symmetric(&base64_encode(b"secret"), "correct").unwrap();
        let result = decrypt_symmetric(&blob, "wrong");
        assert!(matches!(result, Err(CryptoError::DecryptionFailure)));
    }

    #[test]
    fn test_nondeterministic_ciphertext() {
        let payload = base64_encode(b"same input");
        let blob1 = encrypt_symmetric(&payload, "same passphrase").unwrap();
        let blob2 = encrypt_symmetric(&payload, "same passphrase").unwrap();
        assert_ne!(blob1, blob2);
    }

    #[test]
    fn test_blob_carries_magic() {
        let blob = encrypt_symmetric(&base64_encode(b"data"), "pass").unwrap();
        let raw = base64_decode(&blob).unwrap();
        assert_eq!(&raw[..MAGIC_SYM.len()], MAGIC_SYM);
    }

    #[test]
    fn test_reject_not_base64() {
        let result = decrypt_symmetric("@@not base64@@", "pass");
        assert!(matches!(result, Err(CryptoError::DecryptionFailure)));
    }

    #[test]
    fn test_reject_wrong_magic() {
        let blob = encrypt_symmetric(&base64_encode(b"data"), "pass").unwrap();
        let mut raw = base64_decode(&blob).unwrap();
        raw[0] = b'X';
        let result = decrypt_symmetric(&base64_encode(&raw), "pass");
        assert!(matches!(result, Err(CryptoError::DecryptionFailure)));
    }

    #[test]
    fn test_reject_truncated_blob() {
        let blob = encrypt_symmetric(&base64_encode(b"data"), "pass").unwrap();
        let raw = base64_decode(&blob).unwrap();
        let truncated = &raw[..MAGIC_SYM.len() + SALT_SIZE];
        let result = decrypt_symmetric(&base64_encode(truncated), "pass");
        assert!(matches!(result, Err(CryptoError::DecryptionFailure)));
    }

    #[test]
    fn test_reject_ragged_ciphertext_length() {
        let blob = encrypt_symmetric(&base64_encode(b"data"), "pass").unwrap();
        let mut raw = base64_decode(&blob).unwrap();
        raw.push(0);
        let result = decrypt_symmetric(&base64_encode(&raw), "pass");
        assert!(matches!(result, Err(CryptoError::DecryptionFailure)));
    }

    #[test]
    fn test_reject_tampered_ciphertext() {
        let blob = encrypt_symmetric(&base64_encode(b"important data here"), "pass").unwrap();
        let mut raw = base64_decode(&blob).unwrap();
        let last = raw.len() - 1;
        raw[last] ^= 0xFF;
        let result = decrypt_symmetric(&base64_encode(&raw), "pass");
        assert!(result.is_err());
    }
}
