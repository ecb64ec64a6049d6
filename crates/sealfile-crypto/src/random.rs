//! Ephemeral passphrase generation.

use rand::rngs::OsRng;
use rand::{CryptoRng, RngCore};
use zeroize::{Zeroize, ZeroizeOnDrop};

/// Number of random bytes behind an ephemeral key (32 hex characters).
pub const EPHEMERAL_KEY_BYTES: usize = 16;

/// One-shot symmetric passphrase for the hybrid flow.
///
/// Generated once, used to encrypt a single payload, wrapped for the
/// recipient, then dropped. The hex text is zeroized on drop and is never
/// part of any output artifact.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct EphemeralKey(String);

impl EphemeralKey {
    /// Generate from the operating system's secure random source.
    pub fn generate() -> Self {
        Self::generate_with_rng(&mut OsRng)
    }

    /// Generate with a caller-supplied random source.
    pub fn generate_with_rng<R: RngCore + CryptoRng>(rng: &mut R) -> Self {
        let mut bytes = [0u8; EPHEMERAL_KEY_BYTES];
        rng.fill_bytes(&mut bytes);
        let key = Self(hex::encode(bytes));
        bytes.zeroize();
        key
    }

    /// The passphrase text (32 lowercase hex characters).
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for EphemeralKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EphemeralKey")
            .field("key", &"[REDACTED]")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_length_and_alphabet() {
        let key = EphemeralKey::generate();
        assert_eq!(key.as_str().len(), 32);
        assert!(key.as_str().chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_keys_are_unique() {
        let a = EphemeralKey::generate();
        let b = EphemeralKey::generate();
        assert_ne!(a.as_str(), b.as_str());
    }

    #[test]
    fn test_deterministic_with_injected_rng() {
        use rand::SeedableRng;
        let mut rng1 = rand::rngs::StdRng::seed_from_u64(7);
        let mut rng2 = rand::rngs::StdRng::seed_from_u64(7);
        let a = EphemeralKey::generate_with_rng(&mut rng1);
        let b = EphemeralKey::generate_with_rng(&mut rng2);
        assert_eq!(a.as_str(), b.as_str());
    }

    #[test]
    fn test_debug_redacted() {
        let key = EphemeralKey::generate();
        let debug = format!("{:?}", key);
        assert!(debug.contains("REDACTED"));
        assert!(!debug.contains(key.as_str()));
    }
}
