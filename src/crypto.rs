//! Sealed-box encryption of secret values.
//!
//! The GitHub API requires secret values to be encrypted with the repository's
//! public key using libsodium sealed boxes (X25519 + XSalsa20-Poly1305) before
//! submission. The sender holds no key of its own; only the API server's private
//! key can open the box.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use crypto_box::PublicKey;

use crate::error::EncodingError;

/// Length of a Curve25519 public key in raw bytes.
const PUBLIC_KEY_LEN: usize = 32;

/// Seal a plaintext secret value under a repository's base64-encoded public key.
///
/// Returns the ciphertext base64-encoded, ready for the secret-write endpoint.
/// A fresh ephemeral keypair is used per call, so sealing the same plaintext
/// twice yields different ciphertexts.
pub fn seal_for_github(plaintext: &[u8], public_key_b64: &str) -> Result<String, EncodingError> {
    let key_bytes = BASE64
        .decode(public_key_b64)
        .map_err(|_| EncodingError::InvalidBase64)?;

    let key_array: [u8; PUBLIC_KEY_LEN] = key_bytes
        .as_slice()
        .try_into()
        .map_err(|_| EncodingError::InvalidKeyLength(key_bytes.len()))?;

    let public_key = PublicKey::from(key_array);

    let mut rng = crypto_box::aead::OsRng;
    let ciphertext = public_key
        .seal(&mut rng, plaintext)
        .map_err(|_| EncodingError::SealFailed)?;

    Ok(BASE64.encode(ciphertext))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crypto_box::SecretKey;

    /// Generate a keypair and return (public_key_b64, secret_key)
    fn test_keypair() -> (String, SecretKey) {
        let mut rng = crypto_box::aead::OsRng;
        let secret_key = SecretKey::generate(&mut rng);
        let pk_b64 = BASE64.encode(secret_key.public_key().as_bytes());
        (pk_b64, secret_key)
    }

    #[test]
    fn seal_then_unseal_recovers_plaintext() {
        let (pk_b64, sk) = test_keypair();
        let plaintext = b"correct horse battery staple";

        let sealed_b64 = seal_for_github(plaintext, &pk_b64).unwrap();

        let ciphertext = BASE64.decode(&sealed_b64).unwrap();
        let opened = sk.unseal(&ciphertext).expect("matched key should unseal");
        assert_eq!(opened, plaintext);
    }

    #[test]
    fn sealing_twice_yields_distinct_ciphertexts() {
        let (pk_b64, _sk) = test_keypair();

        let first = seal_for_github(b"same-input", &pk_b64).unwrap();
        let second = seal_for_github(b"same-input", &pk_b64).unwrap();

        // Ephemeral sender keypair per call.
        assert_ne!(first, second);
    }

    #[test]
    fn malformed_base64_key_is_rejected() {
        let result = seal_for_github(b"value", "!!not base64!!");
        assert!(matches!(result, Err(EncodingError::InvalidBase64)));
    }

    #[test]
    fn wrong_length_key_is_rejected() {
        let short = BASE64.encode(b"sixteen-bytes-xy");
        let result = seal_for_github(b"value", &short);
        assert!(matches!(result, Err(EncodingError::InvalidKeyLength(16))));
    }

    #[test]
    fn sealed_output_is_valid_base64() {
        let (pk_b64, _sk) = test_keypair();
        let sealed_b64 = seal_for_github(b"value", &pk_b64).unwrap();
        assert!(BASE64.decode(&sealed_b64).is_ok());
    }
}
