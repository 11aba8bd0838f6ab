//! Symmetric encryption for the persisted session record.
//!
//! The record is sealed with **AES-256-GCM** under a static key derived from the
//! configured passphrase (SHA-256). Each write uses a fresh random 12-byte nonce;
//! the stored envelope is `base64(nonce || ciphertext)`. GCM authentication means
//! a tampered or truncated envelope fails to open instead of yielding garbage.

use aes_gcm::{
    aead::{Aead, AeadCore, KeyInit, OsRng},
    Aes256Gcm, Key, Nonce,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use sha2::{Digest, Sha256};

const NONCE_LEN: usize = 12;
const TAG_LEN: usize = 16;

#[derive(Clone)]
pub struct SessionCipher {
    cipher: Aes256Gcm,
}

impl SessionCipher {
    pub fn new(passphrase: &str) -> Self {
        let digest = Sha256::digest(passphrase.as_bytes());
        let key = Key::<Aes256Gcm>::from_slice(digest.as_slice());
        Self {
            cipher: Aes256Gcm::new(key),
        }
    }

    /// Encrypt a UTF-8 string into a base64 envelope.
    pub fn encrypt(&self, plaintext: &str) -> Result<String, String> {
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let ciphertext = self
            .cipher
            .encrypt(&nonce, plaintext.as_bytes())
            .map_err(|e| format!("Encryption failed: {}", e))?;

        let mut envelope = Vec::with_capacity(NONCE_LEN + ciphertext.len());
        envelope.extend_from_slice(nonce.as_slice());
        envelope.extend_from_slice(&ciphertext);
        Ok(STANDARD.encode(envelope))
    }

    /// Open an envelope produced by [`SessionCipher::encrypt`].
    pub fn decrypt(&self, envelope: &str) -> Result<String, String> {
        let bytes = STANDARD
            .decode(envelope.trim())
            .map_err(|e| format!("Invalid envelope encoding: {}", e))?;
        if bytes.len() < NONCE_LEN + TAG_LEN {
            return Err(format!("Envelope too short: {} bytes", bytes.len()));
        }

        let (nonce, ciphertext) = bytes.split_at(NONCE_LEN);
        let plaintext = self
            .cipher
            .decrypt(Nonce::from_slice(nonce), ciphertext)
            .map_err(|e| format!("Decryption failed: {}", e))?;

        String::from_utf8(plaintext).map_err(|e| format!("Decrypted data is not UTF-8: {}", e))
    }
}

impl std::fmt::Debug for SessionCipher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionCipher(..)")
    }
}
