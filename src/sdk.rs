//! Redoubt SDK — Public API Surface
//!
//! This module defines the **frozen** public interface for Redoubt Seal.
//! Everything else is internal implementation detail.
//!
//! # API Stability Promise
//!
//! These exports are stable across minor versions:
//! - `Redoubt` — main encryption engine
//! - `SymmetricKey`, `KeyInput` — key type and key sourcing
//! - `KeyError`, `SealError`, `OpenError` — error types
//! - `MalformedContainer`, `AuthenticationFailed` — open failure kinds
//!
//! Internal modules (`container`, `aead`) are NOT part of the public API
//! and may change without notice.

extern crate alloc;

use alloc::vec::Vec;
use core::fmt;

// Re-export only what customers need
pub use crate::error::{AuthenticationFailed, KeyError, MalformedContainer, OpenError, SealError};
pub use crate::key::{KeyInput, SymmetricKey};

use crate::container::NONCE_BYTES;
use crate::{aead, container};

// ---------------------------------------------------------------------------
// Main SDK interface
// ---------------------------------------------------------------------------

/// Redoubt encryption engine.
///
/// Symmetric authenticated encryption with AES-256-GCM. Each seal draws a
/// fresh random nonce and emits a self-describing container that carries
/// everything needed for decryption except the key.
///
/// The engine holds no state: key material lives with the caller, and any
/// number of seals and opens may run concurrently on one instance.
///
/// # Example
///
/// ```
/// use redoubt_seal::Redoubt;
///
/// let redoubt = Redoubt::new();
/// let key = redoubt.generate_key();
///
/// let container = redoubt.seal(&key, b"secret data").unwrap();
/// let plaintext = redoubt.open(&key, &container).unwrap();
///
/// assert_eq!(plaintext, b"secret data");
/// ```
pub struct Redoubt;

impl Default for Redoubt {
    fn default() -> Self {
        Self::new()
    }
}

impl Redoubt {
    /// Create a new Redoubt instance.
    pub fn new() -> Self {
        Self
    }

    /// Generate a new random 256-bit key.
    ///
    /// Exchange it with `SymmetricKey::to_hex`; the hex string must be
    /// protected like the key itself.
    pub fn generate_key(&self) -> SymmetricKey {
        SymmetricKey::generate()
    }

    /// Encrypt (seal) plaintext under a key.
    ///
    /// A fresh random nonce is drawn from the OS on every call; sealing the
    /// same plaintext twice yields different containers.
    ///
    /// # Returns
    ///
    /// Self-describing container bytes: exactly 28 bytes larger than the
    /// plaintext (12-byte nonce + 16-byte tag).
    pub fn seal(&self, key: &SymmetricKey, plaintext: &[u8]) -> Result<Vec<u8>, SealError> {
        let nonce = aead::nonce()?;
        let aead_ct = aead::aead_seal(key, &nonce, plaintext)?;
        Ok(container::frame(&nonce, &aead_ct))
    }

    /// Decrypt (open) a container using a key.
    ///
    /// # Error Behavior
    ///
    /// [`OpenError::Malformed`] fires only when the container is shorter
    /// than a 12-byte nonce. Every other failure (wrong key, corrupted or
    /// truncated bytes) is the single opaque [`OpenError::Authentication`]
    /// value, so callers cannot tell which part of verification failed.
    pub fn open(&self, key: &SymmetricKey, container: &[u8]) -> Result<Vec<u8>, OpenError> {
        let parts = container::unframe(container)?;
        let plaintext = aead::aead_open(key, parts.nonce, parts.aead_ciphertext)?;
        Ok(plaintext)
    }
}

// ---------------------------------------------------------------------------
// Inspection utilities (for ops/debugging)
// ---------------------------------------------------------------------------

/// Container metadata (extracted without decryption).
#[derive(Debug, Clone)]
pub struct ContainerInfo {
    /// Total container length
    pub total_bytes: usize,
    /// AEAD ciphertext length (plaintext + tag)
    pub ciphertext_bytes: usize,
    /// Plaintext length (total - overhead)
    pub plaintext_bytes: usize,
    /// The public per-encryption nonce
    pub nonce: [u8; NONCE_BYTES],
}

impl fmt::Display for ContainerInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "AES-256-GCM | {} bytes ({} plaintext) | nonce {}",
            self.total_bytes,
            self.plaintext_bytes,
            hex::encode(self.nonce)
        )
    }
}

/// Inspect container metadata without decrypting.
///
/// Useful for logging, debugging, and operational tooling. The nonce is the
/// only parseable field and is not secret; nothing here reveals key or
/// plaintext material, and nothing is verified.
pub fn inspect(container: &[u8]) -> Result<ContainerInfo, MalformedContainer> {
    let parts = container::unframe(container)?;

    // Plaintext bytes = total - (nonce + tag); a container shorter than the
    // full overhead reports zero and will fail authentication if opened.
    let plaintext_bytes = container.len().saturating_sub(MIN_CONTAINER_BYTES);

    Ok(ContainerInfo {
        total_bytes: container.len(),
        ciphertext_bytes: parts.aead_ciphertext.len(),
        plaintext_bytes,
        nonce: *parts.nonce,
    })
}

// ---------------------------------------------------------------------------
// Version info
// ---------------------------------------------------------------------------

/// SDK version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Minimum container size in bytes (nonce + tag, empty plaintext).
pub const MIN_CONTAINER_BYTES: usize = crate::container::MIN_CONTAINER_BYTES;
