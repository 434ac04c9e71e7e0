//! Symmetric key management.
//!
//! Keys are raw 256-bit AES-256-GCM keys. The only serialized key form is
//! the exchange string:
//!
//!   key_hex[64] = lowercase hex of key[32]
//!
//! There is no derivation step and no wrapping: whoever holds the 64-char
//! string holds the key.

extern crate alloc;
use alloc::string::String;

use core::fmt;

use rand_core::{OsRng, RngCore};
use subtle::ConstantTimeEq;
use zeroize::{Zeroize, ZeroizeOnDrop, Zeroizing};

use crate::container::{KEY_BYTES, KEY_HEX_CHARS};
use crate::error::KeyError;

// ---------------------------------------------------------------------------
// Symmetric key
// ---------------------------------------------------------------------------

/// A 256-bit AES-256-GCM key, zeroized on drop.
///
/// Deliberately not `Clone`: one owner per key. Equality is constant-time.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SymmetricKey([u8; KEY_BYTES]);

impl SymmetricKey {
    /// Generate a fresh random key from the OS RNG.
    pub fn generate() -> Self {
        let mut bytes = [0u8; KEY_BYTES];
        OsRng.fill_bytes(&mut bytes);
        Self(bytes)
    }

    /// Construct a key from raw bytes.
    pub fn from_bytes(bytes: [u8; KEY_BYTES]) -> Self {
        Self(bytes)
    }

    /// Parse a key from its 64-char hex exchange form.
    ///
    /// Strict: the string must be exactly 64 hex digits (either case), with
    /// no whitespace, prefixes, or separators. Anything else is rejected;
    /// nothing is extracted or trimmed.
    pub fn from_hex(s: &str) -> Result<Self, KeyError> {
        if s.len() != KEY_HEX_CHARS {
            return Err(KeyError::InvalidLength(s.len()));
        }

        let mut bytes = [0u8; KEY_BYTES];
        hex::decode_to_slice(s, &mut bytes).map_err(|_| KeyError::InvalidHex)?;
        Ok(Self(bytes))
    }

    /// Serialize to the 64-char lowercase hex exchange form.
    ///
    /// The returned string is key material; drop it as soon as it has been
    /// delivered.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub(crate) fn as_bytes(&self) -> &[u8; KEY_BYTES] {
        &self.0
    }
}

impl PartialEq for SymmetricKey {
    fn eq(&self, other: &Self) -> bool {
        self.0.ct_eq(&other.0).into()
    }
}

impl Eq for SymmetricKey {}

impl fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Never print key material, not even in debug builds.
        f.write_str("SymmetricKey([REDACTED])")
    }
}

// ---------------------------------------------------------------------------
// Key input
// ---------------------------------------------------------------------------

/// Where the key for an operation comes from.
///
/// Callers state the mode explicitly. An import that fails to parse is an
/// error; it never silently falls back to generating a fresh key.
pub enum KeyInput {
    /// Mint a fresh random key.
    Generate,
    /// Use an existing key, supplied in 64-char hex exchange form.
    Import(String),
}

impl KeyInput {
    /// Resolve to a usable key.
    ///
    /// For [`KeyInput::Generate`] the second element carries the freshly
    /// minted hex so the caller can surface it for later decryption; for
    /// [`KeyInput::Import`] it is `None`.
    pub fn resolve(self) -> Result<(SymmetricKey, Option<String>), KeyError> {
        match self {
            KeyInput::Generate => {
                let key = SymmetricKey::generate();
                let key_hex = key.to_hex();
                Ok((key, Some(key_hex)))
            }
            KeyInput::Import(s) => {
                let s = Zeroizing::new(s);
                let key = SymmetricKey::from_hex(&s)?;
                Ok((key, None))
            }
        }
    }
}

impl fmt::Debug for KeyInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyInput::Generate => f.write_str("Generate"),
            KeyInput::Import(_) => f.write_str("Import([REDACTED])"),
        }
    }
}
