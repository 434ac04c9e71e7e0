//! Unified error types for Redoubt Seal.
//!
//! Decryption failures are deliberately coarse: wrong key, flipped bit, and
//! truncated tag all surface as the same [`AuthenticationFailed`] value with
//! the same message. Only structural problems that are visible before any
//! key material is touched (a container too short to hold a nonce) get their
//! own kind.

use core::fmt;

/// A key failed validation before any cryptographic use.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyError {
    /// Decoded key material was not exactly 32 bytes. Carries the hex
    /// string length that was supplied, never the content.
    InvalidLength(usize),
    /// Key string contained a non-hex character.
    InvalidHex,
}

impl fmt::Display for KeyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            KeyError::InvalidLength(n) => {
                write!(f, "invalid key length: expected 64 hex chars, got {}", n)
            }
            KeyError::InvalidHex => write!(f, "invalid key encoding: not hex"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KeyError {}

/// Container too short to contain a nonce. Detected structurally, before
/// any key material is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MalformedContainer;

impl fmt::Display for MalformedContainer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed container")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for MalformedContainer {}

/// Authentication failed. Covers wrong key, modified ciphertext, modified
/// nonce, and truncated tag without distinguishing between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthenticationFailed;

impl fmt::Display for AuthenticationFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "authentication failed")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for AuthenticationFailed {}

/// Encryption failed. With a validated 32-byte key this is unreachable in
/// practice; it exists so seal never panics on RNG exhaustion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SealError;

impl fmt::Display for SealError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "encryption failed")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SealError {}

/// Failure modes of opening a sealed container.
///
/// The two variants partition all decryption failures: `Malformed` fires on
/// containers shorter than a nonce, `Authentication` on everything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenError {
    /// Container too short to parse.
    Malformed(MalformedContainer),
    /// Tag verification failed.
    Authentication(AuthenticationFailed),
}

impl fmt::Display for OpenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OpenError::Malformed(e) => fmt::Display::fmt(e, f),
            OpenError::Authentication(e) => fmt::Display::fmt(e, f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OpenError {}

impl From<MalformedContainer> for OpenError {
    fn from(e: MalformedContainer) -> Self {
        OpenError::Malformed(e)
    }
}

impl From<AuthenticationFailed> for OpenError {
    fn from(e: AuthenticationFailed) -> Self {
        OpenError::Authentication(e)
    }
}
