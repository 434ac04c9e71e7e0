//! # Redoubt Seal
//!
//! Symmetric authenticated file encryption for data at rest.
//!
//! ## Quick Start
//!
//! ```rust
//! use redoubt_seal::{Redoubt, SymmetricKey};
//!
//! let redoubt = Redoubt::new();
//! let key = redoubt.generate_key();
//!
//! // Share this string with whoever needs to decrypt.
//! let key_hex = key.to_hex();
//!
//! let container = redoubt.seal(&key, b"secret").unwrap();
//!
//! let restored = SymmetricKey::from_hex(&key_hex).unwrap();
//! let plaintext = redoubt.open(&restored, &container).unwrap();
//!
//! assert_eq!(plaintext, b"secret");
//! ```
//!
//! ## Security Properties
//!
//! - **AES-256-GCM**: confidentiality and integrity in one primitive
//! - **Fresh nonce per seal**: equal plaintexts produce unequal containers
//! - **Uniform auth errors**: wrong key, tampering, and truncation are
//!   indistinguishable to the caller
//! - **Self-describing containers**: the nonce travels with the ciphertext;
//!   only the key is exchanged out of band
//!
//! ## What's NOT Provided
//!
//! - Passphrase key derivation (keys are raw 256-bit values)
//! - Asymmetric or multi-recipient encryption
//! - Streaming encryption (containers are sealed in memory)
//! - Key storage or rotation
//! - FIPS certification

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![doc(html_root_url = "https://docs.rs/redoubt-seal/0.1.0")]

extern crate alloc;

// ---------------------------------------------------------------------------
// Internal modules (not part of public API)
// ---------------------------------------------------------------------------

mod aead;
mod error;
mod key;

// Container module needs to be pub for the fuzz targets
// but should not be considered stable API
#[doc(hidden)]
pub mod container;

// ---------------------------------------------------------------------------
// Public SDK interface
// ---------------------------------------------------------------------------

mod sdk;

// Re-export the clean SDK interface
pub use sdk::{
    // Main types
    Redoubt,
    KeyInput,
    SymmetricKey,

    // Error types
    KeyError,
    SealError,
    OpenError,
    MalformedContainer,
    AuthenticationFailed,

    // Inspection
    ContainerInfo,
    inspect,

    // Constants
    VERSION,
    MIN_CONTAINER_BYTES,
};
