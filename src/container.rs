//! Container format
//!
//! Format:
//!   nonce[12] || aead_ct[16+]
//!
//! aead_ct = ciphertext || gcm_tag[16], as produced by AES-256-GCM.
//!
//! There is no magic number, no version byte, and no length field: the
//! nonce is the first 12 bytes and everything after it belongs to the AEAD.
//! A container is therefore indistinguishable from random bytes of the
//! same length.

extern crate alloc;
use alloc::vec::Vec;

use crate::error::MalformedContainer;

// ---------------------------------------------------------------------------
// Component sizes
// ---------------------------------------------------------------------------

pub const NONCE_BYTES: usize = 12;
pub const TAG_BYTES: usize = 16;
pub const KEY_BYTES: usize = 32;

/// Hex chars in the key exchange form: 2 per key byte.
pub const KEY_HEX_CHARS: usize = KEY_BYTES * 2; // 64

/// Smallest container any seal can produce: nonce + tag around an empty
/// plaintext. Shorter inputs to open cannot be well-formed, but only the
/// nonce bound is checked structurally; a missing tag is reported as an
/// authentication failure like every other unverifiable input.
pub const MIN_CONTAINER_BYTES: usize = NONCE_BYTES + TAG_BYTES; // 28

/// Borrowed view of a split container.
#[derive(Debug, Clone, Copy)]
pub struct ContainerParts<'a> {
    pub nonce: &'a [u8; NONCE_BYTES],
    pub aead_ciphertext: &'a [u8],
}

/// Split a container into nonce and AEAD ciphertext.
///
/// Fails only when the input is too short to contain a nonce. The AEAD
/// ciphertext is not inspected here; `aead_ciphertext` may be shorter than
/// a tag, and tag verification decides its fate.
pub fn unframe(data: &[u8]) -> Result<ContainerParts<'_>, MalformedContainer> {
    if data.len() < NONCE_BYTES {
        return Err(MalformedContainer);
    }

    let nonce: &[u8; NONCE_BYTES] = data[..NONCE_BYTES]
        .try_into()
        .map_err(|_| MalformedContainer)?;

    let aead_ciphertext = &data[NONCE_BYTES..];

    Ok(ContainerParts {
        nonce,
        aead_ciphertext,
    })
}

/// Concatenate nonce and AEAD ciphertext into a container.
///
/// Pure concatenation; with a typed nonce there is nothing to validate.
pub fn frame(nonce: &[u8; NONCE_BYTES], aead_ct: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(NONCE_BYTES + aead_ct.len());

    out.extend_from_slice(nonce);
    out.extend_from_slice(aead_ct);

    out
}
