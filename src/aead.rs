//! AEAD: AES-256-GCM
//!
//! No associated data is used anywhere in this protocol; the whole container
//! is either authentic or it is not.

extern crate alloc;
use alloc::vec::Vec;

use aes_gcm::{
    aead::{Aead, KeyInit},
    Aes256Gcm, Nonce,
};
use getrandom::getrandom;

use crate::container::{NONCE_BYTES, TAG_BYTES};
use crate::error::{AuthenticationFailed, SealError};
use crate::key::SymmetricKey;

/// Generate a random 12-byte nonce. Used during encryption only.
pub fn nonce() -> Result<[u8; NONCE_BYTES], SealError> {
    let mut n = [0u8; NONCE_BYTES];
    getrandom(&mut n).map_err(|_| SealError)?;
    Ok(n)
}

/// AEAD seal (encrypt path). Output is ciphertext || tag[16].
pub fn aead_seal(
    key: &SymmetricKey,
    nonce: &[u8; NONCE_BYTES],
    plaintext: &[u8],
) -> Result<Vec<u8>, SealError> {
    let cipher = Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| SealError)?;
    let n = Nonce::from_slice(nonce);
    cipher.encrypt(n, plaintext).map_err(|_| SealError)
}

/// AEAD open (decrypt path). Ciphertext too short to carry a tag fails the
/// same way a bad tag does.
pub fn aead_open(
    key: &SymmetricKey,
    nonce: &[u8; NONCE_BYTES],
    ciphertext: &[u8],
) -> Result<Vec<u8>, AuthenticationFailed> {
    if ciphertext.len() < TAG_BYTES {
        return Err(AuthenticationFailed);
    }

    let cipher = Aes256Gcm::new_from_slice(key.as_bytes()).map_err(|_| AuthenticationFailed)?;
    let n = Nonce::from_slice(nonce);
    cipher.decrypt(n, ciphertext).map_err(|_| AuthenticationFailed)
}
