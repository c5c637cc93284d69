//! ES256: ECDSA over P-256 with SHA-256, signature as fixed width `r || s`.

use p256::ecdsa::signature::hazmat::RandomizedPrehashSigner;
use p256::ecdsa::Signature;
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

use crate::auth_key::AuthKey;
use crate::error::{Result, TokenError};

/// Width of one signature component.
pub const COMPONENT_LEN: usize = 32;
pub const SIGNATURE_LEN: usize = 2 * COMPONENT_LEN;

/// Integer-to-octet-stream: encodes a big-endian magnitude as exactly
/// `COMPONENT_LEN` bytes, left padded with zeros.
pub fn i2osp(n: &[u8]) -> Result<[u8; COMPONENT_LEN]> {
    let first = n.iter().position(|b| *b != 0).unwrap_or(n.len());
    let magnitude = &n[first..];
    if magnitude.len() > COMPONENT_LEN {
        return Err(TokenError::SigningFailure(format!(
            "integer of {} bytes does not fit in {}",
            magnitude.len(),
            COMPONENT_LEN
        )));
    }
    let mut out = [0u8; COMPONENT_LEN];
    out[COMPONENT_LEN - magnitude.len()..].copy_from_slice(magnitude);
    Ok(out)
}

/// Signs `input` with a fresh nonce from the OS random source.
///
/// Two calls over the same input return different bytes; both verify
/// against the key's public half.
pub fn es256(key: &AuthKey, input: &[u8]) -> Result<[u8; SIGNATURE_LEN]> {
    let digest = Sha256::digest(input);
    let signature: Signature = key
        .signing_key()
        .sign_prehash_with_rng(&mut OsRng, digest.as_slice())
        .map_err(|e| TokenError::SigningFailure(e.to_string()))?;

    let (r, s) = signature.split_bytes();
    let mut out = [0u8; SIGNATURE_LEN];
    out[..COMPONENT_LEN].copy_from_slice(&i2osp(&r)?);
    out[COMPONENT_LEN..].copy_from_slice(&i2osp(&s)?);
    Ok(out)
}
