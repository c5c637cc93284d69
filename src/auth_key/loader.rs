use p256::ecdsa::SigningKey;
use p256::pkcs8::{DecodePrivateKey, ObjectIdentifier, PrivateKeyInfo};

use crate::error::{Result, TokenError};

/// `id-ecPublicKey`, the algorithm of every EC private key.
pub const ID_EC_PUBLIC_KEY: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.2.1");

/// `secp256r1` / `prime256v1`.
pub const SECP256R1: ObjectIdentifier = ObjectIdentifier::new_unwrap("1.2.840.10045.3.1.7");

/// Algorithm of a decoded PKCS#8 private key.
#[derive(Debug)]
pub enum PrivateKeyKind {
    P256(SigningKey),
    /// EC key on another (or unnamed) curve.
    EllipticCurve { curve: Option<ObjectIdentifier> },
    /// RSA, Ed25519 and everything else.
    Other { algorithm: ObjectIdentifier },
}

/// Returns the payload of the first PEM block found in `bytes`.
pub fn decode_pem(bytes: &[u8]) -> Result<Vec<u8>> {
    let block = pem::parse(bytes).map_err(|_| TokenError::BadEncoding)?;
    if block.contents().is_empty() {
        return Err(TokenError::BadEncoding);
    }
    Ok(block.contents().to_vec())
}

/// Parses a PKCS#8 DER document and classifies the key it carries.
pub fn classify_pkcs8(der: &[u8]) -> Result<PrivateKeyKind> {
    let info = PrivateKeyInfo::try_from(der).map_err(|_| TokenError::BadKeyContainer)?;

    if info.algorithm.oid != ID_EC_PUBLIC_KEY {
        return Ok(PrivateKeyKind::Other {
            algorithm: info.algorithm.oid,
        });
    }

    match info.algorithm.parameters_oid() {
        Ok(curve) if curve == SECP256R1 => SigningKey::from_pkcs8_der(der)
            .map(PrivateKeyKind::P256)
            .map_err(|_| TokenError::BadKeyContainer),
        Ok(curve) => Ok(PrivateKeyKind::EllipticCurve { curve: Some(curve) }),
        Err(_) => Ok(PrivateKeyKind::EllipticCurve { curve: None }),
    }
}
