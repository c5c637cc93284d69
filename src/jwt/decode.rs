use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use serde::de::DeserializeOwned;

use crate::error::{Result, TokenError};
use crate::jwt::es256::SIGNATURE_LEN;
use crate::jwt::types::{JwtClaims, JwtHeader};

/// Splits a compact token and decodes its header and claims.
/// The signature is only checked for shape, not verified.
pub fn inspect(token: &str) -> Result<(JwtHeader, JwtClaims)> {
    let segments: Vec<&str> = token.split('.').collect();
    if segments.len() != 3 {
        return Err(TokenError::MalformedToken(format!(
            "expected 3 segments, got {}",
            segments.len()
        )));
    }

    let header: JwtHeader = decode_segment("header", segments[0])?;
    let claims: JwtClaims = decode_segment("claims", segments[1])?;

    let signature = URL_SAFE_NO_PAD
        .decode(segments[2])
        .map_err(|e| TokenError::MalformedToken(format!("signature: {}", e)))?;
    if signature.len() != SIGNATURE_LEN {
        return Err(TokenError::MalformedToken(format!(
            "signature is {} bytes, expected {}",
            signature.len(),
            SIGNATURE_LEN
        )));
    }

    Ok((header, claims))
}

fn decode_segment<T: DeserializeOwned>(name: &str, segment: &str) -> Result<T> {
    let json = URL_SAFE_NO_PAD
        .decode(segment)
        .map_err(|e| TokenError::MalformedToken(format!("{}: {}", name, e)))?;
    serde_json::from_slice(&json).map_err(|e| TokenError::MalformedToken(format!("{}: {}", name, e)))
}
