use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;

use crate::auth_key::AuthKey;
use crate::error::{Result, TokenError};
use crate::jwt::es256::es256;
use crate::jwt::types::{JwtClaims, JwtHeader};

/// Builds the signed provider token `header.claims.signature`.
///
/// Header and claims are serialized without whitespace, keys in the order
/// `alg, typ, kid` and `iss, iat`. Every segment is base64url without padding.
pub fn generate_bearer(key: &AuthKey, key_id: &str, team_id: &str, issued_at: i64) -> Result<String> {
    let header = JwtHeader::es256(key_id);
    let claims = JwtClaims {
        iss: team_id.to_owned(),
        iat: issued_at,
    };

    let signing_input = signing_input(&header, &claims)?;
    let signature = es256(key, signing_input.as_bytes())?;
    let signature_b64 = URL_SAFE_NO_PAD.encode(signature);

    let mut token = String::with_capacity(signing_input.len() + 1 + signature_b64.len());
    token.push_str(&signing_input);
    token.push('.');
    token.push_str(&signature_b64);
    Ok(token)
}

/// `base64url(header) "." base64url(claims)`
pub fn signing_input(header: &JwtHeader, claims: &JwtClaims) -> Result<String> {
    Ok(format!("{}.{}", encode_segment(header)?, encode_segment(claims)?))
}

fn encode_segment<T: serde::Serialize>(value: &T) -> Result<String> {
    // serializing plain string/integer structs can not fail
    let json = serde_json::to_vec(value).map_err(|e| TokenError::SigningFailure(e.to_string()))?;
    Ok(URL_SAFE_NO_PAD.encode(json))
}
