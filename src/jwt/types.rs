use serde::{Deserialize, Serialize};

pub const ALGORITHM_ES256: &str = "ES256";
pub const TOKEN_TYPE_JWT: &str = "JWT";

/// JOSE header. Field order is the serialized order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtHeader {
    pub alg: String,
    pub typ: String,
    pub kid: String,
}

impl JwtHeader {
    pub fn es256(key_id: &str) -> Self {
        Self {
            alg: ALGORITHM_ES256.to_owned(),
            typ: TOKEN_TYPE_JWT.to_owned(),
            kid: key_id.to_owned(),
        }
    }
}

/// Provider token claims: issuer (team id) and issue time in epoch seconds.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JwtClaims {
    pub iss: String,
    pub iat: i64,
}
