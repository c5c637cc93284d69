//! Error types of the token issuance core.
//!
//! Every variant carries a stable message that names the failed validation
//! step. None of them ever embeds key material.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, TokenError>;

#[derive(Debug, Error)]
pub enum TokenError {
    /// No PEM block could be decoded, or the block payload is empty.
    #[error("authkey: invalid PEM")]
    BadEncoding,

    /// The PEM payload is not a PKCS#8 ASN.1 DER private key.
    #[error("authkey: invalid PKCS#8")]
    BadKeyContainer,

    /// The key is not an ECDSA key on the P-256 curve.
    #[error("authkey: not ECDSA P-256")]
    UnsupportedKeyType,

    /// The token cache was constructed without a signing key.
    #[error("token: key is missing")]
    MissingKey,

    /// The underlying digest or signature primitive failed.
    #[error("jwt: signing failed: {0}")]
    SigningFailure(String),

    #[error("token: bearer is not a valid header value")]
    InvalidHeaderValue,

    #[error("jwt: malformed token: {0}")]
    MalformedToken(String),

    #[error("authkey: read failed: {0}")]
    Io(#[from] std::io::Error),
}

impl TokenError {
    /// Short label used for the `reason` dimension of failure metrics.
    pub fn reason(&self) -> &'static str {
        match self {
            TokenError::BadEncoding => "bad_encoding",
            TokenError::BadKeyContainer => "bad_key_container",
            TokenError::UnsupportedKeyType => "unsupported_key_type",
            TokenError::MissingKey => "missing_key",
            TokenError::SigningFailure(_) => "signing_failure",
            TokenError::InvalidHeaderValue => "invalid_header_value",
            TokenError::MalformedToken(_) => "malformed_token",
            TokenError::Io(_) => "io",
        }
    }
}
