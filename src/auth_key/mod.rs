//! Authentication token signing key.
//!
//! The key is distributed as a `.p8` text file: a PEM block wrapping a
//! PKCS#8 DER encoded ECDSA private key on the P-256 curve.

pub mod loader;

use std::fmt;
use std::path::Path;

use p256::ecdsa::{SigningKey, VerifyingKey};
use tracing::debug;

use crate::auth_key::loader::{decode_pem, classify_pkcs8, PrivateKeyKind};
use crate::error::{Result, TokenError};

/// P-256 signing key handle. Immutable once loaded.
#[derive(Clone)]
pub struct AuthKey {
    signing_key: SigningKey,
}

impl AuthKey {
    /// Loads the key from a `.p8` file on disk.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        debug!("loading auth key from '{}'", path.display());
        let bytes = std::fs::read(path)?;
        Self::from_bytes(&bytes)
    }

    /// Loads the key from in-memory `.p8` content.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        let der = decode_pem(bytes)?;
        classify_pkcs8(&der)?.try_into()
    }

    pub fn signing_key(&self) -> &SigningKey {
        &self.signing_key
    }

    pub fn verifying_key(&self) -> VerifyingKey {
        VerifyingKey::from(&self.signing_key)
    }
}

impl From<SigningKey> for AuthKey {
    fn from(signing_key: SigningKey) -> Self {
        Self { signing_key }
    }
}

impl TryFrom<PrivateKeyKind> for AuthKey {
    type Error = TokenError;

    fn try_from(kind: PrivateKeyKind) -> Result<Self> {
        match kind {
            PrivateKeyKind::P256(signing_key) => Ok(Self { signing_key }),
            PrivateKeyKind::EllipticCurve { curve } => {
                debug!("rejecting EC key on curve {:?}", curve.map(|c| c.to_string()));
                Err(TokenError::UnsupportedKeyType)
            }
            PrivateKeyKind::Other { algorithm } => {
                debug!("rejecting key with algorithm {}", algorithm);
                Err(TokenError::UnsupportedKeyType)
            }
        }
    }
}

impl fmt::Debug for AuthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthKey").field("curve", &"P-256").finish_non_exhaustive()
    }
}
