// tests/common/mod.rs
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use p256::ecdsa::signature::Verifier;
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use rand::rngs::OsRng;

use crate::auth_key::AuthKey;

pub const TEST_KEY_FILE: &str = "AuthKey_5MDQ4KLTY7.p8";
pub const KEY_ID: &str = "5MDQ4KLTY7";
pub const TEAM_ID: &str = "SUPERTEEM1";

/// Fixture keys live in `testdata/` at the crate root.
pub fn testdata(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("testdata").join(name)
}

pub fn load_test_key() -> AuthKey {
    AuthKey::from_file(testdata(TEST_KEY_FILE)).expect("testdata key must load")
}

pub fn random_key() -> AuthKey {
    AuthKey::from(SigningKey::random(&mut OsRng))
}

/// Decodes one base64url segment into its raw text.
pub fn decode_segment(segment: &str) -> String {
    let bytes = URL_SAFE_NO_PAD.decode(segment).expect("segment must be base64url");
    String::from_utf8(bytes).expect("segment must be utf-8")
}

/// Verifies the signature segment of a compact token.
pub fn verify_token(token: &str, verifying_key: &VerifyingKey) -> bool {
    let Some((signing_input, signature_b64)) = token.rsplit_once('.') else {
        return false;
    };
    let Ok(raw) = URL_SAFE_NO_PAD.decode(signature_b64) else {
        return false;
    };
    let Ok(signature) = Signature::from_slice(&raw) else {
        return false;
    };
    verifying_key.verify(signing_input.as_bytes(), &signature).is_ok()
}
