//! Compact ES256 JSON Web Tokens used as provider authentication tokens.

pub mod builder;
pub mod decode;
pub mod es256;
pub mod types;
