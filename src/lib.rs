//! # APNs Provider Token Library
//!
//! Issues ES256 signed provider authentication tokens from a `.p8` key
//! and caches the last one, so concurrent senders share a single valid
//! bearer instead of signing on every request.
//!
//! Modules:
//! - `auth_key` — `.p8` (PEM / PKCS#8) signing key loading
//! - `jwt` — ES256 signer, token builder and inspector
//! - `cache` — time bounded single-slot token cache
//! - `config` — YAML service configuration
//! - `authorization` — `authorization` header helpers

pub mod auth_key;
pub mod authorization;
pub mod cache;
pub mod config;
pub mod error;
pub mod helpers;
pub mod jwt;
pub mod observability;
pub mod tests;
pub mod utils;


pub use crate::auth_key::AuthKey;
pub use crate::authorization::set_bearer;
pub use crate::cache::token_cache::{CredentialIdentity, TokenCache};
pub use crate::error::{Result, TokenError};
pub use crate::jwt::builder::generate_bearer;
