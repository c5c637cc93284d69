use http::header::AUTHORIZATION;
use http::{HeaderMap, HeaderValue};

use crate::error::{Result, TokenError};

/// Attaches an externally managed bearer as `authorization: bearer <token>`,
/// bypassing any cache.
pub fn set_bearer(headers: &mut HeaderMap, bearer: &str) -> Result<()> {
    let value = HeaderValue::from_str(&format!("bearer {}", bearer)).map_err(|_| TokenError::InvalidHeaderValue)?;
    headers.insert(AUTHORIZATION, value);
    Ok(())
}
