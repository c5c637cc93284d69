#[cfg(test)]
pub mod common;

pub mod concurrent_bearer_requests;
pub mod expiration_and_cache;
