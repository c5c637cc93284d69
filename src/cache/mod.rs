pub mod token_cache;
pub mod token_record;
