pub mod habit;
pub mod kv;
pub mod mood;
