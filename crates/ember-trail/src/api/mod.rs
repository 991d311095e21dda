pub mod config;
pub mod error;
pub mod overlay;
pub mod types;
