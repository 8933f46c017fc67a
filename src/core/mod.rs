//! Core utilities for the Yahoo Fantasy data cache
//!
//! This module consolidates common utilities that are used across
//! the application:
//! - `cache`: File system helpers and storage-location resolution
//! - `config`: Data directory configuration

pub mod cache;
pub mod config;

// Re-export commonly used items for convenience
pub use cache::{data_file_path, try_read_to_string, validate_key, write_string_atomic};
pub use config::DataConfig;
