//! Storage layer for saved Yahoo Fantasy query results
//!
//! Organized into:
//! - `data`: Save/load of records on disk
//! - `model`: Coercion of loaded data into typed models

pub mod data;
pub mod model;


pub use data::YahooData;
pub use model::{deserialize_model, FromStructuredData, ModelData};
