//! Queries module

pub mod material_queries;

pub use material_queries::*;
