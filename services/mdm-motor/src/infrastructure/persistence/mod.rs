//! Persistence implementations

mod converters;
mod postgres;
mod query_builder;
mod rows;

pub use postgres::PostgresMaterialRepository;
pub use query_builder::{MATERIAL_TABLE, SELECT_COLUMNS, SelectStatement, build_select};
