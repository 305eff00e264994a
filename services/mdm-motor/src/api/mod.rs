//! HTTP 接口层

pub mod params;
pub mod routes;

pub use params::QueryParams;
pub use routes::{LIST_ALL_PATH, LIST_BY_PARAMS_PATH, material_routes};
