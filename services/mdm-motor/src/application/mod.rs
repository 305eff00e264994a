//! Application layer

pub mod envelope;
pub mod handler;
pub mod queries;

pub use envelope::{MaterialListEnvelope, RequestEcho, ResponseBody};
pub use handler::ServiceHandler;
pub use queries::*;
