//! motor-import - 高压电机台账 CSV 导入

pub mod loader;
pub mod record;

pub use loader::import_records;
pub use record::{MotorRecord, read_records};
