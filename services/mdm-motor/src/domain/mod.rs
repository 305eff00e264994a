//! 领域层
//!
//! 包含物料实体、过滤条件和仓储接口

pub mod entities;
pub mod repositories;

pub use entities::*;
pub use repositories::*;
