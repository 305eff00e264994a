//! 仓储接口模块

mod material_repository;

pub use material_repository::MaterialRepository;
