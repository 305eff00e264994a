//! mdm-motor - 高压电机物料查询服务

pub mod api;
pub mod application;
pub mod domain;
pub mod infrastructure;
