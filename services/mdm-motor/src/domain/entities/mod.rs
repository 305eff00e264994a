//! 实体模块

mod filter;
mod material;

pub use filter::{FilterField, MaterialFilter};
pub use material::{Material, PersonInCharge, Size, Specifications};
