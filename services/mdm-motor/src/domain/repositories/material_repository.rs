//! 物料仓储接口

use async_trait::async_trait;
use electra_errors::AppResult;

use crate::domain::entities::{Material, MaterialFilter};

/// 物料仓储
///
/// 两个方法都返回完整结果集，分页由调用方在内存中完成。
#[async_trait]
pub trait MaterialRepository: Send + Sync {
    /// 查询全部物料
    async fn list_all(&self) -> AppResult<Vec<Material>>;

    /// 按过滤条件查询，空条件等价于 `list_all`
    async fn list_by_filter(&self, filter: &MaterialFilter) -> AppResult<Vec<Material>>;
}
