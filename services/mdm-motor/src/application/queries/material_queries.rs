//! Material queries

use electra_common::OffsetPagination;

use crate::domain::entities::MaterialFilter;

/// 列出全部物料
#[derive(Debug, Clone, Copy, Default)]
pub struct ListMaterialsQuery {
    pub pagination: OffsetPagination,
}

/// 按规格/尺寸过滤物料
#[derive(Debug, Clone, Copy, Default)]
pub struct ListMaterialsByParamsQuery {
    pub filter: MaterialFilter,
    pub pagination: OffsetPagination,
}
