//! Business logic handler

use std::sync::Arc;

use electra_common::OffsetPagination;
use electra_errors::AppResult;
use electra_telemetry::record_result_rows;
use tracing::info;

use crate::domain::entities::Material;
use crate::domain::repositories::MaterialRepository;

use super::envelope::MaterialListEnvelope;
use super::queries::*;

pub struct ServiceHandler {
    material_repo: Arc<dyn MaterialRepository>,
}

impl ServiceHandler {
    pub fn new(material_repo: Arc<dyn MaterialRepository>) -> Self {
        Self { material_repo }
    }

    /// 列出全部物料
    pub async fn list_materials(&self, query: ListMaterialsQuery) -> AppResult<MaterialListEnvelope> {
        info!(
            "Listing materials, limit: {}, offset: {}",
            query.pagination.limit, query.pagination.offset
        );

        let materials = self.material_repo.list_all().await?;
        record_result_rows("list_materials", materials.len());

        Ok(paginate(materials, query.pagination))
    }

    /// 按过滤条件列出物料
    pub async fn list_materials_by_params(
        &self,
        query: ListMaterialsByParamsQuery,
    ) -> AppResult<MaterialListEnvelope> {
        info!(
            "Listing materials by {} params, limit: {}, offset: {}",
            query.filter.present().count(),
            query.pagination.limit,
            query.pagination.offset
        );

        let materials = self.material_repo.list_by_filter(&query.filter).await?;
        record_result_rows("list_materials_by_params", materials.len());

        Ok(paginate(materials, query.pagination))
    }
}

fn paginate(materials: Vec<Material>, pagination: OffsetPagination) -> MaterialListEnvelope {
    let total = materials.len();
    let page = pagination.apply(materials);
    info!("Found {} materials, returning {}", total, page.len());
    MaterialListEnvelope::assemble(pagination, page)
}
