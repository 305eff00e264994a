//! PostgreSQL 仓储实现

use std::time::Instant;

use async_trait::async_trait;
use electra_errors::{AppError, AppResult};
use electra_telemetry::record_db_query;
use sqlx::PgPool;
use tracing::{debug, warn};

use crate::domain::entities::{Material, MaterialFilter};
use crate::domain::repositories::MaterialRepository;

use super::converters::material_from_row;
use super::query_builder::{SelectStatement, build_select};
use super::rows::MaterialRow;

const TABLE: &str = "list_materials";

pub struct PostgresMaterialRepository {
    pool: PgPool,
}

impl PostgresMaterialRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// 执行语句并解码全部行，任一行失败则整体失败
    async fn fetch(&self, operation: &str, stmt: SelectStatement) -> AppResult<Vec<Material>> {
        debug!(sql = %stmt.sql, binds = ?stmt.binds, "Executing material query");

        let mut query = sqlx::query_as::<_, MaterialRow>(&stmt.sql);
        for value in &stmt.binds {
            query = query.bind(*value);
        }

        let start = Instant::now();
        let result = query.fetch_all(&self.pool).await;
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        record_db_query(operation, TABLE, elapsed_ms, result.is_ok());

        let rows = result.map_err(|e| {
            warn!(operation, error = %e, "Material query failed");
            map_query_error(e)
        })?;

        Ok(rows.into_iter().map(material_from_row).collect())
    }
}

#[async_trait]
impl MaterialRepository for PostgresMaterialRepository {
    async fn list_all(&self) -> AppResult<Vec<Material>> {
        self.fetch("list_all", build_select(&MaterialFilter::default()))
            .await
    }

    async fn list_by_filter(&self, filter: &MaterialFilter) -> AppResult<Vec<Material>> {
        self.fetch("list_by_filter", build_select(filter)).await
    }
}

/// 区分行解码失败和语句执行失败
fn map_query_error(e: sqlx::Error) -> AppError {
    match e {
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::ColumnNotFound(_)
        | sqlx::Error::ColumnIndexOutOfBounds { .. }
        | sqlx::Error::Decode(_) => AppError::decode(format!("解码物料行失败: {}", e)),
        other => AppError::database(format!("查询物料列表失败: {}", other)),
    }
}
