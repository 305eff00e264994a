//! 物料查询路由

use std::sync::Arc;

use axum::{
    extract::{Query, State},
    http::{HeaderName, Method, header},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use electra_errors::{AppError, AppResult};
use serde::Serialize;
use tower_http::cors::{Any, CorsLayer};

use crate::application::{ListMaterialsByParamsQuery, ListMaterialsQuery, ServiceHandler};

use super::params::QueryParams;

pub const LIST_ALL_PATH: &str = "/api/v1/intools/electra/materials/motor/high-voltage-all";
pub const LIST_BY_PARAMS_PATH: &str = "/api/v1/intools/electra/materials/motor/high-voltage";

/// 物料查询路由，只接受 GET
pub fn material_routes(handler: Arc<ServiceHandler>) -> Router {
    Router::new()
        .route(LIST_ALL_PATH, get(list_materials))
        .route(LIST_BY_PARAMS_PATH, get(list_materials_by_params))
        .layer(cors_layer())
        .with_state(handler)
}

fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([
            Method::POST,
            Method::GET,
            Method::OPTIONS,
            Method::PUT,
            Method::DELETE,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            header::CONTENT_LENGTH,
            header::ACCEPT_ENCODING,
            HeaderName::from_static("x-csrf-token"),
            header::AUTHORIZATION,
            header::ACCEPT,
            header::ORIGIN,
            header::CACHE_CONTROL,
            HeaderName::from_static("x-requested-with"),
        ])
}

async fn list_materials(
    State(handler): State<Arc<ServiceHandler>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Response> {
    let params = QueryParams::new(pairs);
    let query = ListMaterialsQuery {
        pagination: params.pagination(),
    };

    let envelope = handler.list_materials(query).await?;
    json_response(&envelope)
}

async fn list_materials_by_params(
    State(handler): State<Arc<ServiceHandler>>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> AppResult<Response> {
    let params = QueryParams::new(pairs);
    let query = ListMaterialsByParamsQuery {
        filter: params.filter(),
        pagination: params.pagination(),
    };

    let envelope = handler.list_materials_by_params(query).await?;
    json_response(&envelope)
}

/// 序列化为 JSON 响应
fn json_response<T: Serialize>(body: &T) -> AppResult<Response> {
    let bytes = serde_json::to_vec(body)
        .map_err(|e| AppError::internal(format!("序列化响应失败: {}", e)))?;

    Ok(([(header::CONTENT_TYPE, "application/json")], bytes).into_response())
}
