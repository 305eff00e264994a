//! 健康检查模块
//!
//! 提供 /health 和 /ready 端点

use axum::{
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use electra_adapter_postgres::check_connection;
use serde::Serialize;
use sqlx::PgPool;
use tracing::warn;

/// 健康检查状态
#[derive(Debug, Clone, Serialize)]
pub struct HealthStatus {
    pub status: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub checks: Vec<ComponentHealth>,
}

/// 组件健康状态
#[derive(Debug, Clone, Serialize)]
pub struct ComponentHealth {
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl HealthStatus {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            checks: vec![],
        }
    }

    pub fn add_check(&mut self, check: ComponentHealth) {
        if check.status != "healthy" {
            self.status = "unhealthy".to_string();
        }
        self.checks.push(check);
    }

    pub fn is_healthy(&self) -> bool {
        self.status == "healthy"
    }
}

impl ComponentHealth {
    pub fn healthy(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "healthy".to_string(),
            message: None,
        }
    }

    pub fn unhealthy(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: "unhealthy".to_string(),
            message: Some(message.into()),
        }
    }
}

/// 健康检查路由
pub fn health_routes(pool: PgPool) -> Router {
    Router::new()
        .route("/health", get(liveness))
        .route("/ready", get(readiness))
        .with_state(pool)
}

/// 存活检查，不检查依赖
async fn liveness() -> Json<HealthStatus> {
    Json(HealthStatus::healthy())
}

/// 就绪检查，检查数据库连接
async fn readiness(State(pool): State<PgPool>) -> impl IntoResponse {
    let mut status = HealthStatus::healthy();

    match check_connection(&pool).await {
        Ok(()) => status.add_check(ComponentHealth::healthy("postgres")),
        Err(e) => {
            warn!(error = %e, "Readiness check failed");
            status.add_check(ComponentHealth::unhealthy("postgres", e.to_string()));
        }
    }

    let code = if status.is_healthy() {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (code, Json(status))
}
