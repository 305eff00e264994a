//! Metrics 模块
//!
//! 提供 Prometheus metrics 导出和 HTTP 请求埋点

use std::time::{Duration, Instant};

use axum::{
    extract::{MatchedPath, Request, State},
    http::header,
    middleware::Next,
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use electra_adapter_postgres::PoolStatus;
use electra_telemetry::{init_metrics, record_http_request, set_pool_status};
use metrics_exporter_prometheus::{BuildError, PrometheusHandle};
use sqlx::PgPool;
use tokio::task::JoinHandle;
use tracing::debug;

/// Metrics 记录器
#[derive(Clone)]
pub struct MetricsRecorder {
    handle: PrometheusHandle,
}

impl MetricsRecorder {
    /// 安装全局 recorder，每个进程调用一次
    pub fn install() -> Result<Self, BuildError> {
        Ok(Self {
            handle: init_metrics()?,
        })
    }

    pub fn from_handle(handle: PrometheusHandle) -> Self {
        Self { handle }
    }

    /// 获取 Prometheus 格式的 metrics
    pub fn render(&self) -> String {
        self.handle.render()
    }

    /// `/metrics` 路由
    pub fn routes(self) -> Router {
        Router::new()
            .route("/metrics", get(render_metrics))
            .with_state(self)
    }
}

async fn render_metrics(State(recorder): State<MetricsRecorder>) -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        recorder.render(),
    )
}

/// HTTP 请求埋点中间件
pub async fn track_http_metrics(req: Request, next: Next) -> Response {
    let route = req
        .extensions()
        .get::<MatchedPath>()
        .map(|path| path.as_str().to_string())
        .unwrap_or_else(|| "unmatched".to_string());

    let start = Instant::now();
    let response = next.run(req).await;

    record_http_request(
        &route,
        response.status().as_u16(),
        start.elapsed().as_secs_f64() * 1000.0,
    );

    response
}

/// 定期采集连接池状态
pub fn spawn_pool_collector(pool: PgPool, interval: Duration) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut ticker = tokio::time::interval(interval);
        loop {
            ticker.tick().await;
            if pool.is_closed() {
                break;
            }
            let status = PoolStatus::of(&pool);
            set_pool_status("postgres", status.size, status.idle);
            debug!(
                size = status.size,
                idle = status.idle,
                active = status.active(),
                "Pool metrics collected"
            );
        }
    })
}
