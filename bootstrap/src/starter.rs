//! 服务启动器
//!
//! 提供统一的 HTTP 服务启动模式

use std::future::{Future, IntoFuture};
use std::net::SocketAddr;
use std::time::Duration;

use axum::{middleware, Router};
use electra_config::{AppConfig, ServerConfig};
use electra_errors::AppResult;
use tokio::sync::oneshot;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::health::health_routes;
use crate::infrastructure::Infrastructure;
use crate::metrics::{MetricsRecorder, spawn_pool_collector, track_http_metrics};
use crate::runtime::{init_runtime, shutdown_signal};

/// 连接池 metrics 采集间隔
const POOL_METRICS_INTERVAL: Duration = Duration::from_secs(15);

/// 运行 HTTP 服务
///
/// 这是所有服务的统一入口点。它负责：
/// 1. 加载配置
/// 2. 初始化运行时（日志）
/// 3. 安装 Prometheus recorder
/// 4. 创建连接池（带重试）
/// 5. 调用用户提供的闭包构建业务路由
/// 6. 合并 /health、/ready、/metrics 并启动服务器
/// 7. 收到关闭信号后 graceful shutdown（最多等待 `shutdown_timeout_secs`）并关闭连接池
///
/// # 示例
///
/// ```ignore
/// use electra_bootstrap::run;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     run("config", |infra| async move {
///         Ok(my_routes(infra.postgres_pool()))
///     }).await
/// }
/// ```
pub async fn run<F, Fut>(config_dir: &str, router_builder: F) -> Result<(), Box<dyn std::error::Error>>
where
    F: FnOnce(Infrastructure) -> Fut,
    Fut: Future<Output = AppResult<Router>>,
{
    let config = AppConfig::load(config_dir)?;

    init_runtime(&config);

    info!("Starting {} service", config.app_name);

    let metrics = MetricsRecorder::install()?;

    let infra = Infrastructure::from_config(config.clone()).await?;
    let collector = spawn_pool_collector(infra.postgres_pool(), POOL_METRICS_INTERVAL);

    let service_router = router_builder(infra.clone()).await?;
    let app = build_app(service_router, &infra, metrics);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!(%addr, "HTTP server starting");

    let (signalled_tx, signalled_rx) = oneshot::channel();
    let server = axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown_signal().await;
            let _ = signalled_tx.send(());
        })
        .into_future();

    let deadline = Duration::from_secs(config.server.shutdown_timeout_secs);
    serve_with_drain_deadline(server, signalled_rx, deadline).await?;

    collector.abort();
    infra.close().await;

    info!("Service stopped");

    Ok(())
}

/// 运行服务器直到结束；收到关闭信号后最多再等待 `deadline` 让在途请求完成
///
/// 超时后直接丢弃服务器，未完成的连接随之断开。`deadline` 为 0 表示不限时。
pub async fn serve_with_drain_deadline<S, E>(
    server: S,
    signalled: oneshot::Receiver<()>,
    deadline: Duration,
) -> Result<(), E>
where
    S: Future<Output = Result<(), E>>,
{
    tokio::pin!(server);

    tokio::select! {
        result = &mut server => return result,
        signal = signalled => {
            // 发送端未发信号就被丢弃，说明关闭流程不会再触发
            if signal.is_err() || deadline.is_zero() {
                return server.await;
            }
        }
    }

    match tokio::time::timeout(deadline, &mut server).await {
        Ok(result) => result,
        Err(_) => {
            warn!(
                deadline_secs = deadline.as_secs(),
                "Graceful shutdown deadline exceeded, dropping open connections"
            );
            Ok(())
        }
    }
}

/// 组装完整应用：业务路由 + 健康检查 + metrics + 公共中间件
pub fn build_app(service_router: Router, infra: &Infrastructure, metrics: MetricsRecorder) -> Router {
    let app = service_router
        .merge(health_routes(infra.postgres_pool()))
        .merge(metrics.routes());

    with_common_layers(app, infra.server_config())
}

/// 公共中间件：请求埋点、trace、超时
pub fn with_common_layers(router: Router, server: &ServerConfig) -> Router {
    let router = router
        .layer(middleware::from_fn(track_http_metrics))
        .layer(TraceLayer::new_for_http());

    if server.request_timeout_secs > 0 {
        router.layer(TimeoutLayer::new(Duration::from_secs(server.request_timeout_secs)))
    } else {
        router
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[tokio::test]
    async fn test_server_finishing_first_returns_its_result() {
        let (_tx, rx) = oneshot::channel();
        let server = async { Err::<(), _>(io::Error::other("bind lost")) };

        let result = serve_with_drain_deadline(server, rx, Duration::from_secs(10)).await;
        assert_eq!(result.unwrap_err().to_string(), "bind lost");
    }

    #[tokio::test]
    async fn test_drain_within_deadline() {
        let (tx, rx) = oneshot::channel();
        tx.send(()).unwrap();
        let server = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Err::<(), _>(io::Error::other("drained with error"))
        };

        let result = serve_with_drain_deadline(server, rx, Duration::from_secs(10)).await;
        assert_eq!(result.unwrap_err().to_string(), "drained with error");
    }

    #[tokio::test]
    async fn test_stuck_connection_cut_at_deadline() {
        let (tx, rx) = oneshot::channel();
        tx.send(()).unwrap();
        let server = std::future::pending::<io::Result<()>>();

        let result = tokio::time::timeout(
            Duration::from_secs(5),
            serve_with_drain_deadline(server, rx, Duration::from_millis(20)),
        )
        .await;
        assert!(matches!(result, Ok(Ok(()))));
    }

    #[tokio::test]
    async fn test_dropped_signal_waits_for_server() {
        let (tx, rx) = oneshot::channel::<()>();
        drop(tx);
        let server = async {
            tokio::time::sleep(Duration::from_millis(10)).await;
            Ok::<(), io::Error>(())
        };

        let result = serve_with_drain_deadline(server, rx, Duration::from_millis(1)).await;
        assert!(result.is_ok());
    }
}
