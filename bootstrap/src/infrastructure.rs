//! 基础设施资源管理
//!
//! 连接池在启动时创建一次，通过构造参数显式传给各个仓储，关闭时统一释放。

use std::time::Duration;

use electra_adapter_postgres::{PostgresConfig, create_pool};
use electra_config::AppConfig;
use electra_errors::AppResult;
use secrecy::ExposeSecret;
use sqlx::PgPool;
use tracing::info;

use crate::retry::{RetryConfig, with_retry};

/// 基础设施资源容器
#[derive(Clone)]
pub struct Infrastructure {
    /// 应用配置
    config: AppConfig,
    /// PostgreSQL 连接池
    postgres_pool: PgPool,
}

impl Infrastructure {
    /// 从配置创建基础设施资源（带重试）
    pub async fn from_config(config: AppConfig) -> AppResult<Self> {
        let retry_config = RetryConfig {
            max_attempts: config.database.connect_retries,
            ..RetryConfig::default()
        };

        let pg_config = PostgresConfig::new(config.database.url.expose_secret())
            .with_max_connections(config.database.max_connections)
            .with_min_connections(config.database.min_connections)
            .with_acquire_timeout(Duration::from_secs(config.database.acquire_timeout_secs))
            .with_application_name(&config.app_name);

        let postgres_pool = with_retry(&retry_config, "PostgreSQL connection", || {
            let cfg = pg_config.clone();
            async move { create_pool(&cfg).await }
        })
        .await?;

        Ok(Self::new(config, postgres_pool))
    }

    /// 使用已有连接池创建（测试或自定义启动流程）
    pub fn new(config: AppConfig, postgres_pool: PgPool) -> Self {
        Self {
            config,
            postgres_pool,
        }
    }

    /// 获取服务器配置
    pub fn server_config(&self) -> &electra_config::ServerConfig {
        &self.config.server
    }

    /// 获取 PostgreSQL 连接池
    pub fn postgres_pool(&self) -> PgPool {
        self.postgres_pool.clone()
    }

    /// 关闭连接池，等待已借出的连接归还
    pub async fn close(&self) {
        self.postgres_pool.close().await;
        info!("PostgreSQL connection pool closed");
    }
}
