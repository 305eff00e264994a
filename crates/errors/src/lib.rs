//! electra-errors - 统一错误处理
//!
//! 基于 RFC 7807 Problem Details 规范

use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::error;

/// 应用错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 语句执行失败（连接失败、语句错误等）
    #[error("Database error: {0}")]
    Database(String),

    /// 行解码失败（列类型或列数不匹配）
    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// 转换为 HTTP 状态码
    pub fn status_code(&self) -> u16 {
        match self {
            Self::Database(_) => 500,
            Self::Decode(_) => 500,
            Self::Internal(_) => 500,
        }
    }

    /// 转换为 Problem Details
    pub fn to_problem_details(&self) -> ProblemDetails {
        ProblemDetails {
            r#type: self.problem_type().to_string(),
            title: self.problem_title().to_string(),
            status: self.status_code(),
            detail: self.to_string(),
            instance: None,
        }
    }

    fn problem_type(&self) -> &'static str {
        match self {
            Self::Database(_) => "/problems/database",
            Self::Decode(_) => "/problems/decode",
            Self::Internal(_) => "/problems/internal",
        }
    }

    fn problem_title(&self) -> &'static str {
        match self {
            Self::Database(_) => "Database Error",
            Self::Decode(_) => "Row Decode Error",
            Self::Internal(_) => "Internal Server Error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if status.is_server_error() {
            error!(error = %self, "Request failed");
        }

        (
            status,
            [(header::CONTENT_TYPE, "application/problem+json")],
            Json(self.to_problem_details()),
        )
            .into_response()
    }
}

/// RFC 7807 Problem Details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProblemDetails {
    pub r#type: String,
    pub title: String,
    pub status: u16,
    pub detail: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instance: Option<String>,
}

/// Result 类型别名
pub type AppResult<T> = Result<T, AppError>;
