//! 指标记录函数
//!
//! 未安装 recorder 时这些调用都是空操作。

use metrics::{counter, gauge, histogram};

/// 记录数据库查询
pub fn record_db_query(operation: &str, table: &str, duration_ms: f64, success: bool) {
    let labels = [
        ("operation", operation.to_string()),
        ("table", table.to_string()),
        ("success", success.to_string()),
    ];

    counter!("db_queries_total", &labels).increment(1);
    histogram!("db_query_duration_ms", &labels).record(duration_ms);
}

/// 记录 HTTP 请求
pub fn record_http_request(route: &str, status: u16, duration_ms: f64) {
    let labels = [
        ("route", route.to_string()),
        ("status", status.to_string()),
    ];

    counter!("http_requests_total", &labels).increment(1);
    histogram!("http_request_duration_ms", &labels).record(duration_ms);
}

/// 记录单次查询返回的物料条数（分页前）
pub fn record_result_rows(route: &str, rows: usize) {
    let labels = [("route", route.to_string())];
    histogram!("query_result_rows", &labels).record(rows as f64);
}

/// 设置连接池状态
pub fn set_pool_status(pool_name: &str, size: u32, idle: u32) {
    let labels = [("pool", pool_name.to_string())];
    gauge!("connection_pool_size", &labels).set(size as f64);
    gauge!("connection_pool_idle", &labels).set(idle as f64);
    gauge!("connection_pool_active", &labels).set(size.saturating_sub(idle) as f64);
}
