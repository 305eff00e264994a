//! 查询参数解析
//!
//! 参数只做类型转换，无效值一律按缺省处理，不返回错误。

use electra_common::OffsetPagination;

use crate::domain::entities::{FilterField, MaterialFilter};

/// 原始查询参数，重复的键取第一个
#[derive(Debug, Clone, Default)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    pub fn new(pairs: Vec<(String, String)>) -> Self {
        Self { pairs }
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// 分页参数
    ///
    /// `limit` 缺失、非整数或不大于 0 时为 0（不限）；
    /// `offset` 缺失、非整数或为负时为 0。
    pub fn pagination(&self) -> OffsetPagination {
        let limit = self.integer("limit").filter(|v| *v > 0).unwrap_or(0);
        let offset = self.integer("offset").filter(|v| *v >= 0).unwrap_or(0);
        OffsetPagination::from_signed(limit, offset)
    }

    /// 过滤参数
    ///
    /// 按浮点数解析后向零截断；缺失、空串或无法解析的参数不参与过滤。
    /// 值不做首尾空白裁剪，带空白的值视为无法解析。
    pub fn filter(&self) -> MaterialFilter {
        let mut filter = MaterialFilter::default();
        for field in FilterField::ALL {
            filter.set(field, self.get(field.name()).and_then(truncate_to_integer));
        }
        filter
    }

    fn integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(|v| v.parse::<i64>().ok())
    }
}

fn truncate_to_integer(raw: &str) -> Option<i64> {
    let value = raw.parse::<f64>().ok()?;
    if !value.is_finite() {
        return None;
    }
    // 向零截断；超出 i64 的值饱和后仍在 INTEGER 列范围之外
    Some(value as i64)
}
