//! 通用类型定义

use std::ops::Range;

use serde::{Deserialize, Serialize};

/// 偏移分页参数
///
/// 分页发生在查询结果全部加载到内存之后。`limit == 0` 表示不限制条数，
/// 返回从 `offset` 开始直到末尾的全部数据。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OffsetPagination {
    pub limit: usize,
    pub offset: usize,
}

impl OffsetPagination {
    pub fn new(limit: usize, offset: usize) -> Self {
        Self { limit, offset }
    }

    /// 从有符号整数构造，负数归一化为 0
    pub fn from_signed(limit: i64, offset: i64) -> Self {
        Self {
            limit: usize::try_from(limit).unwrap_or(0),
            offset: usize::try_from(offset).unwrap_or(0),
        }
    }

    /// 是否不限制条数
    pub fn is_unbounded(&self) -> bool {
        self.limit == 0
    }

    /// 计算长度为 `len` 的序列上的切片区间
    ///
    /// 结束位置总是被截断到 `len`；`offset` 超出长度时得到空区间。
    pub fn range(&self, len: usize) -> Range<usize> {
        let start = self.offset.min(len);
        let end = if self.is_unbounded() {
            len
        } else {
            self.offset.saturating_add(self.limit).min(len)
        };
        start..end
    }

    /// 对完整结果集做切片
    pub fn apply<T>(&self, mut items: Vec<T>) -> Vec<T> {
        let range = self.range(items.len());
        items.truncate(range.end);
        items.drain(..range.start);
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows() -> Vec<u32> {
        vec![1, 2, 3, 4, 5]
    }

    #[test]
    fn test_first_page() {
        let page = OffsetPagination::new(2, 0);
        assert_eq!(page.apply(rows()), vec![1, 2]);
    }

    #[test]
    fn test_unbounded_from_offset() {
        let page = OffsetPagination::new(0, 3);
        assert!(page.is_unbounded());
        assert_eq!(page.apply(rows()), vec![4, 5]);
    }

    #[test]
    fn test_end_clamped_to_len() {
        let page = OffsetPagination::new(10, 2);
        assert_eq!(page.range(5), 2..5);
        assert_eq!(page.apply(rows()), vec![3, 4, 5]);
    }

    #[test]
    fn test_offset_past_end_is_empty() {
        assert!(OffsetPagination::new(0, 10).apply(rows()).is_empty());
        assert!(OffsetPagination::new(3, 10).apply(rows()).is_empty());
        assert!(OffsetPagination::new(3, 5).apply(rows()).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(OffsetPagination::new(2, 0).apply(Vec::<u32>::new()).is_empty());
        assert_eq!(OffsetPagination::new(0, 0).range(0), 0..0);
    }

    #[test]
    fn test_negative_values_normalized() {
        let page = OffsetPagination::from_signed(-5, -1);
        assert_eq!(page, OffsetPagination::new(0, 0));

        let page = OffsetPagination::from_signed(20, 40);
        assert_eq!(page, OffsetPagination::new(20, 40));
    }

    #[test]
    fn test_huge_limit_does_not_overflow() {
        let page = OffsetPagination::new(usize::MAX, 1);
        assert_eq!(page.apply(rows()), vec![2, 3, 4, 5]);
    }

    #[test]
    fn test_matches_reference_slicing() {
        let data = rows();
        let n = data.len();
        for offset in 0..8 {
            for limit in 0..8 {
                let expected: Vec<u32> = if offset >= n {
                    Vec::new()
                } else if limit == 0 {
                    data[offset..].to_vec()
                } else {
                    data[offset..(offset + limit).min(n)].to_vec()
                };
                let actual = OffsetPagination::new(limit, offset).apply(data.clone());
                assert_eq!(actual, expected, "limit={limit} offset={offset}");
            }
        }
    }
}
