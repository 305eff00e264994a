//! 查询语句构建测试

use mdm_motor::domain::entities::{FilterField, MaterialFilter};
use mdm_motor::infrastructure::build_select;

/// 按出现顺序提取 `<column> = $k` 谓词
fn predicates(sql: &str) -> Vec<(String, usize)> {
    sql.split(" AND ")
        .skip(1)
        .map(|part| {
            let mut tokens = part.split_whitespace();
            let column = tokens.next().unwrap().to_string();
            assert_eq!(tokens.next(), Some("="));
            let placeholder = tokens.next().unwrap();
            let index = placeholder.trim_start_matches('$').parse().unwrap();
            (column, index)
        })
        .collect()
}

#[test]
fn test_two_predicates_in_order() {
    let filter = MaterialFilter {
        capacity: Some(75),
        current: Some(120),
        ..Default::default()
    };

    let stmt = build_select(&filter);

    assert_eq!(stmt.sql.matches(" AND ").count(), 2);
    assert_eq!(stmt.binds, vec![75, 120]);
    assert_eq!(
        predicates(&stmt.sql),
        vec![("capacity".to_string(), 1), ("current".to_string(), 2)]
    );
}

#[test]
fn test_placeholders_bind_matching_values() {
    // 每个子集各生成一次
    for mask in 0u32..(1 << FilterField::ALL.len()) {
        let mut filter = MaterialFilter::default();
        for (bit, field) in FilterField::ALL.into_iter().enumerate() {
            if mask & (1 << bit) != 0 {
                filter.set(field, Some(100 + bit as i64));
            }
        }

        let stmt = build_select(&filter);
        let found = predicates(&stmt.sql);

        assert_eq!(found.len(), mask.count_ones() as usize);
        assert_eq!(stmt.binds.len(), found.len());

        for (i, (column, index)) in found.iter().enumerate() {
            assert_eq!(*index, i + 1);
            let field = FilterField::ALL
                .into_iter()
                .find(|f| f.name() == column)
                .unwrap();
            assert_eq!(Some(stmt.binds[i]), filter.get(field));
        }
    }
}

#[test]
fn test_empty_filter_has_no_predicates() {
    let stmt = build_select(&MaterialFilter::default());
    assert!(stmt.binds.is_empty());
    assert!(!stmt.sql.contains(" AND "));
    assert!(stmt.sql.contains("WHERE true"));
}
