//! 物料查询语句构建
//!
//! 只有列名来自固定白名单，所有值都通过占位符绑定。

use crate::domain::entities::MaterialFilter;

/// 物料表
pub const MATERIAL_TABLE: &str = "public.list_materials";

/// 查询列，顺序与行解码一致
pub const SELECT_COLUMNS: [&str; 17] = [
    "plant",
    "area",
    "category",
    "name",
    "capacity",
    "voltage",
    "current",
    "rpm",
    "shaft_diameter",
    "base_width",
    "base_length",
    "c",
    "e",
    "h",
    "maker",
    "id",
    "qcode",
];

/// 构建好的查询语句及其绑定值
///
/// `binds[i]` 对应占位符 `$(i + 1)`。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectStatement {
    pub sql: String,
    pub binds: Vec<i64>,
}

/// 按过滤条件构建 SELECT
///
/// 每个存在的条件追加一个 `AND <column> = $k` 谓词，k 从 1 开始连续编号。
/// 空条件返回全表查询。
pub fn build_select(filter: &MaterialFilter) -> SelectStatement {
    let mut sql = format!(
        "SELECT {} FROM {} WHERE true",
        SELECT_COLUMNS.join(", "),
        MATERIAL_TABLE
    );
    let mut binds = Vec::new();

    for (field, value) in filter.present() {
        binds.push(value);
        sql.push_str(&format!(" AND {} = ${}", field.name(), binds.len()));
    }

    sql.push_str(" ORDER BY id");

    SelectStatement { sql, binds }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::FilterField;

    const BASE: &str = "SELECT plant, area, category, name, capacity, voltage, current, rpm, \
                        shaft_diameter, base_width, base_length, c, e, h, maker, id, qcode \
                        FROM public.list_materials WHERE true";

    #[test]
    fn test_empty_filter() {
        let stmt = build_select(&MaterialFilter::default());
        assert_eq!(stmt.sql, format!("{BASE} ORDER BY id"));
        assert!(stmt.binds.is_empty());
    }

    #[test]
    fn test_placeholders_follow_declaration_order() {
        let filter = MaterialFilter {
            voltage: Some(6000),
            rpm: Some(1480),
            ..Default::default()
        };

        let stmt = build_select(&filter);
        assert_eq!(
            stmt.sql,
            format!("{BASE} AND voltage = $1 AND rpm = $2 ORDER BY id")
        );
        assert_eq!(stmt.binds, vec![6000, 1480]);
    }

    #[test]
    fn test_zero_value_is_bound() {
        let filter = MaterialFilter::default().with(FilterField::C, 0);

        let stmt = build_select(&filter);
        assert!(stmt.sql.contains(" AND c = $1 "));
        assert_eq!(stmt.binds, vec![0]);
    }

    #[test]
    fn test_all_fields() {
        let mut filter = MaterialFilter::default();
        for (i, field) in FilterField::ALL.into_iter().enumerate() {
            filter.set(field, Some(i as i64 * 10));
        }

        let stmt = build_select(&filter);
        assert_eq!(stmt.binds.len(), 10);
        for (i, field) in FilterField::ALL.into_iter().enumerate() {
            let predicate = format!(" AND {} = ${}", field.name(), i + 1);
            assert!(stmt.sql.contains(&predicate), "missing {predicate}");
            assert_eq!(stmt.binds[i], i as i64 * 10);
        }
        assert!(stmt.sql.ends_with("AND h = $10 ORDER BY id"));
    }

    #[test]
    fn test_values_never_inlined() {
        let filter = MaterialFilter::default().with(FilterField::Capacity, 987_654);
        let stmt = build_select(&filter);
        assert!(!stmt.sql.contains("987654"));
    }
}
