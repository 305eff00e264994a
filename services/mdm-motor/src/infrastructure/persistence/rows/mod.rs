//! 数据库行映射结构

use sqlx::postgres::PgRow;
use sqlx::{FromRow, Row};

use super::query_builder::SELECT_COLUMNS;

/// 物料数据库行
///
/// 按位置解码，列顺序见 [`SELECT_COLUMNS`]。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterialRow {
    pub plant: String,
    pub area: String,
    pub category: String,
    pub name: String,
    pub capacity: i32,
    pub voltage: i32,
    pub current: i32,
    pub rpm: i32,
    pub shaft_diameter: i32,
    pub base_width: i32,
    pub base_length: i32,
    pub c: i32,
    pub e: i32,
    pub h: i32,
    pub maker: String,
    pub id: i32,
    pub qcode: String,
}

impl<'r> FromRow<'r, PgRow> for MaterialRow {
    fn from_row(row: &'r PgRow) -> Result<Self, sqlx::Error> {
        if row.len() != SELECT_COLUMNS.len() {
            return Err(sqlx::Error::ColumnIndexOutOfBounds {
                index: SELECT_COLUMNS.len() - 1,
                len: row.len(),
            });
        }

        Ok(Self {
            plant: row.try_get(0)?,
            area: row.try_get(1)?,
            category: row.try_get(2)?,
            name: row.try_get(3)?,
            capacity: row.try_get(4)?,
            voltage: row.try_get(5)?,
            current: row.try_get(6)?,
            rpm: row.try_get(7)?,
            shaft_diameter: row.try_get(8)?,
            base_width: row.try_get(9)?,
            base_length: row.try_get(10)?,
            c: row.try_get(11)?,
            e: row.try_get(12)?,
            h: row.try_get(13)?,
            maker: row.try_get(14)?,
            id: row.try_get(15)?,
            qcode: row.try_get(16)?,
        })
    }
}
