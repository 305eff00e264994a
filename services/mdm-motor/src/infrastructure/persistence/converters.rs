//! 数据库行到领域对象的转换

use crate::domain::entities::{Material, PersonInCharge, Size, Specifications};

use super::rows::MaterialRow;

/// 将 MaterialRow 转换为 Material
pub fn material_from_row(row: MaterialRow) -> Material {
    Material {
        id: row.id,
        qcode: row.qcode,
        plant: row.plant,
        area: row.area,
        category: row.category,
        name: row.name,
        specifications: Specifications {
            capacity: row.capacity,
            voltage: row.voltage,
            current: row.current,
            rpm: row.rpm,
        },
        size: Size {
            shaft_diameter: row.shaft_diameter,
            base_width: row.base_width,
            base_length: row.base_length,
            c: row.c,
            e: row.e,
            h: row.h,
        },
        maker: row.maker,
        pic: PersonInCharge::default(),
    }
}
