//! 物料过滤条件

use super::material::Material;

/// 可过滤的数值字段，按声明顺序排列
///
/// 该顺序决定 SQL 谓词和绑定参数的顺序。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterField {
    Capacity,
    Voltage,
    Current,
    Rpm,
    ShaftDiameter,
    BaseWidth,
    BaseLength,
    C,
    E,
    H,
}

impl FilterField {
    pub const ALL: [FilterField; 10] = [
        FilterField::Capacity,
        FilterField::Voltage,
        FilterField::Current,
        FilterField::Rpm,
        FilterField::ShaftDiameter,
        FilterField::BaseWidth,
        FilterField::BaseLength,
        FilterField::C,
        FilterField::E,
        FilterField::H,
    ];

    /// 字段名，同时用作列名和请求参数名
    pub fn name(&self) -> &'static str {
        match self {
            FilterField::Capacity => "capacity",
            FilterField::Voltage => "voltage",
            FilterField::Current => "current",
            FilterField::Rpm => "rpm",
            FilterField::ShaftDiameter => "shaft_diameter",
            FilterField::BaseWidth => "base_width",
            FilterField::BaseLength => "base_length",
            FilterField::C => "c",
            FilterField::E => "e",
            FilterField::H => "h",
        }
    }

    /// 读取物料上对应的值
    pub fn value_of(&self, material: &Material) -> i32 {
        let spec = &material.specifications;
        let size = &material.size;
        match self {
            FilterField::Capacity => spec.capacity,
            FilterField::Voltage => spec.voltage,
            FilterField::Current => spec.current,
            FilterField::Rpm => spec.rpm,
            FilterField::ShaftDiameter => size.shaft_diameter,
            FilterField::BaseWidth => size.base_width,
            FilterField::BaseLength => size.base_length,
            FilterField::C => size.c,
            FilterField::E => size.e,
            FilterField::H => size.h,
        }
    }
}

/// 物料过滤条件
///
/// 每个字段要么存在（按等值过滤，包括 0），要么不存在（不参与过滤）。
/// 值用 i64 保存，超出 INTEGER 列范围的值保持原样，因而不会匹配任何行。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MaterialFilter {
    pub capacity: Option<i64>,
    pub voltage: Option<i64>,
    pub current: Option<i64>,
    pub rpm: Option<i64>,
    pub shaft_diameter: Option<i64>,
    pub base_width: Option<i64>,
    pub base_length: Option<i64>,
    pub c: Option<i64>,
    pub e: Option<i64>,
    pub h: Option<i64>,
}

impl MaterialFilter {
    pub fn get(&self, field: FilterField) -> Option<i64> {
        match field {
            FilterField::Capacity => self.capacity,
            FilterField::Voltage => self.voltage,
            FilterField::Current => self.current,
            FilterField::Rpm => self.rpm,
            FilterField::ShaftDiameter => self.shaft_diameter,
            FilterField::BaseWidth => self.base_width,
            FilterField::BaseLength => self.base_length,
            FilterField::C => self.c,
            FilterField::E => self.e,
            FilterField::H => self.h,
        }
    }

    pub fn set(&mut self, field: FilterField, value: Option<i64>) {
        let slot = match field {
            FilterField::Capacity => &mut self.capacity,
            FilterField::Voltage => &mut self.voltage,
            FilterField::Current => &mut self.current,
            FilterField::Rpm => &mut self.rpm,
            FilterField::ShaftDiameter => &mut self.shaft_diameter,
            FilterField::BaseWidth => &mut self.base_width,
            FilterField::BaseLength => &mut self.base_length,
            FilterField::C => &mut self.c,
            FilterField::E => &mut self.e,
            FilterField::H => &mut self.h,
        };
        *slot = value;
    }

    pub fn with(mut self, field: FilterField, value: i64) -> Self {
        self.set(field, Some(value));
        self
    }

    /// 按声明顺序列出存在的条件
    pub fn present(&self) -> impl Iterator<Item = (FilterField, i64)> + '_ {
        FilterField::ALL
            .into_iter()
            .filter_map(|field| self.get(field).map(|value| (field, value)))
    }

    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }

    /// 物料是否满足所有存在的条件
    pub fn matches(&self, material: &Material) -> bool {
        self.present()
            .all(|(field, value)| i64::from(field.value_of(material)) == value)
    }
}
