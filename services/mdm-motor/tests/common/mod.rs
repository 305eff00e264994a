//! 测试公共设施

#![allow(dead_code)]

use async_trait::async_trait;
use electra_errors::{AppError, AppResult};
use mdm_motor::domain::entities::{Material, MaterialFilter, PersonInCharge, Size, Specifications};
use mdm_motor::domain::repositories::MaterialRepository;

/// 内存仓储，按插入顺序返回
pub struct InMemoryMaterialRepository {
    materials: Vec<Material>,
}

impl InMemoryMaterialRepository {
    pub fn new(materials: Vec<Material>) -> Self {
        Self { materials }
    }
}

#[async_trait]
impl MaterialRepository for InMemoryMaterialRepository {
    async fn list_all(&self) -> AppResult<Vec<Material>> {
        Ok(self.materials.clone())
    }

    async fn list_by_filter(&self, filter: &MaterialFilter) -> AppResult<Vec<Material>> {
        Ok(self
            .materials
            .iter()
            .filter(|m| filter.matches(m))
            .cloned()
            .collect())
    }
}

/// 总是失败的仓储
pub struct FailingMaterialRepository {
    pub decode: bool,
}

#[async_trait]
impl MaterialRepository for FailingMaterialRepository {
    async fn list_all(&self) -> AppResult<Vec<Material>> {
        Err(self.error())
    }

    async fn list_by_filter(&self, _filter: &MaterialFilter) -> AppResult<Vec<Material>> {
        Err(self.error())
    }
}

impl FailingMaterialRepository {
    fn error(&self) -> AppError {
        if self.decode {
            AppError::decode("column 4 mismatched")
        } else {
            AppError::database("connection refused")
        }
    }
}

pub fn material(id: i32, capacity: i32, voltage: i32, current: i32) -> Material {
    Material {
        id,
        qcode: String::new(),
        plant: "P1".to_string(),
        area: format!("Area {id}"),
        category: "HV Motor".to_string(),
        name: format!("Motor {id}"),
        specifications: Specifications {
            capacity,
            voltage,
            current,
            rpm: 1480,
        },
        size: Size {
            shaft_diameter: 65,
            base_width: 400,
            base_length: 500,
            c: 0,
            e: 0,
            h: 0,
        },
        maker: "ABB".to_string(),
        pic: PersonInCharge::default(),
    }
}

/// 五条样例数据
pub fn five_materials() -> Vec<Material> {
    vec![
        material(1, 75, 6000, 120),
        material(2, 75, 6000, 95),
        material(3, 110, 6000, 120),
        material(4, 75, 6000, 120),
        material(5, 250, 10000, 30),
    ]
}
