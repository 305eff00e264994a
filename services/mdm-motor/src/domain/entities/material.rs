//! 物料（电机设备）实体

use serde::{Deserialize, Serialize};

/// 物料：一条电机设备台账记录
///
/// `id` 由导入工具分配，查询路径只读不写。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Material {
    pub id: i32,
    pub qcode: String,
    pub plant: String,
    pub area: String,
    pub category: String,
    pub name: String,
    pub specifications: Specifications,
    pub size: Size,
    pub maker: String,
    /// 负责人信息，查询路径不填充
    pub pic: PersonInCharge,
}

/// 电气规格，0 表示未记录
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Specifications {
    pub capacity: i32,
    pub voltage: i32,
    pub current: i32,
    pub rpm: i32,
}

/// 安装尺寸，0 表示未记录
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub shaft_diameter: i32,
    pub base_width: i32,
    pub base_length: i32,
    pub c: i32,
    pub e: i32,
    pub h: i32,
}

/// 负责人
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersonInCharge {
    pub team: String,
    pub name: String,
    pub phone: String,
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_shape() {
        let material = Material {
            id: 7,
            qcode: "Q-007".to_string(),
            plant: "P1".to_string(),
            area: "Kiln".to_string(),
            category: "HV Motor".to_string(),
            name: "ID Fan Motor".to_string(),
            specifications: Specifications {
                capacity: 75,
                voltage: 6000,
                current: 120,
                rpm: 1480,
            },
            size: Size {
                shaft_diameter: 65,
                base_width: 400,
                base_length: 500,
                c: 1,
                e: 2,
                h: 3,
            },
            maker: "ABB".to_string(),
            pic: PersonInCharge::default(),
        };

        let json = serde_json::to_value(&material).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 7,
                "qcode": "Q-007",
                "plant": "P1",
                "area": "Kiln",
                "category": "HV Motor",
                "name": "ID Fan Motor",
                "specifications": { "capacity": 75, "voltage": 6000, "current": 120, "rpm": 1480 },
                "size": { "shaft_diameter": 65, "base_width": 400, "base_length": 500, "c": 1, "e": 2, "h": 3 },
                "maker": "ABB",
                "pic": { "team": "", "name": "", "phone": "", "email": "" }
            })
        );
    }

    #[test]
    fn test_field_order_is_stable() {
        let text = serde_json::to_string(&Material::default()).unwrap();
        let id = text.find("\"id\"").unwrap();
        let qcode = text.find("\"qcode\"").unwrap();
        let maker = text.find("\"maker\"").unwrap();
        let pic = text.find("\"pic\"").unwrap();
        assert!(id < qcode && qcode < maker && maker < pic);
    }
}
