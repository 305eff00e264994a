//! CSV 行到电机记录的映射

use std::io::Read;

use mdm_motor::domain::entities::{Material, PersonInCharge, Size, Specifications};

/// 导入记录的固定类别
pub const CATEGORY: &str = "HV Motor";

mod column {
    pub const PLANT: usize = 1;
    pub const AREA: usize = 2;
    pub const NAME: usize = 3;
    pub const CAPACITY: usize = 4;
    pub const VOLTAGE: usize = 5;
    pub const CURRENT: usize = 6;
    pub const RPM: usize = 7;
    pub const MAKER: usize = 8;
    pub const FRAME: usize = 16;
    pub const INSTALLED: usize = 18;
    pub const STANDBY: usize = 19;
    pub const SPARE: usize = 20;
    pub const SHAFT_DIAMETER: usize = 21;
    pub const BASE_WIDTH: usize = 22;
    pub const BASE_LENGTH: usize = 23;
    pub const C: usize = 24;
    pub const E: usize = 25;
    pub const H: usize = 26;
}

/// 一条待写入的电机记录
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MotorRecord {
    pub material: Material,
    pub installed_qty: i32,
    pub standby_qty: i32,
    pub spare_qty: i32,
    pub frame: i32,
}

impl MotorRecord {
    /// 映射一行，plant/area/name 全空时返回 None
    pub fn from_csv(row: &csv::StringRecord, id: i32) -> Option<Self> {
        let field = |i: usize| row.get(i).unwrap_or("");

        let plant = field(column::PLANT);
        let area = field(column::AREA);
        let name = field(column::NAME);
        if plant.trim().is_empty() && area.trim().is_empty() && name.trim().is_empty() {
            return None;
        }

        let material = Material {
            id,
            qcode: String::new(),
            plant: plant.to_string(),
            area: area.to_string(),
            category: CATEGORY.to_string(),
            name: name.to_string(),
            specifications: Specifications {
                capacity: clean_measurement(field(column::CAPACITY)),
                voltage: clean_measurement(field(column::VOLTAGE)),
                current: clean_measurement(field(column::CURRENT)),
                rpm: clean_measurement(field(column::RPM)),
            },
            size: Size {
                shaft_diameter: clean_measurement(field(column::SHAFT_DIAMETER)),
                base_width: clean_measurement(field(column::BASE_WIDTH)),
                base_length: clean_measurement(field(column::BASE_LENGTH)),
                c: clean_measurement(field(column::C)),
                e: clean_measurement(field(column::E)),
                h: clean_measurement(field(column::H)),
            },
            maker: field(column::MAKER).to_string(),
            pic: PersonInCharge::default(),
        };

        Some(Self {
            material,
            installed_qty: clean_quantity(field(column::INSTALLED)),
            standby_qty: clean_quantity(field(column::STANDBY)),
            spare_qty: clean_quantity(field(column::SPARE)),
            frame: clean_quantity(field(column::FRAME)),
        })
    }
}

/// 读取全部记录，跳过表头和空行，id 从 1 连续分配
pub fn read_records<R: Read>(reader: R) -> Result<Vec<MotorRecord>, csv::Error> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let mut records = Vec::new();
    for row in rdr.records() {
        let row = row?;
        let next_id = records.len() as i32 + 1;
        if let Some(record) = MotorRecord::from_csv(&row, next_id) {
            records.push(record);
        }
    }
    Ok(records)
}

/// 规格/尺寸：含 `-` 或空白记为 0，否则按小数解析后截断
pub fn clean_measurement(raw: &str) -> i32 {
    let raw = raw.trim();
    if raw.is_empty() || raw.contains('-') {
        return 0;
    }
    match raw.parse::<f64>() {
        Ok(value) if value.is_finite() => value as i32,
        _ => 0,
    }
}

/// 数量/机座号：取第一个空白分隔的整数，空白或无法解析记为 0
pub fn clean_quantity(raw: &str) -> i32 {
    raw.split_whitespace()
        .next()
        .and_then(|token| token.parse::<i32>().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "no,plant,area,name,capacity,voltage,current,rpm,maker,serial,sc_when,sc_check,rb_date,rb_status,rb_reason,rb_remark,frame,type,installed,standby,spare,shaft,bw,bl,c,e,h\n";

    #[test]
    fn test_clean_measurement() {
        assert_eq!(clean_measurement("75"), 75);
        assert_eq!(clean_measurement("6.6"), 6);
        assert_eq!(clean_measurement(" 1480 "), 1480);
        assert_eq!(clean_measurement("-"), 0);
        assert_eq!(clean_measurement("3-5"), 0);
        assert_eq!(clean_measurement(""), 0);
        assert_eq!(clean_measurement("   "), 0);
        assert_eq!(clean_measurement("n/a"), 0);
    }

    #[test]
    fn test_clean_quantity() {
        assert_eq!(clean_quantity("2"), 2);
        assert_eq!(clean_quantity(" 3 pcs"), 3);
        assert_eq!(clean_quantity(""), 0);
        assert_eq!(clean_quantity("x"), 0);
        assert_eq!(clean_quantity("1.5"), 0);
    }

    #[test]
    fn test_read_records() {
        let data = format!(
            "{HEADER}\
             1,P1,Kiln,ID Fan,75,6000,120.5,1480,ABB,S1,,,,,,,355,T,1,1,0,65,400,500,10,20,30\n\
             2,,,,,,,,,,,,,,,,,,,,,,,,,,\n\
             3,P2,Mill,Drive,-,6000,,990,Siemens\n"
        );

        let records = read_records(data.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);

        let first = &records[0];
        assert_eq!(first.material.id, 1);
        assert_eq!(first.material.plant, "P1");
        assert_eq!(first.material.name, "ID Fan");
        assert_eq!(first.material.category, CATEGORY);
        assert_eq!(first.material.qcode, "");
        assert_eq!(first.material.specifications.current, 120);
        assert_eq!(first.material.size.h, 30);
        assert_eq!(first.frame, 355);
        assert_eq!(first.installed_qty, 1);
        assert_eq!(first.standby_qty, 1);
        assert_eq!(first.spare_qty, 0);

        let second = &records[1];
        assert_eq!(second.material.id, 2);
        assert_eq!(second.material.maker, "Siemens");
        assert_eq!(second.material.specifications.capacity, 0);
        assert_eq!(second.material.specifications.current, 0);
        assert_eq!(second.material.size, Size::default());
        assert_eq!(second.frame, 0);
    }

    #[test]
    fn test_header_only() {
        let records = read_records(HEADER.as_bytes()).unwrap();
        assert!(records.is_empty());
    }
}
