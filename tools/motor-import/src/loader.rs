//! 事务化写入

use sqlx::PgPool;
use tracing::{debug, info};

use crate::record::MotorRecord;

const INSERT_SQL: &str = r#"
    INSERT INTO public.list_materials
    (id, qcode, plant, area, category, name, capacity, voltage, current, rpm,
     shaft_diameter, base_width, base_length, c, e, h, maker,
     installed_qty, standby_qty, spare_qty, frame)
    VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18, $19, $20, $21)
"#;

/// 在一个事务中写入全部记录，任一失败则整体回滚
pub async fn import_records(pool: &PgPool, records: &[MotorRecord]) -> Result<u64, sqlx::Error> {
    let mut tx = pool.begin().await?;
    let mut inserted = 0u64;

    for record in records {
        let m = &record.material;
        sqlx::query(INSERT_SQL)
            .bind(m.id)
            .bind(&m.qcode)
            .bind(&m.plant)
            .bind(&m.area)
            .bind(&m.category)
            .bind(&m.name)
            .bind(m.specifications.capacity)
            .bind(m.specifications.voltage)
            .bind(m.specifications.current)
            .bind(m.specifications.rpm)
            .bind(m.size.shaft_diameter)
            .bind(m.size.base_width)
            .bind(m.size.base_length)
            .bind(m.size.c)
            .bind(m.size.e)
            .bind(m.size.h)
            .bind(&m.maker)
            .bind(record.installed_qty)
            .bind(record.standby_qty)
            .bind(record.spare_qty)
            .bind(record.frame)
            .execute(&mut *tx)
            .await?;

        debug!(id = m.id, plant = %m.plant, name = %m.name, "Material inserted");
        inserted += 1;
    }

    tx.commit().await?;
    info!(inserted, "Import committed");

    Ok(inserted)
}
