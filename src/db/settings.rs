use crate::errors::AppResult;
use crate::models::incentive::IncentiveConfig;
use rusqlite::{Connection, OptionalExtension, params};

/// The active incentive configuration, or the defaults when no row exists.
pub fn load_incentive(conn: &Connection) -> AppResult<IncentiveConfig> {
    let row = conn
        .query_row(
            "SELECT puntos_por_dia, bono_mensual, fecha_vigencia FROM configuracion WHERE id = 1",
            [],
            |row| {
                Ok(IncentiveConfig {
                    daily_point_target: row.get(0)?,
                    monthly_bonus: row.get(1)?,
                    effective_date: row.get(2)?,
                })
            },
        )
        .optional()?;

    Ok(row.unwrap_or_default())
}

pub fn save_incentive(conn: &Connection, cfg: &IncentiveConfig) -> AppResult<()> {
    conn.execute(
        "INSERT OR REPLACE INTO configuracion (id, puntos_por_dia, bono_mensual, fecha_vigencia)
         VALUES (1, ?1, ?2, ?3)",
        params![cfg.daily_point_target, cfg.monthly_bonus, cfg.effective_date],
    )?;
    Ok(())
}
