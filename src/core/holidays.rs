use crate::core::identity::require_supervisor;
use crate::db::holidays::{delete_holiday, upsert_holiday};
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::holiday::Holiday;
use crate::models::user::User;
use crate::utils::date::parse_date;

pub struct HolidayLogic;

impl HolidayLogic {
    pub fn add(
        pool: &mut DbPool,
        actor: &User,
        date: &str,
        site: Option<&str>,
        description: Option<&str>,
    ) -> AppResult<Holiday> {
        require_supervisor(actor)?;

        let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let h = Holiday::new(
            &d.format("%Y-%m-%d").to_string(),
            site.unwrap_or(""),
            description.unwrap_or(""),
        );

        upsert_holiday(&pool.conn, &h)?;
        audit(
            &pool.conn,
            &actor.email,
            "holiday-add",
            &format!("{} site='{}' {}", h.date, h.site, h.description),
        );
        Ok(h)
    }

    /// Returns false when no holiday matched.
    pub fn delete(pool: &mut DbPool, actor: &User, date: &str, site: Option<&str>) -> AppResult<bool> {
        require_supervisor(actor)?;

        let d = parse_date(date).ok_or_else(|| AppError::InvalidDate(date.to_string()))?;
        let date = d.format("%Y-%m-%d").to_string();
        let site = site.unwrap_or("").trim().to_lowercase();

        let removed = delete_holiday(&pool.conn, &date, &site)? > 0;
        if removed {
            audit(
                &pool.conn,
                &actor.email,
                "holiday-del",
                &format!("{date} site='{site}'"),
            );
        }
        Ok(removed)
    }
}
