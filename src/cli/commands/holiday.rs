use crate::cli::commands::{open_as_actor, open_db};
use crate::cli::parser::{Commands, HolidayAction};
use crate::config::Config;
use crate::core::calendar::holidays_for;
use crate::core::holidays::HolidayLogic;
use crate::db::holidays::load_holidays;
use crate::errors::AppResult;
use crate::models::year_month::YearMonth;
use crate::ui::messages::{header, info, success, warning};
use crate::utils::table::Table;

/// Handle the `holiday` subcommands
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Holiday { action } = cmd else {
        return Ok(());
    };

    match action {
        HolidayAction::List { month, site } => {
            let pool = open_db(cfg)?;
            let all = load_holidays(&pool.conn)?;

            let shown: Vec<_> = match month {
                Some(m) => holidays_for(YearMonth::parse(m)?, &all, site.as_deref()),
                None => all
                    .iter()
                    .filter(|h| {
                        site.as_deref()
                            .is_none_or(|s| h.is_sitewide() || h.site == s.trim().to_lowercase())
                    })
                    .collect(),
            };

            header("Holidays");
            if shown.is_empty() {
                info("No holidays found.");
                return Ok(());
            }

            let mut table = Table::new(&["Date", "Site", "Description"]);
            for h in shown {
                table.add_row(vec![
                    h.date.clone(),
                    if h.is_sitewide() { "(all)".into() } else { h.site.clone() },
                    h.description.clone(),
                ]);
            }
            print!("{}", table.render());
        }

        HolidayAction::Add {
            date,
            site,
            description,
        } => {
            let (mut pool, actor) = open_as_actor(cfg)?;
            let h = HolidayLogic::add(
                &mut pool,
                &actor,
                date,
                site.as_deref(),
                description.as_deref(),
            )?;
            success(format!(
                "Holiday {} added for {}",
                h.date,
                if h.is_sitewide() { "every site" } else { h.site.as_str() }
            ));
        }

        HolidayAction::Del { date, site } => {
            let (mut pool, actor) = open_as_actor(cfg)?;
            if HolidayLogic::delete(&mut pool, &actor, date, site.as_deref())? {
                success(format!("Holiday {date} removed."));
            } else {
                warning(format!("No holiday on {date} for that site."));
            }
        }
    }

    Ok(())
}
