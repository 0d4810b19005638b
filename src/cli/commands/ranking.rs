use crate::cli::commands::{month_or_current, open_as_actor};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::identity::require_supervisor;
use crate::core::stats::stats_for;
use crate::errors::AppResult;
use crate::export::model::ranking_rows;
use crate::models::context::DataContext;
use crate::ui::messages::{header, info};
use crate::utils::table::Table;
use crate::utils::{fmt_money, fmt_percent, fmt_points};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Ranking { month, user } = cmd {
        let ym = month_or_current(month)?;

        let (mut pool, actor) = open_as_actor(cfg)?;
        require_supervisor(&actor)?;

        let ctx = DataContext::load(&mut pool)?;
        let stats = stats_for(&ctx, ym, user.as_deref());
        let rows = ranking_rows(&stats, &ctx.incentive);

        header(format!("Ranking {ym}"));

        if rows.is_empty() {
            info("No users to rank.");
            return Ok(());
        }

        let mut table = Table::new(&[
            "Pos", "User", "Email", "Site", "Entries", "Points", "Days", "% Goal", "Bonus",
        ]);
        for (r, s) in rows.iter().zip(&stats) {
            table.add_row(vec![
                r.position.to_string(),
                r.name.clone(),
                r.email.clone(),
                if r.site.is_empty() { "-".into() } else { r.site.clone() },
                r.entries.to_string(),
                fmt_points(r.points),
                s.working_days.to_string(),
                fmt_percent(r.goal_percentage),
                fmt_money(r.bonus, &cfg.currency_symbol),
            ]);
        }
        print!("{}", table.render());

        let eligible = rows.iter().filter(|r| r.is_bonus_eligible()).count();
        let total: f64 = rows.iter().map(|r| r.bonus).sum();
        println!(
            "\nDaily target {} pts · {} eligible · total bonus {}",
            ctx.incentive.daily_point_target,
            eligible,
            fmt_money(total, &cfg.currency_symbol)
        );
    }

    Ok(())
}
