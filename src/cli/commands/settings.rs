use crate::cli::commands::{open_as_actor, open_db};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::settings::SettingsLogic;
use crate::db::settings::load_incentive;
use crate::errors::AppResult;
use crate::models::incentive::IncentiveConfig;
use crate::ui::messages::{header, success};
use crate::utils::fmt_money;
use crate::utils::number::parse_non_negative;

fn print_settings(cfg: &IncentiveConfig, currency: &str) {
    println!("Points per day : {}", cfg.daily_point_target);
    println!("Monthly bonus  : {}", fmt_money(cfg.monthly_bonus, currency));
    println!("Effective from : {}", cfg.effective_date);
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settings {
        points_per_day,
        bonus,
        effective,
    } = cmd
    {
        if points_per_day.is_none() && bonus.is_none() && effective.is_none() {
            let pool = open_db(cfg)?;
            header("Incentive scheme");
            print_settings(&load_incentive(&pool.conn)?, &cfg.currency_symbol);
            return Ok(());
        }

        let points = points_per_day.as_deref().map(parse_non_negative).transpose()?;
        let bonus = bonus.as_deref().map(parse_non_negative).transpose()?;

        let (mut pool, actor) = open_as_actor(cfg)?;
        let updated = SettingsLogic::update(&mut pool, &actor, points, bonus, effective.as_deref())?;

        success("Incentive scheme updated.");
        print_settings(&updated, &cfg.currency_symbol);
    }

    Ok(())
}
