use crate::cli::commands::{month_or_current, open_as_actor};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::dashboard::{DayChip, build_dashboard};
use crate::errors::AppResult;
use crate::models::context::DataContext;
use crate::ui::messages::{header, info};
use crate::utils::colors::{GREEN, GREY, RED, RESET, color_for_percentage};
use crate::utils::date::{month_name, today};
use crate::utils::formatting::progress_bar;
use crate::utils::table::Table;
use crate::utils::{fmt_money, fmt_percent, fmt_points};

fn chip(d: &DayChip) -> String {
    let color = if d.upcoming {
        GREY
    } else if d.target_met {
        GREEN
    } else {
        RED
    };
    format!("{color}{:>2}:{:<5}{RESET}", d.day, fmt_points(d.points))
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Dashboard { month } = cmd {
        let ym = month_or_current(month)?;

        let (mut pool, actor) = open_as_actor(cfg)?;
        let ctx = DataContext::load(&mut pool)?;
        let dash = build_dashboard(&ctx, ym, &actor.email, today(), cfg.recent_entries);

        header(format!(
            "{} {} {} ({})",
            actor.name,
            month_name(ym.month()),
            ym.year(),
            actor.email
        ));

        let pct_color = color_for_percentage(dash.goal_percentage);
        println!("Points         : {}", fmt_points(dash.total_points));
        println!(
            "Monthly target : {} ({} working days × {} pts)",
            fmt_points(dash.monthly_target),
            dash.working_days,
            ctx.incentive.daily_point_target
        );
        println!(
            "Goal           : {pct_color}{} {}{RESET}",
            fmt_percent(dash.goal_percentage),
            progress_bar(dash.goal_percentage, 30)
        );
        println!("Status         : {pct_color}{}{RESET}", dash.status.label());
        println!(
            "Bonus          : {}",
            fmt_money(dash.bonus, &cfg.currency_symbol)
        );

        if !dash.days.is_empty() {
            println!("\nDaily points:");
            for week in dash.days.chunks(5) {
                let line: Vec<String> = week.iter().map(chip).collect();
                println!("  {}", line.join("  "));
            }
        }

        println!();
        if dash.recent.is_empty() {
            info("No entries this month.");
            return Ok(());
        }

        println!("Recent entries:");
        let mut table = Table::new(&["ID", "Date", "Case", "Type", "Points"]);
        for r in &dash.recent {
            table.add_row(vec![
                r.entry.id.clone(),
                r.entry.date.clone(),
                r.entry.case_reference.clone(),
                r.type_name.clone(),
                fmt_points(r.points),
            ]);
        }
        print!("{}", table.render());
    }

    Ok(())
}
