use crate::cli::commands::open_as_actor;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::{HistoryFilter, filter_history};
use crate::core::stats::{entry_points, type_index};
use crate::errors::AppResult;
use crate::models::context::DataContext;
use crate::ui::messages::{header, info};
use crate::utils::fmt_points;
use crate::utils::table::Table;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History { from, to, type_id } = cmd {
        let filter = HistoryFilter::new(from.as_deref(), to.as_deref(), type_id.as_deref())?;

        let (mut pool, actor) = open_as_actor(cfg)?;
        let ctx = DataContext::load(&mut pool)?;
        let rows = filter_history(&ctx.entries, &actor, &filter);

        header(format!("History ({})", actor.email));

        if rows.is_empty() {
            info("No entries found.");
            return Ok(());
        }

        let types = type_index(&ctx.entry_types);
        let mut headers = vec!["ID", "Date", "Case", "Type", "Points", "Comment"];
        if actor.is_supervisor() {
            headers.insert(1, "User");
        }
        let mut table = Table::new(&headers);

        for e in &rows {
            let type_name = types
                .get(e.entry_type_id.as_str())
                .map(|t| t.name.clone())
                .unwrap_or_else(|| e.entry_type_id.clone());

            let mut row = vec![
                e.id.clone(),
                e.date.clone(),
                e.case_reference.clone(),
                type_name,
                fmt_points(entry_points(e, &types)),
                e.comment.clone(),
            ];
            if actor.is_supervisor() {
                row.insert(1, e.owner_email.clone());
            }
            table.add_row(row);
        }

        print!("{}", table.render());
        println!("\n{} entries", rows.len());
    }

    Ok(())
}
