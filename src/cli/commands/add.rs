use crate::cli::commands::open_as_actor;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entries::EntryLogic;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::fmt_points;

/// Handle the `add` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        case,
        type_id,
        comment,
    } = cmd
    {
        let (mut pool, actor) = open_as_actor(cfg)?;
        let entry = EntryLogic::register(&mut pool, &actor, date, case, type_id, comment.as_deref())?;

        success(format!(
            "Entry {} registered: {} case '{}' ({} pts)",
            entry.id,
            entry.date,
            entry.case_reference,
            fmt_points(entry.points)
        ));
    }

    Ok(())
}
