use crate::cli::commands::open_as_actor;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entries::{EntryEdit, EntryLogic};
use crate::errors::AppResult;
use crate::ui::messages::{success, warning};
use crate::utils::fmt_points;

/// Handle the `edit` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Edit {
        id,
        date,
        case,
        type_id,
        comment,
    } = cmd
    {
        let changes = EntryEdit {
            date: date.clone(),
            case_reference: case.clone(),
            entry_type_id: type_id.clone(),
            comment: comment.clone(),
        };

        if changes.date.is_none()
            && changes.case_reference.is_none()
            && changes.entry_type_id.is_none()
            && changes.comment.is_none()
        {
            warning("Nothing to change: pass --date, --case, --type or --comment.");
            return Ok(());
        }

        let (mut pool, actor) = open_as_actor(cfg)?;
        let entry = EntryLogic::edit(&mut pool, &actor, id, &changes)?;

        success(format!(
            "Entry {} updated: {} case '{}' ({} pts)",
            entry.id,
            entry.date,
            entry.case_reference,
            fmt_points(entry.points)
        ));
    }

    Ok(())
}
