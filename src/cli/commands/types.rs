use crate::cli::commands::{open_as_actor, open_db};
use crate::cli::parser::{Commands, TypeAction};
use crate::config::Config;
use crate::core::entry_types::{EntryTypeEdit, EntryTypeLogic};
use crate::db::entry_types::load_entry_types;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use crate::utils::fmt_points;
use crate::utils::number::parse_non_negative;
use crate::utils::table::Table;

/// Handle the `type` subcommands
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::Type { action } = cmd else {
        return Ok(());
    };

    match action {
        TypeAction::List { all } => {
            let pool = open_db(cfg)?;
            let types: Vec<_> = load_entry_types(&pool.conn)?
                .into_iter()
                .filter(|t| *all || t.active)
                .collect();

            header("Entry types");
            if types.is_empty() {
                info("No entry types defined.");
                return Ok(());
            }

            let mut table = Table::new(&["ID", "Name", "Points", "Active"]);
            for t in &types {
                table.add_row(vec![
                    t.id.clone(),
                    t.name.clone(),
                    fmt_points(t.points),
                    if t.active { "yes" } else { "no" }.to_string(),
                ]);
            }
            print!("{}", table.render());
        }

        TypeAction::Add {
            name,
            points,
            inactive,
        } => {
            let points = parse_non_negative(points)?;
            let (mut pool, actor) = open_as_actor(cfg)?;
            let t = EntryTypeLogic::add(&mut pool, &actor, name, points, !inactive)?;
            success(format!("Entry type {} created: {}", t.id, t.label()));
        }

        TypeAction::Edit {
            id,
            name,
            points,
            active,
        } => {
            let changes = EntryTypeEdit {
                name: name.clone(),
                points: points.as_deref().map(parse_non_negative).transpose()?,
                active: *active,
            };
            let (mut pool, actor) = open_as_actor(cfg)?;
            let t = EntryTypeLogic::edit(&mut pool, &actor, id, &changes)?;
            success(format!(
                "Entry type {} updated: {}{}",
                t.id,
                t.label(),
                if t.active { "" } else { " [inactive]" }
            ));
        }

        TypeAction::Del { id } => {
            let (mut pool, actor) = open_as_actor(cfg)?;
            let t = EntryTypeLogic::delete(&mut pool, &actor, id)?;
            success(format!("Entry type {} ({}) deleted.", t.id, t.name));
        }
    }

    Ok(())
}
