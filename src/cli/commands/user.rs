use crate::cli::commands::{month_or_current, open_as_actor, open_db};
use crate::cli::parser::{Commands, UserAction};
use crate::config::Config;
use crate::core::users::{UserEdit, UserLogic};
use crate::db::users::load_users;
use crate::errors::AppResult;
use crate::ui::messages::{header, info, success};
use crate::utils::table::Table;

/// Handle the `user` subcommands
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    let Commands::User { action } = cmd else {
        return Ok(());
    };

    match action {
        UserAction::List => {
            let pool = open_db(cfg)?;
            let users = load_users(&pool.conn)?;
            let ym = month_or_current(&None)?;

            header("Users");
            if users.is_empty() {
                info("No users registered.");
                return Ok(());
            }

            let mut table = Table::new(&["ID", "Name", "Email", "Role", "Site", "Vacation days", "This month"]);
            for u in &users {
                let this_month = u
                    .vacation_dates
                    .iter()
                    .filter(|d| ym.contains_iso(d))
                    .count();
                table.add_row(vec![
                    u.id.clone(),
                    u.name.clone(),
                    u.email.clone(),
                    u.role.as_str().to_string(),
                    if u.site_str().is_empty() { "-".into() } else { u.site_str().to_string() },
                    u.vacation_dates.len().to_string(),
                    this_month.to_string(),
                ]);
            }
            print!("{}", table.render());
        }

        UserAction::Add {
            email,
            name,
            role,
            site,
            vacations,
        } => {
            let (mut pool, actor) = open_as_actor(cfg)?;
            let u = UserLogic::add(
                &mut pool,
                &actor,
                email,
                name,
                role.as_deref(),
                site.as_deref(),
                vacations.as_deref(),
            )?;
            success(format!("User {} created: {} ({})", u.id, u.email, u.role.as_str()));
        }

        UserAction::Edit {
            id,
            name,
            role,
            site,
            vacations,
        } => {
            let changes = UserEdit {
                name: name.clone(),
                role: role.clone(),
                site: site.clone(),
                vacations: vacations.clone(),
            };
            let (mut pool, actor) = open_as_actor(cfg)?;
            let u = UserLogic::edit(&mut pool, &actor, id, &changes)?;
            success(format!(
                "User {} updated: role={} site={} vacation days={}",
                u.email,
                u.role.as_str(),
                if u.site_str().is_empty() { "-" } else { u.site_str() },
                u.vacation_dates.len()
            ));
        }
    }

    Ok(())
}
