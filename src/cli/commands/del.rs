use crate::cli::commands::open_as_actor;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::entries::EntryLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

use std::io::{self, Write};

/// Ask a yes/no confirmation from the user
fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        if !*yes && !ask_confirmation(&format!("Delete entry {id}? This action is irreversible.")) {
            info("Operation cancelled.");
            return Ok(());
        }

        let (mut pool, actor) = open_as_actor(cfg)?;
        let entry = EntryLogic::delete(&mut pool, &actor, id)?;

        success(format!(
            "Entry {} ({} case '{}') has been deleted.",
            entry.id, entry.date, entry.case_reference
        ));
    }

    Ok(())
}
