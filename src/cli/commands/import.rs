use crate::cli::commands::open_db;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::import::ImportLogic;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};

/// Handle the `import` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file } = cmd {
        let mut pool = open_db(cfg)?;

        info(format!("Importing workbook dump: {}", file.display()));
        let summary = ImportLogic::import_file(&mut pool, &cfg.user_email, file)?;

        success(format!(
            "Imported {} users, {} entry types, {} entries, {} holidays, {} history rows",
            summary.users, summary.entry_types, summary.entries, summary.holidays, summary.changes
        ));
        info(format!(
            "Row index: Usuarios={} TiposEscritos={} Entradas={}",
            summary.users_index, summary.types_index, summary.entries_index
        ));
        if summary.skipped > 0 {
            warning(format!("{} duplicate rows skipped", summary.skipped));
        }
    }

    Ok(())
}
