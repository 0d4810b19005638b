use crate::cli::commands::{month_or_current, open_as_actor};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::identity::require_supervisor;
use crate::db::log::audit;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::export::logic::ExportRequest;
use crate::models::context::DataContext;

/// Handle the `export` command
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        scope,
        user,
        force,
    } = cmd
    {
        let req = ExportRequest {
            format: *format,
            month: month_or_current(month)?,
            scope: *scope,
            user_email: user.clone(),
            file: file.clone(),
            force: *force,
        };

        let (mut pool, actor) = open_as_actor(cfg)?;
        require_supervisor(&actor)?;

        let ctx = DataContext::load(&mut pool)?;
        let path = ExportLogic::export(&ctx, &req, &cfg.currency_symbol)?;

        audit(
            &pool.conn,
            &actor.email,
            "export",
            &format!("{} {} → {}", format.as_str(), req.month, path.display()),
        );
    }

    Ok(())
}
