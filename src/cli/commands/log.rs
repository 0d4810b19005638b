use crate::cli::commands::open_as_actor;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::identity::require_supervisor;
use crate::core::log::LogLogic;
use crate::errors::AppResult;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let (mut pool, actor) = open_as_actor(cfg)?;
        require_supervisor(&actor)?;
        LogLogic::print_log(&mut pool)?;
    }

    Ok(())
}
