use crate::cli::parser::{Cli, Commands};
use crate::config::Config;
use crate::db::initialize::init_db;
use crate::db::log::audit;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::success;

/// Handle the `init` command
///
/// This initializes:
///  - the config directory (if missing)
///  - the configuration file
///  - the SQLite database with every pending migration
pub fn handle(cli: &Cli) -> AppResult<()> {
    let email = match &cli.command {
        Commands::Init { email } => email.clone().or_else(|| cli.as_user.clone()),
        _ => None,
    };

    let cfg = Config::init_all(cli.db.clone(), email, cli.test)?;

    println!("⚙️  Initializing escritos…");
    println!("📄 Config file : {}", Config::config_file().display());
    println!("🗄️  Database   : {}", &cfg.database);

    let pool = DbPool::new(&cfg.database)?;
    init_db(&pool.conn)?;

    audit(
        &pool.conn,
        &cfg.user_email,
        "init",
        &format!("Database initialized at {}", &cfg.database),
    );

    success("escritos initialization completed!");
    Ok(())
}
