use crate::export::{ExportFormat, ExportScope};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line interface definition for escritos
/// CLI application to log legal filings against a points-based incentive scheme
#[derive(Parser)]
#[command(
    name = "escritos",
    version = env!("CARGO_PKG_VERSION"),
    about = "Log legal filings (escritos), track monthly point goals and compute incentive bonuses",
    long_about = None
)]
pub struct Cli {
    /// Override database path (useful for tests or custom DB)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Act as this user instead of the configured `user_email`
    #[arg(global = true, long = "as", value_name = "EMAIL")]
    pub as_user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init {
        #[arg(long = "email", help = "Acting user email to store in the config file")]
        email: Option<String>,
    },

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Show or update the incentive scheme (updates: supervisors only)
    Settings {
        #[arg(long = "points-per-day", help = "Daily point target")]
        points_per_day: Option<String>,

        #[arg(long = "bonus", help = "Monthly bonus paid when the goal is met")]
        bonus: Option<String>,

        #[arg(long = "effective", value_name = "DATE", help = "Effective date (YYYY-MM-DD)")]
        effective: Option<String>,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },

    /// Manage entry types (escrito kinds and their points)
    Type {
        #[command(subcommand)]
        action: TypeAction,
    },

    /// Manage site holidays
    Holiday {
        #[command(subcommand)]
        action: HolidayAction,
    },

    /// Register an entry
    Add {
        /// Date of the filing (YYYY-MM-DD)
        date: String,

        /// Case reference (expediente)
        case: String,

        /// Entry type id (see `type list`)
        type_id: String,

        #[arg(long = "comment")]
        comment: Option<String>,
    },

    /// Replace an existing entry
    Edit {
        id: String,

        #[arg(long = "date", help = "New date (YYYY-MM-DD)")]
        date: Option<String>,

        #[arg(long = "case", help = "New case reference")]
        case: Option<String>,

        #[arg(long = "type", help = "New entry type id")]
        type_id: Option<String>,

        #[arg(long = "comment")]
        comment: Option<String>,
    },

    /// Delete an entry by ID
    Del {
        id: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List entries (own entries; every entry for supervisors)
    History {
        #[arg(long = "from", value_name = "DATE")]
        from: Option<String>,

        #[arg(long = "to", value_name = "DATE")]
        to: Option<String>,

        #[arg(long = "type", value_name = "TYPE_ID")]
        type_id: Option<String>,
    },

    /// Personal monthly dashboard
    Dashboard {
        #[arg(long, short, value_name = "YYYY-MM")]
        month: Option<String>,
    },

    /// Monthly ranking with goal percentages and bonuses (supervisors only)
    Ranking {
        #[arg(long, short, value_name = "YYYY-MM")]
        month: Option<String>,

        #[arg(long = "user", value_name = "EMAIL")]
        user: Option<String>,
    },

    /// Export the monthly ranking (supervisors only)
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE", help = "Output file (default: ranking_YYYY-MM.<ext> / report_YYYY-MM.pdf)")]
        file: Option<PathBuf>,

        #[arg(long, short, value_name = "YYYY-MM")]
        month: Option<String>,

        #[arg(long, value_enum, default_value = "department")]
        scope: ExportScope,

        #[arg(long = "user", value_name = "EMAIL", help = "User to report on (with --scope user)")]
        user: Option<String>,

        #[arg(long, short = 'f')]
        force: bool,
    },

    /// Replace local data with a workbook dump (JSON rows of every table)
    Import {
        #[arg(long, value_name = "FILE")]
        file: PathBuf,
    },

    /// Print the change history
    Log {
        #[arg(long = "print", help = "Print rows from the change history")]
        print: bool,
    },
}

#[derive(Subcommand)]
pub enum UserAction {
    /// List users
    List,

    /// Create a user
    Add {
        #[arg(long)]
        email: String,

        #[arg(long)]
        name: String,

        #[arg(long, help = "member | supervisor")]
        role: Option<String>,

        #[arg(long)]
        site: Option<String>,

        #[arg(long, help = "Comma separated vacation dates (YYYY-MM-DD,...)")]
        vacations: Option<String>,
    },

    /// Update a user
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long, help = "member | supervisor")]
        role: Option<String>,

        #[arg(long)]
        site: Option<String>,

        #[arg(long, help = "Comma separated vacation dates (YYYY-MM-DD,...)")]
        vacations: Option<String>,
    },
}

#[derive(Subcommand)]
pub enum TypeAction {
    /// List entry types
    List {
        #[arg(long, help = "Include inactive types")]
        all: bool,
    },

    /// Create an entry type
    Add {
        #[arg(long)]
        name: String,

        #[arg(long)]
        points: String,

        #[arg(long)]
        inactive: bool,
    },

    /// Update an entry type
    Edit {
        id: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        points: Option<String>,

        #[arg(long, value_name = "BOOL")]
        active: Option<bool>,
    },

    /// Delete an entry type that no entry references
    Del { id: String },
}

#[derive(Subcommand)]
pub enum HolidayAction {
    /// List holidays
    List {
        #[arg(long, short, value_name = "YYYY-MM")]
        month: Option<String>,

        #[arg(long)]
        site: Option<String>,
    },

    /// Add (or replace) a holiday
    Add {
        date: String,

        #[arg(long, help = "Site the holiday applies to (default: every site)")]
        site: Option<String>,

        #[arg(long)]
        description: Option<String>,
    },

    /// Remove a holiday
    Del {
        date: String,

        #[arg(long)]
        site: Option<String>,
    },
}
