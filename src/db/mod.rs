pub mod entries;
pub mod entry_types;
pub mod holidays;
pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod settings;
pub mod users;
