pub mod change;
pub mod context;
pub mod entry;
pub mod entry_type;
pub mod holiday;
pub mod incentive;
pub mod role;
pub mod user;
pub mod user_stat;
pub mod year_month;
