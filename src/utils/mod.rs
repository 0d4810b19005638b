pub mod colors;
pub mod date;
pub mod formatting;
pub mod number;
pub mod table;

pub use formatting::{fmt_money, fmt_percent, fmt_points};
