/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";

/// Goal percentage color:
/// \>= 100 → green
/// \>= 75 → yellow
/// otherwise → red
pub fn color_for_percentage(pct: f64) -> &'static str {
    if pct >= 100.0 {
        GREEN
    } else if pct >= 75.0 {
        YELLOW
    } else {
        RED
    }
}
