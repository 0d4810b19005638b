//! Formatting utilities used for CLI and export outputs.

/// `1234.5` → `1234.50 €` (symbol configurable).
pub fn fmt_money(amount: f64, symbol: &str) -> String {
    format!("{:.2} {}", amount, symbol)
}

pub fn fmt_points(points: f64) -> String {
    format!("{:.2}", points)
}

/// Whole-number percentage, as shown in rankings and exports. Halves round up.
pub fn fmt_percent(pct: f64) -> String {
    format!("{:.0}%", pct.round())
}

/// Progress bar of `width` cells, clamped to 0..=100 percent.
pub fn progress_bar(pct: f64, width: usize) -> String {
    let clamped = pct.clamp(0.0, 100.0);
    let filled = ((clamped / 100.0) * width as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled))
}
