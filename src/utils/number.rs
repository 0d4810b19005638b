//! Lenient numeric coercion for loosely typed cells.
//! Malformed values become 0 instead of failing.

use crate::errors::{AppError, AppResult};
use serde_json::Value;

fn parse_cell_str(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>()
        .or_else(|_| t.replace(',', ".").parse::<f64>())
        .ok()
        .filter(|n| n.is_finite())
}

/// Numeric value of a cell, or `None` when it is empty or not a number.
pub fn cell_f64(v: &Value) -> Option<f64> {
    match v {
        Value::Number(n) => n.as_f64().filter(|n| n.is_finite()),
        Value::String(s) => parse_cell_str(s),
        Value::Bool(true) => Some(1.0),
        _ => None,
    }
}

pub fn coerce_f64(v: &Value) -> f64 {
    cell_f64(v).unwrap_or(0.0)
}

/// Strict parse used for CLI input: points and money must be non-negative numbers.
pub fn parse_non_negative(s: &str) -> AppResult<f64> {
    let n: f64 = s
        .trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| AppError::InvalidNumber(s.to_string()))?;

    if !n.is_finite() || n < 0.0 {
        return Err(AppError::InvalidNumber(s.to_string()));
    }
    Ok(n)
}
