//! Date utilities: today, strict ISO parsing, and the lenient cell
//! normalisation applied to values coming from the workbook.

use chrono::{Datelike, Duration, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn today_iso() -> String {
    today().format("%Y-%m-%d").to_string()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            let leap = (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0);
            if leap { 29 } else { 28 }
        }
        _ => 0,
    }
}

/// Last serial Excel can display (9999-12-31).
const MAX_EXCEL_SERIAL: f64 = 2_958_465.0;

/// Excel serial (1900 date system) → `YYYY-MM-DD`. Out-of-range serials give `None`.
pub fn from_excel_serial(serial: f64) -> Option<String> {
    if !(1.0..=MAX_EXCEL_SERIAL).contains(&serial) {
        return None;
    }
    let epoch = NaiveDate::from_ymd_opt(1899, 12, 30)?;
    let date = epoch.checked_add_signed(Duration::try_days(serial.floor() as i64)?)?;
    Some(date.format("%Y-%m-%d").to_string())
}

/// Normalise a date cell to `YYYY-MM-DD`.
///
/// - `2024-02-05T00:00:00Z` → date part
/// - `5/2/2024` (day/month/year) → `2024-02-05`
/// - anything else is returned trimmed
pub fn parse_date_cell(s: &str) -> String {
    let s = s.trim();
    if s.is_empty() {
        return String::new();
    }

    if let Some((date, _)) = s.split_once('T') {
        return date.to_string();
    }

    if s.contains('/') {
        let parts: Vec<&str> = s.split('/').map(str::trim).collect();
        if let [d, m, y] = parts.as_slice() {
            return format!("{y}-{m:0>2}-{d:0>2}");
        }
    }

    s.to_string()
}

pub fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "",
    }
}

/// Day of month of `today` if it falls in the given month.
pub fn relative_today(year: i32, month: u32, today: NaiveDate) -> Option<u32> {
    if today.year() == year && today.month() == month {
        Some(today.day())
    } else {
        None
    }
}
