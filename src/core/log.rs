use crate::db::log::load_changes;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use ansi_term::Colour;
use regex::Regex;
use std::sync::OnceLock;

const MAX_ACTION_WIDTH: usize = 60;

fn ansi_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\x1B\[[0-9;]*[mK]").expect("static regex"))
}

fn strip_ansi(s: &str) -> String {
    ansi_re().replace_all(s, "").into_owned()
}

/// ANSI colour for a history action.
fn color_for_action(action: &str) -> Colour {
    match action {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "import" => Colour::Blue,
        "settings" => Colour::Cyan,
        "migration_applied" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        other if other.starts_with("type-") || other.starts_with("holiday-") => Colour::Cyan,
        other if other.starts_with("user-") => Colour::Blue,
        _ => Colour::White,
    }
}

/// Truncate to `max` visible characters, keeping only the first word coloured.
fn render_action(action: &str, user: &str, max: usize) -> String {
    let color = color_for_action(action);
    let visible = if user.is_empty() {
        action.to_string()
    } else {
        format!("{action} ({user})")
    };

    let truncated = if visible.chars().count() > max {
        let mut s: String = visible.chars().take(max.saturating_sub(3)).collect();
        s.push_str("...");
        s
    } else {
        visible
    };

    match truncated.split_once(' ') {
        Some((word, rest)) => format!("{} {}", color.paint(word), rest),
        None => color.paint(truncated.as_str()).to_string(),
    }
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(pool: &mut DbPool) -> AppResult<()> {
        let changes = load_changes(&pool.conn)?;

        if changes.is_empty() {
            println!("📜 Change history is empty.");
            return Ok(());
        }

        let rows: Vec<(i64, String, String)> = changes
            .iter()
            .map(|c| {
                let date = chrono::DateTime::parse_from_rfc3339(&c.date)
                    .map(|dt| dt.format("%FT%T%:z").to_string())
                    .unwrap_or_else(|_| c.date.clone());
                (c.id, date, render_action(&c.action, &c.user, MAX_ACTION_WIDTH))
            })
            .collect();

        let id_w = rows.iter().map(|(id, _, _)| id.to_string().len()).max().unwrap_or(1);
        let date_w = rows.iter().map(|(_, d, _)| d.len()).max().unwrap_or(10);
        let op_w = rows
            .iter()
            .map(|(_, _, a)| strip_ansi(a).chars().count())
            .max()
            .unwrap_or(10)
            .min(MAX_ACTION_WIDTH);

        println!("📜 Change history:\n");

        for ((id, date, action), change) in rows.into_iter().zip(&changes) {
            let padding = " ".repeat(op_w.saturating_sub(strip_ansi(&action).chars().count()));
            println!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}",
                id, date, action, padding, change.detail,
            );
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_actions_are_truncated_on_visible_width() {
        let user = "a".repeat(80);
        let rendered = render_action("add", &user, 20);
        let visible = strip_ansi(&rendered);
        assert_eq!(visible.chars().count(), 20);
        assert!(visible.ends_with("..."));
        assert!(visible.starts_with("add ("));
    }
}
