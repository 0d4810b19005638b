use super::row_index::RowIndex;
use crate::errors::AppResult;
use crate::models::change::ChangeRecord;
use crate::models::entry::Entry;
use crate::models::entry_type::EntryType;
use crate::models::holiday::Holiday;
use crate::models::incentive::IncentiveConfig;
use crate::models::role::Role;
use crate::models::user::{User, normalize_email, normalize_site, split_vacations};
use crate::utils::date::{from_excel_serial, parse_date_cell};
use crate::utils::number::{cell_f64, coerce_f64};
use serde::Deserialize;
use serde_json::Value;

pub const USERS_TABLE: &str = "Usuarios";
pub const TYPES_TABLE: &str = "TiposEscritos";
pub const CONFIG_TABLE: &str = "Configuracion";
pub const ENTRIES_TABLE: &str = "Entradas";
pub const HISTORY_TABLE: &str = "HistorialCambios";
pub const CALENDAR_TABLE: &str = "Calendario";

static NULL: Value = Value::Null;

/// One row of a table listing: its position and a single line of cells.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawRow {
    #[serde(default)]
    pub index: i64,
    #[serde(default)]
    pub values: Vec<Vec<Value>>,
}

impl RawRow {
    pub fn cell(&self, col: usize) -> &Value {
        self.values
            .first()
            .and_then(|line| line.get(col))
            .unwrap_or(&NULL)
    }

    /// Cell as trimmed text; numbers keep their JSON rendering.
    pub fn text(&self, col: usize) -> String {
        match self.cell(col) {
            Value::String(s) => s.trim().to_string(),
            Value::Number(n) => n.to_string(),
            Value::Bool(b) => b.to_string(),
            _ => String::new(),
        }
    }

    pub fn number(&self, col: usize) -> f64 {
        coerce_f64(self.cell(col))
    }

    /// Like `number`, but `None` for an empty or non-numeric cell.
    pub fn number_opt(&self, col: usize) -> Option<f64> {
        cell_f64(self.cell(col))
    }

    /// Cell normalised to `YYYY-MM-DD`, or empty.
    pub fn date(&self, col: usize) -> String {
        match self.cell(col) {
            Value::Number(n) => match n.as_f64() {
                Some(serial) if serial != 0.0 => from_excel_serial(serial).unwrap_or_default(),
                _ => String::new(),
            },
            Value::String(s) => parse_date_cell(s),
            _ => String::new(),
        }
    }

    /// False only for JSON `false` or the text "false".
    pub fn flag(&self, col: usize) -> bool {
        match self.cell(col) {
            Value::Bool(b) => *b,
            Value::String(s) => !s.trim().eq_ignore_ascii_case("false"),
            _ => true,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct TableRows {
    #[serde(default)]
    value: Vec<RawRow>,
}

/// Every table of a workbook dump, decoded.
#[derive(Debug, Clone, Default)]
pub struct DecodedWorkbook {
    pub users: Vec<User>,
    pub entry_types: Vec<EntryType>,
    pub incentive: IncentiveConfig,
    pub entries: Vec<Entry>,
    pub changes: Vec<ChangeRecord>,
    pub holidays: Vec<Holiday>,
    pub users_index: RowIndex,
    pub types_index: RowIndex,
    pub entries_index: RowIndex,
}

/// Rows of `table`; a missing or malformed table is empty.
pub fn table_rows(dump: &Value, table: &str) -> Vec<RawRow> {
    dump.get(table)
        .and_then(|t| TableRows::deserialize(t).ok())
        .map(|t| t.value)
        .unwrap_or_default()
}

pub fn parse_dump(text: &str) -> AppResult<DecodedWorkbook> {
    let dump: Value = serde_json::from_str(text)?;
    Ok(decode_workbook(&dump))
}

pub fn decode_workbook(dump: &Value) -> DecodedWorkbook {
    let mut wb = DecodedWorkbook::default();

    // Usuarios: id, nombre, email, rol, sede, vacaciones
    let rows = table_rows(dump, USERS_TABLE);
    wb.users_index.rebuild(&rows);
    wb.users = rows
        .iter()
        .filter_map(|r| {
            let id = r.text(0);
            if id.is_empty() {
                return None;
            }
            Some(User {
                id,
                name: r.text(1),
                email: normalize_email(&r.text(2)),
                role: Role::from_db_str(&r.text(3)),
                site: normalize_site(&r.text(4)),
                vacation_dates: split_vacations(&r.text(5)),
            })
        })
        .collect();

    // TiposEscritos: id, nombre, puntuacion, activo
    let rows = table_rows(dump, TYPES_TABLE);
    wb.types_index.rebuild(&rows);
    wb.entry_types = rows
        .iter()
        .filter_map(|r| {
            let id = r.text(0);
            if id.is_empty() {
                return None;
            }
            Some(EntryType {
                id,
                name: r.text(1),
                points: r.number(2),
                active: r.flag(3),
            })
        })
        .collect();

    // Configuracion: puntosPorDia, bonoMensual, fechaVigencia (first row only)
    wb.incentive = match table_rows(dump, CONFIG_TABLE).first() {
        Some(r) => IncentiveConfig::with_fallbacks(r.number(0), r.number_opt(1), &r.date(2)),
        None => IncentiveConfig::default(),
    };

    // Entradas: id, usuario, email, fecha, expediente, tipoId, puntos, comentario
    let rows = table_rows(dump, ENTRIES_TABLE);
    wb.entries_index.rebuild(&rows);
    wb.entries = rows
        .iter()
        .filter_map(|r| {
            let id = r.text(0);
            if id.is_empty() {
                return None;
            }
            Some(Entry {
                id,
                owner_name: r.text(1),
                owner_email: normalize_email(&r.text(2)),
                date: r.date(3),
                case_reference: r.text(4),
                entry_type_id: r.text(5),
                points: r.number(6),
                comment: r.text(7),
            })
        })
        .collect();

    // HistorialCambios: fecha, usuario, accion, detalle
    wb.changes = table_rows(dump, HISTORY_TABLE)
        .iter()
        .filter_map(|r| {
            let date = r.text(0);
            if date.is_empty() {
                return None;
            }
            Some((date, r.text(1), r.text(2), r.text(3)))
        })
        .enumerate()
        .map(|(i, (date, user, action, detail))| ChangeRecord {
            id: i as i64 + 1,
            date,
            user,
            action,
            detail,
        })
        .collect();

    // Calendario: fecha, sede, descripcion
    wb.holidays = table_rows(dump, CALENDAR_TABLE)
        .iter()
        .filter_map(|r| {
            let date = r.date(0);
            if date.is_empty() {
                return None;
            }
            Some(Holiday::new(&date, &r.text(1), &r.text(2)))
        })
        .collect();

    wb
}
