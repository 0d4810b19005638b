use serde::Serialize;

/// One row of the change history (`historial` table).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChangeRecord {
    pub id: i64,
    pub date: String,
    pub user: String,
    pub action: String,
    pub detail: String,
}
