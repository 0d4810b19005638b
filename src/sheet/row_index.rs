use super::decode::RawRow;
use std::collections::HashMap;

/// Maps a record id to its row position in the remote table, so updates and
/// deletes can address the row directly.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowIndex {
    map: HashMap<String, i64>,
}

impl RowIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, id: &str, index: i64) {
        if !id.is_empty() {
            self.map.insert(id.to_string(), index);
        }
    }

    pub fn get(&self, id: &str) -> Option<i64> {
        self.map.get(id).copied()
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Rebuild from a fresh row listing. Row positions shift after every
    /// insert or delete, so the old map is discarded.
    pub fn rebuild(&mut self, rows: &[RawRow]) {
        self.map.clear();
        for r in rows {
            let id = r.text(0);
            self.insert(&id, r.index);
        }
    }
}
