use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EntryType {
    pub id: String,
    pub name: String,
    pub points: f64, // ⇔ tipos.puntuacion
    pub active: bool,
}

impl EntryType {
    pub fn label(&self) -> String {
        format!("{} ({} pts)", self.name, self.points)
    }
}
