use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Entry {
    pub id: String,             // ⇔ entradas.id (creation timestamp in ms)
    pub owner_name: String,     // ⇔ entradas.usuario
    pub owner_email: String,    // ⇔ entradas.email (lowercase)
    pub date: String,           // ⇔ entradas.fecha ("YYYY-MM-DD")
    pub case_reference: String, // ⇔ entradas.expediente
    pub entry_type_id: String,  // ⇔ entradas.tipo_id
    pub points: f64,            // ⇔ entradas.puntos (snapshot at write time)
    pub comment: String,        // ⇔ entradas.comentario
}

impl Entry {
    /// Day of month of the entry date, if the date is well formed.
    pub fn day(&self) -> Option<u32> {
        self.date.get(8..10).and_then(|d| d.parse().ok())
    }

    /// `YYYY-MM` prefix of the entry date.
    pub fn month_key(&self) -> &str {
        self.date.get(0..7).unwrap_or("")
    }
}

/// True when `entries` already hold `case_reference` for `email` in the month
/// of `date`. `ignore_id` skips the entry being edited.
pub fn is_case_duplicate(
    entries: &[Entry],
    email: &str,
    month_key: &str,
    case_reference: &str,
    ignore_id: Option<&str>,
) -> bool {
    let email = email.to_lowercase();
    entries.iter().any(|e| {
        e.owner_email == email
            && e.date.starts_with(month_key)
            && e.case_reference == case_reference
            && Some(e.id.as_str()) != ignore_id
    })
}
