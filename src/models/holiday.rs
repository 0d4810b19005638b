use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Holiday {
    pub date: String,        // ⇔ calendario.fecha ("YYYY-MM-DD")
    pub site: String,        // ⇔ calendario.sede (lowercase, "" = every site)
    pub description: String, // ⇔ calendario.descripcion
}

impl Holiday {
    pub fn new(date: &str, site: &str, description: &str) -> Self {
        Self {
            date: date.trim().to_string(),
            site: site.trim().to_lowercase(),
            description: description.trim().to_string(),
        }
    }

    pub fn is_sitewide(&self) -> bool {
        self.site.is_empty()
    }
}
