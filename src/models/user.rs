use super::role::Role;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,             // ⇔ usuarios.email (always lowercase)
    pub role: Role,                // ⇔ usuarios.rol
    pub site: Option<String>,      // ⇔ usuarios.sede (lowercase, None when empty)
    pub vacation_dates: Vec<String>, // ⇔ usuarios.vacaciones (comma separated ISO dates)
}

impl User {
    /// Builds a user normalising identity fields the same way stored rows are.
    pub fn new(id: &str, name: &str, email: &str, role: Role) -> Self {
        Self {
            id: id.to_string(),
            name: name.trim().to_string(),
            email: normalize_email(email),
            role,
            site: None,
            vacation_dates: Vec::new(),
        }
    }

    pub fn with_site(mut self, site: &str) -> Self {
        self.site = normalize_site(site);
        self
    }

    pub fn with_vacations(mut self, csv: &str) -> Self {
        self.vacation_dates = split_vacations(csv);
        self
    }

    pub fn site_str(&self) -> &str {
        self.site.as_deref().unwrap_or("")
    }

    pub fn vacations_csv(&self) -> String {
        self.vacation_dates.join(",")
    }

    pub fn is_supervisor(&self) -> bool {
        self.role.is_supervisor()
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

pub fn normalize_site(site: &str) -> Option<String> {
    let s = site.trim().to_lowercase();
    if s.is_empty() { None } else { Some(s) }
}

/// Splits the vacation cell on commas; blank items are dropped.
pub fn split_vacations(csv: &str) -> Vec<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}
