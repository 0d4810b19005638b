use serde::Serialize;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    #[default]
    Member,
    Supervisor,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Member => "member",
            Role::Supervisor => "supervisor",
        }
    }

    /// Strict parse used for CLI input.
    pub fn from_code(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "member" => Some(Role::Member),
            "supervisor" => Some(Role::Supervisor),
            _ => None,
        }
    }

    /// Lenient parse used for stored rows: legacy "usuario" and any unknown
    /// value fall back to Member.
    pub fn from_db_str(s: &str) -> Self {
        Role::from_code(s).unwrap_or_default()
    }

    pub fn is_supervisor(&self) -> bool {
        matches!(self, Role::Supervisor)
    }
}
