use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "escritos";
const CONFIG_FILE: &str = "escritos.conf";
const DATABASE_FILE: &str = "escritos.sqlite";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Acting identity; `--as` overrides it.
    #[serde(default)]
    pub user_email: String,
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,
    /// Length of the dashboard's recent-entries list.
    #[serde(default = "default_recent_entries")]
    pub recent_entries: usize,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_currency_symbol() -> String {
    "€".to_string()
}
fn default_recent_entries() -> usize {
    10
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            user_email: String::new(),
            currency_symbol: default_currency_symbol(),
            recent_entries: default_recent_entries(),
        }
    }
}

impl Config {
    /// Standard configuration directory for the platform:
    /// `%APPDATA%\escritos` on Windows, `~/.escritos` elsewhere.
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(APP_DIR)
        } else {
            dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(format!(".{APP_DIR}"))
        }
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join(CONFIG_FILE)
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join(DATABASE_FILE)
    }

    /// Load configuration from file, or return defaults if not found.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))
    }

    pub fn save(&self) -> AppResult<()> {
        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
        file.write_all(yaml.as_bytes()).map_err(|_| AppError::ConfigSave)?;
        Ok(())
    }

    /// Create the config directory, the config file (unless `is_test`) and an
    /// empty database file. Returns the configuration that was set up.
    pub fn init_all(
        custom_db: Option<String>,
        user_email: Option<String>,
        is_test: bool,
    ) -> AppResult<Self> {
        let dir = Self::config_dir();
        if !is_test {
            fs::create_dir_all(&dir)?;
        }

        // db name: user provided (relative to the config dir) or default
        let db_path = match custom_db {
            Some(name) => {
                let p = Path::new(&name);
                if p.is_absolute() || is_test {
                    p.to_path_buf()
                } else {
                    dir.join(p)
                }
            }
            None => dir.join(DATABASE_FILE),
        };

        let mut config = if is_test {
            Self::default()
        } else {
            Self::load().unwrap_or_default()
        };
        config.database = db_path.to_string_lossy().to_string();
        if let Some(email) = user_email {
            config.user_email = email.trim().to_lowercase();
        }

        if !is_test {
            config.save()?;
            println!("✅ Config file: {:?}", Self::config_file());
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        if !db_path.exists() {
            fs::File::create(&db_path).map_err(|e| {
                AppError::from(io::Error::new(e.kind(), format!("{}: {e}", db_path.display())))
            })?;
        }

        println!("✅ Database:    {:?}", db_path);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let cfg: Config = serde_yaml::from_str("user_email: ana@firm.es\n").unwrap();
        assert_eq!(cfg.user_email, "ana@firm.es");
        assert_eq!(cfg.currency_symbol, "€");
        assert_eq!(cfg.recent_entries, 10);
        assert!(cfg.database.ends_with(DATABASE_FILE));
    }

    #[test]
    fn missing_file_gives_defaults() {
        let cfg = Config::load_from(Path::new("/nonexistent/escritos.conf")).unwrap();
        assert!(cfg.user_email.is_empty());
    }
}
