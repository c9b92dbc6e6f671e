use crate::try_option;
use crate::util::error::{Error, Result};
use crate::util::io::json;

use serde::Deserialize;
use std::path::{Path, PathBuf};

fn default_backup_path() -> PathBuf { PathBuf::from("/var/tmp") }
fn default_dump_tool() -> String { String::from("mysqldump") }
fn default_client_tool() -> String { String::from("mysql") }

/// Connection parameters of the database server, loaded once per invocation
#[derive(Deserialize, Clone, Debug)]
pub struct ConnectionConfig {
    #[serde(alias = "url")]
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: Option<String>, // Used when no database is given on the command line
    #[serde(default="default_backup_path")]
    pub backup_path: PathBuf, // Directory for dump files without an explicit output
    #[serde(default)]
    pub tools: Tools
}

/// Executables of the external client tools
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Tools {
    #[serde(default="default_dump_tool")]
    pub dump: String,
    #[serde(default="default_client_tool")]
    pub client: String
}

impl Default for Tools {
    fn default() -> Self {
        Tools {
            dump: default_dump_tool(),
            client: default_client_tool()
        }
    }
}

impl ConnectionConfig {
    pub fn load(path: &Path) -> Result<ConnectionConfig> {
        let config = json::from_file::<ConnectionConfig>(path)?;
        config.validate()?;
        debug!("Loaded connection configuration for {}@{}:{}", config.username, config.host, config.port);
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        let required = [("host", &self.host), ("username", &self.username)];
        for (name, value) in required.iter() {
            if value.trim().is_empty() {
                let msg = format!("Configuration value '{}' must not be empty", name);
                error!("{}", msg);
                return Err(Error::Config(msg));
            }
        }
        Ok(())
    }

    /// The database given explicitly, falling back to the configured default
    pub fn database_or(&self, explicit: Option<&str>) -> Result<String> {
        if let Some(database) = explicit {
            return Ok(database.to_string());
        }
        let database = try_option!(self.database.as_ref(), "No database given and none set in the configuration");
        Ok(database.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, content: &str) -> PathBuf {
        let path = dir.path().join("config.json");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn load_applies_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"
            {
                "host": "db.local",
                "port": 3306,
                "username": "admin",
                "password": "secret"
            }
        "#);

        let config = ConnectionConfig::load(&path).unwrap();
        assert_eq!(config.host, "db.local");
        assert_eq!(config.port, 3306);
        assert_eq!(config.database, None);
        assert_eq!(config.backup_path, PathBuf::from("/var/tmp"));
        assert_eq!(config.tools, Tools::default());
    }

    #[test]
    fn load_accepts_url_alias_and_tool_overrides() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"
            {
                "url": "10.0.0.4",
                "port": 3307,
                "username": "admin",
                "password": "secret",
                "database": "orders",
                "backup_path": "/srv/dumps",
                "tools": { "dump": "/opt/mysql/bin/mysqldump" }
            }
        "#);

        let config = ConnectionConfig::load(&path).unwrap();
        assert_eq!(config.host, "10.0.0.4");
        assert_eq!(config.database.as_deref(), Some("orders"));
        assert_eq!(config.backup_path, PathBuf::from("/srv/dumps"));
        assert_eq!(config.tools.dump, "/opt/mysql/bin/mysqldump");
        assert_eq!(config.tools.client, "mysql");
    }

    #[test]
    fn missing_field_is_configuration_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{ "host": "db.local", "port": 3306, "username": "admin" }"#);

        match ConnectionConfig::load(&path) {
            Err(Error::Config(msg)) => assert!(msg.contains("password"), "{}", msg),
            other => panic!("expected configuration error, got {:?}", other.map(|_| ()))
        }
    }

    #[test]
    fn empty_host_is_configuration_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{ "host": " ", "port": 3306, "username": "admin", "password": "" }"#);
        assert!(matches!(ConnectionConfig::load(&path), Err(Error::Config(_))));
    }

    #[test]
    fn missing_file_is_configuration_error() {
        let dir = TempDir::new().unwrap();
        let result = ConnectionConfig::load(&dir.path().join("absent.json"));
        assert!(matches!(result, Err(Error::Config(_))));
    }

    #[test]
    fn explicit_database_wins_over_default() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"
            { "host": "h", "port": 1, "username": "u", "password": "p", "database": "orders" }
        "#);
        let config = ConnectionConfig::load(&path).unwrap();

        assert_eq!(config.database_or(Some("billing")).unwrap(), "billing");
        assert_eq!(config.database_or(None).unwrap(), "orders");

        let without_default = ConnectionConfig { database: None, ..config };
        assert!(matches!(without_default.database_or(None), Err(Error::Config(_))));
    }
}
