use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::TodoDbError;

/// Connection parameters for the backing Postgres database.
///
/// All five fields are required; a document missing any of them is a
/// configuration error, not a recoverable condition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub database: String,
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
}

/// Raw shape of the on-disk document. Fields are optional here so each
/// absent key can be reported by name instead of as a generic parse error.
#[derive(Debug, Deserialize)]
struct RawDbConfig {
    database: Option<String>,
    user: Option<String>,
    password: Option<String>,
    host: Option<String>,
    port: Option<u16>,
}

impl DbConfig {
    /// Load connection parameters from a TOML key-value document.
    ///
    /// # Errors
    /// Returns `TodoDbError::ConfigError` if the file cannot be read, is not
    /// valid TOML, or any required key is absent.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, TodoDbError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|e| {
            TodoDbError::ConfigError(format!("cannot read {}: {e}", path.display()))
        })?;
        Self::from_toml_str(&text)
    }

    /// Parse connection parameters from TOML text.
    ///
    /// # Errors
    /// Returns `TodoDbError::ConfigError` on malformed TOML or a missing key.
    pub fn from_toml_str(text: &str) -> Result<Self, TodoDbError> {
        let raw: RawDbConfig = toml::from_str(text)
            .map_err(|e| TodoDbError::ConfigError(format!("malformed config: {e}")))?;

        let database = raw
            .database
            .ok_or_else(|| TodoDbError::ConfigError("database is required".to_string()))?;
        let user = raw
            .user
            .ok_or_else(|| TodoDbError::ConfigError("user is required".to_string()))?;
        let password = raw
            .password
            .ok_or_else(|| TodoDbError::ConfigError("password is required".to_string()))?;
        let host = raw
            .host
            .ok_or_else(|| TodoDbError::ConfigError("host is required".to_string()))?;
        let port = raw
            .port
            .ok_or_else(|| TodoDbError::ConfigError("port is required".to_string()))?;

        Ok(DbConfig {
            database,
            user,
            password,
            host,
            port,
        })
    }

    /// Build the driver-level configuration for opening one session.
    #[must_use]
    pub fn pg_config(&self) -> tokio_postgres::Config {
        let mut cfg = tokio_postgres::Config::new();
        cfg.dbname(&self.database)
            .user(&self.user)
            .password(&self.password)
            .host(&self.host)
            .port(self.port);
        cfg
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const SAMPLE_CONFIG: &str = r#"
database = "todo"
user = "todo_user"
password = "hunter2"
host = "localhost"
port = 5432
"#;

    #[test]
    fn parses_complete_document() {
        let cfg = DbConfig::from_toml_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(cfg.database, "todo");
        assert_eq!(cfg.user, "todo_user");
        assert_eq!(cfg.host, "localhost");
        assert_eq!(cfg.port, 5432);
    }

    #[test]
    fn missing_key_is_named_in_the_error() {
        let text = r#"
database = "todo"
user = "todo_user"
host = "localhost"
port = 5432
"#;
        let err = DbConfig::from_toml_str(text).unwrap_err();
        match err {
            TodoDbError::ConfigError(msg) => assert!(msg.contains("password")),
            other => panic!("expected ConfigError, got {other:?}"),
        }
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = DbConfig::from_toml_str("database = ").unwrap_err();
        assert!(matches!(err, TodoDbError::ConfigError(_)));
    }

    #[test]
    fn loads_from_a_file_path() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(SAMPLE_CONFIG.as_bytes()).unwrap();
        let cfg = DbConfig::from_file(file.path()).unwrap();
        assert_eq!(cfg.database, "todo");
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = DbConfig::from_file("no/such/config.toml").unwrap_err();
        assert!(matches!(err, TodoDbError::ConfigError(_)));
    }
}
