//! Configuration loader for Chatterbox.
//!
//! Reads `config.toml` from the data directory (`~/.chatterbox/` by default,
//! or an explicit `--config` path) and deserializes it into [`ServerConfig`].
//! Falls back to defaults when the file is missing or malformed.

use std::path::{Path, PathBuf};

use chatterbox_types::config::ServerConfig;

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "CHATTERBOX_DATA_DIR";

/// Resolve the data directory.
///
/// Order: `CHATTERBOX_DATA_DIR`, then `~/.chatterbox`, then `./.chatterbox`.
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".chatterbox");
    }

    PathBuf::from(".chatterbox")
}

/// Default location of the config file inside `data_dir`.
pub fn default_config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

/// Load configuration from `config_path`.
///
/// - Missing file: returns [`ServerConfig::default()`].
/// - Unreadable or unparsable file: logs a warning and returns the default.
pub async fn load_config(config_path: &Path) -> ServerConfig {
    let content = match tokio::fs::read_to_string(config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return ServerConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return ServerConfig::default();
        }
    };

    match toml::from_str::<ServerConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            ServerConfig::default()
        }
    }
}

/// Ensure the data directory exists so the SQLite file can be created in it.
pub async fn ensure_data_dir(data_dir: &Path) -> std::io::Result<()> {
    tokio::fs::create_dir_all(data_dir).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use chatterbox_types::config::StorageBackend;
    use tempfile::TempDir;

    #[tokio::test]
    async fn load_config_missing_file_returns_default() {
        let tmp = TempDir::new().unwrap();
        let config = load_config(&default_config_path(tmp.path())).await;
        assert_eq!(config.port, 3000);
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(config.translation.enabled);
    }

    #[tokio::test]
    async fn load_config_valid_toml_returns_parsed() {
        let tmp = TempDir::new().unwrap();
        let path = default_config_path(tmp.path());
        tokio::fs::write(
            &path,
            r#"
port = 8080
default_lang = "bn"

[storage]
backend = "sqlite"
database_url = "sqlite:///tmp/chat.db?mode=rwc"

[translation]
enabled = false
"#,
        )
        .await
        .unwrap();

        let config = load_config(&path).await;
        assert_eq!(config.port, 8080);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.default_lang, "bn");
        assert_eq!(config.storage.backend, StorageBackend::Sqlite);
        assert_eq!(
            config.storage.database_url.as_deref(),
            Some("sqlite:///tmp/chat.db?mode=rwc")
        );
        assert!(!config.translation.enabled);
        assert_eq!(config.translation.timeout_secs, 10);
    }

    #[tokio::test]
    async fn load_config_invalid_toml_returns_default() {
        let tmp = TempDir::new().unwrap();
        let path = default_config_path(tmp.path());
        tokio::fs::write(&path, "port = \"not a number\"").await.unwrap();

        let config = load_config(&path).await;
        assert_eq!(config.port, 3000);
    }

    #[tokio::test]
    async fn ensure_data_dir_creates_nested() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("a").join("b");
        ensure_data_dir(&dir).await.unwrap();
        assert!(dir.is_dir());
    }

    #[test]
    fn resolve_data_dir_from_env() {
        // SAFETY: This test is single-threaded and restores the env var immediately.
        unsafe {
            std::env::set_var(DATA_DIR_ENV, "/tmp/test-chatterbox");
        }
        let dir = resolve_data_dir();
        assert_eq!(dir, PathBuf::from("/tmp/test-chatterbox"));
        unsafe {
            std::env::remove_var(DATA_DIR_ENV);
        }
    }
}
