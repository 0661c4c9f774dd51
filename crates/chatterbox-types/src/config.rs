//! Server configuration types for Chatterbox.
//!
//! `ServerConfig` represents `config.toml`: listen address, default reply
//! language, response store backend and translation gateway settings.
//! Every field has a default, so an empty file is a valid config.

use serde::{Deserialize, Serialize};

/// Top-level configuration for the Chatterbox server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Interface to bind.
    #[serde(default = "default_host")]
    pub host: String,

    /// TCP port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Reply language used when a chat request omits `lang`.
    #[serde(default = "default_lang")]
    pub default_lang: String,

    #[serde(default)]
    pub storage: StorageConfig,

    #[serde(default)]
    pub translation: TranslationConfig,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

fn default_lang() -> String {
    "en".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            default_lang: default_lang(),
            storage: StorageConfig::default(),
            translation: TranslationConfig::default(),
        }
    }
}

/// Which response store implementation to use.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    /// Process-scoped store; starts empty on every launch.
    #[default]
    Memory,
    /// SQLite file under the data directory (or `database_url`).
    Sqlite,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Memory => write!(f, "memory"),
            StorageBackend::Sqlite => write!(f, "sqlite"),
        }
    }
}

impl std::str::FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "memory" => Ok(StorageBackend::Memory),
            "sqlite" => Ok(StorageBackend::Sqlite),
            other => Err(format!("unknown storage backend '{other}'")),
        }
    }
}

/// Response store settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default)]
    pub backend: StorageBackend,

    /// SQLite URL; only read when `backend = "sqlite"`.
    #[serde(default)]
    pub database_url: Option<String>,
}

/// Translation gateway settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
    /// When false, replies are returned untranslated and no network calls are made.
    #[serde(default = "default_translation_enabled")]
    pub enabled: bool,

    #[serde(default = "default_translation_base_url")]
    pub base_url: String,

    #[serde(default = "default_translation_timeout")]
    pub timeout_secs: u64,
}

fn default_translation_enabled() -> bool {
    true
}

fn default_translation_base_url() -> String {
    "https://translate.googleapis.com".to_string()
}

fn default_translation_timeout() -> u64 {
    10
}

impl Default for TranslationConfig {
    fn default() -> Self {
        Self {
            enabled: default_translation_enabled(),
            base_url: default_translation_base_url(),
            timeout_secs: default_translation_timeout(),
        }
    }
}

/// Whether `lang` looks like a language code the gateway accepts
/// (`en`, `bn`, `zh-CN`, `pt-BR`).
pub fn is_valid_lang_code(lang: &str) -> bool {
    if lang.is_empty() || lang.len() > 8 {
        return false;
    }
    let mut parts = lang.split('-');
    let primary_ok = parts
        .next()
        .is_some_and(|p| (2..=3).contains(&p.len()) && p.chars().all(|c| c.is_ascii_alphabetic()));
    primary_ok && parts.all(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_alphanumeric()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_server_config_default_values() {
        let config = ServerConfig::default();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.default_lang, "en");
        assert_eq!(config.storage.backend, StorageBackend::Memory);
        assert!(config.storage.database_url.is_none());
        assert!(config.translation.enabled);
        assert_eq!(config.translation.timeout_secs, 10);
    }

    #[test]
    fn test_server_config_deserialize_empty() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.port, 3000);
        assert_eq!(config.translation.base_url, "https://translate.googleapis.com");
    }

    #[test]
    fn test_server_config_deserialize_with_values() {
        let toml_str = r#"
port = 8080
default_lang = "bn"

[storage]
backend = "sqlite"
database_url = "sqlite:///tmp/chat.db?mode=rwc"

[translation]
enabled = false
"#;
        let config: ServerConfig = toml::from_str(toml_str).unwrap();
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

    #[test]
    fn test_unknown_backend_rejected() {
        let result: Result<ServerConfig, _> = toml::from_str("[storage]\nbackend = \"redis\"");
        assert!(result.is_err());
        assert!("redis".parse::<StorageBackend>().is_err());
        assert_eq!("sqlite".parse::<StorageBackend>(), Ok(StorageBackend::Sqlite));
    }

    #[test]
    fn test_lang_codes() {
        assert!(is_valid_lang_code("en"));
        assert!(is_valid_lang_code("bn"));
        assert!(is_valid_lang_code("zh-CN"));
        assert!(is_valid_lang_code("haw"));
        assert!(!is_valid_lang_code(""));
        assert!(!is_valid_lang_code("e"));
        assert!(!is_valid_lang_code("en-"));
        assert!(!is_valid_lang_code("en&tl=fr"));
        assert!(!is_valid_lang_code("english-language"));
    }
}
