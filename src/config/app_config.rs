//! config/app_config.rs
//! Configuración de la app, resuelta desde variables de entorno (o un `.env`).
//! Cada binario construye solo las secciones que necesita y las pasa hacia abajo.

use std::time::Duration;

use crate::error::ConfigError;

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";
pub const DEFAULT_OLLAMA_MODEL: &str = "llama3";
pub const DEFAULT_DELAY_SECS: u64 = 15;
pub const DEFAULT_SETTLE_SECS: u64 = 15;
pub const DEFAULT_COUNTRY_CODE: &str = "+91";
pub const DEFAULT_CAMPAIGN_LINK: &str = "https://instagram.com/chai";

/// Acceso a Appwrite (endpoint, proyecto, llave y colecciones)
#[derive(Debug, Clone)]
pub struct StoreConfig {
    pub endpoint: String,
    pub project_id: String,
    pub api_key: String,
    pub database_id: String,
    pub campaigns_collection_id: String,
    /// Solo lo necesita el envío
    pub contacts_collection_id: Option<String>,
}

/// Servidor Ollama local
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    pub base_url: String,
    pub model: String,
}

/// Puente REST de whatsapp-web
#[derive(Debug, Clone)]
pub struct WhatsAppConfig {
    pub base_url: String,
    pub session_id: String,
}

/// Parámetros del despacho de mensajes
#[derive(Debug, Clone)]
pub struct DispatchSettings {
    pub delay_between_msgs: Duration,
    pub settle_time: Duration,
    pub test_mode: bool,
    pub country_code: String,
    pub default_link: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            base_url: DEFAULT_OLLAMA_URL.to_string(),
            model: DEFAULT_OLLAMA_MODEL.to_string(),
        }
    }
}

impl Default for DispatchSettings {
    fn default() -> Self {
        DispatchSettings {
            delay_between_msgs: Duration::from_secs(DEFAULT_DELAY_SECS),
            settle_time: Duration::from_secs(DEFAULT_SETTLE_SECS),
            test_mode: false,
            country_code: DEFAULT_COUNTRY_CODE.to_string(),
            default_link: DEFAULT_CAMPAIGN_LINK.to_string(),
        }
    }
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(StoreConfig {
            endpoint: required(&lookup, "APPWRITE_ENDPOINT")?
                .trim_end_matches('/')
                .to_string(),
            project_id: required(&lookup, "APPWRITE_PROJECT_ID")?,
            api_key: required(&lookup, "APPWRITE_API_KEY")?,
            database_id: required(&lookup, "APPWRITE_DATABASE_ID")?,
            campaigns_collection_id: required(&lookup, "CAMPAIGNS_COLLECTION_ID")?,
            contacts_collection_id: optional(&lookup, "WHATSAPP_CONTACTS_COLLECTION_ID"),
        })
    }
}

impl GeneratorConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = GeneratorConfig::default();
        GeneratorConfig {
            base_url: optional(&lookup, "OLLAMA_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.base_url),
            model: optional(&lookup, "OLLAMA_MODEL").unwrap_or(defaults.model),
        }
    }
}

impl WhatsAppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(WhatsAppConfig {
            base_url: required(&lookup, "WHATSAPP_API_URL")?
                .trim_end_matches('/')
                .to_string(),
            session_id: required(&lookup, "WHATSAPP_API_SESSION_ID")?,
        })
    }
}

impl DispatchSettings {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(env_lookup)
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = DispatchSettings::default();
        Ok(DispatchSettings {
            delay_between_msgs: seconds(&lookup, "DELAY_BETWEEN_MSGS", DEFAULT_DELAY_SECS)?,
            settle_time: seconds(&lookup, "WHATSAPP_SETTLE_SECS", DEFAULT_SETTLE_SECS)?,
            // Igual que siempre: solo "true" (sin importar mayúsculas) activa el modo prueba
            test_mode: optional(&lookup, "TEST_MODE")
                .map(|v| v.eq_ignore_ascii_case("true"))
                .unwrap_or(false),
            country_code: optional(&lookup, "DEFAULT_COUNTRY_CODE").unwrap_or(defaults.country_code),
            default_link: optional(&lookup, "DEFAULT_CAMPAIGN_LINK").unwrap_or(defaults.default_link),
        })
    }
}

fn env_lookup(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Valor presente y no vacío
fn optional<F>(lookup: &F, key: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    optional(lookup, key).ok_or(ConfigError::Missing(key))
}

fn seconds<F>(lookup: &F, key: &'static str, default: u64) -> Result<Duration, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    match optional(lookup, key) {
        None => Ok(Duration::from_secs(default)),
        Some(raw) => raw
            .parse::<u64>()
            .map(Duration::from_secs)
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}
