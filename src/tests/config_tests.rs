//! tests/config_tests.rs
//! Lectura de configuración desde un mapa de variables.

use std::collections::HashMap;
use std::time::Duration;

use crate::config::app_config::{DispatchSettings, GeneratorConfig, StoreConfig, WhatsAppConfig};
use crate::error::ConfigError;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    move |key| map.get(key).cloned()
}

const STORE_VARS: &[(&str, &str)] = &[
    ("APPWRITE_ENDPOINT", "https://cloud.appwrite.io/v1/"),
    ("APPWRITE_PROJECT_ID", "proj"),
    ("APPWRITE_API_KEY", "secret"),
    ("APPWRITE_DATABASE_ID", "db1"),
    ("CAMPAIGNS_COLLECTION_ID", "campaigns"),
];

#[test]
fn test_store_config_from_vars() {
    let config = StoreConfig::from_lookup(lookup(STORE_VARS)).unwrap();

    assert_eq!(config.endpoint, "https://cloud.appwrite.io/v1");
    assert_eq!(config.campaigns_collection_id, "campaigns");
    assert!(config.contacts_collection_id.is_none());
}

#[test]
fn test_store_config_reports_missing_variable() {
    let vars: Vec<_> = STORE_VARS
        .iter()
        .copied()
        .filter(|(k, _)| *k != "APPWRITE_API_KEY")
        .chain([("APPWRITE_API_KEY", "   ")])
        .collect();

    let err = StoreConfig::from_lookup(lookup(&vars)).unwrap_err();

    assert!(matches!(err, ConfigError::Missing("APPWRITE_API_KEY")));
}

#[test]
fn test_dispatch_defaults() {
    let settings = DispatchSettings::from_lookup(lookup(&[])).unwrap();

    assert_eq!(settings.delay_between_msgs, Duration::from_secs(15));
    assert_eq!(settings.settle_time, Duration::from_secs(15));
    assert!(!settings.test_mode);
    assert_eq!(settings.country_code, "+91");
    assert_eq!(settings.default_link, "https://instagram.com/chai");
}

#[test]
fn test_dispatch_overrides_and_test_mode_flag() {
    let settings = DispatchSettings::from_lookup(lookup(&[
        ("DELAY_BETWEEN_MSGS", "3"),
        ("WHATSAPP_SETTLE_SECS", "0"),
        ("TEST_MODE", "TRUE"),
        ("DEFAULT_COUNTRY_CODE", "+1"),
    ]))
    .unwrap();

    assert_eq!(settings.delay_between_msgs, Duration::from_secs(3));
    assert!(settings.settle_time.is_zero());
    assert!(settings.test_mode);
    assert_eq!(settings.country_code, "+1");

    for not_true in ["1", "yes", "false", ""] {
        let s = DispatchSettings::from_lookup(lookup(&[("TEST_MODE", not_true)])).unwrap();
        assert!(!s.test_mode, "TEST_MODE={} no debe activar el modo prueba", not_true);
    }
}

#[test]
fn test_dispatch_rejects_non_numeric_delay() {
    let err = DispatchSettings::from_lookup(lookup(&[("DELAY_BETWEEN_MSGS", "fifteen")])).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::Invalid { key: "DELAY_BETWEEN_MSGS", ref value } if value == "fifteen"
    ));
}

#[test]
fn test_generator_and_whatsapp_config() {
    let generator = GeneratorConfig::from_lookup(lookup(&[]));
    assert_eq!(generator.base_url, "http://localhost:11434");
    assert_eq!(generator.model, "llama3");

    let generator = GeneratorConfig::from_lookup(lookup(&[
        ("OLLAMA_URL", "http://gpu-box:11434/"),
        ("OLLAMA_MODEL", "mistral"),
    ]));
    assert_eq!(generator.base_url, "http://gpu-box:11434");
    assert_eq!(generator.model, "mistral");

    assert!(matches!(
        WhatsAppConfig::from_lookup(lookup(&[("WHATSAPP_API_URL", "http://localhost:3000")])),
        Err(ConfigError::Missing("WHATSAPP_API_SESSION_ID"))
    ));
}
