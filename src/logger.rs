//! logger.rs
//! Configuración del logger usando env_logger.

/// Filtro por defecto si no hay RUST_LOG: info para el pipeline, warn para el resto
const DEFAULT_FILTER: &str = "warn,whatsapp_campaigns=info,gen_msg=info,send=info,campaign_api=info";

pub fn init_logger() {
    let log_env = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_FILTER.to_string());

    // try_init: los tests o un segundo binario no deben paniquear si ya existe
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_env))
        .format_timestamp_secs()
        .try_init();
}
