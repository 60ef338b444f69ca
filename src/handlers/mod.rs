//! handlers/mod.rs
//! Handlers HTTP de la API de campañas.
pub mod campaign_handler;
